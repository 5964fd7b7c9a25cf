//! Catch detection
//!
//! Collision in this game is a single-axis interval test: the ball's leading
//! edge against the paddle's vertical band, gated on lane equality.

use super::state::{Ball, Paddle};

/// True iff the paddle catches the ball at this instant
///
/// False immediately when the ball is inactive or in a different lane.
/// Otherwise the ball is caught iff its lower edge lies within the closed
/// interval from the paddle's upper edge to its lower edge: the leading edge
/// has reached the band but not yet passed through it.
///
/// The test is discrete. At extreme speeds a ball can cross the entire band
/// between two ticks and tunnel past uncaught; that is an accepted property
/// of the per-tick simulation, not a defect.
pub fn ball_paddle_catch(ball: &Ball, paddle: &Paddle) -> bool {
    if !ball.is_active() || ball.lane != paddle.lane {
        return false;
    }

    let edge = ball.lower_edge();
    edge >= paddle.upper_edge() && edge <= paddle.lower_edge()
}
