//! Game state and core simulation types

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;

/// A falling ball
///
/// Balls live in a fixed pool owned by `GameState`. An inactive ball is
/// parked awaiting respawn: it has no collision effect, accumulates no
/// displacement and is never rendered.
#[derive(Debug, Clone)]
pub struct Ball {
    /// Lane index, 0..n_lanes
    pub lane: usize,
    /// Vertical center position in px (grows downward)
    pub y: f32,
    /// Current downward speed in px/tick
    pub speed: f32,
    /// Speed restored on each spawn
    pub base_speed: f32,
    /// Multiplicative per-tick speed factor
    pub acceleration: f32,
    /// Diameter in px
    pub diameter: f32,
    /// Current rotation angle in radians (cosmetic, not collision-relevant)
    pub rotation: f32,
    /// Rotation advance per tick, radians
    pub spin: f32,
    /// Magnitude of the spin redrawn at each spawn
    pub spin_range: f32,
    active: bool,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lane: 0,
            y: 0.0,
            speed: config.ball_speed,
            base_speed: config.ball_speed,
            acceleration: config.ball_acceleration,
            diameter: config.ball_diameter(),
            rotation: 0.0,
            spin: 0.0,
            spin_range: config.ball_spin_range,
            active: false,
        }
    }

    /// Reactivate this ball at the top of the given lane
    ///
    /// Repositions just above the top of the play area, resets speed to the
    /// base speed and redraws the cosmetic spin and rotation from the
    /// injected random source.
    pub fn spawn_in_lane(&mut self, lane: usize, rng: &mut impl Rng) {
        self.lane = lane;
        self.active = true;
        self.y = -1.0 - self.diameter / 2.0;
        self.speed = self.base_speed;
        self.spin = rng.random_range(-self.spin_range..=self.spin_range);
        self.rotation = rng.random_range(0.0..TAU);
    }

    /// Advance one tick: compound the speed, fall, rotate
    ///
    /// Inactive balls are left untouched. A ball whose lower edge passes the
    /// bottom of the play area deactivates (miss).
    pub fn advance(&mut self, game_height: f32) {
        if !self.active {
            return;
        }
        self.speed *= self.acceleration;
        self.y += self.speed;
        self.rotation += self.spin;
        if self.lower_edge() > game_height {
            self.active = false;
        }
    }

    /// Vertical position of the ball's leading (bottom) edge
    #[inline]
    pub fn lower_edge(&self) -> f32 {
        self.y + self.diameter / 2.0
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// The player's paddle, snapped to lane positions
///
/// Horizontal pixel position is a rendering-only quantity derived from the
/// lane index; it is not stored here.
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Current lane index, always within [0, n_lanes)
    pub lane: usize,
    /// Width in px
    pub width: f32,
    /// Height in px
    pub height: f32,
    /// Distance from the bottom of the play area in px
    pub y_offset: f32,
    game_height: f32,
    n_lanes: usize,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lane: 0,
            width: config.paddle_px_width(),
            height: config.paddle_height,
            y_offset: config.paddle_y_offset,
            game_height: config.game_height,
            n_lanes: config.n_lanes,
        }
    }

    /// Jump one lane: +1 to the right, -1 to the left
    ///
    /// Clamped at the boundaries; moving past an edge is a no-op.
    pub fn move_lane(&mut self, direction: i32) {
        let lane = self.lane as i32 + direction;
        self.lane = lane.clamp(0, self.n_lanes as i32 - 1) as usize;
    }

    /// Top of the paddle's vertical band
    #[inline]
    pub fn upper_edge(&self) -> f32 {
        self.game_height - self.y_offset - self.height
    }

    /// Bottom of the paddle's vertical band
    #[inline]
    pub fn lower_edge(&self) -> f32 {
        self.game_height - self.y_offset
    }
}

/// Complete game state
///
/// Deterministic given the seed and the per-tick input/timestamp sequence.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Fixed ball pool; spawning reactivates the first inactive slot
    pub balls: Vec<Ball>,
    pub paddle: Paddle,
    /// Cumulative score; grows only, by `score_per_catch` per catch
    pub score: u64,
    /// Wall-clock timestamp of the last successful spawn, ms
    pub last_spawn_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Immutable tuning
    pub config: GameConfig,
}

impl GameState {
    /// Create a new game state with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let balls = (0..config.n_balls).map(|_| Ball::new(&config)).collect();
        let paddle = Paddle::new(&config);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            balls,
            paddle,
            score: 0,
            // negative so the very first tick spawns immediately
            last_spawn_ms: -config.ball_spawn_interval_ms,
            time_ticks: 0,
            config,
        }
    }

    /// Spawn a ball into a uniformly random lane if the pool has a free slot
    ///
    /// Scans the pool in order and takes the first inactive ball. Pool
    /// exhaustion is normal when many balls are in flight: the spawn is
    /// skipped without touching any state.
    pub fn spawn_ball(&mut self, now_ms: f64) -> bool {
        let Some(ball) = self.balls.iter_mut().find(|b| !b.is_active()) else {
            log::debug!("no free ball in pool, spawn skipped");
            return false;
        };
        let lane = self.rng.random_range(0..self.config.n_lanes);
        ball.spawn_in_lane(lane, &mut self.rng);
        self.last_spawn_ms = now_ms;
        log::debug!("spawned ball in lane {lane}");
        true
    }
}
