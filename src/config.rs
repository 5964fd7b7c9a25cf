//! Game configuration
//!
//! All tuning lives in one immutable structure handed to `GameState::new`.
//! There is no runtime reconfiguration.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Named numeric/color parameters supplied at construction time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play area width in px
    pub game_width: f32,
    /// Play area height in px
    pub game_height: f32,
    pub background_color: String,
    /// Points awarded per caught ball
    pub score_per_catch: u64,

    /// Number of lanes balls can spawn in
    pub n_lanes: usize,
    /// Draw the lane divider lines
    pub show_lane_borders: bool,

    /// Fixed ball pool size
    pub n_balls: usize,
    /// Downward speed in px/tick at spawn
    pub ball_speed: f32,
    /// Multiplicative per-tick speed factor
    pub ball_acceleration: f32,
    /// Ball diameter as a fraction of lane width
    pub ball_size: f32,
    pub ball_color: String,
    pub ball_border_color: String,
    /// Magnitude of the random spin assigned at spawn, radians per tick
    pub ball_spin_range: f32,
    /// Time between ball spawns in ms
    pub ball_spawn_interval_ms: f64,

    /// Paddle width as a fraction of lane width
    pub paddle_width: f32,
    /// Paddle height in px
    pub paddle_height: f32,
    /// Distance from the bottom of the play area in px
    pub paddle_y_offset: f32,
    pub paddle_color: String,
    pub paddle_border_color: String,

    /// Draw the smiley face on each ball
    pub draw_smiley: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_width: consts::GAME_WIDTH,
            game_height: consts::GAME_HEIGHT,
            background_color: consts::BACKGROUND_COLOR.to_string(),
            score_per_catch: consts::SCORE_PER_CATCH,

            n_lanes: consts::N_LANES,
            show_lane_borders: true,

            n_balls: consts::BALL_POOL_SIZE,
            ball_speed: consts::BALL_SPEED,
            ball_acceleration: consts::BALL_ACCELERATION,
            ball_size: consts::BALL_SIZE,
            ball_color: consts::BALL_COLOR.to_string(),
            ball_border_color: consts::BALL_BORDER_COLOR.to_string(),
            ball_spin_range: consts::BALL_SPIN_RANGE,
            ball_spawn_interval_ms: consts::BALL_SPAWN_INTERVAL_MS,

            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_y_offset: consts::PADDLE_Y_OFFSET,
            paddle_color: consts::PADDLE_COLOR.to_string(),
            paddle_border_color: consts::PADDLE_BORDER_COLOR.to_string(),

            draw_smiley: true,
        }
    }
}

impl GameConfig {
    /// Width of one lane in px
    #[inline]
    pub fn lane_width(&self) -> f32 {
        self.game_width / self.n_lanes as f32
    }

    /// Ball diameter in px
    #[inline]
    pub fn ball_diameter(&self) -> f32 {
        self.ball_size * self.lane_width()
    }

    /// Paddle width in px
    #[inline]
    pub fn paddle_px_width(&self) -> f32 {
        self.paddle_width * self.lane_width()
    }

    /// Parse a config from JSON
    ///
    /// Missing fields take their defaults; malformed JSON falls back to the
    /// full default config with a logged warning.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid game config JSON ({e}), using defaults");
                Self::default()
            }
        }
    }
}
