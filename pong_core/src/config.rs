use glam::Vec2;

use crate::components::Side;
use crate::error::{GameError, Result};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub speed_gain: f32,
    pub speed_gain_cap: f32,
    pub max_bounce_deg: f32,
    pub win_score: u32,
    pub deuce_score: u32,
    pub start_delay: u32,
    pub serve_delay: u32,
    pub score_delay: u32,
    pub won_delay: u32,
    pub bot_sample_interval: u32,
    pub bot_max_hit_time: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            serve_speed: Params::SERVE_SPEED,
            speed_gain: Params::SPEED_GAIN,
            speed_gain_cap: Params::SPEED_GAIN_CAP,
            max_bounce_deg: Params::MAX_BOUNCE_DEG,
            win_score: Params::WIN_SCORE,
            deuce_score: Params::DEUCE_SCORE,
            start_delay: Params::START_DELAY,
            serve_delay: Params::SERVE_DELAY,
            score_delay: Params::SCORE_DELAY,
            won_delay: Params::WON_DELAY,
            bot_sample_interval: Params::BOT_SAMPLE_INTERVAL,
            bot_max_hit_time: Params::BOT_MAX_HIT_TIME,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject geometry the simulation cannot run on
    pub fn validate(&self) -> Result<()> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(GameError::InvalidConfig("field dimensions must be positive"));
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(GameError::InvalidConfig("paddle dimensions must be positive"));
        }
        if self.paddle_speed.is_nan() || self.paddle_speed <= 0.0 {
            return Err(GameError::InvalidConfig("paddle speed must be positive"));
        }
        if self.serve_speed.is_nan() || self.serve_speed <= 0.0 {
            return Err(GameError::InvalidConfig("serve speed must be positive"));
        }
        if self.ball_radius <= 0.0 {
            return Err(GameError::InvalidConfig("ball radius must be positive"));
        }
        if self.up_limit() > self.down_limit() {
            return Err(GameError::InvalidConfig("field is too short for the paddle band"));
        }
        if self.bot_sample_interval == 0 {
            return Err(GameError::InvalidConfig("bot sample interval must be at least one tick"));
        }
        Ok(())
    }

    /// Highest legal top edge for a paddle
    pub fn up_limit(&self) -> f32 {
        self.ball_radius * 3.0
    }

    /// Lowest legal top edge for a paddle
    pub fn down_limit(&self) -> f32 {
        self.field_height - self.ball_radius * 3.0 - self.paddle_height
    }

    /// Clamp a paddle's top edge into the playfield band
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.max(self.up_limit()).min(self.down_limit())
    }

    /// Left edge of the paddle guarding `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.ball_radius * 3.0,
            Side::Right => self.field_width - self.ball_radius * 3.0,
        }
    }

    /// Top edge that centres a paddle vertically
    pub fn paddle_rest_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Vertical span reachable by the ball's centre
    pub fn bounce_height(&self) -> f32 {
        self.field_height - 2.0 * self.ball_radius
    }
}
