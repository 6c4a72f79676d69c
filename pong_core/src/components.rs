use glam::Vec2;

use crate::bot::Opponent;
use crate::config::Config;
use crate::error::GameError;
use crate::input::Action;

/// Mutable 2D coordinate used for positions and velocities
pub type Vector2D = Vec2;

/// Which goal a paddle guards. Left is `+1`, right is `-1`: the sign is also
/// the direction a ball leaves that paddle in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }

    pub fn signum(self) -> f32 {
        self.sign() as f32
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl TryFrom<i32> for Side {
    type Error = GameError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Side::Left),
            -1 => Ok(Side::Right),
            other => Err(GameError::InvalidSide(other)),
        }
    }
}

/// Paddle component - a vertical-only rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    side: Side,
    pub x: f32, // left edge, fixed for the match
    pub y: f32, // top edge, clamped every tick
}

impl Paddle {
    /// Paddle for `side`, placed on its goal line and centred vertically
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_rest_y(),
        }
    }

    /// Build from the raw `+1`/`-1` convention
    pub fn from_sign(sign: i32, config: &Config) -> Result<Self, GameError> {
        Ok(Self::new(Side::try_from(sign)?, config))
    }

    /// Goal guarded by this paddle, fixed at construction
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn center(&self, config: &Config) -> Vec2 {
        Vec2::new(
            self.x + config.paddle_width / 2.0,
            self.y + config.paddle_height / 2.0,
        )
    }

    /// Pull the paddle back into the legal band
    pub fn clamp(&mut self, config: &Config) {
        self.y = config.clamp_paddle_y(self.y);
    }
}

/// Result of the wall check for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    None,
    Top,
    Bottom,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Park the ball at `center` with no velocity
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }

    /// One fixed Euler step
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Reflect off the top or bottom wall and clamp back inside
    pub fn bounce_off_walls(&mut self, config: &Config) -> WallHit {
        let radius = config.ball_radius;
        if self.pos.y < radius {
            self.vel.y = -self.vel.y;
            self.pos.y = radius;
            WallHit::Top
        } else if self.pos.y > config.field_height - radius {
            self.vel.y = -self.vel.y;
            self.pos.y = config.field_height - radius;
            WallHit::Bottom
        } else {
            WallHit::None
        }
    }

    /// Circle vs rectangle test against a paddle centred at `center`
    pub fn overlaps_paddle(&self, center: Vec2, config: &Config) -> bool {
        let half_width = config.paddle_width / 2.0;
        let half_height = config.paddle_height / 2.0;
        let radius = config.ball_radius;

        let dx = (center.x - self.pos.x).abs();
        if dx >= half_width + radius {
            return false;
        }
        let dy = (center.y - self.pos.y).abs();
        if dy >= half_height + radius {
            return false;
        }

        // Centre inside the cross formed by extending the rectangle by the radius
        if dx < half_width || dy < half_height {
            return true;
        }

        let corner_x = dx - half_width;
        let corner_y = dy - half_height;
        corner_x * corner_x + corner_y * corner_y < radius * radius
    }

    /// Relaunch the ball away from the paddle guarding `side`.
    ///
    /// The vertical offset from the paddle centre maps linearly to a launch
    /// angle (0 at the centre, `max_bounce_deg` at the edge) and the speed
    /// grows by `speed_gain`, never by more than `speed_gain_cap` per hit.
    pub fn bounce_off_paddle(&mut self, center: Vec2, side: Side, config: &Config) {
        let offset = (self.pos.y - center.y) / config.paddle_height;
        let angle = (2.0 * config.max_bounce_deg * offset).to_radians();

        let mut norm = self.vel.length();
        norm += (norm * config.speed_gain).min(config.speed_gain_cap);

        self.vel = Vec2::new(norm * angle.cos(), norm * angle.sin());
        self.vel.x *= side.signum();

        // Snap outside the paddle so the next tick does not collide again
        self.pos.x = center.x + (config.paddle_width / 2.0 + config.ball_radius) * side.signum();
    }

    /// Side that scores if the ball reached a goal line
    pub fn touch_down(&self, config: &Config) -> Option<Side> {
        if self.pos.x <= config.ball_radius {
            Some(Side::Right)
        } else if self.pos.x >= config.field_width - config.ball_radius {
            Some(Side::Left)
        } else {
            None
        }
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Keyboard actions that steer a human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanControls {
    pub up: &'static [Action],
    pub down: &'static [Action],
}

impl HumanControls {
    pub const PLAYER1: Self = Self {
        up: &[Action::Player1Up],
        down: &[Action::Player1Down],
    };

    pub const PLAYER2: Self = Self {
        up: &[Action::Player2Up],
        down: &[Action::Player2Down],
    };

    /// Single human against a bot: either keyset moves the paddle
    pub const EITHER: Self = Self {
        up: &[Action::Player1Up, Action::Player2Up],
        down: &[Action::Player1Down, Action::Player2Down],
    };
}

/// Who decides a paddle's movement each tick
#[derive(Debug, Clone)]
pub enum Controller {
    Human(HumanControls),
    Bot(Box<Opponent>),
}

impl Controller {
    pub fn is_bot(&self) -> bool {
        matches!(self, Controller::Bot(_))
    }
}
