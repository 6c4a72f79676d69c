//! Computer-controlled opponent
//!
//! The bot never simulates the rally. Whenever the ball gets a new trajectory
//! (serve or paddle hit) it predicts, in closed form, where the ball will be
//! when it reaches this paddle's goal line and prepares a list of target
//! heights to chase. Difficulty only changes how far ahead that prediction is
//! trusted and how much random aim offset is added.

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::params::Params;
use crate::resources::GameRng;

/// Opponent strength, fixed when the paddle is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Thickhead,
    Okay,
    Smart,
    God,
}

/// How far ahead a bot may predict the ball exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foresight {
    /// Exact up to this many ticks, sampled beyond it
    Capped(u32),
    /// Always aims straight at the final landing point
    Exact,
}

/// Per-difficulty strategy data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub foresight: Foresight,
    /// Standard deviation of the aim offset, in half paddle heights
    pub aim_spread: f32,
}

impl Difficulty {
    pub fn profile(self) -> Profile {
        match self {
            Difficulty::Thickhead => Profile {
                foresight: Foresight::Capped(Params::THICKHEAD_FORESIGHT),
                aim_spread: Params::BOT_OFFSET_SPREAD,
            },
            Difficulty::Okay => Profile {
                foresight: Foresight::Capped(Params::OKAY_FORESIGHT),
                aim_spread: Params::BOT_OFFSET_SPREAD,
            },
            Difficulty::Smart => Profile {
                foresight: Foresight::Exact,
                aim_spread: Params::BOT_OFFSET_SPREAD,
            },
            // No aim noise: the paddle always meets the ball dead centre
            Difficulty::God => Profile {
                foresight: Foresight::Exact,
                aim_spread: 0.0,
            },
        }
    }
}

/// Height of the ball's centre `t` ticks from now, bouncing elastically
/// between the top and bottom walls. Works for negative `t` as well.
///
/// `y0` is the ball centre's field coordinate; it is shifted into the band
/// `radius..height - radius` before folding, so `t = 0` returns `y0`.
pub fn predict_y(y0: f32, vy: f32, t: f32, config: &Config) -> f32 {
    let radius = config.ball_radius;
    let h = config.bounce_height();
    let period = 2.0 * h;

    // Work in the band's own frame, where the walls sit at 0 and h
    let unfolded = (y0 - radius) + vy * t;
    let m = unfolded.rem_euclid(period);
    let folded = if m <= h { m } else { period - m };
    folded + radius
}

/// Whole ticks until a ball at `x0` moving at `vx` reaches the goal line of
/// the paddle at `paddle_x`. Negative when the ball is moving away, `None`
/// when it has no horizontal speed.
pub fn hit_time(paddle_x: f32, side: Side, x0: f32, vx: f32, config: &Config) -> Option<i64> {
    if vx == 0.0 || !vx.is_finite() {
        return None;
    }
    let t = (paddle_x - x0 + config.ball_radius * side.signum()) / vx;
    t.is_finite().then_some(t as i64)
}

/// Target planner and follower for one computer paddle
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    targets: Vec<f32>,
    target: f32,
    clock: u32,
}

impl Opponent {
    pub fn new(difficulty: Difficulty, config: &Config) -> Self {
        Self {
            difficulty,
            targets: Vec::new(),
            target: config.paddle_rest_y(),
            clock: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Target height (paddle top edge) currently being chased
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Prepared target samples, one per `bot_sample_interval` ticks
    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    /// Recompute the targets for a ball that just got a new trajectory
    pub fn plan(&mut self, ball: &Ball, paddle: &Paddle, config: &Config, rng: &mut GameRng) {
        self.clock = 0;

        let profile = self.difficulty.profile();
        let offset = self.aim_offset(profile, config, rng);

        let tf = hit_time(paddle.x, paddle.side(), ball.pos.x, ball.vel.x, config);
        self.targets = match tf {
            Some(tf) if (0..=i64::from(config.bot_max_hit_time)).contains(&tf) => {
                let (y0, vy) = (ball.pos.y, ball.vel.y);
                match profile.foresight {
                    Foresight::Capped(cap) if tf > i64::from(cap) => {
                        let cap = i64::from(cap);
                        let interval = i64::from(config.bot_sample_interval);
                        // The last sample lands on tf, follow_target holds it
                        let last = (tf - cap + interval - 1) / interval;
                        (0..=last)
                            .map(|i| {
                                let t = (cap + i * interval).min(tf);
                                predict_y(y0, vy, t as f32, config) - offset
                            })
                            .collect()
                    }
                    _ => vec![predict_y(y0, vy, tf as f32, config) - offset],
                }
            }
            // Ball heading away, standing still or crawling: guard the middle
            _ => vec![config.field_height / 2.0 - offset],
        };

        tracing::trace!(
            side = ?paddle.side(),
            difficulty = ?self.difficulty,
            hit_time = ?tf,
            samples = self.targets.len(),
            "bot retargeted"
        );
    }

    /// Advance one tick and return the direction to move (-1 up, 1 down).
    /// Past the last prepared sample the last value is held.
    pub fn follow_target(&mut self, paddle_y: f32, config: &Config) -> i8 {
        let index = (self.clock / config.bot_sample_interval) as usize;
        if let Some(&target) = self.targets.get(index).or(self.targets.last()) {
            self.target = target;
        }
        self.clock = self.clock.saturating_add(1);

        if paddle_y < self.target {
            1
        } else if paddle_y > self.target {
            -1
        } else {
            0
        }
    }

    /// Distance from the paddle's top edge to the point aimed at the ball,
    /// half a paddle on average
    fn aim_offset(&self, profile: Profile, config: &Config, rng: &mut GameRng) -> f32 {
        let half = config.paddle_height / 2.0;
        if profile.aim_spread == 0.0 {
            return half;
        }
        (1.0 + rng.gaussian() * profile.aim_spread) * half
    }
}
