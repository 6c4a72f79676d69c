use crate::components::Side;

/// Game score tracking
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point for `side` and return its new total
    pub fn increment(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Winner under the deuce rule: reaching `win_score` first wins outright,
    /// and from `deuce_score` on a two point lead also wins.
    pub fn has_winner(&self, win_score: u32, deuce_score: u32) -> Option<Side> {
        let wins = |own: u32, other: u32| {
            own > other && (own >= win_score || (own >= deuce_score && own - other >= 2))
        };
        if wins(self.left, self.right) {
            Some(Side::Left)
        } else if wins(self.right, self.left) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the OS (the `getrandom` feature routes this through JS on wasm)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Standard normal sample
    pub fn gaussian(&mut self) -> f32 {
        use rand::Rng;
        self.0.sample(rand_distr::StandardNormal)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub paddle_hit: Option<Side>, // paddle the ball bounced off
    pub wall_hit: bool,
    pub goal: Option<Side>, // side that scored
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hit = None;
        self.wall_hit = false;
        self.goal = None;
    }
}

/// Tick countdown used for the serve and post-score pauses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Consume one tick. Returns true on the tick after the count hit zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            false
        } else {
            true
        }
    }
}
