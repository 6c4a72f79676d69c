/// Game tuning parameters for Pong
///
/// Every distance is in field units (pixels of an 800x500 board),
/// every duration in simulation ticks.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 1.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 0.2;
    pub const SPEED_GAIN: f32 = 0.05; // fraction of |speed| added per paddle hit
    pub const SPEED_GAIN_CAP: f32 = 1.0; // never add more than this per hit
    pub const MAX_BOUNCE_DEG: f32 = 60.0; // launch angle at the paddle edge

    // Score
    pub const WIN_SCORE: u32 = 11;
    pub const DEUCE_SCORE: u32 = 9; // from here a two point lead wins

    // Countdowns
    pub const START_DELAY: u32 = 1000;
    pub const SERVE_DELAY: u32 = 3000;
    pub const SCORE_DELAY: u32 = 2000;
    pub const WON_DELAY: u32 = 1500;

    // Computer opponent
    pub const BOT_SAMPLE_INTERVAL: u32 = 10;
    pub const THICKHEAD_FORESIGHT: u32 = 0;
    pub const OKAY_FORESIGHT: u32 = 2000;
    pub const BOT_OFFSET_SPREAD: f32 = 0.5; // std-dev of the aim offset, in half paddles
    pub const BOT_MAX_HIT_TIME: u32 = 100_000; // slower balls are treated as standing still
}
