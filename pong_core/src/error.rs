use thiserror::Error;

/// Construction-time failures. Nothing inside a running tick returns these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid side {0}: expected 1 for the left paddle or -1 for the right paddle")]
    InvalidSide(i32),

    #[error("invalid match mode {0}: expected 0 (bot vs bot), 1 (player vs bot) or 2 (player vs player)")]
    InvalidMode(u8),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, GameError>;
