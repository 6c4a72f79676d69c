pub mod collision;
pub mod controls;
pub mod movement;
pub mod respawn;
pub mod scoring;

pub use collision::*;
pub use controls::*;
pub use movement::*;
pub use respawn::*;
pub use scoring::*;
