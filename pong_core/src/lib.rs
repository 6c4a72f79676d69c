pub mod bot;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod match_manager;
pub mod params;
pub mod resources;
pub mod systems;

pub use bot::*;
pub use components::*;
pub use config::*;
pub use error::GameError;
pub use input::*;
pub use match_manager::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of rally play
pub fn step(
    world: &mut World,
    input: &dyn InputQuery,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Read controls (keys or bot plans) into paddle intents
    apply_controls(world, input, config);

    // 2. Move and clamp paddles
    move_paddles(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 5. A paddle hit gives the ball a new trajectory for the bots to plan on
    if events.paddle_hit.is_some() {
        retarget_bots(world, config, rng);
    }

    // 6. Check scoring (ball reached a goal line)
    check_scoring(world, config, score, events);
}

/// Helper to create a paddle entity on its goal line, centred vertically
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new(), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
