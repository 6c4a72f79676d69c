use hecs::World;

use crate::components::*;
use crate::config::Config;

/// Put the ball back on the centre spot at rest and centre both paddles
pub fn reset_positions(world: &mut World, config: &Config) {
    let rest_y = config.paddle_rest_y();
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = rest_y;
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.field_center());
    }
}

/// Launch a resting ball horizontally toward `toward`
pub fn serve_ball(world: &mut World, toward: Side, config: &Config) {
    // A ball heading for the right goal travels in +x, which is Left's sign
    let dir = toward.opposite().signum();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = glam::Vec2::new(config.serve_speed * dir, 0.0);
    }
}
