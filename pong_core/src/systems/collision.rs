use crate::{Ball, Config, Events, Paddle, WallHit};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// A top wall bounce ends the check for this tick. A bottom wall bounce still
/// falls through to the paddle test, so both can resolve on the same tick.
/// Paddles are tested left before right and the first hit wins.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| -paddle.side().sign());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        match ball.bounce_off_walls(config) {
            WallHit::Top => {
                events.wall_hit = true;
                continue;
            }
            WallHit::Bottom => events.wall_hit = true,
            WallHit::None => {}
        }

        for paddle in &paddles {
            let center = paddle.center(config);
            if ball.overlaps_paddle(center, config) {
                ball.bounce_off_paddle(center, paddle.side(), config);
                events.paddle_hit = Some(paddle.side());
                break;
            }
        }
    }
}
