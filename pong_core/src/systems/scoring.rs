use crate::{Ball, Config, Events, Score};
use hecs::World;

/// Check if the ball reached a goal line and award the point
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let scorer = world
        .query::<&Ball>()
        .iter()
        .find_map(|(_e, ball)| ball.touch_down(config));

    if let Some(side) = scorer {
        score.increment(side);
        events.goal = Some(side);
    }
}
