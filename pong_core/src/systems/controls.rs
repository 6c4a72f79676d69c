use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::input::InputQuery;
use crate::resources::GameRng;

/// Turn this tick's input and bot plans into paddle intents
pub fn apply_controls(world: &mut World, input: &dyn InputQuery, config: &Config) {
    for (_entity, (paddle, controller, intent)) in
        world.query_mut::<(&Paddle, &mut Controller, &mut PaddleIntent)>()
    {
        intent.dir = match controller {
            Controller::Human(keys) => {
                let mut dir = 0;
                if input.any_active(keys.down) {
                    dir += 1;
                }
                if input.any_active(keys.up) {
                    dir -= 1;
                }
                dir
            }
            Controller::Bot(bot) => bot.follow_target(paddle.y, config),
        };
    }
}

/// Tell every computer paddle the ball has a new trajectory
pub fn retarget_bots(world: &mut World, config: &Config, rng: &mut GameRng) {
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball) {
        Some(ball) => ball,
        None => return,
    };

    // Plan in a fixed left-then-right order so seeded games replay identically
    let mut bots: Vec<_> = world
        .query_mut::<(&Paddle, &mut Controller)>()
        .into_iter()
        .filter(|(_e, (_paddle, controller))| controller.is_bot())
        .map(|(_e, (paddle, controller))| (paddle, controller))
        .collect();
    bots.sort_by_key(|(paddle, _)| -paddle.side().sign());

    for (paddle, controller) in bots {
        if let Controller::Bot(bot) = controller {
            bot.plan(&ball, paddle, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{Difficulty, Opponent};
    use crate::input::{Action, InputState};
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn intent_of(world: &World, side: Side) -> i8 {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _))| p.side() == side)
            .map(|(_e, (_, intent))| intent.dir)
            .unwrap()
    }

    #[test]
    fn test_human_input_sets_intent() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, Controller::Human(HumanControls::PLAYER1), &config);
        create_paddle(&mut world, Side::Right, Controller::Human(HumanControls::PLAYER2), &config);

        let (tx, mut input) = InputState::channel();
        tx.press(Action::Player1Down);
        tx.press(Action::Player2Up);
        input.poll();

        apply_controls(&mut world, &input, &config);

        assert_eq!(intent_of(&world, Side::Left), 1);
        assert_eq!(intent_of(&world, Side::Right), -1);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, Controller::Human(HumanControls::PLAYER1), &config);

        let (tx, mut input) = InputState::channel();
        tx.press(Action::Player1Down);
        tx.press(Action::Player1Up);
        input.poll();

        apply_controls(&mut world, &input, &config);
        assert_eq!(intent_of(&world, Side::Left), 0);
    }

    #[test]
    fn test_single_player_accepts_either_keyset() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, Controller::Human(HumanControls::EITHER), &config);

        let (tx, mut input) = InputState::channel();
        tx.press(Action::Player2Down);
        input.poll();

        apply_controls(&mut world, &input, &config);
        assert_eq!(intent_of(&world, Side::Left), 1);
    }

    #[test]
    fn test_bot_chases_its_plan() {
        let config = Config::new();
        let mut world = World::new();
        let bot = Opponent::new(Difficulty::God, &config);
        create_paddle(&mut world, Side::Right, Controller::Bot(Box::new(bot)), &config);
        // Heading right, flat, along the top of the field
        create_ball(&mut world, Vec2::new(400.0, 60.0), Vec2::new(2.0, 0.0));

        retarget_bots(&mut world, &config, &mut GameRng::default());
        let (_tx, input) = InputState::channel();
        apply_controls(&mut world, &input, &config);

        assert_eq!(intent_of(&world, Side::Right), -1, "Bot moves up toward the ball");
    }

    #[test]
    fn test_retarget_without_ball_is_noop() {
        let config = Config::new();
        let mut world = World::new();
        let bot = Opponent::new(Difficulty::Okay, &config);
        create_paddle(&mut world, Side::Right, Controller::Bot(Box::new(bot)), &config);

        retarget_bots(&mut world, &config, &mut GameRng::default());

        for (_e, controller) in world.query::<&Controller>().iter() {
            if let Controller::Bot(bot) = controller {
                assert!(bot.targets().is_empty());
            }
        }
    }
}
