use glam::Vec2;
use hecs::World;
use pong_core::*;

use std::cell::RefCell;
use std::rc::Rc;

/// Short pauses and a brisk serve so whole matches fit in a test
fn fast_config() -> Config {
    Config {
        serve_speed: 2.0,
        start_delay: 5,
        serve_delay: 5,
        score_delay: 5,
        won_delay: 5,
        ..Config::default()
    }
}

#[derive(Clone, Default)]
struct Board {
    scores: Rc<RefCell<Vec<(Side, u32)>>>,
    winner: Rc<RefCell<Option<Side>>>,
}

impl MatchHooks for Board {
    fn update_score(&mut self, side: Side, value: u32) {
        self.scores.borrow_mut().push((side, value));
    }

    fn match_ended(&mut self, winner: Side) {
        *self.winner.borrow_mut() = Some(winner);
    }
}

#[test]
fn test_bot_match_plays_to_a_winner() {
    let board = Board::default();
    let (mut manager, _tx) =
        MatchManager::new(fast_config(), GameRng::new(2024), Box::new(board.clone())).unwrap();
    manager.start_game(GameMode::BotVsBot);

    let mut ticks = 0;
    while manager.state() != GameState::MatchOver {
        manager.tick();
        ticks += 1;
        assert!(ticks < 2_000_000, "match did not finish");
    }

    let score = manager.score();
    let winner = manager.winner().expect("winner recorded");
    assert_eq!(*board.winner.borrow(), Some(winner));
    assert_eq!(score.has_winner(11, 9), Some(winner));

    // One display update per point, after the two resets at kick-off
    let updates = board.scores.borrow();
    assert_eq!(updates.len() as u32, 2 + score.left + score.right);
    assert_eq!(updates.last().map(|&(side, _)| side), Some(winner));
}

#[test]
fn test_paddles_stay_in_band_all_match() {
    let config = fast_config();
    let (mut manager, _tx) =
        MatchManager::new(config.clone(), GameRng::new(5), Box::new(NoopHooks)).unwrap();
    manager.start_game(GameMode::BotVsBot);

    for _ in 0..50_000 {
        manager.tick();
        for rect in manager.snapshot().paddles {
            assert!(rect.y >= config.up_limit() && rect.y <= config.down_limit());
        }
    }
}

#[test]
fn test_speed_grows_every_paddle_hit() {
    let (mut manager, _tx) =
        MatchManager::new(fast_config(), GameRng::new(77), Box::new(NoopHooks)).unwrap();
    manager.start_game(GameMode::BotVsBot);

    let mut last_hit_speed: Option<f32> = None;
    let mut hits = 0;
    for _ in 0..200_000 {
        let state_before = manager.state();
        manager.tick();
        if state_before != GameState::Rally {
            last_hit_speed = None;
            continue;
        }
        if manager.events().paddle_hit.is_some() {
            let speed = manager.ball().unwrap().vel.length();
            if let Some(previous) = last_hit_speed {
                assert!(speed >= previous);
                assert!(speed - previous <= 1.0 + 1e-3);
            }
            last_hit_speed = Some(speed);
            hits += 1;
        }
    }
    assert!(hits > 0, "bots should return at least one ball");
}

#[test]
fn test_same_seed_replays_identically() {
    let run = |seed| {
        let (mut manager, _tx) =
            MatchManager::new(fast_config(), GameRng::new(seed), Box::new(NoopHooks)).unwrap();
        manager.start_game(GameMode::BotVsBot);
        for _ in 0..30_000 {
            manager.tick();
        }
        manager.snapshot()
    };

    assert_eq!(run(9), run(9));
}

#[test]
fn test_player_vs_bot_single_keyset_steers_left_paddle() {
    let (mut manager, tx) =
        MatchManager::new(fast_config(), GameRng::new(3), Box::new(NoopHooks)).unwrap();
    manager.start_game(GameMode::PlayerVsBot);
    while manager.state() != GameState::Rally {
        manager.tick();
    }
    let start = manager.paddle(Side::Left).unwrap().y;

    tx.press(Action::Player2Down);
    for _ in 0..20 {
        manager.tick();
    }

    assert_eq!(manager.paddle(Side::Left).unwrap().y, start + 20.0);
}

#[test]
fn test_step_runs_a_rally_tick() {
    let config = Config::new();
    let mut world = World::new();
    let mut score = Score::new();
    let mut events = Events::new();
    let mut rng = GameRng::new(1);
    let (_tx, mut input) = InputState::channel();
    input.poll();

    let bot = Opponent::new(Difficulty::God, &config);
    create_paddle(&mut world, Side::Left, Controller::Human(HumanControls::PLAYER1), &config);
    create_paddle(&mut world, Side::Right, Controller::Bot(Box::new(bot)), &config);
    // About to hit the left paddle's face dead centre
    let ball = create_ball(&mut world, Vec2::new(51.0, 250.0), Vec2::new(-2.0, 0.0));

    step(&mut world, &input, &config, &mut score, &mut events, &mut rng);

    assert_eq!(events.paddle_hit, Some(Side::Left));
    let ball = *world.get::<&Ball>(ball).unwrap();
    assert!(ball.vel.x > 0.0);
    assert_eq!(score, Score::default());

    // The right bot was told about the new trajectory
    for (_e, controller) in world.query::<&Controller>().iter() {
        if let Controller::Bot(bot) = controller {
            assert_eq!(bot.targets().len(), 1);
            assert!((bot.targets()[0] - 200.0).abs() < 1e-3);
        }
    }
}

#[test]
fn test_zero_horizontal_speed_has_fallback_target() {
    let config = Config::new();
    let paddle = Paddle::new(Side::Right, &config);
    let ball = Ball::new(Vec2::new(400.0, 100.0), Vec2::new(0.0, 3.0));

    assert_eq!(hit_time(paddle.x, paddle.side(), ball.pos.x, ball.vel.x, &config), None);

    let mut bot = Opponent::new(Difficulty::Smart, &config);
    bot.plan(&ball, &paddle, &config, &mut GameRng::new(8));
    assert_eq!(bot.targets().len(), 1);
    let centred = config.field_height / 2.0 - config.paddle_height / 2.0;
    assert!((bot.targets()[0] - centred).abs() < 3.0 * config.paddle_height);
}

#[test]
fn test_crawling_serve_keeps_bot_plan_small() {
    let config = Config {
        serve_speed: 1e-6,
        start_delay: 0,
        ..Config::default()
    };
    let (mut manager, _tx) =
        MatchManager::new(config, GameRng::new(13), Box::new(NoopHooks)).unwrap();
    manager.start_game(GameMode::PlayerVsBot);

    for _ in 0..3 {
        manager.tick();
    }
    assert_eq!(manager.state(), GameState::Rally);
    // The bot guards the middle instead of sampling a near-endless rally
    let bot_y = manager.paddle(Side::Right).unwrap().y;
    assert!((bot_y - manager.config().paddle_rest_y()).abs() <= 3.0);
}

#[test]
fn test_still_serve_is_rejected() {
    let config = Config {
        serve_speed: 0.0,
        ..Config::default()
    };
    let result = MatchManager::new(config, GameRng::new(1), Box::new(NoopHooks));
    assert!(matches!(result, Err(GameError::InvalidConfig(_))));
}
