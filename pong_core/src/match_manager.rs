//! Match coordinator
//!
//! Tick-driven state machine that owns the entity world and walks a match
//! through serve countdown, rally, post-score pause and win detection.
//! Everything it cannot do itself (score display, post-match menu, pause
//! menu) goes through [`MatchHooks`].

use glam::Vec2;
use hecs::World;
use tracing::{debug, info};

use crate::bot::{Difficulty, Opponent};
use crate::components::*;
use crate::config::Config;
use crate::error::{GameError, Result};
use crate::input::{Action, InputQuery, InputSender, InputState};
use crate::resources::*;
use crate::systems::{reset_positions, retarget_bots, serve_ball};
use crate::{create_ball, create_paddle, step};

/// Coordinator states
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No match running
    Uninitialized,
    /// Counting down to the serve
    PreServe,
    /// Ball in play
    Rally,
    /// Counting down after a point so players can see it
    PostScore,
    /// A side won; waiting before going idle
    MatchOver,
}

impl GameState {
    /// Numeric code used by score boards and menus
    pub fn code(self) -> i32 {
        match self {
            GameState::Uninitialized => -1,
            GameState::PreServe => 0,
            GameState::Rally => 1,
            GameState::PostScore => 2,
            GameState::MatchOver => 3,
        }
    }
}

/// Who controls each paddle
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    BotVsBot,
    PlayerVsBot,
    PlayerVsPlayer,
}

impl GameMode {
    /// Controllers for the left and right paddle
    pub fn controllers(self, config: &Config) -> [Controller; 2] {
        let bot = |difficulty| Controller::Bot(Box::new(Opponent::new(difficulty, config)));
        match self {
            GameMode::BotVsBot => [bot(Difficulty::Smart), bot(Difficulty::Smart)],
            GameMode::PlayerVsBot => [
                Controller::Human(HumanControls::EITHER),
                bot(Difficulty::Okay),
            ],
            GameMode::PlayerVsPlayer => [
                Controller::Human(HumanControls::PLAYER1),
                Controller::Human(HumanControls::PLAYER2),
            ],
        }
    }
}

impl TryFrom<u8> for GameMode {
    type Error = GameError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(GameMode::BotVsBot),
            1 => Ok(GameMode::PlayerVsBot),
            2 => Ok(GameMode::PlayerVsPlayer),
            other => Err(GameError::InvalidMode(other)),
        }
    }
}

/// What the pause overlay wants after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseCommand {
    Stay,
    Resume,
    /// Abandon the match and go idle
    MainMenu,
}

/// Callbacks into the UI layer. All methods have defaults so a headless
/// driver can implement only what it needs.
pub trait MatchHooks {
    /// A side's score changed (also called with 0 for both at match start)
    fn update_score(&mut self, _side: Side, _value: u32) {}

    /// The match has a winner; open the post-match menu
    fn match_ended(&mut self, _winner: Side) {}

    /// Drive the pause overlay for one tick. Gameplay is frozen meanwhile.
    fn pause_tick(&mut self, input: &dyn InputQuery) -> PauseCommand {
        if input.just_pressed(Action::Pause) || input.just_pressed(Action::Select) {
            PauseCommand::Resume
        } else {
            PauseCommand::Stay
        }
    }
}

/// Hooks that ignore everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl MatchHooks for NoopHooks {}

/// Paddle rectangle for the renderer
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleRect {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only view of everything a renderer draws
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub paddles: Vec<PaddleRect>,
    pub score: Score,
    pub state: GameState,
    pub paused: bool,
}

/// The match coordinator
pub struct MatchManager {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    input: InputState,
    hooks: Box<dyn MatchHooks>,
    state: GameState,
    mode: GameMode,
    countdown: Countdown,
    last_scorer: Side,
    paused: bool,
    winner: Option<Side>,
}

impl MatchManager {
    /// Build an idle coordinator. The returned sender feeds its input queue.
    pub fn new(
        config: Config,
        rng: GameRng,
        hooks: Box<dyn MatchHooks>,
    ) -> Result<(Self, InputSender)> {
        config.validate()?;
        let (sender, input) = InputState::channel();

        let mut manager = Self {
            world: World::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            input,
            hooks,
            state: GameState::Uninitialized,
            mode: GameMode::PlayerVsPlayer,
            countdown: Countdown::new(),
            last_scorer: Side::Left,
            paused: false,
            winner: None,
        };
        manager.populate();
        Ok((manager, sender))
    }

    /// Discard paddles and ball, then set up a fresh match in `mode`
    pub fn start_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.score = Score::new();
        self.hooks.update_score(Side::Left, 0);
        self.hooks.update_score(Side::Right, 0);

        self.populate();
        self.input.clear();

        self.last_scorer = Side::Left;
        self.paused = false;
        self.winner = None;
        self.countdown.start(self.config.start_delay);
        self.state = GameState::PreServe;
        info!(?mode, "match started");
    }

    /// `start_game` from the menu's numeric mode
    pub fn start_game_code(&mut self, mode: u8) -> Result<()> {
        self.start_game(GameMode::try_from(mode)?);
        Ok(())
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self) {
        self.input.poll();

        match self.state {
            GameState::Uninitialized => {}
            GameState::PreServe => self.tick_pre_serve(),
            GameState::Rally => self.tick_rally(),
            GameState::PostScore => self.tick_post_score(),
            GameState::MatchOver => {
                if self.countdown.tick() {
                    self.transition(GameState::Uninitialized);
                }
            }
        }
    }

    fn tick_pre_serve(&mut self) {
        if !self.countdown.tick() {
            return;
        }
        // The ball goes to whoever lost the last point
        let receiver = self.last_scorer.opposite();
        serve_ball(&mut self.world, receiver, &self.config);
        self.transition(GameState::Rally);
        debug!(?receiver, "serve");
        retarget_bots(&mut self.world, &self.config, &mut self.rng);
    }

    fn tick_rally(&mut self) {
        if self.paused {
            match self.hooks.pause_tick(&self.input) {
                PauseCommand::Stay => {}
                PauseCommand::Resume => {
                    self.paused = false;
                    debug!("resumed");
                }
                PauseCommand::MainMenu => {
                    self.paused = false;
                    info!("match abandoned");
                    self.transition(GameState::Uninitialized);
                }
            }
            return;
        }
        if self.input.just_pressed(Action::Pause) {
            self.paused = true;
            debug!("paused");
            return;
        }

        step(
            &mut self.world,
            &self.input,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(side) = self.events.goal {
            self.last_scorer = side;
            let value = self.score.get(side);
            self.hooks.update_score(side, value);
            info!(?side, left = self.score.left, right = self.score.right, "point scored");
            self.countdown.start(self.config.score_delay);
            self.transition(GameState::PostScore);
        }
    }

    fn tick_post_score(&mut self) {
        if !self.countdown.tick() {
            return;
        }
        reset_positions(&mut self.world, &self.config);

        match self
            .score
            .has_winner(self.config.win_score, self.config.deuce_score)
        {
            Some(winner) => {
                self.winner = Some(winner);
                info!(?winner, left = self.score.left, right = self.score.right, "match won");
                self.hooks.match_ended(winner);
                self.countdown.start(self.config.won_delay);
                self.transition(GameState::MatchOver);
            }
            None => {
                self.countdown.start(self.config.serve_delay);
                self.transition(GameState::PreServe);
            }
        }
    }

    fn transition(&mut self, next: GameState) {
        debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }

    /// Replace every entity with a fresh pair of paddles and a resting ball
    fn populate(&mut self) {
        self.world.clear();
        let [left, right] = self.mode.controllers(&self.config);
        create_paddle(&mut self.world, Side::Left, left, &self.config);
        create_paddle(&mut self.world, Side::Right, right, &self.config);
        create_ball(&mut self.world, self.config.field_center(), Vec2::ZERO);
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ticks left on the active countdown
    pub fn countdown(&self) -> u32 {
        self.countdown.remaining
    }

    pub fn last_scorer(&self) -> Side {
        self.last_scorer
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Events raised by the most recent rally tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side() == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Everything an external renderer needs for this frame
    pub fn snapshot(&self) -> Snapshot {
        let mut paddles: Vec<PaddleRect> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| PaddleRect {
                side: paddle.side(),
                x: paddle.x,
                y: paddle.y,
                width: self.config.paddle_width,
                height: self.config.paddle_height,
            })
            .collect();
        paddles.sort_by_key(|rect| -rect.side.sign());

        Snapshot {
            ball_pos: self.ball().map_or(self.config.field_center(), |ball| ball.pos),
            ball_radius: self.config.ball_radius,
            paddles,
            score: self.score,
            state: self.state,
            paused: self.paused,
        }
    }
}
