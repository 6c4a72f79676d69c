//! Input collaborator
//!
//! Key capture lives outside the core. Whatever owns the keyboard pushes
//! [`InputEvent`]s through an [`InputSender`] (from any thread); the
//! coordinator drains them exactly once per tick into an [`InputState`],
//! which then answers queries against that frozen snapshot.

use std::sync::mpsc::{self, Receiver, Sender};

const ACTION_COUNT: usize = 6;

/// Logical actions the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
    Pause,
    Select,
}

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Player1Up,
        Action::Player1Down,
        Action::Player2Up,
        Action::Player2Down,
        Action::Pause,
        Action::Select,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Read-only view of this tick's input
pub trait InputQuery {
    fn is_active(&self, action: Action) -> bool;
    fn just_pressed(&self, action: Action) -> bool;
    fn just_released(&self, action: Action) -> bool;

    fn any_active(&self, actions: &[Action]) -> bool {
        actions.iter().any(|&action| self.is_active(action))
    }
}

/// A press or release reported by the key-capture side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: Action,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(action: Action) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn release(action: Action) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}

/// Producer half, safe to clone into a UI thread
#[derive(Debug, Clone)]
pub struct InputSender(Sender<InputEvent>);

impl InputSender {
    /// Queue an event. Returns false once the simulation side is gone.
    pub fn send(&self, event: InputEvent) -> bool {
        self.0.send(event).is_ok()
    }

    pub fn press(&self, action: Action) -> bool {
        self.send(InputEvent::press(action))
    }

    pub fn release(&self, action: Action) -> bool {
        self.send(InputEvent::release(action))
    }
}

/// Per-tick snapshot of held actions, fed by an event queue
#[derive(Debug)]
pub struct InputState {
    rx: Receiver<InputEvent>,
    held: [bool; ACTION_COUNT],
    previous: [bool; ACTION_COUNT],
}

impl InputState {
    /// Create the snapshot together with the sender that feeds it
    pub fn channel() -> (InputSender, Self) {
        let (tx, rx) = mpsc::channel();
        let state = Self {
            rx,
            held: [false; ACTION_COUNT],
            previous: [false; ACTION_COUNT],
        };
        (InputSender(tx), state)
    }

    /// Drain everything queued since the last poll and freeze the result.
    ///
    /// Events that arrive after this call belong to the next tick.
    pub fn poll(&mut self) {
        self.previous = self.held;
        for event in self.rx.try_iter() {
            self.held[event.action.index()] = event.pressed;
        }
    }

    /// Forget every held action, used when a match is (re)started
    pub fn clear(&mut self) {
        self.held = [false; ACTION_COUNT];
        self.previous = self.held;
    }
}

impl InputQuery for InputState {
    fn is_active(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    fn just_pressed(&self, action: Action) -> bool {
        self.held[action.index()] && !self.previous[action.index()]
    }

    fn just_released(&self, action: Action) -> bool {
        !self.held[action.index()] && self.previous[action.index()]
    }
}
