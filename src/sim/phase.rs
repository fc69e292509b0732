//! Player-driven phase transitions
//!
//! Event-driven transitions (life lost, level clear) happen inside the tick;
//! everything the player can trigger goes through [`transition`].

use super::state::{GamePhase, GameState};

/// A discrete player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click / tap / space
    Primary,
    /// Pause key
    Pause,
}

/// A state change requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StartRun,
    Launch,
    Pause,
    Resume,
}

impl Transition {
    /// Phase the game is in after this transition
    pub fn target(self) -> GamePhase {
        match self {
            Transition::StartRun => GamePhase::Idle,
            Transition::Launch | Transition::Resume => GamePhase::Playing,
            Transition::Pause => GamePhase::Paused,
        }
    }
}

/// Look up the transition for `action` in `phase`, if any
pub fn transition(phase: GamePhase, action: Action) -> Option<Transition> {
    use Action::*;
    use GamePhase::*;

    match (phase, action) {
        (Menu | GameOver | Victory, Primary) => Some(Transition::StartRun),
        (Idle, Primary) => Some(Transition::Launch),
        (Playing, Primary | Pause) => Some(Transition::Pause),
        (Paused, Primary | Pause) => Some(Transition::Resume),
        _ => None,
    }
}

impl GameState {
    /// Run `action` through the transition table. Returns the transition
    /// taken, or `None` when the action means nothing in this phase.
    pub fn handle_action(&mut self, action: Action) -> Option<Transition> {
        let next = transition(self.phase, action)?;
        match next {
            Transition::StartRun => self.start_run(),
            Transition::Launch => self.launch_ball(),
            Transition::Pause | Transition::Resume => self.phase = next.target(),
        }
        debug_assert_eq!(self.phase, next.target());
        Some(next)
    }
}
