//! The runtime state machine.
//!
//! [`StateMachine`] owns its configuration and tracks the current state,
//! a single undo/redo step and whether event handling has been disabled by
//! an unmatched event.

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::StateMachine;

/// Whether a machine still accepts events.
///
/// A machine starts `Operational` and becomes `Latched` the first time
/// `trigger` finds no transition. There is no way back; build a new machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Health {
    #[default]
    Operational,
    Latched,
}

impl Health {
    pub fn is_latched(self) -> bool {
        matches!(self, Self::Latched)
    }
}
