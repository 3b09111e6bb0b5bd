//! Errors returned by machine operations.

use thiserror::Error;

/// Errors that can occur while constructing or driving a [`StateMachine`](super::StateMachine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// No usable configuration was supplied at construction.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// `change_state` named a state that is not configured.
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// `trigger` found no transition for the event. The machine is now latched.
    #[error("No transition for event '{event}' from state '{from}'")]
    NoTransition { event: String, from: String },

    /// `trigger` was called on a machine that has already latched.
    #[error("State machine is in error state; no further events are accepted")]
    MachineInError,
}
