//! Core state machine types.
//!
//! This module contains the pure data the machine is built from:
//! - State and event names, and per-state transition tables (`StateDef`)
//! - The single-step undo/redo buffer (`StepHistory`)
//! - How an event is matched against the configured states (`TransitionLookup`)
//!
//! Nothing in here mutates a machine directly; `crate::machine` drives these
//! types.

mod history;
mod lookup;
pub(crate) mod ordered;
mod state;

pub use history::StepHistory;
pub use lookup::TransitionLookup;
pub use state::{EventName, StateDef, StateName, RESET_STATE};
