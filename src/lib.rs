//! Waypoint: a declarative finite state machine with one step of undo
//!
//! A machine is built from a configuration that names an initial state and
//! lists every state with its `event -> target` transitions. The machine then
//! tracks a single current state and supports:
//!
//! - **Direct changes**: jump to any configured state
//! - **Events**: follow the transition configured for an event
//! - **Undo/redo**: one step back, one step forward
//! - **Error latch**: an event with no transition disables further events
//!
//! # Example
//!
//! ```rust
//! use waypoint::{FsmError, MachineConfig, StateMachine};
//!
//! let config = MachineConfig::from_json(r#"{
//!     "initial": "normal",
//!     "states": {
//!         "normal": { "transitions": { "pause": "busy" } },
//!         "busy": { "transitions": { "resume": "normal" } }
//!     }
//! }"#).unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("pause").unwrap();
//! assert_eq!(machine.current_state(), "busy");
//!
//! assert!(matches!(machine.trigger("explode"), Err(FsmError::NoTransition { .. })));
//! assert_eq!(machine.trigger("resume"), Err(FsmError::MachineInError));
//! ```

pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use config::{ConfigBuilder, ConfigError, MachineConfig};
pub use core::{StateDef, StepHistory, TransitionLookup, RESET_STATE};
pub use machine::{FsmError, Health, StateMachine};
