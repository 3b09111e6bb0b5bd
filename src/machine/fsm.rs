//! State machine driven by direct state changes and events.

use crate::config::MachineConfig;
use crate::core::{StateName, StepHistory, TransitionLookup, RESET_STATE};
use crate::machine::error::FsmError;
use crate::machine::Health;
use std::mem;
use tracing::{debug, trace};

/// Finite state machine over a declarative [`MachineConfig`].
///
/// The machine keeps its own copy of the current state; the configuration is
/// never written to. One undo step and one redo step are remembered.
///
/// # Example
///
/// ```rust
/// use waypoint::{machine_config, StateMachine};
///
/// let mut machine = StateMachine::new(machine_config! {
///     initial: "normal",
///     states: {
///         "normal" => { "pause" => "busy" },
///         "busy" => { "resume" => "normal" },
///     }
/// });
///
/// machine.trigger("pause").unwrap();
/// assert_eq!(machine.current_state(), "busy");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "normal");
///
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "busy");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: StateName,
    history: StepHistory,
    health: Health,
    lookup: TransitionLookup,
}

impl StateMachine {
    /// Create a machine sitting in the configuration's initial state.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial().to_string();
        Self {
            config,
            current,
            history: StepHistory::new(),
            health: Health::Operational,
            lookup: TransitionLookup::default(),
        }
    }

    /// Create a machine from an optional configuration.
    /// Fails with [`FsmError::InvalidConfig`] when none is given.
    pub fn from_config(config: Option<MachineConfig>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or_else(|| FsmError::InvalidConfig {
            reason: "no configuration supplied".to_string(),
        })
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// A `null` document, malformed JSON or a document of the wrong shape
    /// fails with [`FsmError::InvalidConfig`].
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config: Option<MachineConfig> =
            serde_json::from_str(json).map_err(|err| FsmError::InvalidConfig {
                reason: err.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Select how `trigger` matches events. Defaults to [`TransitionLookup::Global`].
    pub fn with_lookup(mut self, lookup: TransitionLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Move directly to `target`.
    ///
    /// Any pending redo is dropped before `target` is checked, so a failed
    /// call still loses the redo step. On success the state left behind
    /// becomes the undo target.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        self.history.clear_redo();

        if !self.config.has_state(target) {
            return Err(FsmError::UnknownState {
                state: target.to_string(),
            });
        }

        let previous = mem::replace(&mut self.current, target.to_string());
        debug!(from = %previous, to = %self.current, "state changed");
        self.history.record(previous);
        Ok(())
    }

    /// Apply `event`.
    ///
    /// Any pending redo is dropped first. A latched machine fails with
    /// [`FsmError::MachineInError`] without looking at its transitions. If no
    /// transition matches, the machine latches and the call fails with
    /// [`FsmError::NoTransition`].
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        self.history.clear_redo();

        if self.health.is_latched() {
            return Err(FsmError::MachineInError);
        }

        let Some(target) = self
            .lookup
            .resolve(self.config.states(), &self.current, event)
            .map(str::to_string)
        else {
            self.health = Health::Latched;
            return Err(FsmError::NoTransition {
                event: event.to_string(),
                from: self.current.clone(),
            });
        };

        let previous = mem::replace(&mut self.current, target);
        debug!(event, from = %previous, to = %self.current, "event triggered transition");
        self.history.record(previous);
        Ok(())
    }

    /// Jump to the `"normal"` state, configured or not.
    ///
    /// History and health are left as they are.
    pub fn reset(&mut self) {
        trace!(from = %self.current, "reset");
        self.current = RESET_STATE.to_string();
    }

    /// State names in configuration order.
    ///
    /// With an event, only the states that define a transition for it.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config
            .states()
            .iter()
            .filter(|(_, def)| event.is_none_or(|event| def.handles(event)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Step back to the state before the last change.
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.take_undo() else {
            return false;
        };

        let left = mem::replace(&mut self.current, previous);
        debug!(from = %left, to = %self.current, "undo");
        self.history.arm_redo(left);
        true
    }

    /// Return to the state the last undo left.
    /// Returns `false` if there is nothing to redo.
    ///
    /// The undo target becomes the state just redone to, so an undo right
    /// after a redo stays where it is.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.take_redo() else {
            return false;
        };

        debug!(from = %self.current, to = %next, "redo");
        self.current = next;
        self.history.arm_undo(self.current.clone());
        true
    }

    /// Forget both the undo and the redo step.
    pub fn clear_history(&mut self) {
        trace!("history cleared");
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn is_latched(&self) -> bool {
        self.health.is_latched()
    }

    pub fn lookup(&self) -> TransitionLookup {
        self.lookup
    }

    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn into_config(self) -> MachineConfig {
        self.config
    }
}

impl From<MachineConfig> for StateMachine {
    fn from(config: MachineConfig) -> Self {
        Self::new(config)
    }
}
