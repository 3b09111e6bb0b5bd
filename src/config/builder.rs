//! Fluent builder for machine configurations.

use crate::config::error::ConfigError;
use crate::config::MachineConfig;
use crate::core::{StateDef, StateName};

/// Builder for constructing a [`MachineConfig`] with a fluent API.
///
/// States appear in the order they are first mentioned, either through
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateName>,
    states: Vec<(StateName, StateDef)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state definition, replacing an earlier one with the same name.
    pub fn state(mut self, name: impl Into<StateName>, def: StateDef) -> Self {
        crate::core::ordered::upsert(&mut self.states, name.into(), def);
        self
    }

    /// Add a single `from --event--> to` transition, creating `from` if needed.
    ///
    /// `to` is not registered as a state.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<String>,
        to: impl Into<StateName>,
    ) -> Self {
        let from = from.into();
        match self.states.iter_mut().find(|(name, _)| *name == from) {
            Some((_, def)) => *def = std::mem::take(def).on(event, to),
            None => self.states.push((from, StateDef::new().on(event, to))),
        }
        self
    }

    /// Build the configuration.
    /// Returns an error if no initial state was set.
    pub fn build(self) -> Result<MachineConfig, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}
