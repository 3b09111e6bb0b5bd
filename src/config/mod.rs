//! Declarative machine configuration.
//!
//! A configuration names the initial state and lists every state with its
//! outgoing transitions. It can be written in code, through
//! [`ConfigBuilder`] or [`machine_config!`](crate::machine_config), or loaded
//! from a JSON document of the shape
//!
//! ```json
//! {
//!   "initial": "normal",
//!   "states": {
//!     "normal": { "transitions": { "pause": "busy" } },
//!     "busy":   { "transitions": { "resume": "normal" } }
//!   }
//! }
//! ```
//!
//! Key order in `states` is significant and preserved.

pub mod builder;
pub mod error;
pub mod macros;

pub use builder::ConfigBuilder;
pub use error::ConfigError;

use crate::core::{StateDef, StateName};
use serde::{Deserialize, Serialize};

/// Initial state plus the ordered set of state definitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(alias = "initialState")]
    pub(crate) initial: StateName,

    #[serde(default, with = "crate::core::ordered")]
    pub(crate) states: Vec<(StateName, StateDef)>,
}

impl MachineConfig {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<StateName>) -> Self {
        Self {
            initial: initial.into(),
            states: Vec::new(),
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Add a state, replacing (in place) an existing one with the same name.
    pub fn with_state(mut self, name: impl Into<StateName>, def: StateDef) -> Self {
        crate::core::ordered::upsert(&mut self.states, name.into(), def);
        self
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Definition of `name`, if configured.
    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states
            .iter()
            .find(|(state, _)| state == name)
            .map(|(_, def)| def)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.state(name).is_some()
    }

    /// Configured state names in configuration order.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// All `(name, definition)` pairs in configuration order.
    pub fn states(&self) -> &[(StateName, StateDef)] {
        &self.states
    }

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render this configuration as a JSON document.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the initial state and every transition target are
    /// configured states.
    ///
    /// All problems are reported, not just the first. Machines do not call
    /// this; a configuration that fails validation still runs.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut problems = Vec::new();

        if !self.has_state(&self.initial) {
            problems.push(ConfigError::UnknownInitialState(self.initial.clone()));
        }

        for (state, def) in &self.states {
            for (event, target) in def.transitions() {
                if !self.has_state(target) {
                    problems.push(ConfigError::UnknownTarget {
                        state: state.clone(),
                        event: event.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAUSE_RESUME: &str = r#"{
        "initial": "normal",
        "states": {
            "normal": { "transitions": { "pause": "busy" } },
            "busy": { "transitions": { "resume": "normal" } }
        }
    }"#;

    #[test]
    fn parses_json_document() {
        let config = MachineConfig::from_json(PAUSE_RESUME).unwrap();

        assert_eq!(config.initial(), "normal");
        assert_eq!(config.state_names(), vec!["normal", "busy"]);
        assert_eq!(config.state("busy").unwrap().target("resume"), Some("normal"));
    }

    #[test]
    fn accepts_initial_state_alias() {
        let json = r#"{ "initialState": "idle", "states": { "idle": {} } }"#;
        let config = MachineConfig::from_json(json).unwrap();

        assert_eq!(config.initial(), "idle");
        assert!(config.state("idle").unwrap().is_empty());
    }

    #[test]
    fn missing_states_means_empty() {
        let config = MachineConfig::from_json(r#"{ "initial": "normal" }"#).unwrap();
        assert!(config.states().is_empty());
    }

    #[test]
    fn missing_initial_is_rejected() {
        let result = MachineConfig::from_json(r#"{ "states": {} }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn json_roundtrip_preserves_order() {
        let config = MachineConfig::new("z")
            .with_state("z", StateDef::new().on("go", "a"))
            .with_state("a", StateDef::new());

        let json = config.to_json().unwrap();
        let parsed = MachineConfig::from_json(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(parsed.state_names(), vec!["z", "a"]);
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = MachineConfig::from_json(PAUSE_RESUME).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_collects_every_problem() {
        let config = MachineConfig::new("missing")
            .with_state("normal", StateDef::new().on("pause", "busy").on("stop", "idle"));

        let problems = config.validate().unwrap_err();

        assert_eq!(problems.len(), 3);
        assert!(matches!(&problems[0], ConfigError::UnknownInitialState(s) if s == "missing"));
        assert!(matches!(
            &problems[1],
            ConfigError::UnknownTarget { state, event, target }
                if state == "normal" && event == "pause" && target == "busy"
        ));
        assert!(matches!(
            &problems[2],
            ConfigError::UnknownTarget { target, .. } if target == "idle"
        ));
    }
}
