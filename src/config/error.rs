//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building, loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{0}' is not a configured state")]
    UnknownInitialState(String),

    #[error("Transition '{event}' of state '{state}' targets unknown state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}
