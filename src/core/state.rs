//! State definitions and their outgoing transitions.

use serde::{Deserialize, Serialize};

/// Name of a configured state.
pub type StateName = String;

/// Name of an event that may fire a transition.
pub type EventName = String;

/// State entered by `StateMachine::reset`, whether or not it is configured.
pub const RESET_STATE: &str = "normal";

/// Definition of a single state: its outgoing `event -> target` transitions.
///
/// Transitions keep the order they were declared in. Declaring the same event
/// twice replaces the target but keeps the first position.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateDef;
///
/// let normal = StateDef::new().on("pause", "busy").on("stop", "idle");
///
/// assert_eq!(normal.target("pause"), Some("busy"));
/// assert!(!normal.handles("resume"));
/// assert_eq!(normal.events().collect::<Vec<_>>(), vec!["pause", "stop"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default, with = "crate::core::ordered")]
    transitions: Vec<(EventName, StateName)>,
}

impl StateDef {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<EventName>, target: impl Into<StateName>) -> Self {
        super::ordered::upsert(&mut self.transitions, event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state defines one.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|(name, _)| name == event)
            .map(|(_, target)| target.as_str())
    }

    /// Whether this state has a transition keyed by `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.target(event).is_some()
    }

    /// Events handled by this state, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.transitions.iter().map(|(event, _)| event.as_str())
    }

    /// `(event, target)` pairs in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.transitions
            .iter()
            .map(|(event, target)| (event.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
