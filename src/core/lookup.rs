//! Event-to-target resolution.

use super::state::{StateDef, StateName};

/// How `trigger` finds the transition for an event.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StateDef, TransitionLookup};
///
/// let states = vec![
///     ("normal".to_string(), StateDef::new().on("pause", "busy")),
///     ("busy".to_string(), StateDef::new().on("resume", "normal")),
/// ];
///
/// // Global lookup answers from whichever state defines the event first.
/// assert_eq!(TransitionLookup::Global.resolve(&states, "normal", "resume"), Some("normal"));
///
/// // Scoped lookup only consults the current state.
/// assert_eq!(TransitionLookup::Scoped.resolve(&states, "normal", "resume"), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionLookup {
    /// Scan every state in configuration order and take the first one that
    /// defines the event, whether or not it is the current state.
    #[default]
    Global,

    /// Only the current state's own transitions are consulted.
    Scoped,
}

impl TransitionLookup {
    /// Resolve the target for `event` while the machine sits in `current`.
    pub fn resolve<'a>(
        self,
        states: &'a [(StateName, StateDef)],
        current: &str,
        event: &str,
    ) -> Option<&'a str> {
        match self {
            Self::Global => states.iter().find_map(|(_, def)| def.target(event)),
            Self::Scoped => states
                .iter()
                .find(|(name, _)| name == current)
                .and_then(|(_, def)| def.target(event)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Vec<(StateName, StateDef)> {
        vec![
            ("normal".to_string(), StateDef::new().on("pause", "busy")),
            (
                "busy".to_string(),
                StateDef::new().on("resume", "normal").on("pause", "sleeping"),
            ),
            ("sleeping".to_string(), StateDef::new()),
        ]
    }

    #[test]
    fn default_is_global() {
        assert_eq!(TransitionLookup::default(), TransitionLookup::Global);
    }

    #[test]
    fn global_takes_first_state_in_order() {
        let states = states();

        // "busy" also defines pause, but "normal" comes first.
        assert_eq!(
            TransitionLookup::Global.resolve(&states, "busy", "pause"),
            Some("busy")
        );
    }

    #[test]
    fn global_ignores_current_state() {
        let states = states();

        assert_eq!(
            TransitionLookup::Global.resolve(&states, "sleeping", "resume"),
            Some("normal")
        );
    }

    #[test]
    fn scoped_uses_current_state_only() {
        let states = states();

        assert_eq!(
            TransitionLookup::Scoped.resolve(&states, "busy", "pause"),
            Some("sleeping")
        );
        assert_eq!(
            TransitionLookup::Scoped.resolve(&states, "sleeping", "resume"),
            None
        );
    }

    #[test]
    fn scoped_misses_for_unconfigured_current_state() {
        let states = states();

        assert_eq!(
            TransitionLookup::Scoped.resolve(&states, "missing", "pause"),
            None
        );
    }

    #[test]
    fn unknown_event_misses_in_both_modes() {
        let states = states();

        assert_eq!(TransitionLookup::Global.resolve(&states, "normal", "explode"), None);
        assert_eq!(TransitionLookup::Scoped.resolve(&states, "normal", "explode"), None);
    }
}
