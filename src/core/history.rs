//! Single-step undo/redo buffer.
//!
//! The machine remembers at most one state to go back to and at most one
//! state to go forward to. There is no deeper stack.

use super::state::StateName;

/// One undo slot and one redo slot.
///
/// `StepHistory` only stores names; the rules for when each slot is armed
/// or cleared live in `StateMachine`.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StepHistory;
///
/// let mut history = StepHistory::new();
/// history.record("normal".to_string());
///
/// assert!(history.can_undo());
/// assert_eq!(history.take_undo().as_deref(), Some("normal"));
/// assert!(!history.can_undo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepHistory {
    undo: Option<StateName>,
    redo: Option<StateName>,
}

impl StepHistory {
    /// Create a history with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `previous` as the undo target after a forward state change.
    ///
    /// Any pending redo is dropped.
    pub fn record(&mut self, previous: StateName) {
        self.redo = None;
        self.undo = Some(previous);
    }

    /// Drop the pending redo, if any.
    pub fn clear_redo(&mut self) {
        self.redo = None;
    }

    /// Remove and return the undo target.
    pub fn take_undo(&mut self) -> Option<StateName> {
        self.undo.take()
    }

    /// Remove and return the redo target.
    pub fn take_redo(&mut self) -> Option<StateName> {
        self.redo.take()
    }

    pub fn arm_undo(&mut self, state: StateName) {
        self.undo = Some(state);
    }

    pub fn arm_redo(&mut self, state: StateName) {
        self.redo = Some(state);
    }

    /// Empty both slots.
    pub fn clear(&mut self) {
        self.undo = None;
        self.redo = None;
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo.is_some()
    }

    pub fn undo_target(&self) -> Option<&str> {
        self.undo.as_deref()
    }

    pub fn redo_target(&self) -> Option<&str> {
        self.redo.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = StepHistory::new();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_target(), None);
        assert_eq!(history.redo_target(), None);
    }

    #[test]
    fn record_overwrites_undo_and_drops_redo() {
        let mut history = StepHistory::new();
        history.arm_redo("later".to_string());

        history.record("first".to_string());
        history.record("second".to_string());

        assert_eq!(history.undo_target(), Some("second"));
        assert!(!history.can_redo());
    }

    #[test]
    fn take_empties_slot() {
        let mut history = StepHistory::new();
        history.arm_redo("busy".to_string());

        assert_eq!(history.take_redo().as_deref(), Some("busy"));
        assert_eq!(history.take_redo(), None);
    }

    #[test]
    fn clear_redo_leaves_undo() {
        let mut history = StepHistory::new();
        history.arm_undo("a".to_string());
        history.arm_redo("b".to_string());

        history.clear_redo();

        assert_eq!(history.undo_target(), Some("a"));
        assert!(!history.can_redo());
    }

    #[test]
    fn clear_empties_both_slots() {
        let mut history = StepHistory::new();
        history.arm_undo("a".to_string());
        history.arm_redo("b".to_string());

        history.clear();

        assert_eq!(history, StepHistory::new());
    }
}
