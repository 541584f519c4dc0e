//! Commit handling for single- and multi-select widgets.
//!
//! Single-select widgets report each committed candidate to the host and
//! retain nothing. Multi-select widgets accumulate committed candidates in
//! an ordered list; committing a candidate that is already present is
//! idempotent, and entries can be removed explicitly (the removal UI itself
//! is the host's concern).

use crate::candidate::Candidate;

/// Whether a widget reports single choices or accumulates a set of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Each commit replaces the previous choice; the host displays it.
    #[default]
    Single,
    /// Commits accumulate into an ordered list of selected items.
    Multi,
}

/// What a commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Single-select: the candidate was reported to the host.
    Reported,
    /// Multi-select: the candidate was appended to the selected items.
    Accumulated,
    /// Multi-select: the candidate was already selected; nothing changed.
    AlreadySelected,
}

/// Owns the selected-items list and applies commit semantics.
#[derive(Debug, Clone)]
pub struct SelectionController<T> {
    mode: SelectionMode,
    selected: Vec<T>,
}

impl<T: Candidate> SelectionController<T> {
    /// Create a controller for the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    /// The configured mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Previously committed candidates, in commit order. Always empty in
    /// single-select mode.
    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    /// Apply a commit of `candidate`.
    pub fn commit(&mut self, candidate: &T) -> CommitOutcome {
        match self.mode {
            SelectionMode::Single => CommitOutcome::Reported,
            SelectionMode::Multi => {
                if self.selected.contains(candidate) {
                    CommitOutcome::AlreadySelected
                } else {
                    self.selected.push(candidate.clone());
                    CommitOutcome::Accumulated
                }
            }
        }
    }

    /// Remove a previously selected candidate.
    ///
    /// Returns `true` if it was present.
    pub fn remove(&mut self, candidate: &T) -> bool {
        let before = self.selected.len();
        self.selected.retain(|c| c != candidate);
        self.selected.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_retains_nothing() {
        let mut controller = SelectionController::new(SelectionMode::Single);

        assert_eq!(controller.commit(&"United Kingdom"), CommitOutcome::Reported);
        assert!(controller.selected().is_empty());

        assert_eq!(controller.commit(&"Hungary"), CommitOutcome::Reported);
        assert!(controller.selected().is_empty());
    }

    #[test]
    fn test_multi_mode_accumulates_in_commit_order() {
        let mut controller = SelectionController::new(SelectionMode::Multi);

        controller.commit(&"simple-tag");
        controller.commit(&"simple");

        assert_eq!(controller.selected(), ["simple-tag", "simple"]);
    }

    #[test]
    fn test_multi_mode_commit_is_idempotent() {
        let mut controller = SelectionController::new(SelectionMode::Multi);

        assert_eq!(controller.commit(&"simple-tag"), CommitOutcome::Accumulated);
        assert_eq!(
            controller.commit(&"simple-tag"),
            CommitOutcome::AlreadySelected
        );

        assert_eq!(controller.selected(), ["simple-tag"]);
    }

    #[test]
    fn test_remove_selected() {
        let mut controller = SelectionController::new(SelectionMode::Multi);
        controller.commit(&"simple-tag");
        controller.commit(&"simple");

        assert!(controller.remove(&"simple-tag"));
        assert_eq!(controller.selected(), ["simple"]);

        assert!(!controller.remove(&"simple-tag"));
    }
}
