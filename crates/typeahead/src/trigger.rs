//! Trigger policy: when the suggestion list is allowed to be visible.
//!
//! In [`TriggerMode::Auto`] the list shows whenever there are matches. In
//! [`TriggerMode::Manual`] it additionally needs an explicit trigger (for
//! example a search button) since the last commit or close; once triggered,
//! query edits keep the list governed automatically until it is disarmed
//! again. In either mode an empty match list is never visible.

/// Rule governing whether suggestions appear automatically or only after
/// explicit activation. Selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Visibility is a pure function of "are there matches".
    #[default]
    Auto,
    /// Visibility additionally requires a trigger signal since the last
    /// commit or explicit close.
    Manual,
}

/// Tracks whether the suggestion list is currently allowed to show.
#[derive(Debug, Clone, Copy)]
pub struct TriggerPolicy {
    mode: TriggerMode,
    /// Whether a manual trigger has fired since the last disarm.
    armed: bool,
}

impl TriggerPolicy {
    /// Create a policy for the given mode.
    pub fn new(mode: TriggerMode) -> Self {
        Self { mode, armed: false }
    }

    /// The configured mode.
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Record an explicit trigger activation.
    ///
    /// Returns `true` if the activation had any effect. In auto mode the
    /// list is already governed automatically, so this is a no-op.
    pub fn trigger(&mut self) -> bool {
        match self.mode {
            TriggerMode::Auto => {
                tracing::debug!(
                    target: "typeahead::trigger",
                    "trigger ignored: list is governed automatically"
                );
                false
            }
            TriggerMode::Manual => {
                self.armed = true;
                true
            }
        }
    }

    /// Disarm the trigger. Called on commit and on explicit close.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Whether a list with `match_count` entries may be visible right now.
    pub fn visible(&self, match_count: usize) -> bool {
        if match_count == 0 {
            return false;
        }
        match self.mode {
            TriggerMode::Auto => true,
            TriggerMode::Manual => self.armed,
        }
    }
}
