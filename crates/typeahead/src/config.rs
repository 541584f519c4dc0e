//! Construction-time configuration for the widget controller.

use crate::error::{ConfigError, Result};
use crate::matcher::{CaseSensitivity, MatchStrategy};
use crate::selection::SelectionMode;
use crate::trigger::TriggerMode;

/// Configuration fixed at widget construction.
///
/// The defaults mirror the common case: suggestions appear automatically as
/// the user types, a single choice is reported to the host, matching is
/// case-insensitive substring containment, and any non-empty query
/// activates matching.
///
/// # Example
///
/// ```
/// use typeahead::config::Config;
/// use typeahead::trigger::TriggerMode;
/// use typeahead::selection::SelectionMode;
///
/// let config = Config::default()
///     .with_trigger_mode(TriggerMode::Manual)
///     .with_selection_mode(SelectionMode::Multi);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// When the suggestion list becomes visible.
    pub trigger_mode: TriggerMode,
    /// Whether commits are reported one at a time or accumulated.
    pub selection_mode: SelectionMode,
    /// Where in the label the query has to occur.
    pub match_strategy: MatchStrategy,
    /// How matching handles letter case.
    pub case_sensitivity: CaseSensitivity,
    /// Minimum query length (in characters) before matching activates.
    pub min_query_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger_mode: TriggerMode::default(),
            selection_mode: SelectionMode::default(),
            match_strategy: MatchStrategy::default(),
            case_sensitivity: CaseSensitivity::default(),
            min_query_len: 1,
        }
    }
}

impl Config {
    /// Set the trigger mode using builder pattern.
    pub fn with_trigger_mode(mut self, mode: TriggerMode) -> Self {
        self.trigger_mode = mode;
        self
    }

    /// Set the selection mode using builder pattern.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set the match strategy using builder pattern.
    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    /// Set the case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Set the minimum query length using builder pattern.
    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    /// Check the configuration for contradictions.
    ///
    /// A minimum query length of zero would let the empty query activate
    /// matching, contradicting the invariant that an empty query matches
    /// nothing.
    pub fn validate(&self) -> Result<()> {
        if self.min_query_len == 0 {
            return Err(ConfigError::ZeroMinQueryLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_min_query_len_is_rejected() {
        let config = Config::default().with_min_query_len(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinQueryLength));
    }

    #[test]
    fn test_builder_methods_compose() {
        let config = Config::default()
            .with_trigger_mode(TriggerMode::Manual)
            .with_selection_mode(SelectionMode::Multi)
            .with_match_strategy(MatchStrategy::Prefix)
            .with_case_sensitivity(CaseSensitivity::CaseSensitive)
            .with_min_query_len(3);

        assert_eq!(config.trigger_mode, TriggerMode::Manual);
        assert_eq!(config.selection_mode, SelectionMode::Multi);
        assert_eq!(config.match_strategy, MatchStrategy::Prefix);
        assert_eq!(config.case_sensitivity, CaseSensitivity::CaseSensitive);
        assert_eq!(config.min_query_len, 3);
    }
}
