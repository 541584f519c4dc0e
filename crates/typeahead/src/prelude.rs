//! Convenience re-exports for host applications.
//!
//! ```
//! use typeahead::prelude::*;
//!
//! let widget = Autocomplete::new(vec!["United Kingdom"]);
//! assert!(!widget.is_open());
//! ```

pub use crate::candidate::{Candidate, Item};
pub use crate::config::Config;
pub use crate::error::{ConfigError, Result};
pub use crate::events::{InputEvent, Key, KeyDisposition, Snapshot, SuggestionEntry};
pub use crate::matcher::{CaseSensitivity, MatchStrategy};
pub use crate::selection::SelectionMode;
pub use crate::trigger::TriggerMode;
pub use crate::widget::Autocomplete;

pub use typeahead_core::{ConnectionGuard, ConnectionId, Signal};
