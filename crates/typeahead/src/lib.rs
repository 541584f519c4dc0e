//! Typeahead - a headless autocomplete interaction engine.
//!
//! This crate implements the interaction logic of an autocomplete input:
//! suggestion filtering, highlight and selection state, and keyboard/pointer
//! event interpretation. Rendering, styling, and layout are entirely the
//! host's responsibility; the engine exposes typed state and signals
//! instead of markup.
//!
//! # Example
//!
//! ```
//! use typeahead::prelude::*;
//!
//! let mut widget = Autocomplete::new(vec![
//!     "United Arab Emirates",
//!     "United Kingdom",
//!     "United States",
//! ]);
//!
//! for c in "uni".chars() {
//!     widget.type_char(c);
//! }
//! assert_eq!(widget.suggestions().len(), 3);
//!
//! widget.move_down();
//! let snapshot = widget.snapshot();
//! assert_eq!(snapshot.highlighted(), Some(&"United Arab Emirates"));
//! ```

pub mod candidate;
pub mod config;
pub mod error;
pub mod events;
pub mod highlight;
pub mod matcher;
pub mod prelude;
pub mod selection;
pub mod trigger;
pub mod widget;

pub use candidate::{Candidate, Item};
pub use config::Config;
pub use error::{ConfigError, Result};
pub use events::{InputEvent, Key, KeyDisposition, Snapshot, SuggestionEntry, interpret_key};
pub use highlight::Highlight;
pub use matcher::{CaseSensitivity, MatchStrategy, Matcher};
pub use selection::{CommitOutcome, SelectionController, SelectionMode};
pub use trigger::{TriggerMode, TriggerPolicy};
pub use widget::Autocomplete;

pub use typeahead_core::{ConnectionGuard, ConnectionId, Signal};
