//! The widget controller: composes matcher, highlight, selection, and
//! trigger policy behind one input binding.
//!
//! [`Autocomplete`] owns the query, the open/closed state, the current
//! suggestion list, the highlight, and (in multi-select mode) the selected
//! items. Every input event is processed synchronously and leaves the
//! widget in one consistent snapshot: the visible suggestion list is never
//! non-empty while the widget reports itself closed, and the highlight is
//! never out of bounds.
//!
//! # Signals
//!
//! - `selected(T)`: a suggestion was committed (Enter or click)
//! - `query_changed(String)`: the input text changed
//! - `suggestions_changed((Vec<T>, Option<usize>))`: the visible list or
//!   its highlight changed
//! - `closed(())`: the suggestion list went from visible to hidden
//!
//! # Example
//!
//! ```
//! use typeahead::widget::Autocomplete;
//!
//! let mut widget = Autocomplete::new(vec![
//!     "United Arab Emirates",
//!     "United Kingdom",
//!     "United States",
//! ]);
//!
//! widget.selected.connect(|country| {
//!     println!("Selected country: {}", country);
//! });
//!
//! for c in "uni".chars() {
//!     widget.type_char(c);
//! }
//! widget.move_down();
//! widget.commit(); // prints "Selected country: United Arab Emirates"
//! ```

use typeahead_core::Signal;
use unicode_segmentation::UnicodeSegmentation;

use crate::candidate::Candidate;
use crate::config::Config;
use crate::error::Result;
use crate::events::{InputEvent, Key, KeyDisposition, Snapshot, SuggestionEntry, interpret_key};
use crate::highlight::Highlight;
use crate::matcher::Matcher;
use crate::selection::{CommitOutcome, SelectionController};
use crate::trigger::{TriggerMode, TriggerPolicy};

/// An autocomplete widget bound to one input field.
///
/// The candidate set is fixed at construction. All state transitions are
/// driven through the methods below (or [`handle_event`](Self::handle_event)
/// for hosts that deliver [`InputEvent`]s directly); each one completes
/// within the call, emitting signals along the way.
pub struct Autocomplete<T: Candidate + Send + 'static> {
    config: Config,
    matcher: Matcher,
    candidates: Vec<T>,

    /// Current text content of the bound input field.
    query: String,
    /// Candidates matching the current query. In manual mode these exist
    /// off-screen before the trigger fires; they only become observable
    /// once `open` is true.
    matches: Vec<T>,
    highlight: Highlight,
    trigger: TriggerPolicy,
    selection: SelectionController<T>,
    /// Whether the suggestion list is visible.
    open: bool,

    // Signals
    /// Emitted when a suggestion is committed.
    pub selected: Signal<T>,
    /// Emitted when the query text changes.
    pub query_changed: Signal<String>,
    /// Emitted when the visible suggestion list or its highlight changes.
    /// Carries the ordered suggestions and the highlighted index, if any.
    pub suggestions_changed: Signal<(Vec<T>, Option<usize>)>,
    /// Emitted when the suggestion list goes from visible to hidden.
    pub closed: Signal<()>,
}

impl<T: Candidate + Send + 'static> Autocomplete<T> {
    /// Create a widget over `candidates` with the default configuration.
    pub fn new(candidates: Vec<T>) -> Self {
        // The default configuration always validates.
        Self::with_config(candidates, Config::default())
            .expect("default configuration is valid")
    }

    /// Create a widget with an explicit configuration.
    ///
    /// An empty candidate set is valid: the matcher then always yields an
    /// empty result and the list never opens.
    pub fn with_config(candidates: Vec<T>, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            matcher: Matcher::new(config.match_strategy, config.case_sensitivity),
            trigger: TriggerPolicy::new(config.trigger_mode),
            selection: SelectionController::new(config.selection_mode),
            config,
            candidates,
            query: String::new(),
            matches: Vec::new(),
            highlight: Highlight::NONE,
            open: false,
            selected: Signal::new(),
            query_changed: Signal::new(),
            suggestions_changed: Signal::new(),
            closed: Signal::new(),
        })
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// The configuration this widget was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current text content of the bound input field.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the suggestion list is currently visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The visible suggestions, in match order. Empty while the list is
    /// hidden, even if matches are pending off-screen (manual mode).
    pub fn suggestions(&self) -> &[T] {
        if self.open { &self.matches } else { &[] }
    }

    /// The highlighted index into [`suggestions`](Self::suggestions), if any.
    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight.index()
    }

    /// Previously committed candidates (multi-select mode; empty otherwise).
    pub fn selected_items(&self) -> &[T] {
        self.selection.selected()
    }

    /// Take a consistent view of the widget for rendering.
    pub fn snapshot(&self) -> Snapshot<T> {
        let entries = self
            .suggestions()
            .iter()
            .enumerate()
            .map(|(i, candidate)| SuggestionEntry {
                candidate: candidate.clone(),
                highlighted: self.highlight.index() == Some(i),
            })
            .collect();

        Snapshot {
            query: self.query.clone(),
            open: self.open,
            entries,
            selected: self.selection.selected().to_vec(),
        }
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Process one engine event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Type(c) => self.type_char(c),
            InputEvent::Backspace => self.backspace(),
            InputEvent::MoveDown => self.move_down(),
            InputEvent::MoveUp => self.move_up(),
            InputEvent::Commit => self.commit(),
            InputEvent::TriggerSearch => self.trigger_search(),
            InputEvent::ClickSuggestion(index) => self.click_suggestion(index),
            InputEvent::Close => self.close(),
        }
    }

    /// Process one key from the host's input layer.
    ///
    /// Returns `true` if the key was consumed by the engine, `false` if the
    /// host should let the native input behavior handle it.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match interpret_key(key) {
            KeyDisposition::Engine(event) => {
                self.handle_event(event);
                true
            }
            KeyDisposition::PassThrough => false,
        }
    }

    // =========================================================================
    // Query mutation
    // =========================================================================

    /// Replace the whole query, as when the host syncs a programmatic input
    /// value change.
    pub fn set_query(&mut self, value: &str) {
        self.query.clear();
        self.query.push_str(value);
        self.query_changed.emit(self.query.clone());
        self.recompute();
    }

    /// Append one typed character to the query.
    pub fn type_char(&mut self, c: char) {
        self.query.push(c);
        self.query_changed.emit(self.query.clone());
        self.recompute();
    }

    /// Delete the last grapheme cluster from the query.
    ///
    /// A backspace on an empty query is a no-op, as in a native input.
    pub fn backspace(&mut self) {
        let Some((boundary, _)) = self.query.grapheme_indices(true).next_back() else {
            return;
        };
        self.query.truncate(boundary);
        self.query_changed.emit(self.query.clone());
        self.recompute();
    }

    // =========================================================================
    // Highlight navigation
    // =========================================================================

    /// Move the highlight down. No-op while the list is hidden.
    pub fn move_down(&mut self) {
        if !self.open {
            return;
        }
        let before = self.highlight;
        self.highlight.move_down(self.matches.len());
        if self.highlight != before {
            self.suggestions_changed
                .emit((self.matches.clone(), self.highlight.index()));
        }
    }

    /// Move the highlight up. No-op while the list is hidden.
    pub fn move_up(&mut self) {
        if !self.open {
            return;
        }
        let before = self.highlight;
        self.highlight.move_up();
        if self.highlight != before {
            self.suggestions_changed
                .emit((self.matches.clone(), self.highlight.index()));
        }
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Commit the highlighted suggestion. No-op when nothing is highlighted.
    pub fn commit(&mut self) {
        let Some(index) = self.highlight.index() else {
            tracing::debug!(
                target: "typeahead::engine",
                "commit ignored: nothing highlighted"
            );
            return;
        };
        // The highlight invariant keeps the index within the match list.
        let Some(candidate) = self.matches.get(index).cloned() else {
            return;
        };
        self.finish_commit(candidate);
    }

    /// Commit the clicked suggestion, independent of the highlight.
    ///
    /// An index outside the visible list (a stale click) is a no-op.
    pub fn click_suggestion(&mut self, index: usize) {
        if !self.open || index >= self.matches.len() {
            tracing::debug!(
                target: "typeahead::engine",
                index,
                "click ignored: no such visible suggestion"
            );
            return;
        }
        let candidate = self.matches[index].clone();
        self.finish_commit(candidate);
    }

    // =========================================================================
    // Trigger policy
    // =========================================================================

    /// Explicitly activate the suggestion list (manual mode).
    ///
    /// In auto mode the list is already governed automatically and this is
    /// a no-op. In manual mode the pending matches become visible, and
    /// subsequent query edits keep the list governed automatically until
    /// the next commit or explicit close.
    pub fn trigger_search(&mut self) {
        if !self.trigger.trigger() {
            return;
        }
        let was_open = self.open;
        self.open = self.trigger.visible(self.matches.len());
        tracing::debug!(
            target: "typeahead::engine",
            matches = self.matches.len(),
            open = self.open,
            "search triggered"
        );
        if self.open && !was_open {
            self.suggestions_changed
                .emit((self.matches.clone(), self.highlight.index()));
        }
    }

    /// Explicitly close the suggestion list.
    ///
    /// In manual mode this also disarms the trigger, so the list stays
    /// hidden until the next activation.
    pub fn close(&mut self) {
        self.trigger.disarm();
        self.highlight.reset();
        if self.open {
            self.open = false;
            self.closed.emit(());
        }
    }

    // =========================================================================
    // Selected items (multi-select)
    // =========================================================================

    /// Remove a previously committed candidate from the selected items.
    ///
    /// Returns `true` if it was present. The removal UI itself is the
    /// host's concern; the engine only maintains the list.
    pub fn remove_selected(&mut self, candidate: &T) -> bool {
        self.selection.remove(candidate)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Recompute the match list and visibility after a query mutation.
    ///
    /// The suggestion list is replaced wholesale, which always resets the
    /// highlight.
    fn recompute(&mut self) {
        let query_len = self.query.chars().count();
        self.matches = if query_len >= self.config.min_query_len {
            self.matcher.filter(&self.query, &self.candidates)
        } else {
            Vec::new()
        };
        self.highlight.reset();

        let was_open = self.open;
        self.open = self.trigger.visible(self.matches.len());
        tracing::trace!(
            target: "typeahead::engine",
            query = %self.query,
            matches = self.matches.len(),
            open = self.open,
            "recomputed suggestions"
        );

        if self.open {
            self.suggestions_changed.emit((self.matches.clone(), None));
        } else if was_open {
            self.closed.emit(());
        }
    }

    /// Apply a commit: update the selection, clear the query, hide the list.
    fn finish_commit(&mut self, candidate: T) {
        let outcome = self.selection.commit(&candidate);

        self.query.clear();
        self.matches.clear();
        self.highlight.reset();
        self.trigger.disarm();
        let was_open = self.open;
        self.open = false;

        tracing::debug!(
            target: "typeahead::engine",
            label = candidate.label(),
            outcome = ?outcome,
            "committed suggestion"
        );

        if outcome != CommitOutcome::AlreadySelected {
            self.selected.emit(candidate);
        }
        self.query_changed.emit(String::new());
        if was_open {
            self.closed.emit(());
        }
    }
}

impl<T: Candidate + Send + 'static> std::fmt::Debug for Autocomplete<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("trigger_mode", &self.trigger.mode())
            .field("selection_mode", &self.selection.mode())
            .field("query", &self.query)
            .field("open", &self.open)
            .field("match_count", &self.matches.len())
            .field("highlight", &self.highlight.index())
            .finish()
    }
}
