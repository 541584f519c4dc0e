//! The engine's event vocabulary and the keyboard adapter.
//!
//! The widget controller consumes [`InputEvent`]s; how those events are
//! produced is the host's business. For keyboard-driven hosts,
//! [`interpret_key`] translates a platform-independent [`Key`] into either
//! an engine event or a pass-through: character, backspace, arrow, and
//! enter keys drive the engine, everything else is left to the native input
//! behavior (cursor movement, tabbing, shortcuts).

use crate::candidate::Candidate;

/// One input event consumed by the widget controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A character was typed into the bound input.
    Type(char),
    /// The last grapheme was deleted from the bound input.
    Backspace,
    /// Move the highlight down.
    MoveDown,
    /// Move the highlight up.
    MoveUp,
    /// Commit the highlighted suggestion, if any.
    Commit,
    /// Explicit trigger activation (manual mode only).
    TriggerSearch,
    /// A suggestion entry was clicked.
    ClickSuggestion(usize),
    /// Explicitly close the suggestion list.
    Close,
}

/// A platform-independent key, as delivered by the host's input layer.
///
/// This is deliberately a small vocabulary: the engine only distinguishes
/// the keys it reacts to, plus the common editing/navigation keys a text
/// input sees, so adapters have somewhere to map them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Character(char),
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

/// What the engine wants done with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The key maps to an engine event.
    Engine(InputEvent),
    /// The key is not the engine's business; let the native input handle it.
    PassThrough,
}

/// Translate a key into the engine's event vocabulary.
///
/// Pure function; the adapter holds no state.
pub fn interpret_key(key: Key) -> KeyDisposition {
    match key {
        Key::Character(c) => KeyDisposition::Engine(InputEvent::Type(c)),
        Key::Backspace => KeyDisposition::Engine(InputEvent::Backspace),
        Key::ArrowDown => KeyDisposition::Engine(InputEvent::MoveDown),
        Key::ArrowUp => KeyDisposition::Engine(InputEvent::MoveUp),
        Key::Enter => KeyDisposition::Engine(InputEvent::Commit),
        Key::Delete
        | Key::Tab
        | Key::Escape
        | Key::ArrowLeft
        | Key::ArrowRight
        | Key::Home
        | Key::End => KeyDisposition::PassThrough,
    }
}

/// One entry of the rendered suggestion list.
///
/// `highlighted` is set on at most one entry of a snapshot; it is the
/// host's cue for highlight styling.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionEntry<T> {
    /// The suggested candidate.
    pub candidate: T,
    /// Whether this entry is the keyboard-highlighted one.
    pub highlighted: bool,
}

/// A consistent view of the widget for the host to render.
///
/// Snapshots are taken atomically between input events: the query, open
/// flag, visible entries, and selected items always agree with each other.
/// In particular `entries` is empty whenever `open` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Current text content of the bound input field.
    pub query: String,
    /// Whether the suggestion list is visible.
    pub open: bool,
    /// The visible suggestion entries, in match order.
    pub entries: Vec<SuggestionEntry<T>>,
    /// Committed candidates (multi-select mode only; empty otherwise).
    pub selected: Vec<T>,
}

impl<T: Candidate> Snapshot<T> {
    /// The highlighted candidate, if any entry carries the highlight.
    pub fn highlighted(&self) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.highlighted)
            .map(|e| &e.candidate)
    }
}
