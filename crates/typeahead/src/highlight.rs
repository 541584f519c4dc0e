//! Keyboard highlight state for the suggestion list.
//!
//! The highlight is either on no entry or on exactly one valid index of the
//! current suggestion list. Directional input moves it; replacing the list
//! resets it. Moves clamp at both ends rather than wrapping: "down" at the
//! last entry and "up" at the first entry leave the highlight where it is.

/// The currently keyboard-highlighted (not yet committed) suggestion.
///
/// Wraps `Option<usize>`: `None` means no entry is highlighted, `Some(i)`
/// means entry `i` of the current suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight(Option<usize>);

impl Highlight {
    /// No entry highlighted.
    pub const NONE: Self = Self(None);

    /// The highlighted index, if any.
    pub fn index(&self) -> Option<usize> {
        self.0
    }

    /// Clear the highlight. Called whenever the suggestion list is replaced.
    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Move the highlight down within a list of `len` entries.
    ///
    /// From no highlight this selects the first entry; at the last entry it
    /// stays put. With an empty list nothing is ever highlighted.
    pub fn move_down(&mut self, len: usize) {
        let next = self.0.map_or(0, |i| i + 1);
        if next < len {
            self.0 = Some(next);
        }
    }

    /// Move the highlight up.
    ///
    /// At the first entry or with no highlight this does nothing; the index
    /// never goes negative.
    pub fn move_up(&mut self) {
        if let Some(i) = self.0 {
            if i != 0 {
                self.0 = Some(i - 1);
            }
        }
    }
}
