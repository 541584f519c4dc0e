//! The candidate abstraction: values that can be suggested and selected.
//!
//! The engine is generic over the suggestion type. Anything with a display
//! label and value identity can be a [`Candidate`]; plain strings work out
//! of the box, and [`Item`] is a ready-made type for candidates whose
//! identity is separate from their label.

/// A selectable suggestion value with a display label.
///
/// The candidate set is supplied once at widget construction and treated
/// as read-only by the engine. Equality is the candidate's identity: it
/// decides idempotent multi-select commits and explicit removal.
pub trait Candidate: Clone + PartialEq {
    /// The text shown in the suggestion list and matched against the query.
    fn label(&self) -> &str;
}

impl Candidate for String {
    fn label(&self) -> &str {
        self
    }
}

impl Candidate for &'static str {
    fn label(&self) -> &str {
        self
    }
}

/// A candidate with an opaque identity distinct from its display label.
///
/// Two items are equal when their ids are equal, regardless of label.
#[derive(Debug, Clone, Eq)]
pub struct Item {
    id: u64,
    label: String,
}

impl Item {
    /// Create a new item with the given identity and display label.
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// The opaque identity of this item.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Candidate for Item {
    fn label(&self) -> &str {
        &self.label
    }
}
