//! Handler Chain
//!
//! An ordered list of `(interest set, action)` entries. An entry with an empty
//! interest set is a default handler. Selection is first-match-wins in
//! registration order; when no interest set contains the kind, the
//! first-registered default is chosen.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use exc_prelude::prelude::{Exception, ExceptionKind};
use std::fmt;

/// Set of kinds a handler is interested in. Empty means "default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestSet {
    kinds: Vec<ExceptionKind>,
}

impl InterestSet {
    /// Build a set from kinds, dropping duplicates and keeping first-seen order.
    #[must_use]
    pub fn of<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ExceptionKind>,
    {
        kinds.into_iter().map(Into::into).collect()
    }

    /// The empty set, which marks a default handler.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether `kind` is a member.
    #[must_use]
    pub fn contains(&self, kind: &ExceptionKind) -> bool {
        self.kinds.contains(kind)
    }

    /// Whether this set marks a default handler.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Member kinds in insertion order.
    #[must_use]
    pub fn kinds(&self) -> &[ExceptionKind] {
        &self.kinds
    }

    /// Number of member kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FromIterator<ExceptionKind> for InterestSet {
    fn from_iter<I: IntoIterator<Item = ExceptionKind>>(iter: I) -> Self {
        let mut kinds: Vec<ExceptionKind> = Vec::new();
        for kind in iter {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Self { kinds }
    }
}

impl From<ExceptionKind> for InterestSet {
    fn from(kind: ExceptionKind) -> Self {
        Self { kinds: vec![kind] }
    }
}

impl<const N: usize> From<[ExceptionKind; N]> for InterestSet {
    fn from(kinds: [ExceptionKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<Vec<ExceptionKind>> for InterestSet {
    fn from(kinds: Vec<ExceptionKind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<Option<InterestSet>> for InterestSet {
    fn from(set: Option<InterestSet>) -> Self {
        set.unwrap_or_default()
    }
}

/// Build an [`InterestSet`] literal.
///
/// ```rust
/// use exc_core::interest_set;
/// use exc_prelude::prelude::ExceptionKind;
///
/// let set = interest_set![ExceptionKind::REFERENCE, ExceptionKind::INDEX];
/// assert!(set.contains(&ExceptionKind::INDEX));
/// assert!(interest_set![].is_default());
/// ```
#[macro_export]
macro_rules! interest_set {
    () => {
        $crate::handler::InterestSet::any()
    };
    ($($kind:expr),+ $(,)?) => {
        $crate::handler::InterestSet::of([$($kind),+])
    };
}

/// Handler action. Receives the captured exception; runs at most once.
pub type HandlerAction<'a> = Box<dyn FnOnce(&Exception) + 'a>;

/// One registered handler.
pub struct HandlerEntry<'a> {
    interest: InterestSet,
    action: HandlerAction<'a>,
}

impl<'a> HandlerEntry<'a> {
    /// Create an entry.
    pub fn new(interest: InterestSet, action: impl FnOnce(&Exception) + 'a) -> Self {
        Self { interest, action: Box::new(action) }
    }

    /// Interest set of this entry.
    #[must_use]
    pub fn interest(&self) -> &InterestSet {
        &self.interest
    }

    /// Whether this is a default entry.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.interest.is_default()
    }

    /// Invoke the action with `exception`.
    pub fn invoke(self, exception: &Exception) {
        (self.action)(exception);
    }
}

impl fmt::Debug for HandlerEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry").field("interest", &self.interest).finish_non_exhaustive()
    }
}

/// Why an entry was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The entry's interest set contains the kind.
    Interest,
    /// No interest set matched; the entry is the first default.
    Default,
}

/// Result of a chain lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Registration index of the selected entry.
    pub index: usize,
    /// How it was matched.
    pub matched: MatchKind,
}

/// Ordered handler entries.
#[derive(Debug, Default)]
pub struct HandlerChain<'a> {
    entries: Vec<HandlerEntry<'a>>,
}

impl<'a> HandlerChain<'a> {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HandlerEntry<'a>) {
        self.entries.push(entry);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of default entries.
    #[must_use]
    pub fn default_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_default()).count()
    }

    /// Find the entry that handles `kind`.
    ///
    /// The first entry whose interest set contains `kind` wins; later entries,
    /// matching or default, are never considered. Failing that, the
    /// first-registered default entry is selected.
    #[must_use]
    pub fn select(&self, kind: &ExceptionKind) -> Option<Selection> {
        let mut first_default = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.is_default() {
                first_default.get_or_insert(index);
            } else if entry.interest.contains(kind) {
                return Some(Selection { index, matched: MatchKind::Interest });
            }
        }
        first_default.map(|index| Selection { index, matched: MatchKind::Default })
    }

    /// Consume the chain, returning the selected entry for `kind`.
    #[must_use]
    pub fn into_selected(self, kind: &ExceptionKind) -> Option<(Selection, HandlerEntry<'a>)> {
        let selection = self.select(kind)?;
        self.entries.into_iter().nth(selection.index).map(|entry| (selection, entry))
    }
}
