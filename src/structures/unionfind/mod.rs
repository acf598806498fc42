//! Disjoint-set (union-find) structures.
//!
//! Three strategies implement the [`UnionFind`] contract:
//!
//! | Strategy | `find` | `union` |
//! |----------|--------|---------|
//! | [`QuickFind`] | O(1) | O(size of the absorbed set) |
//! | [`QuickFindSize`] | O(1) | O(size of the smaller set), O(n log n) total |
//! | [`QuickUnionRank`] | O(log n) | O(1) on representatives |
//!
//! Algorithms that need a union-find are generic over `U: UnionFind<T> + Default`,
//! so the strategy is chosen at compile time. [`DisjointSets`] wraps the three
//! behind a [`UnionFindKind`] for callers that pick one at runtime.
//!
//! # Examples
//!
//! ```rust
//! use graphkit::structures::{QuickUnionRank, UnionFind};
//!
//! let mut sets = QuickUnionRank::new();
//! let a = sets.make_set('a');
//! let b = sets.make_set('b');
//! let c = sets.make_set('c');
//!
//! assert!(sets.union(a, b));
//! assert!(sets.same_set(a, b));
//! assert!(!sets.same_set(a, c));
//! assert_eq!(sets.set_count(), 2);
//! ```

mod quickfind;
mod quickunion;

use std::fmt;

use strum::{Display, EnumIter};

pub use quickfind::{QuickFind, QuickFindSize};
pub use quickunion::QuickUnionRank;

/// Handle to an element of a union-find structure.
///
/// Handles are dense indices in creation order and are only meaningful for the
/// structure whose [`make_set`](UnionFind::make_set) produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetId(pub(crate) usize);

impl SetId {
    /// Returns the raw index of this handle.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// The union-find contract shared by every strategy.
///
/// Each element belongs to exactly one set. A set is identified by its
/// representative, the element that [`find`](UnionFind::find) returns for every
/// member of the set.
pub trait UnionFind<T> {
    /// Creates a singleton set holding `data` and returns its handle.
    fn make_set(&mut self, data: T) -> SetId;

    /// Returns the representative of the set containing `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this structure.
    fn find(&self, id: SetId) -> SetId;

    /// Merges the sets represented by `a` and `b`.
    ///
    /// Both arguments must be representatives of different sets; otherwise the
    /// call is a no-op. Returns `true` if the sets were merged.
    fn union(&mut self, a: SetId, b: SetId) -> bool;

    /// Returns the payload of element `id`.
    fn data(&self, id: SetId) -> Option<&T>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the number of disjoint sets.
    fn set_count(&self) -> usize;

    /// Returns the representative of the set containing `id`, or `None` if `id`
    /// was not produced by this structure.
    fn try_find(&self, id: SetId) -> Option<SetId> {
        (id.0 < self.len()).then(|| self.find(id))
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    fn same_set(&self, a: SetId, b: SetId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns `true` if `id` is the representative of its set.
    fn is_representative(&self, id: SetId) -> bool {
        self.try_find(id) == Some(id)
    }
}

/// Runtime selector for a union-find strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum UnionFindKind {
    /// [`QuickFind`]
    #[strum(serialize = "quick-find")]
    QuickFind,
    /// [`QuickFindSize`]
    #[strum(serialize = "quick-find-size")]
    QuickFindSize,
    /// [`QuickUnionRank`]
    #[default]
    #[strum(serialize = "quick-union-rank")]
    QuickUnionRank,
}

/// A union-find whose strategy is chosen at runtime.
#[derive(Debug, Clone)]
pub enum DisjointSets<T> {
    /// Backed by [`QuickFind`].
    QuickFind(QuickFind<T>),
    /// Backed by [`QuickFindSize`].
    QuickFindSize(QuickFindSize<T>),
    /// Backed by [`QuickUnionRank`].
    QuickUnionRank(QuickUnionRank<T>),
}

impl<T> DisjointSets<T> {
    /// Creates an empty structure using the strategy `kind`.
    #[must_use]
    pub fn new(kind: UnionFindKind) -> Self {
        match kind {
            UnionFindKind::QuickFind => DisjointSets::QuickFind(QuickFind::new()),
            UnionFindKind::QuickFindSize => DisjointSets::QuickFindSize(QuickFindSize::new()),
            UnionFindKind::QuickUnionRank => DisjointSets::QuickUnionRank(QuickUnionRank::new()),
        }
    }

    /// Returns the strategy backing this structure.
    #[must_use]
    pub fn kind(&self) -> UnionFindKind {
        match self {
            DisjointSets::QuickFind(_) => UnionFindKind::QuickFind,
            DisjointSets::QuickFindSize(_) => UnionFindKind::QuickFindSize,
            DisjointSets::QuickUnionRank(_) => UnionFindKind::QuickUnionRank,
        }
    }
}

impl<T> Default for DisjointSets<T> {
    fn default() -> Self {
        Self::new(UnionFindKind::default())
    }
}

macro_rules! dispatch {
    ($self:expr, $sets:ident => $body:expr) => {
        match $self {
            DisjointSets::QuickFind($sets) => $body,
            DisjointSets::QuickFindSize($sets) => $body,
            DisjointSets::QuickUnionRank($sets) => $body,
        }
    };
}

impl<T> UnionFind<T> for DisjointSets<T> {
    fn make_set(&mut self, data: T) -> SetId {
        dispatch!(self, sets => sets.make_set(data))
    }

    fn find(&self, id: SetId) -> SetId {
        dispatch!(self, sets => sets.find(id))
    }

    fn union(&mut self, a: SetId, b: SetId) -> bool {
        dispatch!(self, sets => sets.union(a, b))
    }

    fn data(&self, id: SetId) -> Option<&T> {
        dispatch!(self, sets => sets.data(id))
    }

    fn len(&self) -> usize {
        dispatch!(self, sets => sets.len())
    }

    fn set_count(&self) -> usize {
        dispatch!(self, sets => sets.set_count())
    }
}
