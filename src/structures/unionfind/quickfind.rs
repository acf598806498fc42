//! Quick-find strategies backed by per-set linked lists.
//!
//! Every set is a singly linked list of its members plus one shared root record
//! holding the list's head, tail and size. Each member points at its root, so
//! `find` is a single lookup, while `union` has to repoint every member of the
//! list that gets absorbed.

use crate::structures::unionfind::{SetId, UnionFind};

#[derive(Debug, Clone)]
struct Member<T> {
    data: T,
    root: usize,
    next: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Root {
    head: usize,
    tail: usize,
    size: usize,
}

/// Linked-list storage shared by [`QuickFind`] and [`QuickFindSize`].
///
/// Root records are indexed by the member that created them; the record of an
/// absorbed list stays behind unreferenced.
#[derive(Debug, Clone)]
struct LinkedSets<T> {
    members: Vec<Member<T>>,
    roots: Vec<Root>,
    sets: usize,
}

impl<T> LinkedSets<T> {
    fn new() -> Self {
        LinkedSets {
            members: Vec::new(),
            roots: Vec::new(),
            sets: 0,
        }
    }

    fn make_set(&mut self, data: T) -> SetId {
        let id = self.members.len();
        self.members.push(Member {
            data,
            root: id,
            next: None,
        });
        self.roots.push(Root {
            head: id,
            tail: id,
            size: 1,
        });
        self.sets += 1;
        SetId(id)
    }

    fn root_of(&self, id: SetId) -> usize {
        self.members[id.0].root
    }

    fn find(&self, id: SetId) -> SetId {
        SetId(self.roots[self.root_of(id)].head)
    }

    /// Returns the roots of `a` and `b` if both are representatives of different sets.
    fn mergeable_roots(&self, a: SetId, b: SetId) -> Option<(usize, usize)> {
        if a == b || !self.is_representative(a) || !self.is_representative(b) {
            return None;
        }
        Some((self.root_of(a), self.root_of(b)))
    }

    fn is_representative(&self, id: SetId) -> bool {
        id.0 < self.members.len() && self.find(id) == id
    }

    fn size(&self, root: usize) -> usize {
        self.roots[root].size
    }

    /// Appends the list of `absorbed` to the list of `kept`, relabeling its members.
    fn append(&mut self, kept: usize, absorbed: usize) {
        let Root { head, tail, size } = self.roots[absorbed];

        let mut cursor = Some(head);
        while let Some(member) = cursor {
            self.members[member].root = kept;
            cursor = self.members[member].next;
        }

        let kept_tail = self.roots[kept].tail;
        self.members[kept_tail].next = Some(head);
        self.roots[kept].tail = tail;
        self.roots[kept].size += size;
        self.sets -= 1;
    }

    /// Iterates the members of the set containing `id`, representative first.
    fn members_of(&self, id: SetId) -> impl Iterator<Item = SetId> + '_ {
        let head = self.roots[self.root_of(id)].head;
        std::iter::successors(Some(head), move |&member| self.members[member].next).map(SetId)
    }
}

/// Quick-find: constant-time `find`, `union` relabels the second set.
///
/// The representative of the merged set is always `a`, the first argument of
/// [`union`](UnionFind::union).
#[derive(Debug, Clone)]
pub struct QuickFind<T> {
    inner: LinkedSets<T>,
}

impl<T> QuickFind<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        QuickFind {
            inner: LinkedSets::new(),
        }
    }

    /// Iterates the members of the set containing `id`, representative first.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this structure.
    pub fn members(&self, id: SetId) -> impl Iterator<Item = SetId> + '_ {
        self.inner.members_of(id)
    }
}

impl<T> Default for QuickFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T> for QuickFind<T> {
    fn make_set(&mut self, data: T) -> SetId {
        self.inner.make_set(data)
    }

    fn find(&self, id: SetId) -> SetId {
        self.inner.find(id)
    }

    fn union(&mut self, a: SetId, b: SetId) -> bool {
        let Some((kept, absorbed)) = self.inner.mergeable_roots(a, b) else {
            return false;
        };
        self.inner.append(kept, absorbed);
        true
    }

    fn data(&self, id: SetId) -> Option<&T> {
        self.inner.members.get(id.0).map(|member| &member.data)
    }

    fn len(&self) -> usize {
        self.inner.members.len()
    }

    fn set_count(&self) -> usize {
        self.inner.sets
    }
}

/// Quick-find with the size heuristic: `union` always relabels the smaller set.
///
/// Every relabeled element at least doubles the size of its set, so each element
/// is relabeled at most `log2 n` times. The representative of the merged set is
/// the representative of the larger input, `a` on ties.
#[derive(Debug, Clone)]
pub struct QuickFindSize<T> {
    inner: LinkedSets<T>,
}

impl<T> QuickFindSize<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        QuickFindSize {
            inner: LinkedSets::new(),
        }
    }

    /// Returns the number of elements in the set containing `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this structure.
    #[must_use]
    pub fn set_size(&self, id: SetId) -> usize {
        self.inner.size(self.inner.root_of(id))
    }

    /// Iterates the members of the set containing `id`, representative first.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this structure.
    pub fn members(&self, id: SetId) -> impl Iterator<Item = SetId> + '_ {
        self.inner.members_of(id)
    }
}

impl<T> Default for QuickFindSize<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T> for QuickFindSize<T> {
    fn make_set(&mut self, data: T) -> SetId {
        self.inner.make_set(data)
    }

    fn find(&self, id: SetId) -> SetId {
        self.inner.find(id)
    }

    fn union(&mut self, a: SetId, b: SetId) -> bool {
        let Some((root_a, root_b)) = self.inner.mergeable_roots(a, b) else {
            return false;
        };
        if self.inner.size(root_a) >= self.inner.size(root_b) {
            self.inner.append(root_a, root_b);
        } else {
            self.inner.append(root_b, root_a);
        }
        true
    }

    fn data(&self, id: SetId) -> Option<&T> {
        self.inner.members.get(id.0).map(|member| &member.data)
    }

    fn len(&self) -> usize {
        self.inner.members.len()
    }

    fn set_count(&self) -> usize {
        self.inner.sets
    }
}
