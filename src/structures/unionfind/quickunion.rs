//! Quick-union with the rank heuristic.

use crate::structures::unionfind::{SetId, UnionFind};

#[derive(Debug, Clone)]
struct TreeNode<T> {
    data: T,
    parent: usize,
    rank: u32,
}

/// Quick-union: sets are trees of parent links, rooted at the representative.
///
/// [`union`](UnionFind::union) hangs the root of lower rank below the root of
/// higher rank and only grows the rank when both are equal, which bounds every
/// tree's height by `log2 n`. There is no path compression, so `find` takes
/// `&self` and never mutates the forest.
#[derive(Debug, Clone)]
pub struct QuickUnionRank<T> {
    nodes: Vec<TreeNode<T>>,
    sets: usize,
}

impl<T> QuickUnionRank<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        QuickUnionRank {
            nodes: Vec::new(),
            sets: 0,
        }
    }

    /// Returns the rank of `id`. Only meaningful for representatives.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this structure.
    #[must_use]
    pub fn rank(&self, id: SetId) -> u32 {
        self.nodes[id.0].rank
    }

    /// Returns the number of parent links between `id` and its representative.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this structure.
    #[must_use]
    pub fn depth(&self, id: SetId) -> usize {
        let mut depth = 0;
        let mut current = id.0;
        while self.nodes[current].parent != current {
            current = self.nodes[current].parent;
            depth += 1;
        }
        depth
    }
}

impl<T> Default for QuickUnionRank<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T> for QuickUnionRank<T> {
    fn make_set(&mut self, data: T) -> SetId {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            data,
            parent: id,
            rank: 0,
        });
        self.sets += 1;
        SetId(id)
    }

    fn find(&self, id: SetId) -> SetId {
        let mut current = id.0;
        while self.nodes[current].parent != current {
            current = self.nodes[current].parent;
        }
        SetId(current)
    }

    fn union(&mut self, a: SetId, b: SetId) -> bool {
        if a == b || !self.is_representative(a) || !self.is_representative(b) {
            return false;
        }

        let (rank_a, rank_b) = (self.nodes[a.0].rank, self.nodes[b.0].rank);
        if rank_a < rank_b {
            self.nodes[a.0].parent = b.0;
        } else {
            self.nodes[b.0].parent = a.0;
            if rank_a == rank_b {
                self.nodes[a.0].rank += 1;
            }
        }
        self.sets -= 1;
        true
    }

    fn data(&self, id: SetId) -> Option<&T> {
        self.nodes.get(id.0).map(|node| &node.data)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn set_count(&self) -> usize {
        self.sets
    }
}
