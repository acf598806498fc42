#![no_main]

use graphkit::structures::{DisjointSets, SetId, UnionFind, UnionFindKind};
use libfuzzer_sys::fuzz_target;

const KINDS: [UnionFindKind; 3] = [
    UnionFindKind::QuickFind,
    UnionFindKind::QuickFindSize,
    UnionFindKind::QuickUnionRank,
];

// Replays the same union sequence on every strategy against a label model
fuzz_target!(|data: &[u8]| {
    let Some((&count, ops)) = data.split_first() else {
        return;
    };
    let count = usize::from(count % 64) + 1;

    for kind in KINDS {
        let mut sets = DisjointSets::new(kind);
        let ids: Vec<SetId> = (0..count).map(|i| sets.make_set(i)).collect();
        let mut label: Vec<usize> = (0..count).collect();

        for pair in ops.chunks_exact(2) {
            let (x, y) = (usize::from(pair[0]) % count, usize::from(pair[1]) % count);
            let (root_x, root_y) = (sets.find(ids[x]), sets.find(ids[y]));
            let merged = sets.union(root_x, root_y);
            assert_eq!(merged, label[x] != label[y]);

            let (from, to) = (label[y], label[x]);
            for l in label.iter_mut().filter(|l| **l == from) {
                *l = to;
            }
            assert!(sets.same_set(ids[x], ids[y]));
        }

        for a in 0..count {
            for b in 0..count {
                assert_eq!(sets.same_set(ids[a], ids[b]), label[a] == label[b]);
            }
        }
        let mut distinct = label.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(sets.set_count(), distinct.len());
    }
});
