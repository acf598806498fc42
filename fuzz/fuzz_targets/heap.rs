#![no_main]

use graphkit::structures::{DHeap, HeapHandle};
use libfuzzer_sys::fuzz_target;

// Drives a heap with an operation sequence and checks it against a plain list
fuzz_target!(|data: &[u8]| {
    let Some((&arity, ops)) = data.split_first() else {
        return;
    };
    let Ok(mut heap) = DHeap::with_arity(2 + usize::from(arity % 7)) else {
        return;
    };
    let mut live: Vec<(HeapHandle, u8)> = Vec::new();

    for op in ops.chunks_exact(3) {
        let (code, pick, key) = (op[0] % 5, usize::from(op[1]), op[2]);
        match code {
            0 => live.push((heap.insert(key, ()), key)),
            1 => {
                let expected = live.iter().map(|&(_, k)| k).min();
                let removed = heap.delete_min().map(|(k, ())| k);
                assert_eq!(removed, expected);
                if let Some(k) = removed {
                    let at = live.iter().position(|&(_, l)| l == k).unwrap();
                    let (handle, _) = live.swap_remove(at);
                    // Equal keys may leave in any order, so re-sync on the handle
                    if heap.contains(handle) {
                        let other = live.iter().position(|&(h, _)| !heap.contains(h)).unwrap();
                        live[other].0 = handle;
                    }
                }
            }
            2 | 3 if !live.is_empty() => {
                let at = pick % live.len();
                let (handle, old) = live[at];
                let changed = if code == 2 {
                    heap.decrease_key(handle, key)
                } else {
                    heap.increase_key(handle, key)
                };
                assert_eq!(changed, if code == 2 { key < old } else { key > old });
                if changed {
                    live[at].1 = key;
                }
            }
            4 if !live.is_empty() => {
                let (handle, key) = live.swap_remove(pick % live.len());
                assert_eq!(heap.delete(handle).map(|(k, ())| k), Some(key));
                assert!(!heap.contains(handle));
            }
            _ => {}
        }
        assert!(heap.check_invariants());
        assert_eq!(heap.len(), live.len());
    }
});
