#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Quadratic suffix check; keep inputs small enough to stay fast
    if data.len() > 512 {
        return;
    }

    let tree = sfx::tree::SuffixTree::from_bytes(data);

    // Completeness: every suffix must be present
    for k in 0..=data.len() {
        assert!(tree.contains(&data[k..]));
    }

    // Leaf count: one leaf per suffix, terminator included
    assert_eq!(tree.leaf_count(), data.len() + 1);
});
