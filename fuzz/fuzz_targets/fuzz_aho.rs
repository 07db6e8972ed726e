#![no_main]

use libfuzzer_sys::fuzz_target;
use sfx::utils::AhoCorasick;

fuzz_target!(|data: &[u8]| {
    // Split the input into a pattern set and a haystack
    let Some(split) = data.first().map(|&b| b as usize) else {
        return;
    };
    let rest = &data[1..];
    if split >= rest.len() {
        return;
    }
    let (patterns_raw, haystack) = rest.split_at(split);
    let patterns: Vec<&[u8]> = patterns_raw.split(|&b| b == b',').collect();

    let matcher = AhoCorasick::new(&patterns);
    for m in matcher.find(haystack) {
        // every reported span must actually equal its pattern
        assert_eq!(&haystack[m.start..m.end], patterns[m.pattern]);
    }
});
