//! Fuzz target for record parsing and decoding.
//!
//! Arbitrary input must never panic: parsing rejects malformed records with
//! an error, and both decoders handle any validated gap sequence.

#![no_main]

use libfuzzer_sys::fuzz_target;

use bd_core::decode::{decode_trellis, decode_viterbi};
use bd_core::input;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(timestamps) = input::parse_record(line) else {
        return;
    };
    let Ok(gaps) = input::gaps_from_timestamps(&timestamps) else {
        return;
    };
    // Keep the trellis small enough to decode quickly; extreme gap ratios
    // blow up the level count, not the decoder's correctness.
    if gaps.len() > 64 || gaps.iter().any(|g| !(1e-6..=1e6).contains(g)) {
        return;
    }
    let viterbi = decode_viterbi(&gaps, 3.0, 0.5).unwrap();
    let trellis = decode_trellis(&gaps, 3.0, 0.5).unwrap();
    assert_eq!(viterbi.states, trellis.states);
});
