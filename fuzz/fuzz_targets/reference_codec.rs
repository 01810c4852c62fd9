// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the `href` reference codec.
//!
//! Decoding arbitrary attribute values must never panic, and anything that
//! decodes must re-encode to something that decodes the same way.

#![no_main]

use codelink::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    // INVARIANT 1: decode is total
    let refs = decode(raw);

    // INVARIANT 2: never more references than segments
    let segments = if raw.is_empty() { 0 } else { raw.split(',').count() };
    assert!(refs.len() <= segments);

    // INVARIANT 3: the decoded list is a fixed point of encode/decode
    let href = encode(&refs);
    assert_eq!(decode(&href), refs, "re-encoded href {href:?} decodes differently");
});
