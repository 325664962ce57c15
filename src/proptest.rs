//! Proptest support for xmlpair
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module generates arbitrary packed qualified
//! names and pairs.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xmlpair = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::{qname, Pair};

const NCNAME: &str = "[a-zA-Z_][a-zA-Z0-9_.\u{00C0}-\u{00FF}-]{0,8}";

/// An arbitrary prefix, the empty string meaning no prefix.
pub fn arb_prefix() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), NCNAME]
}

/// An arbitrary local name.
pub fn arb_local_name() -> impl Strategy<Value = String> {
    NCNAME.prop_map(|s| s.to_string())
}

/// An arbitrary packed qualified name buffer.
pub fn arb_chars() -> impl Strategy<Value = Box<[char]>> {
    (arb_prefix(), arb_local_name()).prop_map(|(prefix, local_name)| {
        // generated prefixes are far below the packing limit
        qname::encode(&prefix, &local_name).unwrap()
    })
}

/// An arbitrary pair without links.
pub fn arb_pair() -> impl Strategy<Value = Pair> {
    (arb_chars(), any::<i32>(), any::<i32>()).prop_map(|(chars, num, id)| {
        let mut pair = Pair::new(chars).unwrap();
        pair.num = num;
        pair.id = id;
        pair
    })
}
