// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rbtree::RBTree;

fuzz_target!(|inserts: Vec<u16>| {
    let mut tree: RBTree<u16> = RBTree::new();

    for i in inserts {
        let was_present = tree.contains(&i);
        assert_eq!(tree.insert(i), !was_present);
        tree.assert_valid();
    }

    assert!(tree.iter().is_sorted());
});
