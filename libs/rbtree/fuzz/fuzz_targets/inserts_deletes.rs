#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rbtree::{RBTree, RemoveError};

#[derive(Debug, Arbitrary)]
enum Action {
    Insert(u8),
    Remove(u8),
    Contains(u8),
    Clear,
}

fuzz_target!(|actions: Vec<Action>| {
    let mut tree: RBTree<u8> = RBTree::new();
    let mut model: BTreeSet<u8> = BTreeSet::new();

    for action in actions {
        match action {
            Action::Insert(key) => {
                assert_eq!(tree.insert(key), model.insert(key));
            }
            Action::Remove(key) => {
                let expected = model.take(&key).ok_or(RemoveError::NotFound);
                assert_eq!(tree.remove(&key), expected);
            }
            Action::Contains(key) => {
                assert_eq!(tree.contains(&key), model.contains(&key));
            }
            Action::Clear => {
                tree.clear();
                model.clear();
            }
        }

        tree.assert_valid();
        assert_eq!(tree.len(), model.len());
    }

    assert!(tree.iter().eq(model.iter()));
});
