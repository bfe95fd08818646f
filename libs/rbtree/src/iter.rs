use core::iter::FusedIterator;

use crate::RBTree;
use crate::node::Link;

/// An iterator over the keys of a [`RBTree`] in ascending order.
///
/// Created by [`RBTree::iter`].
pub struct Iter<'a, K> {
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) len: usize,
    pub(crate) tree: &'a RBTree<K>,
}

impl<'a, K> Clone for Iter<'a, K> {
    #[inline]
    fn clone(&self) -> Iter<'a, K> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            tree: self.tree,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.head?;

        if Some(head) == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.head = self.tree.pool.next(head);
        }
        self.len -= 1;

        Some(&self.tree.pool.get(head).key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tail = self.tail?;

        if Some(tail) == self.head {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = self.tree.pool.prev(tail);
        }
        self.len -= 1;

        Some(&self.tree.pool.get(tail).key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use crate::RBTree;

    #[test]
    fn empty() {
        let tree = RBTree::<u32>::new();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn ascending_and_descending() {
        let tree: RBTree<u32> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();

        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            [1, 3, 4, 6, 7, 8, 10, 13, 14]
        );
        assert_eq!(
            tree.iter().rev().copied().collect::<Vec<_>>(),
            [14, 13, 10, 8, 7, 6, 4, 3, 1]
        );
    }

    #[test]
    fn both_ends_meet_in_the_middle() {
        let tree: RBTree<u32> = (0..5).collect();
        let mut iter = tree.iter();

        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn restartable() {
        let tree: RBTree<u32> = (0..100).rev().collect();
        let first = tree.iter();
        let second = first.clone();

        assert_eq!(first.count(), 100);
        assert!(second.copied().eq(0..100));
        assert!((&tree).into_iter().copied().eq(0..100));
    }
}
