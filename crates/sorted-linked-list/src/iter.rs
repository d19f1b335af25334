use std::iter::FusedIterator;

use crate::node::Node;
use crate::scalar::Scalar;

/// Head-to-tail iterator over the values of a
/// [`SortedLinkedList`](crate::SortedLinkedList).
///
/// Created by [`SortedLinkedList::iter`](crate::SortedLinkedList::iter).
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    curr: Option<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: Option<&'a Node>) -> Self {
        Self { curr: head }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Scalar;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        self.curr = node.next();
        Some(node.value())
    }
}

impl FusedIterator for Iter<'_> {}
