use std::fmt;

use crate::scalar::Scalar;

/// Owning link to the next node in a chain.
pub(crate) type Link = Option<Box<Node>>;

/// One element of a [`SortedLinkedList`](crate::SortedLinkedList) chain.
///
/// The value is fixed at creation. The successor link is owned by the node and
/// only the owning list rewires it.
pub struct Node {
    value: Scalar,
    next: Link,
}

impl Node {
    pub fn new(value: impl Into<Scalar>) -> Self {
        Self {
            value: value.into(),
            next: None,
        }
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Link) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn take_next(&mut self) -> Link {
        self.next.take()
    }

    #[inline]
    pub(crate) fn next_link_mut(&mut self) -> &mut Link {
        &mut self.next
    }
}

/// Shows the successor's value only, so formatting never walks the chain.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("next", &self.next().map(Node::value))
            .finish()
    }
}

/// Unlinks the tail one node at a time so that dropping a long chain does not
/// recurse once per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
