use std::fmt;

use tracing::{debug, trace};

use crate::error::SortedListError;
use crate::iter::Iter;
use crate::node::{Link, Node};
use crate::scalar::{Scalar, ScalarKind};

/// Singly-linked list that keeps its values in ascending order.
///
/// Mutation comes in two flavours, exposed as separate methods:
///
/// - **rebuild** ([`add_rebuild`](Self::add_rebuild),
///   [`remove_rebuild`](Self::remove_rebuild)): copy the values out, apply the
///   change, validate and sort, then relink a fresh chain. O(n log n). Rejects
///   a result that would mix integers and strings.
/// - **splice** ([`push_splice`](Self::push_splice),
///   [`delete_splice`](Self::delete_splice)): walk the chain to the right spot
///   and rewire links in place. O(n). No kind validation is done on this path;
///   the caller must keep to one kind.
///
/// # Example
///
/// ```
/// use sorted_linked_list::{sorted_list, Scalar};
///
/// let mut list = sorted_list![3, 1, 2].unwrap();
/// list.push_splice(0);
/// list.add_rebuild(5).unwrap();
///
/// let values: Vec<&Scalar> = list.iter().collect();
/// assert_eq!(values, [&Scalar::Int(0), &Scalar::Int(1), &Scalar::Int(2), &Scalar::Int(3), &Scalar::Int(5)]);
/// assert_eq!(list.dump(), "0 => 1; 1 => 2; 2 => 3; 3 => 5; 5 => NULL ; ");
/// ```
#[derive(Default)]
pub struct SortedLinkedList {
    head: Link,
}

impl SortedLinkedList {
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Builds a list from any number of values of one kind.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::InvalidInput`] if the values are not all of
    /// the same [`ScalarKind`].
    pub fn from_values<I, V>(values: I) -> Result<Self, SortedListError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        let mut list = Self::new();
        if !values.is_empty() {
            list.rebuild(values)?;
        }
        Ok(list)
    }

    /// Inserts `value` by appending it to a copy of the values and rebuilding
    /// the whole chain.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::InvalidInput`] if `value` is of a different
    /// kind than the values already stored. The list is left untouched.
    pub fn add_rebuild(&mut self, value: impl Into<Scalar>) -> Result<(), SortedListError> {
        let mut values = self.to_vec();
        values.push(value.into());
        self.rebuild(values)
    }

    /// Inserts `value` by walking to its position and splicing a new node in.
    ///
    /// An equal value already at the head stays in front of the new one.
    pub fn push_splice(&mut self, value: impl Into<Scalar>) {
        let mut node = Box::new(Node::new(value));
        let mut cursor = match &mut self.head {
            Some(head) if head.value() <= node.value() => head.next_link_mut(),
            head => {
                node.set_next(head.take());
                *head = Some(node);
                trace!(at_head = true, "spliced value in");
                return;
            }
        };
        while cursor.as_ref().is_some_and(|next| next.value() < node.value()) {
            if let Some(next) = cursor {
                cursor = next.next_link_mut();
            }
        }
        node.set_next(cursor.take());
        *cursor = Some(node);
        trace!(at_head = false, "spliced value in");
    }

    /// Removes every occurrence of `value` and rebuilds the chain.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::InvalidInput`] if the remaining values mix
    /// kinds, which can only happen after [`push_splice`](Self::push_splice)
    /// was given a value of another kind.
    pub fn remove_rebuild(&mut self, value: impl Into<Scalar>) -> Result<(), SortedListError> {
        let value = value.into();
        let values: Vec<Scalar> = self.iter().filter(|v| **v != value).cloned().collect();
        if values.is_empty() {
            self.head = None;
            return Ok(());
        }
        self.rebuild(values)
    }

    /// Unlinks the first node equal to `value`, if any.
    pub fn delete_splice(&mut self, value: impl Into<Scalar>) {
        let value = value.into();
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| *node.value() != value) {
            if let Some(node) = cursor {
                cursor = node.next_link_mut();
            }
        }
        let found = match cursor.take() {
            Some(mut matched) => {
                *cursor = matched.take_next();
                true
            }
            None => false,
        };
        trace!(found, "spliced value out");
    }

    /// Number of nodes in the chain. Walks the whole list.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn first(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Renders the chain as `"<value> => <next>; "` per node, with `NULL `
    /// standing in for the successor of the last node.
    ///
    /// ```
    /// use sorted_linked_list::sorted_list;
    ///
    /// let list = sorted_list!["b", "a"].unwrap();
    /// assert_eq!(list.dump(), "a => b; b => NULL ; ");
    /// ```
    pub fn dump(&self) -> String {
        self.to_string()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.first())
    }

    pub fn to_vec(&self) -> Vec<Scalar> {
        self.iter().cloned().collect()
    }

    /// Sorts, validates and relinks. Nothing is changed on error.
    fn rebuild(&mut self, mut values: Vec<Scalar>) -> Result<(), SortedListError> {
        values.sort();
        let kinds = distinct_kinds(&values);
        if kinds.len() > 1 {
            debug!(?kinds, "rejected rebuild with mixed value kinds");
            return Err(SortedListError::InvalidInput { kinds });
        }
        trace!(len = values.len(), "rebuilding list");
        self.head = link_sorted(values);
        Ok(())
    }
}

/// Kinds present in `values`, in order of first appearance.
fn distinct_kinds(values: &[Scalar]) -> Vec<ScalarKind> {
    let mut kinds = Vec::new();
    for value in values {
        let kind = value.kind();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

/// Links already sorted values into a chain, back to front.
fn link_sorted(values: Vec<Scalar>) -> Link {
    let mut head: Link = None;
    for value in values.into_iter().rev() {
        let mut node = Box::new(Node::new(value));
        node.set_next(head);
        head = Some(node);
    }
    head
}

impl Clone for SortedLinkedList {
    fn clone(&self) -> Self {
        Self {
            head: link_sorted(self.to_vec()),
        }
    }
}

impl PartialEq for SortedLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for SortedLinkedList {}

impl fmt::Debug for SortedLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for SortedLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut curr = self.first();
        while let Some(node) = curr {
            match node.next() {
                Some(next) => write!(f, "{} => {}; ", node.value(), next.value())?,
                None => write!(f, "{} => NULL ; ", node.value())?,
            }
            curr = node.next();
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SortedLinkedList {
    type Item = &'a Scalar;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Scalar>> for SortedLinkedList {
    type Error = SortedListError;

    fn try_from(values: Vec<Scalar>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}
