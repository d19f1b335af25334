//! Singly-linked list that keeps integer or string values in ascending order.
//!
//! A [`SortedLinkedList`] holds [`Scalar`] values of one kind, either all
//! integers or all strings, and keeps them sorted after every mutation.
//!
//! Inserts and removals come in two flavours that trade simplicity for speed:
//!
//! | Operation | Strategy | Cost | Validates kinds |
//! |-----------|----------|------|-----------------|
//! | [`add_rebuild`](SortedLinkedList::add_rebuild) | copy, sort, relink | O(n log n) | yes |
//! | [`remove_rebuild`](SortedLinkedList::remove_rebuild) | copy, filter, relink | O(n log n) | yes |
//! | [`push_splice`](SortedLinkedList::push_splice) | walk, relink in place | O(n) | no |
//! | [`delete_splice`](SortedLinkedList::delete_splice) | walk, unlink in place | O(n) | no |
//!
//! `remove_rebuild` drops every matching value, `delete_splice` only the first.
//!
//! # Example
//!
//! ```
//! use sorted_linked_list::{sorted_list, SortedLinkedList, SortedListError};
//!
//! let mut list = SortedLinkedList::new();
//! for v in [5, 4, 3, 1, 2] {
//!     list.push_splice(v);
//! }
//! assert_eq!(list.dump(), "1 => 2; 2 => 3; 3 => 4; 4 => 5; 5 => NULL ; ");
//!
//! let mixed = sorted_list![1, "a"];
//! assert!(matches!(mixed, Err(SortedListError::InvalidInput { .. })));
//! ```
//!
//! The list is not synchronized. Share it across threads behind a lock.

pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod scalar;

pub use error::SortedListError;
pub use iter::Iter;
pub use list::SortedLinkedList;
pub use node::Node;
pub use scalar::{Scalar, ScalarKind};

/// Builds a [`SortedLinkedList`] from a list of values.
///
/// Each value goes through [`Scalar::from`], so integers and string slices can
/// be written directly. Evaluates to `Result<SortedLinkedList, SortedListError>`.
///
/// ```
/// use sorted_linked_list::sorted_list;
///
/// let list = sorted_list!["c", "a", "b"].unwrap();
/// assert_eq!(list.dump(), "a => b; b => c; c => NULL ; ");
/// assert!(sorted_list![].unwrap().is_empty());
/// ```
#[macro_export]
macro_rules! sorted_list {
    () => {
        ::core::result::Result::<$crate::SortedLinkedList, $crate::SortedListError>::Ok(
            $crate::SortedLinkedList::new(),
        )
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SortedLinkedList::from_values([$($crate::Scalar::from($value)),+])
    };
}
