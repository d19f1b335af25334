use thiserror::Error;

use crate::scalar::ScalarKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortedListError {
    /// A rebuild would have mixed value kinds in one list.
    #[error("\"SortedLinkedList\" expects same type for all values, \"{}\" given.", join_kinds(.kinds))]
    InvalidInput { kinds: Vec<ScalarKind> },
}

fn join_kinds(kinds: &[ScalarKind]) -> String {
    kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
