use std::fmt;

/// Value stored in a [`SortedLinkedList`](crate::SortedLinkedList).
///
/// A list holds values of a single kind: either all integers or all strings.
///
/// The derived ordering is the one total order used everywhere in the crate,
/// both for sorting and for matching values on removal. Within a kind it is
/// numeric order for integers and lexicographic order for text. Across kinds
/// every `Int` sorts before every `Text`.
///
/// # Examples
///
/// ```
/// use sorted_linked_list::{Scalar, ScalarKind};
///
/// assert!(Scalar::from(2) < Scalar::from(10));
/// assert!(Scalar::from("10") < Scalar::from("2"));
/// assert_eq!(Scalar::from("a").kind(), ScalarKind::String);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Integer,
            Scalar::Text(_) => ScalarKind::String,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Int(_) => None,
            Scalar::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n.into())
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Int(n.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<char> for Scalar {
    fn from(c: char) -> Self {
        Scalar::Text(c.to_string())
    }
}

/// Tag of a [`Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarKind {
    Integer,
    String,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Integer => "integer",
            ScalarKind::String => "string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
