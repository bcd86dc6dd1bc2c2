//! Difference records produced by the differ.
//!
//! Each record knows where it was found and renders itself as one line:
//!
//! ```text
//! Type mismatch at path 'a': Object vs Array
//! Value mismatch at path 'a.b': 1 vs 2
//! Missing property in second JSON at path 'x'
//! Missing element in first JSON at path '[2]'
//! ```

use crate::path::{Path, Segment};
use crate::types::Kind;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The category of a [`Difference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    TypeMismatch,
    ValueMismatch,
    MissingInLeft,
    MissingInRight,
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DifferenceKind::TypeMismatch => "TypeMismatch",
            DifferenceKind::ValueMismatch => "ValueMismatch",
            DifferenceKind::MissingInLeft => "MissingInLeft",
            DifferenceKind::MissingInRight => "MissingInRight",
        })
    }
}

/// One discrepancy between the left (first) and right (second) document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Difference {
    /// The two nodes have different kinds. Children are not compared.
    TypeMismatch { path: Path, left: Kind, right: Kind },
    /// Two scalars of the same kind hold different values.
    ValueMismatch { path: Path, left: Value, right: Value },
    /// The node exists only in the right document.
    MissingInLeft { path: Path },
    /// The node exists only in the left document.
    MissingInRight { path: Path },
}

impl Difference {
    pub fn kind(&self) -> DifferenceKind {
        match self {
            Difference::TypeMismatch { .. } => DifferenceKind::TypeMismatch,
            Difference::ValueMismatch { .. } => DifferenceKind::ValueMismatch,
            Difference::MissingInLeft { .. } => DifferenceKind::MissingInLeft,
            Difference::MissingInRight { .. } => DifferenceKind::MissingInRight,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Difference::TypeMismatch { path, .. }
            | Difference::ValueMismatch { path, .. }
            | Difference::MissingInLeft { path }
            | Difference::MissingInRight { path } => path,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::TypeMismatch { path, left, right } => {
                write!(f, "Type mismatch at path '{}': {} vs {}", path, left, right)
            }
            Difference::ValueMismatch { path, left, right } => write!(
                f,
                "Value mismatch at path '{}': {} vs {}",
                path,
                Scalar(left),
                Scalar(right)
            ),
            Difference::MissingInLeft { path } => {
                write!(f, "Missing {} in first JSON at path '{}'", entry_noun(path), path)
            }
            Difference::MissingInRight { path } => {
                write!(f, "Missing {} in second JSON at path '{}'", entry_noun(path), path)
            }
        }
    }
}

/// Objects are missing a "property", arrays an "element".
fn entry_noun(path: &Path) -> &'static str {
    match path.last() {
        Some(Segment::Index(_)) => "element",
        Some(Segment::Key(_)) | None => "property",
    }
}

/// Message rendering of a scalar: strings bare, everything else as JSON.
struct Scalar<'a>(&'a Value);

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
