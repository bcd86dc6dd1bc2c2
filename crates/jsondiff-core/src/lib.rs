//! # jsondiff-core
//!
//! Structural comparison of two JSON documents.
//!
//! The differ walks both trees side by side and reports every discrepancy it
//! sees, each qualified by its position in the document (`a.b`, `[0].id`).
//! It does not compute an edit script: arrays are compared strictly by index
//! and every position is judged on its own.
//!
//! ## Quick start
//!
//! ```rust
//! use jsondiff_core::{compare_str, DifferenceKind};
//!
//! let diffs = compare_str(r#"{"x":1,"y":2}"#, r#"{"y":2,"z":3}"#).unwrap();
//! assert_eq!(diffs.len(), 2);
//! assert_eq!(diffs[0].kind(), DifferenceKind::MissingInRight);
//! assert_eq!(diffs[0].to_string(), "Missing property in second JSON at path 'x'");
//! assert_eq!(diffs[1].to_string(), "Missing property in first JSON at path 'z'");
//! ```
//!
//! ## Modules
//!
//! - [`differ`] -- the comparison walk (`compare`, `compare_at`, `compare_str`)
//! - [`difference`] -- `Difference` records and their one-line messages
//! - [`path`] -- dot/bracket positions inside a document
//! - [`types`] -- `Kind`, the tag of a JSON node
//! - [`error`] -- errors raised while parsing input documents

pub mod differ;
pub mod difference;
pub mod error;
pub mod path;
pub mod types;

pub use differ::{compare, compare_at, compare_str, parse_document, summarize, Summary};
pub use difference::{Difference, DifferenceKind};
pub use error::DiffError;
pub use path::{Path, Segment};
pub use types::Kind;
