//! The comparison walk.
//!
//! Two nodes are judged by the first rule that applies:
//!
//! 1. **Kind mismatch** -- report `TypeMismatch` and stop; children of the
//!    two nodes are never visited.
//! 2. **Object vs object** -- walk the left keys in document order: a key the
//!    right side lacks is `MissingInRight`, a shared key is compared
//!    recursively. Then walk the right keys and report each one the left side
//!    lacks as `MissingInLeft`. Shared keys are compared exactly once.
//! 3. **Array vs array** -- compare index by index up to the longer length.
//!    Indices past the end of one side are `MissingInLeft`/`MissingInRight`.
//!    There is no alignment: an insertion shifts every later index.
//! 4. **Scalar vs scalar** -- report `ValueMismatch` if the values differ.
//!
//! Output is the pre-order of the walk. The walk keeps its own stack of
//! pending work instead of recursing, so deeply nested input cannot exhaust
//! the thread's call stack.
//!
//! # Example
//! ```
//! use jsondiff_core::compare;
//! use serde_json::json;
//!
//! let diffs = compare(&json!([{"id": 1}]), &json!([{"id": 2}]));
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].to_string(), "Value mismatch at path '[0].id': 1 vs 2");
//! ```

use crate::difference::{Difference, DifferenceKind};
use crate::error::Result;
use crate::path::Path;
use crate::types::Kind;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Work still to be done, in output order once popped.
enum Step<'a> {
    Compare {
        left: &'a Value,
        right: &'a Value,
        path: Path,
    },
    Report(Difference),
}

/// Compare two documents from the root.
pub fn compare(left: &Value, right: &Value) -> Vec<Difference> {
    compare_at(left, right, Path::root())
}

/// Compare two nodes that sit at `path` inside their documents.
///
/// Every reported path starts with `path`. Never fails: any two values can
/// be compared.
pub fn compare_at(left: &Value, right: &Value, path: Path) -> Vec<Difference> {
    let mut differences = Vec::new();
    let mut pending = vec![Step::Compare { left, right, path }];

    while let Some(step) = pending.pop() {
        match step {
            Step::Report(difference) => record(&mut differences, difference),
            Step::Compare { left, right, path } => {
                let children = compare_node(left, right, path, &mut differences);
                // Reversed so the first child is popped first.
                pending.extend(children.into_iter().rev());
            }
        }
    }

    debug!(differences = differences.len(), "comparison finished");
    differences
}

/// Parse both documents and compare them.
///
/// The left document is parsed first; the first parse failure is returned
/// and no comparison happens.
pub fn compare_str(left: &str, right: &str) -> Result<Vec<Difference>> {
    let left = parse_document(left)?;
    let right = parse_document(right)?;
    Ok(compare(&left, &right))
}

/// Parse document text into a tree.
///
/// Errors carry the line and column of the malformed input.
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Apply the rules to a single pair of nodes. Differences found at this
/// node go straight into `out`; child work is returned in visiting order.
fn compare_node<'a>(
    left: &'a Value,
    right: &'a Value,
    path: Path,
    out: &mut Vec<Difference>,
) -> Vec<Step<'a>> {
    let (left_kind, right_kind) = (Kind::of(left), Kind::of(right));
    if left_kind != right_kind {
        record(
            out,
            Difference::TypeMismatch {
                path,
                left: left_kind,
                right: right_kind,
            },
        );
        return Vec::new();
    }

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => object_steps(l, r, &path),
        (Value::Array(l), Value::Array(r)) => array_steps(l, r, &path),
        _ => {
            if left != right {
                record(
                    out,
                    Difference::ValueMismatch {
                        path,
                        left: left.clone(),
                        right: right.clone(),
                    },
                );
            }
            Vec::new()
        }
    }
}

fn object_steps<'a>(
    left: &'a Map<String, Value>,
    right: &'a Map<String, Value>,
    path: &Path,
) -> Vec<Step<'a>> {
    let mut steps = Vec::with_capacity(left.len());

    for (key, left_child) in left {
        let child_path = path.key(key);
        match right.get(key) {
            Some(right_child) => steps.push(Step::Compare {
                left: left_child,
                right: right_child,
                path: child_path,
            }),
            None => steps.push(Step::Report(Difference::MissingInRight { path: child_path })),
        }
    }

    // Second pass over the right side only reports; shared keys were
    // compared above.
    for key in right.keys().filter(|key| !left.contains_key(*key)) {
        steps.push(Step::Report(Difference::MissingInLeft {
            path: path.key(key),
        }));
    }

    steps
}

fn array_steps<'a>(left: &'a [Value], right: &'a [Value], path: &Path) -> Vec<Step<'a>> {
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| {
            let child_path = path.index(i);
            match (left.get(i), right.get(i)) {
                (Some(l), Some(r)) => Step::Compare {
                    left: l,
                    right: r,
                    path: child_path,
                },
                (Some(_), None) => Step::Report(Difference::MissingInRight { path: child_path }),
                // Past the end of the left array (both `None` cannot happen
                // below `len`).
                _ => Step::Report(Difference::MissingInLeft { path: child_path }),
            }
        })
        .collect()
}

fn record(out: &mut Vec<Difference>, difference: Difference) {
    trace!(kind = %difference.kind(), path = %difference.path(), "difference");
    out.push(difference);
}

/// Number of differences of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub type_mismatches: usize,
    pub value_mismatches: usize,
    pub missing_in_left: usize,
    pub missing_in_right: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.type_mismatches + self.value_mismatches + self.missing_in_left + self.missing_in_right
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Count a list of differences by kind.
pub fn summarize(differences: &[Difference]) -> Summary {
    differences
        .iter()
        .fold(Summary::default(), |mut summary, difference| {
            match difference.kind() {
                DifferenceKind::TypeMismatch => summary.type_mismatches += 1,
                DifferenceKind::ValueMismatch => summary.value_mismatches += 1,
                DifferenceKind::MissingInLeft => summary.missing_in_left += 1,
                DifferenceKind::MissingInRight => summary.missing_in_right += 1,
            }
            summary
        })
}
