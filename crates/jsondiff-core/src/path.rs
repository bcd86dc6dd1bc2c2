//! Positions inside a JSON document.
//!
//! A [`Path`] is a list of segments, rendered left to right:
//!
//! - `Key("a")` renders as `a` at the start and `.a` anywhere else
//! - `Index(3)` renders as `[3]`
//!
//! The root path is empty and renders as the empty string, so a root-level
//! mismatch is reported `at path ''`.

use serde::{Serialize, Serializer};
use std::fmt;

/// One step from a parent node to a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object property name.
    Key(String),
    /// Array position.
    Index(usize),
}

/// Location of a node, from the document root down.
///
/// Paths are never modified once built: [`Path::key`] and [`Path::index`]
/// return a new, one-segment-longer path and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the property `name` under this node.
    pub fn key(&self, name: &str) -> Self {
        self.child(Segment::Key(name.to_string()))
    }

    /// Path of element `index` under this node.
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The final segment, or `None` at the root.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Number of segments, i.e. the nesting depth of the node.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(name) if i == 0 => f.write_str(name)?,
                Segment::Key(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
