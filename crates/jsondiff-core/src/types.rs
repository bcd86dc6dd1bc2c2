//! Node kinds of a parsed JSON document.
//!
//! Documents are held as `serde_json::Value` (built with `preserve_order`, so
//! object keys iterate in document order). `Kind` is the tag the differ
//! compares before looking at anything else.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The kind of a JSON node. Every value has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl Kind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Boolean,
            Value::Null => Kind::Null,
        }
    }

    /// `true` for objects and arrays.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Object | Kind::Array)
    }

    /// Name used in type-mismatch messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Object => "Object",
            Kind::Array => "Array",
            Kind::String => "String",
            Kind::Number => "Number",
            Kind::Boolean => "Boolean",
            Kind::Null => "Null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
