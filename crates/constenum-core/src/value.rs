//! # Dynamic Constant Values
//!
//! [`ConstValue`] is the value type for enum-like types whose constants mix
//! kinds, e.g. an integer code next to a string label. Equality is strict:
//! two values are equal only when they have the same kind *and* the same
//! content. There is no coercion between kinds, so `Int(1)`, `Float(1.0)`,
//! `Str("1")` and `Bool(true)` are four distinct values.
//!
//! Every variant can be built in a `const` context, which lets
//! [`const_enum!`](crate::const_enum) declare `ConstValue` constants directly.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A constant of any supported kind, compared by kind and content.
///
/// Float equality follows IEEE 754, so `Float(f64::NAN)` is never equal to
/// anything, itself included, and can never be a valid member of a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
    /// The absence of a value.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string, borrowed for declared constants, owned for runtime input.
    Str(Cow<'static, str>),
}

impl ConstValue {
    /// Build a string value from a `'static` literal in a `const` context.
    pub const fn str(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }

    /// Name of this value's kind, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }

    /// Borrow the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this is [`ConstValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConstValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConstValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ConstValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for ConstValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&'static str> for ConstValue {
    fn from(s: &'static str) -> Self {
        Self::str(s)
    }
}

impl From<String> for ConstValue {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl<T: Into<ConstValue>> From<Option<T>> for ConstValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
