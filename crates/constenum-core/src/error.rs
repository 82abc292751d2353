//! # Error Types
//!
//! The capability has exactly one failure mode: forcing a value that is not
//! part of a declared constant set through the hard lookup
//! ([`ConstEnum::from_value`](crate::ConstEnum::from_value)).
//!
//! The soft lookup never fails; it reports absence through `Option`.

use thiserror::Error;

/// A value was not among the constants declared by an enum-like type.
///
/// Carries the rejected value itself (not a rendering of it) so callers can
/// recover it, plus the owning type's name for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("value {value:?} is not part of the enum {enum_name}")]
pub struct InvalidEnumValue<V> {
    /// The value that was rejected.
    pub value: V,
    /// Name of the enum-like type the value was checked against.
    pub enum_name: &'static str,
}

impl<V> InvalidEnumValue<V> {
    /// Build the error for `value` rejected by `enum_name`.
    pub fn new(value: V, enum_name: &'static str) -> Self {
        Self { value, enum_name }
    }

    /// Recover the rejected value.
    pub fn into_value(self) -> V {
        self.value
    }
}
