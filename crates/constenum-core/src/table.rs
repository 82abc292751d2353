//! # Constant Tables
//!
//! A [`ConstantTable`] is the materialized form of an enum-like type's
//! declarations: the constant names and their values, both in declaration
//! order. Values are held in an `Arc<[V]>` so that cached tables hand out
//! the same sequence to every caller without copying it.
//!
//! Duplicate values are kept as declared. Only names are unique.

use std::fmt;
use std::sync::Arc;

/// How an enum-like type materializes its constant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Materialization {
    /// Build the table once per process and share it from the registry.
    #[default]
    Cached,
    /// Rebuild the table from the declarations on every query.
    Uncached,
}

impl Materialization {
    /// Lowercase name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Uncached => "uncached",
        }
    }
}

impl fmt::Display for Materialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered names and values of an enum-like type's declared constants.
#[derive(Debug, Clone)]
pub struct ConstantTable<V> {
    names: Box<[&'static str]>,
    values: Arc<[V]>,
}

impl<V> ConstantTable<V> {
    /// Build a table from `(name, value)` pairs in declaration order.
    pub fn new(constants: Vec<(&'static str, V)>) -> Self {
        let (names, values): (Vec<_>, Vec<_>) = constants.into_iter().unzip();
        Self {
            names: names.into_boxed_slice(),
            values: Arc::from(values),
        }
    }

    /// Constant names in declaration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Constant values in declaration order.
    pub fn values(&self) -> &Arc<[V]> {
        &self.values
    }

    /// Number of declared constants, duplicated values included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the type declares no constants at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> + '_ {
        self.names.iter().copied().zip(self.values.iter())
    }
}

impl<V: PartialEq> ConstantTable<V> {
    /// Whether `value` is declared, by strict equality.
    pub fn contains(&self, value: &V) -> bool {
        self.values.iter().any(|declared| declared == value)
    }

    /// Name of the first constant declared with `value`.
    pub fn name_of(&self, value: &V) -> Option<&'static str> {
        self.iter()
            .find(|(_, declared)| *declared == value)
            .map(|(name, _)| name)
    }

    /// Value of the constant named exactly `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, value)| value)
    }
}

/// Append `own` constants to inherited `base` constants.
///
/// Base constants keep their positions. An own constant whose name is
/// already inherited replaces that entry's value in place; the rest follow
/// in declaration order. Duplicate values are kept.
pub fn inherit<V>(
    base: Vec<(&'static str, V)>,
    own: Vec<(&'static str, V)>,
) -> Vec<(&'static str, V)> {
    let mut constants = base;
    for (name, value) in own {
        match constants.iter_mut().find(|(declared, _)| *declared == name) {
            Some(entry) => entry.1 = value,
            None => constants.push((name, value)),
        }
    }
    constants
}
