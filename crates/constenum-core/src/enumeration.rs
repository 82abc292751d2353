//! # The `ConstEnum` Capability
//!
//! A type implementing [`ConstEnum`] is used purely as a namespace for a
//! fixed, ordered set of named constants. The trait turns those
//! declarations into a closed set of valid values:
//!
//! - [`values()`](ConstEnum::values) / [`cases()`](ConstEnum::cases): the
//!   declared values in declaration order;
//! - [`is_valid()`](ConstEnum::is_valid): strict membership;
//! - [`try_from_value()`](ConstEnum::try_from_value): soft lookup, `None`
//!   when the value is not declared;
//! - [`from_value()`](ConstEnum::from_value): hard lookup, failing with
//!   [`InvalidEnumValue`].
//!
//! Implementors only supply [`NAME`](ConstEnum::NAME), the value type, and
//! [`constants()`](ConstEnum::constants). Everything else is provided.
//! Declaring through [`const_enum!`](crate::const_enum) also makes the type
//! uninhabited, so it can never be constructed or cloned.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::InvalidEnumValue;
use crate::registry;
use crate::table::{ConstantTable, Materialization};

/// A type whose sole purpose is to declare a closed set of constant values.
pub trait ConstEnum: Sized + 'static {
    /// Raw value type of the declared constants.
    type Value: PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Type name reported in diagnostics and errors.
    const NAME: &'static str;

    /// Whether the constant table is shared from the process-wide registry
    /// or rebuilt on every query. Both modes answer every query identically.
    const MATERIALIZATION: Materialization = Materialization::Cached;

    /// The declared constants as `(name, value)` pairs, in declaration order.
    ///
    /// Must return the same pairs on every call. It may read other types'
    /// tables, but never its own.
    fn constants() -> Vec<(&'static str, Self::Value)>;

    /// Build a fresh constant table from [`constants()`](Self::constants).
    fn materialize() -> ConstantTable<Self::Value> {
        let table = ConstantTable::new(Self::constants());
        tracing::debug!(
            enum_name = Self::NAME,
            constants = table.len(),
            mode = %Self::MATERIALIZATION,
            "materialized constant table"
        );
        table
    }

    /// The constant table, honoring [`MATERIALIZATION`](Self::MATERIALIZATION).
    fn table() -> Arc<ConstantTable<Self::Value>> {
        match Self::MATERIALIZATION {
            Materialization::Cached => registry::cached_table::<Self>(),
            Materialization::Uncached => Arc::new(Self::materialize()),
        }
    }

    /// All declared values, in declaration order. Duplicates are kept.
    fn values() -> Arc<[Self::Value]> {
        Arc::clone(Self::table().values())
    }

    /// Alias of [`values()`](Self::values).
    fn cases() -> Arc<[Self::Value]> {
        Self::values()
    }

    /// Whether `value` is one of the declared values.
    ///
    /// Uses the value type's own equality; with
    /// [`ConstValue`](crate::ConstValue) that equality never coerces
    /// between kinds.
    fn is_valid(value: &Self::Value) -> bool {
        Self::table().contains(value)
    }

    /// Membership check for a value of any type.
    ///
    /// A value of a different Rust type than [`Value`](Self::Value) is never
    /// valid, however it would compare after conversion.
    fn is_valid_any(value: &dyn Any) -> bool {
        value
            .downcast_ref::<Self::Value>()
            .is_some_and(Self::is_valid)
    }

    /// Soft lookup for a value of any type: a copy of `value` if it has type
    /// [`Value`](Self::Value) and is declared, `None` otherwise.
    ///
    /// Hard lookups of mixed-kind input go through
    /// [`from_value()`](Self::from_value) with [`ConstValue`](crate::ConstValue)
    /// as the value type, so the error can carry the rejected value.
    fn try_from_any(value: &dyn Any) -> Option<Self::Value>
    where
        Self::Value: Clone,
    {
        value
            .downcast_ref::<Self::Value>()
            .filter(|value| Self::is_valid(value))
            .cloned()
    }

    /// Returns `value` unchanged if it is declared, `None` otherwise.
    fn try_from_value(value: Self::Value) -> Option<Self::Value> {
        Self::is_valid(&value).then_some(value)
    }

    /// Returns `value` unchanged if it is declared.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEnumValue`] carrying `value` and [`NAME`](Self::NAME)
    /// when the value is not declared.
    fn from_value(value: Self::Value) -> Result<Self::Value, InvalidEnumValue<Self::Value>> {
        if Self::is_valid(&value) {
            Ok(value)
        } else {
            tracing::debug!(enum_name = Self::NAME, value = ?value, "rejected enum value");
            Err(InvalidEnumValue::new(value, Self::NAME))
        }
    }

    /// Constant names, in declaration order.
    fn names() -> Vec<&'static str> {
        Self::table().names().to_vec()
    }

    /// Name of the first constant declared with `value`.
    fn name_of(value: &Self::Value) -> Option<&'static str> {
        Self::table().name_of(value)
    }

    /// Value of the constant named exactly `name` (case-sensitive).
    fn value_of(name: &str) -> Option<Self::Value>
    where
        Self::Value: Clone,
    {
        Self::table().get(name).cloned()
    }

    /// Number of declared constants, duplicated values included.
    fn len() -> usize {
        Self::table().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstValue;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Color {}

    impl ConstEnum for Color {
        type Value = &'static str;
        const NAME: &'static str = "Color";

        fn constants() -> Vec<(&'static str, &'static str)> {
            vec![("RED", "red"), ("GREEN", "green"), ("BLUE", "blue")]
        }
    }

    static LEVEL_BUILDS: AtomicUsize = AtomicUsize::new(0);

    enum Level {}

    impl ConstEnum for Level {
        type Value = ConstValue;
        const NAME: &'static str = "Level";
        const MATERIALIZATION: Materialization = Materialization::Uncached;

        fn constants() -> Vec<(&'static str, ConstValue)> {
            LEVEL_BUILDS.fetch_add(1, Ordering::SeqCst);
            vec![
                ("LOW", ConstValue::Int(1)),
                ("HIGH", ConstValue::Int(2)),
                ("UNKNOWN", ConstValue::Null),
            ]
        }
    }

    #[test]
    fn test_values_in_declaration_order() {
        assert_eq!(&*Color::values(), &["red", "green", "blue"]);
        assert_eq!(Color::cases(), Color::values());
    }

    #[test]
    fn test_is_valid() {
        assert!(Color::is_valid(&"green"));
        assert!(!Color::is_valid(&"purple"));
        assert!(!Color::is_valid(&"GREEN"));
    }

    #[test]
    fn test_is_valid_any_rejects_other_types() {
        assert!(Color::is_valid_any(&"red"));
        assert!(!Color::is_valid_any(&String::from("red")));
        assert!(!Color::is_valid_any(&1_i64));
        assert!(Level::is_valid_any(&ConstValue::Int(1)));
        assert!(!Level::is_valid_any(&1_i64));
    }

    #[test]
    fn test_try_from_any() {
        assert_eq!(Color::try_from_any(&"green"), Some("green"));
        assert_eq!(Color::try_from_any(&"purple"), None);
        assert_eq!(Color::try_from_any(&String::from("green")), None);
        assert_eq!(Level::try_from_any(&ConstValue::Null), Some(ConstValue::Null));
        assert_eq!(Level::try_from_any(&ConstValue::str("1")), None);
        assert_eq!(Level::try_from_any(&1_i64), None);
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(Color::try_from_value("blue"), Some("blue"));
        assert_eq!(Color::try_from_value("purple"), None);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Color::from_value("red"), Ok("red"));
        let err = Color::from_value("purple").unwrap_err();
        assert_eq!(err, InvalidEnumValue::new("purple", "Color"));
    }

    #[test]
    fn test_lookup_table() {
        assert_eq!(Color::names(), vec!["RED", "GREEN", "BLUE"]);
        assert_eq!(Color::name_of(&"blue"), Some("BLUE"));
        assert_eq!(Color::name_of(&"teal"), None);
        assert_eq!(Color::value_of("GREEN"), Some("green"));
        assert_eq!(Color::value_of("green"), None);
        assert_eq!(Color::len(), 3);
    }

    #[test]
    fn test_strict_equality_for_mixed_values() {
        assert!(Level::is_valid(&ConstValue::Int(2)));
        assert!(Level::is_valid(&ConstValue::Null));
        assert!(!Level::is_valid(&ConstValue::str("2")));
        assert!(!Level::is_valid(&ConstValue::Float(2.0)));
        assert!(!Level::is_valid(&ConstValue::Bool(false)));
    }

    #[test]
    fn test_uncached_rebuilds_and_skips_registry() {
        let before = LEVEL_BUILDS.load(Ordering::SeqCst);
        let first = Level::values();
        let second = Level::values();
        assert_eq!(first, second);
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(LEVEL_BUILDS.load(Ordering::SeqCst) >= before + 2);
        assert!(!registry::is_materialized::<Level>());
    }

    #[test]
    fn test_cached_values_are_shared() {
        assert!(Arc::ptr_eq(&Color::values(), &Color::values()));
        assert!(registry::is_materialized::<Color>());
    }

    proptest! {
        /// Soft lookup agrees with membership.
        #[test]
        fn try_from_agrees_with_is_valid(s in "[a-z]{0,6}") {
            let value: &'static str = Box::leak(s.into_boxed_str());
            prop_assert_eq!(Color::try_from_value(value).is_some(), Color::is_valid(&value));
        }

        /// Hard lookup fails exactly when soft lookup is absent.
        #[test]
        fn from_value_agrees_with_try_from(n in -4_i64..8) {
            let value = ConstValue::Int(n);
            let soft = Level::try_from_value(value.clone());
            let hard = Level::from_value(value.clone());
            prop_assert_eq!(soft.is_some(), hard.is_ok());
            if let Err(err) = hard {
                prop_assert_eq!(err.value, value);
                prop_assert_eq!(err.enum_name, "Level");
            }
        }
    }
}
