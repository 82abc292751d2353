//! # Declaration Macro
//!
//! [`const_enum!`](crate::const_enum) declares an enum-like type from an
//! ordered list of named constants. The generated type is an empty enum, so
//! no instance of it can ever exist: construction and cloning are rejected
//! at compile time rather than at runtime.

/// Declare an uninhabited type exposing a closed set of named constants.
///
/// Each constant becomes an associated `pub const` of the type, and the type
/// implements [`ConstEnum`](crate::ConstEnum) with `NAME` set to the type's
/// identifier. Constants are listed in the order they are written.
///
/// An optional `[Cached]` or `[Uncached]` marker after the value type selects
/// the [`Materialization`](crate::Materialization) mode. Without it the
/// table is cached.
///
/// ```
/// use constenum_core::{const_enum, ConstEnum};
///
/// const_enum! {
///     /// Primary colors.
///     pub enum Color: &'static str {
///         RED = "red",
///         GREEN = "green",
///         BLUE = "blue",
///     }
/// }
///
/// assert_eq!(Color::RED, "red");
/// assert_eq!(&*Color::values(), &["red", "green", "blue"]);
/// assert!(Color::from_value("purple").is_err());
/// ```
///
/// An optional `extends Base` clause after the type name inherits `Base`'s
/// constants: they come first, followed by the type's own. A constant
/// redeclared under a base name replaces the base value in place. `Base`
/// must implement `ConstEnum` with the same value type.
///
/// ```
/// use constenum_core::{const_enum, ConstEnum};
///
/// const_enum! {
///     pub enum Primary: &'static str {
///         RED = "red",
///         BLUE = "blue",
///     }
/// }
///
/// const_enum! {
///     pub enum Palette extends Primary: &'static str {
///         TEAL = "teal",
///     }
/// }
///
/// assert_eq!(&*Palette::values(), &["red", "blue", "teal"]);
/// assert_eq!(Palette::names(), vec!["RED", "BLUE", "TEAL"]);
/// ```
///
/// Enum-like types cannot be instantiated:
///
/// ```compile_fail
/// use constenum_core::const_enum;
///
/// const_enum! {
///     pub enum Color: &'static str {
///         RED = "red",
///     }
/// }
///
/// let color = Color {};
/// ```
///
/// nor duplicated:
///
/// ```compile_fail
/// use constenum_core::const_enum;
///
/// const_enum! {
///     pub enum Color: &'static str {
///         RED = "red",
///     }
/// }
///
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<Color>();
/// ```
#[macro_export]
macro_rules! const_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(extends $base:ty)? : $value:ty $([$mode:ident])? {
            $(
                $(#[$const_meta:meta])*
                $const_name:ident = $const_value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {}

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $const_name: $value = $const_value;
            )*
        }

        impl $crate::ConstEnum for $name {
            type Value = $value;
            const NAME: &'static str = ::core::stringify!($name);
            $(
                const MATERIALIZATION: $crate::Materialization = $crate::Materialization::$mode;
            )?

            fn constants() -> ::std::vec::Vec<(&'static str, Self::Value)> {
                let constants = ::std::vec::Vec::new();
                $(
                    let constants = $crate::table::inherit(
                        constants,
                        <$base as $crate::ConstEnum>::constants(),
                    );
                )?
                $crate::table::inherit(
                    constants,
                    ::std::vec![$((::core::stringify!($const_name), Self::$const_name)),*],
                )
            }
        }
    };
}
