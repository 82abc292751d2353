//! # constenum-core — Closed Constant Sets
//!
//! Lets a type act as an enumeration over a fixed, ordered set of named
//! constant values. The set is declared and checked at compile time, then
//! queried and validated at runtime.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit declaration tables.** Constants are listed once, in order,
//!    through [`const_enum!`] or a hand-written [`ConstEnum::constants()`].
//!    There is no runtime discovery of a type's members.
//!
//! 2. **Strict membership.** Validation compares by the value type's own
//!    equality. [`ConstValue`] covers mixed-kind constants and never coerces
//!    between kinds: `Int(1)` is not `Str("1")`.
//!
//! 3. **Two-tier lookup.** [`ConstEnum::try_from_value()`] reports absence
//!    with `None`; [`ConstEnum::from_value()`] fails with
//!    [`InvalidEnumValue`], the crate's only error.
//!
//! 4. **Uninhabited enum types.** Types declared with [`const_enum!`] have no
//!    values of their own, so they can be neither constructed nor cloned.
//!
//! 5. **One implementation, two materialization modes.** Tables are either
//!    cached once per type in a process-wide [`registry`] or rebuilt per
//!    query ([`Materialization`]). Both modes answer identically.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Diagnostics go through `tracing`; the crate installs no subscriber.

#[macro_use]
mod macros;

pub mod enumeration;
pub mod error;
pub mod registry;
pub mod table;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use enumeration::ConstEnum;
pub use error::InvalidEnumValue;
pub use table::{ConstantTable, Materialization};
pub use value::ConstValue;
