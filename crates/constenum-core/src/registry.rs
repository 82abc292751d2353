//! # Materialization Registry
//!
//! Process-wide, single-instance-per-type storage for cached constant
//! tables. Generic statics are not per-monomorphization in Rust, so each
//! enum type gets a [`OnceLock`] cell keyed by its [`TypeId`] and stored
//! type-erased.
//!
//! ## Concurrency Invariant
//!
//! The map lock is held only to fetch or insert a type's cell, never while a
//! table is built. The table is built inside [`OnceLock::get_or_init`], so
//! concurrent first callers converge on one table, no caller observes a
//! partially built one, and a type's constants may be derived from another
//! cached type's table. The lock is `parking_lot`, which does not poison.
//!
//! A type whose constants query its *own* table never finishes
//! materializing.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::enumeration::ConstEnum;
use crate::table::ConstantTable;

type Cell<V> = OnceLock<Arc<ConstantTable<V>>>;
type Slot = Arc<dyn Any + Send + Sync>;

static REGISTRY: OnceLock<RwLock<HashMap<TypeId, Slot>>> = OnceLock::new();
static MATERIALIZED: AtomicUsize = AtomicUsize::new(0);

fn registry() -> &'static RwLock<HashMap<TypeId, Slot>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// The cell holding `E`'s table, inserted empty on first access.
fn cell<E: ConstEnum>() -> Option<Arc<Cell<E::Value>>> {
    let key = TypeId::of::<E>();
    let existing = registry().read().get(&key).cloned();
    let slot = match existing {
        Some(slot) => slot,
        None => Arc::clone(
            registry()
                .write()
                .entry(key)
                .or_insert_with(|| -> Slot { Arc::new(Cell::<E::Value>::new()) }),
        ),
    };
    slot.downcast::<Cell<E::Value>>().ok()
}

/// The cached table for `E`, materializing it on first access.
pub(crate) fn cached_table<E: ConstEnum>() -> Arc<ConstantTable<E::Value>> {
    // Slots are keyed by `TypeId::of::<E>()`, so the downcast cannot miss.
    let Some(cell) = cell::<E>() else {
        return Arc::new(E::materialize());
    };
    let table = cell.get_or_init(|| {
        MATERIALIZED.fetch_add(1, Ordering::SeqCst);
        Arc::new(E::materialize())
    });
    Arc::clone(table)
}

/// Whether a cached table for `E` has been materialized in this process.
///
/// Always `false` for types configured with
/// [`Materialization::Uncached`](crate::Materialization::Uncached).
pub fn is_materialized<E: ConstEnum>() -> bool {
    registry()
        .read()
        .get(&TypeId::of::<E>())
        .and_then(|slot| slot.downcast_ref::<Cell<E::Value>>())
        .is_some_and(|cell| cell.get().is_some())
}

/// Number of enum-like types with a cached table in this process.
pub fn materialized_count() -> usize {
    MATERIALIZED.load(Ordering::SeqCst)
}
