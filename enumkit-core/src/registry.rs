//! Process-wide definition cache
//!
//! Each enum type's member table is discovered on first access and kept for
//! the life of the process. Discovery runs without holding the cache lock; a
//! thread that loses the insert race drops its copy. Entries are never
//! replaced or removed.

use crate::{EnumDefinition, EnumType};
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type DefinitionMap = HashMap<TypeId, &'static EnumDefinition>;

static DEFINITIONS: Lazy<RwLock<DefinitionMap>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Acquire a read lock on the cache, recovering from poisoning.
///
/// The map only grows through complete inserts, so a poisoned guard still
/// holds consistent data.
fn definitions_read() -> RwLockReadGuard<'static, DefinitionMap> {
    match DEFINITIONS.read() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Enum definition cache lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

fn definitions_write() -> RwLockWriteGuard<'static, DefinitionMap> {
    match DEFINITIONS.write() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Enum definition cache lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

/// The cached definition for `T`, discovering it on first use.
pub fn definition_of<T: EnumType>() -> &'static EnumDefinition {
    let type_id = TypeId::of::<T>();

    if let Some(definition) = definitions_read().get(&type_id).copied() {
        return definition;
    }

    // Discover outside the lock: a declaration may read other enum types.
    let discovered = EnumDefinition::discover(T::NAME, T::declare());

    let mut definitions = definitions_write();
    // Another thread may have won the race while we were discovering.
    if let Some(definition) = definitions.get(&type_id).copied() {
        return definition;
    }

    let definition: &'static EnumDefinition = Box::leak(Box::new(discovered));
    definitions.insert(type_id, definition);
    tracing::debug!(
        enum_name = T::NAME,
        members = definition.len(),
        "Cached enum definition"
    );
    definition
}

/// Whether `T`'s definition has already been discovered.
pub fn is_cached<T: EnumType>() -> bool {
    definitions_read().contains_key(&TypeId::of::<T>())
}

/// Number of enum types discovered so far.
pub fn cached_types() -> usize {
    definitions_read().len()
}

// ============================================================================
// TESTS
// ============================================================================
