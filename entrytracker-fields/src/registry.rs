//! EntryTracker: the field registry.
//!
//! Owns every [`FieldDefinition`] behind two indices, one by folded name and
//! one by id. Both indices are updated together under a single write lock so
//! they always describe the same set of definitions. Definitions are shared
//! out as `Arc`s, which lets instance construction and prototype cloning run
//! after the lock is released.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use entrytracker_common::{fold_key, FoldedKey, Provenance};
use entrytracker_element::{FieldId, TrackedInstance, TrackerElement};
use tracing::{debug, trace, warn};

use crate::definition::{FieldDefinition, FieldRef, FieldSource, FieldSummary};
use crate::error::{FieldsError, Result};

/// Tunables for an [`EntryTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Log a warning when a name is registered twice.
    pub warn_on_duplicate: bool,
    /// Log a warning when `register_and_get_field` is handed a type or
    /// prototype that differs from the field's existing definition.
    pub warn_on_mismatch: bool,
    /// Number of definitions to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            warn_on_duplicate: true,
            warn_on_mismatch: true,
            initial_capacity: 0,
        }
    }
}

struct Indices<E: TrackedInstance> {
    fields: Vec<Arc<FieldDefinition<E>>>,
    name_index: HashMap<FoldedKey, usize>,
    id_index: HashMap<FieldId, usize>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<FieldId>,
}

impl<E: TrackedInstance> Indices<E> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            name_index: HashMap::with_capacity(capacity),
            id_index: HashMap::with_capacity(capacity),
            next_id: Some(FieldId::FIRST),
        }
    }

    fn by_name(&self, key: &str) -> Option<&Arc<FieldDefinition<E>>> {
        self.name_index.get(key).map(|&i| &self.fields[i])
    }

    fn by_id(&self, id: FieldId) -> Option<&Arc<FieldDefinition<E>>> {
        self.id_index.get(&id).map(|&i| &self.fields[i])
    }

    /// Allocate the next id and insert into both indices. Caller has already
    /// checked that `key` is free.
    fn insert(
        &mut self,
        name: &str,
        key: FoldedKey,
        source: FieldSource<E>,
        description: String,
        provenance: Provenance,
    ) -> Result<Arc<FieldDefinition<E>>> {
        let id = self.next_id.ok_or_else(|| FieldsError::IdsExhausted {
            name: name.to_string(),
        })?;

        let def = Arc::new(FieldDefinition {
            id,
            name: name.to_string(),
            key: key.clone(),
            source,
            description,
            provenance,
        });

        let idx = self.fields.len();
        self.fields.push(Arc::clone(&def));
        self.name_index.insert(key, idx);
        self.id_index.insert(id, idx);
        self.next_id = id.next();

        Ok(def)
    }
}

/// Process-scoped registry of tracked fields.
///
/// Generic over the instance type so the registry depends only on the
/// [`TrackedInstance`] contract; the default is [`TrackerElement`].
pub struct EntryTracker<E: TrackedInstance = TrackerElement> {
    indices: RwLock<Indices<E>>,
    options: RegistryOptions,
}

impl<E: TrackedInstance> EntryTracker<E> {
    /// Create an empty registry with default options.
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// Create an empty registry with the given options.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            indices: RwLock::new(Indices::with_capacity(options.initial_capacity)),
            options,
        }
    }

    /// Options this registry was created with.
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    // --- Registration ---

    /// Register a new field and return its id.
    ///
    /// Fails with [`FieldsError::DuplicateFieldName`] if a field with the same
    /// case-folded name exists; the registry is left untouched and no id is
    /// consumed.
    pub fn register_field(
        &self,
        name: &str,
        source: impl Into<FieldSource<E>>,
        description: impl Into<String>,
        provenance: Provenance,
    ) -> Result<FieldId> {
        let source = source.into();
        let key = fold_key(name);

        let mut indices = self.write();
        if let Some(existing) = indices.by_name(key.as_str()).map(Arc::clone) {
            drop(indices);
            if self.options.warn_on_duplicate {
                warn!(
                    name = %key,
                    %provenance,
                    existing_id = %existing.id(),
                    registered_at = %existing.provenance(),
                    "field already registered"
                );
            }
            return Err(FieldsError::DuplicateFieldName {
                name: name.to_string(),
                provenance,
                existing: existing.id(),
            });
        }

        let def = indices.insert(name, key, source, description.into(), provenance)?;
        drop(indices);

        debug!(
            name = %def.name(),
            id = %def.id(),
            kind = %def.source().describe(),
            provenance = %def.provenance(),
            "registered field"
        );
        Ok(def.id())
    }

    /// Return a fresh instance of `name`, registering it first if needed.
    ///
    /// When the field already exists its original definition wins and
    /// `source` is dropped; a differing type or prototype shape is reported
    /// as a warning. The only error is id exhaustion.
    pub fn register_and_get_field(
        &self,
        name: &str,
        source: impl Into<FieldSource<E>>,
        description: impl Into<String>,
        provenance: Provenance,
    ) -> Result<E> {
        let source = source.into();
        let key = fold_key(name);

        // Common case: some other call site got here first.
        let existing = self.read().by_name(key.as_str()).map(Arc::clone);
        if let Some(def) = existing {
            self.check_mismatch(&def, &source, &provenance);
            return Ok(def.instantiate());
        }

        let mut indices = self.write();
        // Re-check: a writer may have slipped in between the two locks.
        if let Some(def) = indices.by_name(key.as_str()).map(Arc::clone) {
            drop(indices);
            self.check_mismatch(&def, &source, &provenance);
            return Ok(def.instantiate());
        }
        let def = indices.insert(name, key, source, description.into(), provenance)?;
        drop(indices);

        debug!(
            name = %def.name(),
            id = %def.id(),
            kind = %def.source().describe(),
            provenance = %def.provenance(),
            "registered field on first use"
        );
        Ok(def.instantiate())
    }

    fn check_mismatch(
        &self,
        def: &FieldDefinition<E>,
        requested: &FieldSource<E>,
        provenance: &Provenance,
    ) {
        if self.options.warn_on_mismatch && def.source().conflicts_with(requested) {
            warn!(
                name = %def.name(),
                id = %def.id(),
                registered = %def.source().describe(),
                requested = %requested.describe(),
                registered_at = %def.provenance(),
                %provenance,
                "field re-registered with a different type, keeping the original"
            );
        }
    }

    // --- Lookup ---

    /// Resolve a name (any letter case) to its id.
    pub fn lookup_id(&self, name: &str) -> Option<FieldId> {
        let key = fold_key(name);
        self.read().by_name(key.as_str()).map(|def| def.id())
    }

    /// Resolve a definition by id or name.
    pub fn definition(&self, field: impl Into<FieldRef>) -> Option<Arc<FieldDefinition<E>>> {
        let indices = self.read();
        match field.into() {
            FieldRef::Id(id) => indices.by_id(id).map(Arc::clone),
            FieldRef::Name(name) => indices.by_name(fold_key(&name).as_str()).map(Arc::clone),
        }
    }

    /// Name a field was registered under, original case preserved.
    pub fn field_name(&self, id: FieldId) -> Option<String> {
        self.read().by_id(id).map(|def| def.name().to_string())
    }

    // --- Instantiation ---

    /// Build a new instance of a field, or `None` if it was never registered.
    pub fn get_tracked_instance(&self, field: impl Into<FieldRef>) -> Option<E> {
        let field = field.into();
        let Some(def) = self.definition(field.clone()) else {
            trace!(%field, "no such field");
            return None;
        };
        Some(def.instantiate())
    }

    /// Like [`get_tracked_instance`](Self::get_tracked_instance) but reports an
    /// unknown field as [`FieldsError::UnknownField`].
    pub fn try_tracked_instance(&self, field: impl Into<FieldRef>) -> Result<E> {
        let field = field.into();
        self.definition(field.clone())
            .map(|def| def.instantiate())
            .ok_or(FieldsError::UnknownField { field })
    }

    // --- Listing ---

    /// Summaries of every registered field in id order.
    pub fn fields(&self) -> Vec<FieldSummary> {
        self.read().fields.iter().map(|def| def.summary()).collect()
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.read().fields.len()
    }

    /// Whether no field has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- Internal ---

    // The indices are only mutated by `Indices::insert`, which cannot leave
    // them half-updated, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Indices<E>> {
        self.indices.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Indices<E>> {
        self.indices.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: TrackedInstance> Default for EntryTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TrackedInstance> std::fmt::Debug for EntryTracker<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryTracker")
            .field("fields", &self.len())
            .field("options", &self.options)
            .finish()
    }
}
