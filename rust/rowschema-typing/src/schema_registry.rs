//! Registry associating schema ids with wire schemas and the native record
//! types they were generated from (or hydrated into).
//!
//! Entries are never removed. An id maps to at most one schema, and a record
//! type, once registered, maps to exactly one id for the registry's lifetime.

use std::sync::{
    Arc, PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};

use ahash::AHashMap;
use rowschema_common::{Result, error::ErrorKind};
use rowschema_format::defs::schema::Schema;

use crate::{config::SchemaIdStrategy, row_type::RecordType};

#[derive(Debug, Clone)]
struct Entry {
    schema: Arc<Schema>,
    native_type: Option<Arc<RecordType>>,
}

#[derive(Default)]
struct State {
    by_id: AHashMap<String, Entry>,
    by_type: AHashMap<Arc<RecordType>, String>,
}

impl State {
    /// Checks that binding `record_type` to `schema` agrees with every
    /// existing entry. Returns `true` when the exact binding already exists.
    fn check_binding(&self, record_type: &RecordType, schema: &Schema) -> Result<bool> {
        if let Some(existing_id) = self.by_type.get(record_type) {
            if *existing_id != schema.id {
                return Err(conflict(record_type.name(), existing_id, &schema.id));
            }
        }
        let Some(entry) = self.by_id.get(&schema.id) else {
            return Ok(false);
        };
        if *entry.schema != *schema {
            return Err(conflict(record_type.name(), &schema.id, &schema.id));
        }
        match &entry.native_type {
            Some(bound) if **bound == *record_type => Ok(true),
            Some(bound) => Err(conflict(bound.name(), &schema.id, &schema.id)),
            None => Ok(false),
        }
    }

    fn bind(&mut self, record_type: Arc<RecordType>, schema: Arc<Schema>) {
        log::debug!(
            "registering schema {} for record type {}",
            schema.id,
            record_type.name()
        );
        self.by_type.insert(record_type.clone(), schema.id.clone());
        self.by_id.insert(
            schema.id.clone(),
            Entry {
                schema,
                native_type: Some(record_type),
            },
        );
    }
}

fn conflict(type_name: &str, existing_id: &str, schema_id: &str) -> rowschema_common::error::Error {
    log::warn!(
        "rejecting registration of type {type_name} with schema {schema_id} \
         (already bound to {existing_id})"
    );
    ErrorKind::ConflictingRegistration {
        type_name: type_name.to_string(),
        existing_id: existing_id.to_string(),
        schema_id: schema_id.to_string(),
    }
    .into()
}

#[derive(Debug)]
enum IdGenerator {
    Uuid,
    Sequential { prefix: String, next: AtomicU64 },
}

/// Thread-safe schema registry.
pub struct SchemaRegistry {
    ids: IdGenerator,
    state: RwLock<State>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        SchemaRegistry::new(&SchemaIdStrategy::Uuid)
    }
}

impl SchemaRegistry {
    pub fn new(strategy: &SchemaIdStrategy) -> SchemaRegistry {
        let ids = match strategy {
            SchemaIdStrategy::Uuid => IdGenerator::Uuid,
            SchemaIdStrategy::Sequential { prefix } => IdGenerator::Sequential {
                prefix: prefix.clone(),
                next: AtomicU64::new(1),
            },
        };
        SchemaRegistry {
            ids,
            state: RwLock::new(State::default()),
        }
    }

    /// Returns an id no other call on this registry has returned.
    pub fn generate_new_id(&self) -> String {
        match &self.ids {
            IdGenerator::Uuid => uuid::Uuid::new_v4().to_string(),
            IdGenerator::Sequential { prefix, next } => {
                format!("{prefix}{}", next.fetch_add(1, Ordering::Relaxed))
            }
        }
    }

    pub fn get_schema_by_id(&self, id: &str) -> Option<Arc<Schema>> {
        let schema = self.read().by_id.get(id).map(|e| e.schema.clone());
        log::trace!("schema lookup {id}: found={}", schema.is_some());
        schema
    }

    pub fn get_typing_by_id(&self, id: &str) -> Option<Arc<RecordType>> {
        self.read()
            .by_id
            .get(id)
            .and_then(|e| e.native_type.clone())
    }

    pub fn get_id_by_typing(&self, record_type: &RecordType) -> Option<String> {
        self.read().by_type.get(record_type).cloned()
    }

    /// Registers `record_type` under `schema`, in both directions.
    ///
    /// Re-adding the identical pair is a no-op.
    ///
    /// # Errors
    ///
    /// `ConflictingRegistration` when the record type is already bound to
    /// another schema id, or the schema id is already bound to another
    /// schema or record type.
    pub fn add(&self, record_type: Arc<RecordType>, schema: Arc<Schema>) -> Result<()> {
        let mut state = self.write();
        if !state.check_binding(&record_type, &schema)? {
            state.bind(record_type, schema);
        }
        Ok(())
    }

    /// Registers a schema received from a peer without binding a native type.
    ///
    /// # Errors
    ///
    /// `ConflictingRegistration` when the id is already bound to a different
    /// schema.
    pub fn add_schema(&self, schema: Arc<Schema>) -> Result<()> {
        let mut state = self.write();
        if let Some(entry) = state.by_id.get(&schema.id) {
            if *entry.schema == *schema {
                return Ok(());
            }
            let type_name = entry
                .native_type
                .as_ref()
                .map(|t| t.name().to_string())
                .unwrap_or_else(|| "<unbound>".to_string());
            return Err(conflict(&type_name, &schema.id, &schema.id));
        }
        log::debug!("registering unbound schema {}", schema.id);
        state.by_id.insert(
            schema.id.clone(),
            Entry {
                schema,
                native_type: None,
            },
        );
        Ok(())
    }

    /// Registers `record_type` under `schema` unless the record type is
    /// already registered, in which case the schema registered first is
    /// returned. Concurrent callers translating the same record type all get
    /// the same schema.
    pub fn register_or_existing(
        &self,
        record_type: Arc<RecordType>,
        schema: Arc<Schema>,
    ) -> Result<Arc<Schema>> {
        let mut state = self.write();
        if let Some(existing) = state
            .by_type
            .get(record_type.as_ref())
            .and_then(|id| state.by_id.get(id))
        {
            return Ok(existing.schema.clone());
        }
        if !state.check_binding(&record_type, &schema)? {
            state.bind(record_type, schema.clone());
        }
        Ok(schema)
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered schema ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids = self.read().by_id.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        ids
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
