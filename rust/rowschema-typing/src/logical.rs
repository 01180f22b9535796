//! Logical types: the extension point for native types outside the built-in
//! primitive set.
//!
//! A logical type maps a language type onto a simpler representation type
//! under a stable urn. Implementations are registered once per
//! [`LogicalTypeRegistry`]; registration copies the implementation's
//! associated functions into a [`LogicalTypeEntry`], so dispatch is a plain
//! table lookup.
//!
//! # Thread Safety
//!
//! The registry guards its three indexes with a single `RwLock` and updates
//! all of them under one write lock.

use std::{
    any::TypeId,
    sync::{Arc, PoisonError, RwLock},
};

use ahash::AHashMap;
use rowschema_common::{
    Result,
    error::{Error, ErrorKind},
};
use rowschema_format::defs::schema as proto;

use crate::{
    native::{NativeType, NativeTyping, Primitive},
    row_type::RecordType,
    value::{Timestamp, Value},
};

/// Urn of the built-in microsecond instant logical type.
pub const MICROS_INSTANT_URN: &str = "rowschema:logical_type:micros_instant:v1";

/// Urn of the sentinel standing for "any type". It is emitted for native
/// types that no logical type claims.
pub const ANY_URN: &str = "rowschema:logical_type:any:v1";

/// A logical type implementation.
pub trait LogicalType: 'static {
    /// Globally unique, stable identifier.
    fn urn() -> &'static str;

    /// The native type this logical type describes.
    fn language_type() -> NativeType;

    /// The type values are carried as on the wire.
    fn representation_type() -> NativeType;

    /// Type of the argument refining this logical type, if it takes one.
    fn argument_type() -> Option<NativeType> {
        None
    }

    fn to_representation(value: &Value) -> Result<Value>;

    fn to_language(value: &Value) -> Result<Value>;
}

/// A registered logical type: plain data plus conversion functions.
#[derive(Debug, Clone)]
pub struct LogicalTypeEntry {
    pub urn: String,
    pub language_type: NativeType,
    pub representation_type: NativeType,
    pub argument_type: Option<NativeType>,
    pub to_representation: fn(&Value) -> Result<Value>,
    pub to_language: fn(&Value) -> Result<Value>,
    implementation: Option<TypeId>,
}

impl LogicalTypeEntry {
    /// Builds a table entry for an implementation without a backing
    /// [`LogicalType`] type.
    pub fn new(
        urn: impl Into<String>,
        language_type: NativeType,
        representation_type: NativeType,
        to_representation: fn(&Value) -> Result<Value>,
        to_language: fn(&Value) -> Result<Value>,
    ) -> LogicalTypeEntry {
        LogicalTypeEntry {
            urn: urn.into(),
            language_type,
            representation_type,
            argument_type: None,
            to_representation,
            to_language,
            implementation: None,
        }
    }

    pub fn of<L: LogicalType>() -> LogicalTypeEntry {
        LogicalTypeEntry {
            urn: L::urn().to_string(),
            language_type: L::language_type(),
            representation_type: L::representation_type(),
            argument_type: L::argument_type(),
            to_representation: L::to_representation,
            to_language: L::to_language,
            implementation: Some(TypeId::of::<L>()),
        }
    }

    pub fn with_argument_type(mut self, argument_type: NativeType) -> Self {
        self.argument_type = Some(argument_type);
        self
    }
}

#[derive(Default)]
struct Indexes {
    by_urn: AHashMap<String, Arc<LogicalTypeEntry>>,
    by_implementation: AHashMap<TypeId, String>,
    by_language_type: AHashMap<NativeType, String>,
}

/// Urn-indexed table of logical types.
#[derive(Default)]
pub struct LogicalTypeRegistry {
    indexes: RwLock<Indexes>,
}

impl LogicalTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> LogicalTypeRegistry {
        Default::default()
    }

    /// Creates a registry holding the built-in logical types.
    pub fn with_builtins() -> Result<LogicalTypeRegistry> {
        let registry = LogicalTypeRegistry::new();
        registry.register::<MicrosInstant>()?;
        Ok(registry)
    }

    /// Registers the logical type `L`.
    ///
    /// # Errors
    ///
    /// `DuplicateUrn` if a logical type with the same urn is already
    /// registered.
    pub fn register<L: LogicalType>(&self) -> Result<()> {
        self.register_entry(LogicalTypeEntry::of::<L>())
    }

    /// Registers a table-built logical type entry.
    pub fn register_entry(&self, entry: LogicalTypeEntry) -> Result<()> {
        let mut indexes = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
        if indexes.by_urn.contains_key(&entry.urn) {
            log::warn!("rejecting duplicate logical type urn {}", entry.urn);
            return Err(ErrorKind::DuplicateUrn { urn: entry.urn }.into());
        }
        log::debug!(
            "registering logical type {} for {}",
            entry.urn,
            entry.language_type
        );
        if let Some(implementation) = entry.implementation {
            indexes
                .by_implementation
                .insert(implementation, entry.urn.clone());
        }
        indexes
            .by_language_type
            .insert(entry.language_type.clone(), entry.urn.clone());
        indexes.by_urn.insert(entry.urn.clone(), Arc::new(entry));
        Ok(())
    }

    pub fn get_by_urn(&self, urn: &str) -> Option<Arc<LogicalTypeEntry>> {
        let indexes = self.indexes.read().unwrap_or_else(PoisonError::into_inner);
        indexes.by_urn.get(urn).cloned()
    }

    pub fn get_urn_by_implementation<L: LogicalType>(&self) -> Option<String> {
        let indexes = self.indexes.read().unwrap_or_else(PoisonError::into_inner);
        indexes.by_implementation.get(&TypeId::of::<L>()).cloned()
    }

    pub fn get_by_language_type(
        &self,
        language_type: &NativeType,
    ) -> Option<Arc<LogicalTypeEntry>> {
        let indexes = self.indexes.read().unwrap_or_else(PoisonError::into_inner);
        let entry = indexes
            .by_language_type
            .get(language_type)
            .and_then(|urn| indexes.by_urn.get(urn))
            .cloned();
        log::trace!(
            "logical type lookup for {language_type}: {:?}",
            entry.as_ref().map(|e| e.urn.as_str())
        );
        entry
    }

    /// Finds the logical type claiming `language_type`.
    ///
    /// # Errors
    ///
    /// `UnsupportedType` when none does.
    pub fn from_typing(&self, language_type: &NativeType) -> Result<Arc<LogicalTypeEntry>> {
        self.get_by_language_type(language_type)
            .ok_or_else(|| Error::unsupported_type(language_type.to_string()))
    }

    /// Finds the logical type named by a wire logical type.
    ///
    /// # Errors
    ///
    /// `UnknownUrn` when the urn is not registered.
    pub fn from_runner_api(&self, logical: &proto::LogicalType) -> Result<Arc<LogicalTypeEntry>> {
        self.get_by_urn(&logical.urn).ok_or_else(|| {
            ErrorKind::UnknownUrn {
                urn: logical.urn.clone(),
            }
            .into()
        })
    }

    /// Registered urns, sorted.
    pub fn urns(&self) -> Vec<String> {
        let indexes = self.indexes.read().unwrap_or_else(PoisonError::into_inner);
        let mut urns = indexes.by_urn.keys().cloned().collect::<Vec<_>>();
        urns.sort();
        urns
    }

    pub fn len(&self) -> usize {
        self.indexes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_urn
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Microsecond-precision instant, carried as whole seconds plus
/// microseconds (floor division, so `micros` is never negative).
pub struct MicrosInstant;

impl MicrosInstant {
    pub fn representation_record() -> RecordType {
        RecordType::new(
            "MicrosInstantRepresentation",
            vec![
                ("seconds".to_string(), Primitive::I64.into()),
                ("micros".to_string(), Primitive::I64.into()),
            ],
        )
    }
}

impl LogicalType for MicrosInstant {
    fn urn() -> &'static str {
        MICROS_INSTANT_URN
    }

    fn language_type() -> NativeType {
        Timestamp::native_type()
    }

    fn representation_type() -> NativeType {
        NativeType::record(MicrosInstant::representation_record())
    }

    fn to_representation(value: &Value) -> Result<Value> {
        match value {
            Value::Timestamp(ts) => Ok(Value::Row(vec![
                Value::Int64(ts.seconds()),
                Value::Int64(ts.subsec_micros()),
            ])),
            other => Err(Error::value_type_mismatch(
                Timestamp::TYPE_NAME,
                other.kind_name(),
            )),
        }
    }

    fn to_language(value: &Value) -> Result<Value> {
        match value {
            Value::Row(slots) => match slots.as_slice() {
                [seconds, micros] => {
                    let (Some(seconds), Some(micros)) = (seconds.as_i64(), micros.as_i64()) else {
                        return Err(Error::value_type_mismatch(
                            "MicrosInstantRepresentation",
                            "row with non-integer slots",
                        ));
                    };
                    Timestamp::from_parts(seconds, micros).map(Value::Timestamp)
                }
                _ => Err(ErrorKind::ArityMismatch {
                    record: "MicrosInstantRepresentation".to_string(),
                    expected: 2,
                    actual: slots.len(),
                }
                .into()),
            },
            other => Err(Error::value_type_mismatch("row", other.kind_name())),
        }
    }
}
