//! Host-side adapter registry.
//!
//! The generated registration type installs every adapter of a module into
//! an [`AdapterRegistry`] once at startup. After that, host code can encode
//! and decode by static type, or validate a raw scalar knowing only the
//! type's name (e.g. from a schema or a route parameter).

use std::any::{Any, TypeId};
use std::fmt;

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::adapter::ScalarAdapter;
use crate::error::{DecodeError, RegistryError};
use crate::kind::ValueKind;
use crate::scalar::Scalar;
use crate::value::ValueType;

/// Something that registers adapters, typically a generated registration
/// type. Hosts call [`AdapterRegistry::install`] with it once.
pub trait Installable {
    fn install_into(&self, registry: &mut AdapterRegistry) -> Result<(), RegistryError>;
}

/// Type-erased view of a registered adapter.
trait ErasedAdapter: Send + Sync {
    /// The boxed `dyn ScalarAdapter<Value = V>`, for typed access.
    fn typed(&self) -> &dyn Any;

    /// Decode and re-encode, yielding the canonical scalar.
    fn canonicalize(&self, scalar: &Scalar) -> Result<Scalar, DecodeError>;
}

struct Erased<V: ValueType> {
    adapter: Box<dyn ScalarAdapter<Value = V>>,
}

impl<V: ValueType> ErasedAdapter for Erased<V> {
    fn typed(&self) -> &dyn Any {
        &self.adapter
    }

    fn canonicalize(&self, scalar: &Scalar) -> Result<Scalar, DecodeError> {
        let value = self.adapter.decode(scalar)?;
        Ok(self.adapter.encode(&value))
    }
}

struct Entry {
    type_name: &'static str,
    kind: ValueKind,
    adapter: Box<dyn ErasedAdapter>,
}

/// Adapters keyed by value type name and by `TypeId`.
#[derive(Default)]
pub struct AdapterRegistry {
    entries: Vec<Entry>,
    by_name: FxHashMap<&'static str, usize>,
    by_type: FxHashMap<TypeId, usize>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        AdapterRegistry::default()
    }

    /// A registry with `installable` already installed.
    pub fn with(installable: &impl Installable) -> Result<Self, RegistryError> {
        let mut registry = AdapterRegistry::new();
        registry.install(installable)?;
        Ok(registry)
    }

    /// Register one adapter. A second adapter for the same type name is
    /// refused; the first one stays in place.
    pub fn register<A: ScalarAdapter>(&mut self, adapter: A) -> Result<(), RegistryError> {
        let type_name = <A::Value as ValueType>::NAME;
        let kind = <A::Value as ValueType>::KIND;
        let type_id = TypeId::of::<A::Value>();

        if self.by_name.contains_key(type_name) || self.by_type.contains_key(&type_id) {
            warn!(type_name, "adapter already registered");
            return Err(RegistryError::AlreadyRegistered { type_name });
        }

        let index = self.entries.len();
        self.entries.push(Entry {
            type_name,
            kind,
            adapter: Box::new(Erased::<A::Value> {
                adapter: Box::new(adapter),
            }),
        });
        self.by_name.insert(type_name, index);
        self.by_type.insert(type_id, index);
        debug!(type_name, %kind, "registered adapter");
        Ok(())
    }

    pub fn install(
        &mut self,
        installable: &(impl Installable + ?Sized),
    ) -> Result<(), RegistryError> {
        installable.install_into(self)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.by_name.contains_key(type_name)
    }

    pub fn contains_type<T: ValueType>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.type_name)
    }

    pub fn kind_of(&self, type_name: &str) -> Option<ValueKind> {
        self.entry(type_name).map(|entry| entry.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, type_name: &str) -> Option<&Entry> {
        self.by_name.get(type_name).map(|&index| &self.entries[index])
    }

    fn adapter<T: ValueType>(&self) -> Result<&dyn ScalarAdapter<Value = T>, RegistryError> {
        let index = self
            .by_type
            .get(&TypeId::of::<T>())
            .ok_or_else(|| RegistryError::UnknownType {
                type_name: T::NAME.to_owned(),
            })?;
        let entry = &self.entries[*index];
        entry
            .adapter
            .typed()
            .downcast_ref::<Box<dyn ScalarAdapter<Value = T>>>()
            .map(AsRef::as_ref)
            .ok_or(RegistryError::TypeMismatch {
                type_name: entry.type_name,
            })
    }

    pub fn encode<T: ValueType>(&self, value: &T) -> Result<Scalar, RegistryError> {
        Ok(self.adapter::<T>()?.encode(value))
    }

    pub fn decode<T: ValueType>(&self, scalar: &Scalar) -> Result<T, RegistryError> {
        Ok(self.adapter::<T>()?.decode(scalar)?)
    }

    pub fn encode_json<T: ValueType>(&self, value: &T) -> Result<Value, RegistryError> {
        self.encode(value).map(Value::from)
    }

    pub fn decode_json<T: ValueType>(&self, json: &Value) -> Result<T, RegistryError> {
        self.decode(&Scalar::try_from(json)?)
    }

    /// Validate `scalar` as a value of the named type and return its
    /// canonical encoding.
    pub fn decode_by_name(
        &self,
        type_name: &str,
        scalar: &Scalar,
    ) -> Result<Scalar, RegistryError> {
        let entry = self
            .entry(type_name)
            .ok_or_else(|| RegistryError::UnknownType {
                type_name: type_name.to_owned(),
            })?;
        Ok(entry.adapter.canonicalize(scalar)?)
    }

    /// [`decode_by_name`](Self::decode_by_name) over JSON.
    pub fn validate_json(&self, type_name: &str, json: &Value) -> Result<Value, RegistryError> {
        let scalar = Scalar::try_from(json)?;
        self.decode_by_name(type_name, &scalar).map(Value::from)
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.iter().map(|e| (e.type_name, e.kind));
        f.debug_map().entries(entries).finish()
    }
}
