// src/domain/article/field.rs
//! Attributes guarded by a runtime type check.
//!
//! An [`ArticleField`] describes one named attribute and the type it accepts.
//! It keeps no values itself: each owner carries its own [`FieldSlots`], and
//! the field reads and writes the slot named after its attribute. One field
//! definition can therefore be shared by every instance of the owning type.
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use once_cell::sync::OnceCell;

use crate::domain::errors::{DomainError, DomainResult};

/// A type-erased value that remembers the name of its concrete type.
pub struct FieldValue {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl FieldValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: short_type_name::<T>(),
            value: Box::new(value),
        }
    }

    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Per-instance storage for guarded attributes, keyed by attribute name.
#[derive(Debug, Default)]
pub struct FieldSlots {
    slots: HashMap<String, FieldValue>,
}

impl FieldSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.slots.contains_key(attribute)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn get(&self, attribute: &str) -> Option<&FieldValue> {
        self.slots.get(attribute)
    }

    fn insert(&mut self, attribute: &str, value: FieldValue) {
        self.slots.insert(attribute.to_owned(), value);
    }
}

/// Implemented by anything that stores guarded attributes.
pub trait FieldOwner {
    fn field_slots(&self) -> &FieldSlots;
    fn field_slots_mut(&mut self) -> &mut FieldSlots;
}

impl FieldOwner for FieldSlots {
    fn field_slots(&self) -> &FieldSlots {
        self
    }

    fn field_slots_mut(&mut self) -> &mut FieldSlots {
        self
    }
}

/// A named attribute that only accepts values of type `T`.
pub struct ArticleField<T> {
    name: OnceCell<String>,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> ArticleField<T> {
    /// Creates a field already bound to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let field = Self::unbound();
        field.bind(name);
        field
    }

    pub const fn unbound() -> Self {
        Self {
            name: OnceCell::new(),
            _type: PhantomData,
        }
    }

    /// Binds the field to an attribute name. Only the first bind takes
    /// effect; returns whether this call did the binding.
    pub fn bind(&self, name: impl Into<String>) -> bool {
        self.name.set(name.into()).is_ok()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    pub fn expected_type(&self) -> &'static str {
        short_type_name::<T>()
    }

    pub fn is_set<O: FieldOwner + ?Sized>(&self, owner: &O) -> bool {
        self.name()
            .is_some_and(|name| owner.field_slots().contains(name))
    }

    pub fn get<'a, O: FieldOwner + ?Sized>(&self, owner: &'a O) -> DomainResult<&'a T> {
        let name = self.bound_name()?;
        owner
            .field_slots()
            .get(name)
            .and_then(|stored| stored.value.downcast_ref::<T>())
            .ok_or_else(|| DomainError::not_initialized(name))
    }

    /// Stores `value` if it holds a `T`; otherwise the slot is left untouched.
    pub fn set<O: FieldOwner + ?Sized>(&self, owner: &mut O, value: FieldValue) -> DomainResult<()> {
        let name = self.bound_name()?;
        if !value.is::<T>() {
            tracing::debug!(
                attribute = name,
                expected = self.expected_type(),
                actual = value.type_name(),
                "rejected field write"
            );
            return Err(DomainError::TypeMismatch {
                expected: self.expected_type(),
                attribute: name.to_owned(),
                actual: value.type_name(),
            });
        }
        owner.field_slots_mut().insert(name, value);
        Ok(())
    }

    pub fn set_value<O: FieldOwner + ?Sized>(&self, owner: &mut O, value: T) -> DomainResult<()> {
        self.set(owner, FieldValue::new(value))
    }

    fn bound_name(&self) -> DomainResult<&str> {
        self.name().ok_or(DomainError::Unbound)
    }
}

impl<T: Any + Send + Sync> fmt::Debug for ArticleField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleField")
            .field("name", &self.name())
            .field("type", &self.expected_type())
            .finish()
    }
}

/// `alloc::string::String` -> `String`; generic arguments are left alone.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path_end = full.find('<').unwrap_or(full.len());
    match full[..path_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
