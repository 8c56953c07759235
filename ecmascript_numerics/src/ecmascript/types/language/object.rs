// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use ahash::AHashMap;

use super::{Function, IntoValue, String, Symbol, Value};
use crate::{
    Heap,
    ecmascript::{
        builtins::{ArrayBuffer, DataView, error::Error},
        execution::Agent,
    },
    heap::{CreateHeapData, indexes::ObjectIndex},
};

/// ### [6.1.7.1 Property Attributes](https://tc39.es/ecma262/#sec-property-attributes)
///
/// Only the parts of a property the numeric core observes are stored: a
/// data property's value or an accessor property's getter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyStorage {
    Data(Value),
    Accessor { get: Option<Function> },
}

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// A property key is either a String value or a Symbol value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, key: &str) -> Self {
        PropertyKey::String(String::from_str(agent, key))
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectHeapData {
    pub(crate) properties: AHashMap<PropertyKey, PropertyStorage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct OrdinaryObject(ObjectIndex);

impl OrdinaryObject {
    pub(crate) const fn _def() -> Self {
        Self(ObjectIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub(crate) fn property_storage(self, agent: &Agent, key: PropertyKey) -> Option<PropertyStorage> {
        agent[self].properties.get(&key).copied()
    }
}

impl From<ObjectIndex> for OrdinaryObject {
    fn from(value: ObjectIndex) -> Self {
        Self(value)
    }
}

impl IntoValue for OrdinaryObject {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl Index<OrdinaryObject> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        self.heap
            .objects
            .get(index.get_index())
            .expect("Object out of bounds")
    }
}

impl IndexMut<OrdinaryObject> for Agent {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        self.heap
            .objects
            .get_mut(index.get_index())
            .expect("Object out of bounds")
    }
}

impl CreateHeapData<ObjectHeapData, OrdinaryObject> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> OrdinaryObject {
        self.objects.push(data);
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}

/// Every value of the Object type, whatever its internal slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Object(OrdinaryObject),
    Function(Function),
    ArrayBuffer(ArrayBuffer),
    DataView(DataView),
    Error(Error),
}

pub trait IntoObject
where
    Self: Sized + Copy,
{
    fn into_object(self) -> Object;
}

impl IntoObject for Object {
    fn into_object(self) -> Object {
        self
    }
}

impl IntoObject for OrdinaryObject {
    fn into_object(self) -> Object {
        Object::Object(self)
    }
}

impl IntoObject for Function {
    fn into_object(self) -> Object {
        Object::Function(self)
    }
}

impl Object {
    /// The ordinary object holding this object's own properties, if it has
    /// any. Exotic objects without a backing object have no own properties.
    pub(crate) fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        match self {
            Object::Object(object) => Some(object),
            Object::Function(function) => agent[function].object_index,
            Object::ArrayBuffer(_) | Object::DataView(_) | Object::Error(_) => None,
        }
    }
}

impl IntoValue for Object {
    fn into_value(self) -> Value {
        match self {
            Object::Object(data) => Value::Object(data),
            Object::Function(data) => Value::Function(data),
            Object::ArrayBuffer(data) => Value::ArrayBuffer(data),
            Object::DataView(data) => Value::DataView(data),
            Object::Error(data) => Value::Error(data),
        }
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        value.into_value()
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(data) => Ok(Object::Object(data)),
            Value::Function(data) => Ok(Object::Function(data)),
            Value::ArrayBuffer(data) => Ok(Object::ArrayBuffer(data)),
            Value::DataView(data) => Ok(Object::DataView(data)),
            Value::Error(data) => Ok(Object::Error(data)),
            Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::String(_)
            | Value::Symbol(_)
            | Value::Number(_)
            | Value::BigInt(_) => Err(()),
        }
    }
}
