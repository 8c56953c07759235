// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;

use std::ops::Index;

use crate::{
    Heap,
    ecmascript::{
        execution::{Agent, ExceptionType},
        types::{IntoObject, IntoValue, Object, Value},
    },
    heap::{CreateHeapData, indexes::ErrorIndex},
};
pub use data::ErrorHeapData;

/// ### [20.5 Error Objects](https://tc39.es/ecma262/#sec-error-objects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Error(ErrorIndex);

impl Error {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn kind(self, agent: &Agent) -> ExceptionType {
        agent[self].kind
    }

    pub fn message(self, agent: &Agent) -> Option<&str> {
        agent[self].message.map(|message| message.as_str(agent))
    }
}

impl IntoValue for Error {
    fn into_value(self) -> Value {
        Value::Error(self)
    }
}

impl IntoObject for Error {
    fn into_object(self) -> Object {
        Object::Error(self)
    }
}

impl From<Error> for Value {
    fn from(value: Error) -> Self {
        Value::Error(value)
    }
}

impl TryFrom<Value> for Error {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Error(error) => Ok(error),
            _ => Err(()),
        }
    }
}

impl Index<Error> for Agent {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        self.heap
            .errors
            .get(index.get_index())
            .expect("Error out of bounds")
    }
}

impl CreateHeapData<ErrorHeapData, Error> for Heap {
    fn create(&mut self, data: ErrorHeapData) -> Error {
        self.errors.push(data);
        Error(ErrorIndex::last(&self.errors))
    }
}
