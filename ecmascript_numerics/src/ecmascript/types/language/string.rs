// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use super::{IntoValue, Value};
use crate::{
    Heap,
    ecmascript::execution::Agent,
    heap::indexes::StringIndex,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringHeapData {
    pub(crate) data: std::string::String,
}

impl StringHeapData {
    pub fn as_str(&self) -> &str {
        &self.data
    }
}

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// Strings are interned, so two `String` handles are equal exactly when
/// their contents are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct String(StringIndex);

impl String {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn from_str(agent: &mut Agent, message: &str) -> Self {
        agent.heap.create_string(message)
    }

    pub fn as_str(self, agent: &Agent) -> &str {
        agent[self].as_str()
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].data.is_empty()
    }
}

impl From<StringIndex> for String {
    fn from(value: StringIndex) -> Self {
        Self(value)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl TryFrom<Value> for String {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(()),
        }
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        &self.heap[index]
    }
}

impl Index<String> for Heap {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        self.strings
            .get(index.get_index())
            .expect("String out of bounds")
    }
}
