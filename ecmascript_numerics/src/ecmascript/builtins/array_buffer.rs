// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [25.1 ArrayBuffer Objects](https://tc39.es/ecma262/#sec-arraybuffer-objects)

pub(crate) mod abstract_operations;
mod data;

use std::ops::{Index, IndexMut};

use crate::{
    Heap,
    ecmascript::{
        execution::{Agent, JsResult},
        types::{IntoObject, IntoValue, Object, Value},
    },
    heap::{CreateHeapData, indexes::ArrayBufferIndex},
};
use abstract_operations::{allocate_array_buffer, detach_array_buffer, is_detached_buffer};
pub use abstract_operations::ElementType;
pub use data::ArrayBufferHeapData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ArrayBuffer(ArrayBufferIndex);

impl ArrayBuffer {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Allocates a zero-filled, fixed-length buffer of `byte_length` bytes.
    pub fn new(agent: &mut Agent, byte_length: u64) -> JsResult<Self> {
        allocate_array_buffer(agent, byte_length)
    }

    pub fn is_detached(self, agent: &Agent) -> bool {
        is_detached_buffer(agent, self)
    }

    /// Detaches the buffer. Every later access through a view throws.
    pub fn detach(self, agent: &mut Agent) {
        detach_array_buffer(agent, self)
    }

    /// The current byte length: 0 once detached.
    pub fn byte_length(self, agent: &Agent) -> usize {
        agent[self].byte_length()
    }

    /// The buffer's bytes, or `None` if it is detached.
    pub fn as_slice(self, agent: &Agent) -> Option<&[u8]> {
        agent[self].get_data_block().map(|db| db.as_slice())
    }

    pub fn as_mut_slice(self, agent: &mut Agent) -> Option<&mut [u8]> {
        agent[self].get_data_block_mut().map(|db| db.as_mut_slice())
    }
}

impl From<ArrayBufferIndex> for ArrayBuffer {
    fn from(value: ArrayBufferIndex) -> Self {
        ArrayBuffer(value)
    }
}

impl IntoValue for ArrayBuffer {
    fn into_value(self) -> Value {
        Value::ArrayBuffer(self)
    }
}

impl IntoObject for ArrayBuffer {
    fn into_object(self) -> Object {
        Object::ArrayBuffer(self)
    }
}

impl From<ArrayBuffer> for Value {
    fn from(value: ArrayBuffer) -> Self {
        Value::ArrayBuffer(value)
    }
}

impl From<ArrayBuffer> for Object {
    fn from(value: ArrayBuffer) -> Self {
        Object::ArrayBuffer(value)
    }
}

impl TryFrom<Value> for ArrayBuffer {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::ArrayBuffer(buffer) => Ok(buffer),
            _ => Err(()),
        }
    }
}

impl Index<ArrayBuffer> for Agent {
    type Output = ArrayBufferHeapData;

    fn index(&self, index: ArrayBuffer) -> &Self::Output {
        &self.heap[index]
    }
}

impl IndexMut<ArrayBuffer> for Agent {
    fn index_mut(&mut self, index: ArrayBuffer) -> &mut Self::Output {
        &mut self.heap[index]
    }
}

impl Index<ArrayBuffer> for Heap {
    type Output = ArrayBufferHeapData;

    fn index(&self, index: ArrayBuffer) -> &Self::Output {
        self.array_buffers
            .get(index.get_index())
            .expect("ArrayBuffer out of bounds")
    }
}

impl IndexMut<ArrayBuffer> for Heap {
    fn index_mut(&mut self, index: ArrayBuffer) -> &mut Self::Output {
        self.array_buffers
            .get_mut(index.get_index())
            .expect("ArrayBuffer out of bounds")
    }
}

impl CreateHeapData<ArrayBufferHeapData, ArrayBuffer> for Heap {
    fn create(&mut self, data: ArrayBufferHeapData) -> ArrayBuffer {
        self.array_buffers.push(data);
        ArrayBuffer(ArrayBufferIndex::last(&self.array_buffers))
    }
}
