// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [25.3 DataView Objects](https://tc39.es/ecma262/#sec-dataview-objects)

use std::ops::Index;

use crate::{
    Heap,
    ecmascript::{
        builtins::ArrayBuffer,
        execution::Agent,
        types::{IntoObject, IntoValue, Object, Value},
    },
    heap::{CreateHeapData, indexes::DataViewIndex},
};

use self::data::DataViewHeapData;

pub(crate) mod abstract_operations;
pub(crate) mod data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DataView(DataViewIndex);

impl DataView {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// The view's `[[ByteLength]]` as recorded at construction.
    #[inline]
    pub fn byte_length(self, agent: &Agent) -> usize {
        agent[self].byte_length
    }

    /// The view's `[[ByteOffset]]` as recorded at construction.
    #[inline]
    pub fn byte_offset(self, agent: &Agent) -> usize {
        agent[self].byte_offset
    }

    #[inline]
    pub fn get_viewed_array_buffer(self, agent: &Agent) -> ArrayBuffer {
        agent[self].viewed_array_buffer
    }
}

impl From<DataViewIndex> for DataView {
    fn from(value: DataViewIndex) -> Self {
        Self(value)
    }
}

impl IntoValue for DataView {
    fn into_value(self) -> Value {
        self.into()
    }
}

impl IntoObject for DataView {
    fn into_object(self) -> Object {
        self.into()
    }
}

impl From<DataView> for Value {
    fn from(val: DataView) -> Self {
        Value::DataView(val)
    }
}

impl From<DataView> for Object {
    fn from(val: DataView) -> Self {
        Object::DataView(val)
    }
}

impl TryFrom<Value> for DataView {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::DataView(view) => Ok(view),
            _ => Err(()),
        }
    }
}

impl Index<DataView> for Agent {
    type Output = DataViewHeapData;

    fn index(&self, index: DataView) -> &Self::Output {
        &self.heap[index]
    }
}

impl Index<DataView> for Heap {
    type Output = DataViewHeapData;

    fn index(&self, index: DataView) -> &Self::Output {
        self.data_views
            .get(index.get_index())
            .expect("DataView out of bounds")
    }
}

impl CreateHeapData<DataViewHeapData, DataView> for Heap {
    fn create(&mut self, data: DataViewHeapData) -> DataView {
        self.data_views.push(data);
        DataView(DataViewIndex::last(&self.data_views))
    }
}
