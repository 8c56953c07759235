// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use super::{IntoValue, OrdinaryObject, String, Value};
use crate::{
    Heap,
    ecmascript::{builtins::Behaviour, execution::Agent},
    heap::{CreateHeapData, indexes::FunctionIndex},
};

#[derive(Debug, Clone)]
pub struct FunctionHeapData {
    /// Own properties beyond `length` and `name`, created lazily.
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) name: String,
    pub(crate) length: u8,
    pub(crate) behaviour: Behaviour,
}

/// A callable object: a builtin function or an embedder-provided closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Function(FunctionIndex);

impl Function {
    pub(crate) const fn _def() -> Self {
        Self(FunctionIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn name(self, agent: &Agent) -> &str {
        agent[self].name.as_str(agent)
    }

    pub fn length(self, agent: &Agent) -> u8 {
        agent[self].length
    }

    pub fn is_constructor(self, agent: &Agent) -> bool {
        agent[self].behaviour.is_constructor()
    }
}

impl From<FunctionIndex> for Function {
    fn from(value: FunctionIndex) -> Self {
        Self(value)
    }
}

impl IntoValue for Function {
    fn into_value(self) -> Value {
        Value::Function(self)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl TryFrom<Value> for Function {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Function(f) => Ok(f),
            _ => Err(()),
        }
    }
}

impl Index<Function> for Agent {
    type Output = FunctionHeapData;

    fn index(&self, index: Function) -> &Self::Output {
        self.heap
            .functions
            .get(index.get_index())
            .expect("Function out of bounds")
    }
}

impl IndexMut<Function> for Agent {
    fn index_mut(&mut self, index: Function) -> &mut Self::Output {
        self.heap
            .functions
            .get_mut(index.get_index())
            .expect("Function out of bounds")
    }
}

impl CreateHeapData<FunctionHeapData, Function> for Heap {
    fn create(&mut self, data: FunctionHeapData) -> Function {
        self.functions.push(data);
        Function(FunctionIndex::last(&self.functions))
    }
}
