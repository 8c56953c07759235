// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use super::{IntoValue, String, Value};
use crate::{
    Heap,
    ecmascript::execution::Agent,
    heap::{CreateHeapData, indexes::SymbolIndex},
};

#[derive(Debug, Clone, Copy)]
pub struct SymbolHeapData {
    pub(crate) descriptor: Option<String>,
}

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Symbol(SymbolIndex);

impl Symbol {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Allocates a new, unique symbol.
    pub fn new(agent: &mut Agent, description: Option<&str>) -> Self {
        let descriptor = description.map(|description| String::from_str(agent, description));
        agent.heap.create(SymbolHeapData { descriptor })
    }

    pub fn description(self, agent: &Agent) -> Option<&str> {
        agent[self]
            .descriptor
            .map(|descriptor| descriptor.as_str(agent))
    }
}

impl From<SymbolIndex> for Symbol {
    fn from(value: SymbolIndex) -> Self {
        Self(value)
    }
}

impl IntoValue for Symbol {
    fn into_value(self) -> Value {
        Value::Symbol(self)
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        self.heap
            .symbols
            .get(index.get_index())
            .expect("Symbol out of bounds")
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(data);
        Symbol(SymbolIndex::last(&self.symbols))
    }
}
