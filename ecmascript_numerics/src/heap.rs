// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod indexes;

use ahash::AHashMap;

use self::indexes::{StringIndex, SymbolIndex};
use crate::ecmascript::{
    builtins::{
        array_buffer::ArrayBufferHeapData, data_view::data::DataViewHeapData,
        error::ErrorHeapData,
    },
    types::{
        BigIntHeapData, FunctionHeapData, ObjectHeapData, String, StringHeapData, Symbol,
        SymbolHeapData,
    },
};

/// Arena storage for every heap-allocated ECMAScript value.
///
/// Values are never freed: there is no garbage collector at this layer, so
/// handles stay valid for the lifetime of the heap.
#[derive(Debug)]
pub struct Heap {
    pub(crate) array_buffers: Vec<ArrayBufferHeapData>,
    pub(crate) bigints: Vec<BigIntHeapData>,
    pub(crate) data_views: Vec<DataViewHeapData>,
    pub(crate) errors: Vec<ErrorHeapData>,
    pub(crate) functions: Vec<FunctionHeapData>,
    pub(crate) objects: Vec<ObjectHeapData>,
    pub(crate) strings: Vec<StringHeapData>,
    /// Interning table: equal string contents always share one index, so
    /// property keys can be compared by index.
    pub(crate) string_lookup: AHashMap<std::string::String, StringIndex>,
    pub(crate) symbols: Vec<SymbolHeapData>,
}

pub trait CreateHeapData<T, F> {
    /// Creates a [`Value`] from the given data. Allocating the data is **not**
    /// guaranteed.
    ///
    /// [`Value`]: crate::ecmascript::types::Value
    fn create(&mut self, data: T) -> F;
}

/// Well-known symbols, allocated in this order when the heap is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WellKnownSymbolIndexes {
    ToPrimitive,
}

impl WellKnownSymbolIndexes {
    const fn description(self) -> &'static str {
        match self {
            WellKnownSymbolIndexes::ToPrimitive => "Symbol.toPrimitive",
        }
    }
}

impl From<WellKnownSymbolIndexes> for Symbol {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Symbol::from(SymbolIndex::from_u32_index(value as u32))
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        let mut heap = Self {
            array_buffers: Vec::with_capacity(16),
            bigints: Vec::with_capacity(64),
            data_views: Vec::with_capacity(16),
            errors: Vec::with_capacity(16),
            functions: Vec::with_capacity(32),
            objects: Vec::with_capacity(32),
            strings: Vec::with_capacity(64),
            string_lookup: AHashMap::with_capacity(64),
            symbols: Vec::with_capacity(8),
        };
        for well_known in [WellKnownSymbolIndexes::ToPrimitive] {
            let descriptor = heap.create_string(well_known.description());
            heap.symbols.push(SymbolHeapData {
                descriptor: Some(descriptor),
            });
            debug_assert_eq!(heap.symbols.len() - 1, well_known as usize);
        }
        heap
    }

    /// Returns the interned string for `message`, allocating it on first use.
    pub(crate) fn create_string(&mut self, message: &str) -> String {
        if let Some(index) = self.string_lookup.get(message) {
            return String::from(*index);
        }
        self.strings.push(StringHeapData {
            data: message.to_owned(),
        });
        let index = StringIndex::last(&self.strings);
        self.string_lookup.insert(message.to_owned(), index);
        String::from(index)
    }
}

#[cfg(test)]
mod test {
    use super::{Heap, WellKnownSymbolIndexes};
    use crate::ecmascript::types::Symbol;

    #[test]
    fn strings_are_interned() {
        let mut heap = Heap::new();
        let a = heap.create_string("valueOf");
        let b = heap.create_string("valueOf");
        let c = heap.create_string("toString");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn well_known_symbols_are_preallocated() {
        let heap = Heap::new();
        let symbol = Symbol::from(WellKnownSymbolIndexes::ToPrimitive);
        let descriptor = heap.symbols[symbol.get_index()].descriptor.unwrap();
        assert_eq!(
            heap.strings[descriptor.get_index()].as_str(),
            "Symbol.toPrimitive"
        );
    }
}
