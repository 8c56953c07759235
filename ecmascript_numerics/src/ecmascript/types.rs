// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod spec;

pub use language::{
    BigInt, BigIntHeapData, BigIntSign, Function, FunctionHeapData, IntoObject, IntoValue,
    Number, Numeric, Object, ObjectHeapData, OrdinaryObject, PropertyKey, PropertyStorage,
    String, StringHeapData, Symbol, SymbolHeapData, Value,
};
pub(crate) use language::{
    f32_to_f64_preserving_nan, f64_to_exact_bigint, f64_to_f32_preserving_nan,
};
pub use spec::DataBlock;
