// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod bigint;
mod function;
mod into_value;
mod number;
mod numeric;
mod object;
mod string;
mod symbol;
mod value;

pub use bigint::{BigInt, BigIntHeapData, BigIntSign};
pub(crate) use bigint::f64_to_exact_bigint;
pub use function::{Function, FunctionHeapData};
pub use into_value::IntoValue;
pub use number::Number;
pub(crate) use number::{f32_to_f64_preserving_nan, f64_to_f32_preserving_nan};
pub use numeric::Numeric;
pub use object::{IntoObject, Object, ObjectHeapData, OrdinaryObject, PropertyKey, PropertyStorage};
pub use string::{String, StringHeapData};
pub use symbol::{Symbol, SymbolHeapData};
pub use value::Value;
