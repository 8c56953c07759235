// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # [10 Ordinary and Exotic Objects Behaviours](https://tc39.es/ecma262/#sec-ordinary-and-exotic-objects-behaviours)
//!
//! The builtin objects of the numeric core: the BigInt constructor, the
//! ArrayBuffer object and DataView together with its prototype. Objects with
//! extra internal slots (ArrayBuffers, DataViews and Errors) live in their
//! own heap vectors and have no ordinary properties of their own.

pub(crate) mod array_buffer;
pub(crate) mod builtin_function;
pub(crate) mod data_view;
pub(crate) mod error;
pub(crate) mod numbers_and_dates;
pub(crate) mod structured_data;

pub use array_buffer::{ArrayBuffer, ArrayBufferHeapData};
pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunctionArgs, BuiltinGetter, ClosureFn,
    ConstructorFn, RegularFn, create_builtin_function, create_closure_function,
};
pub use data_view::DataView;
pub use error::{Error, ErrorHeapData};
