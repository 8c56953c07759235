// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric coercions, arbitrary-precision integers and byte-addressable
//! buffer views for the Nova JavaScript engine.
//!
//! The crate implements the ECMAScript type conversion abstract operations
//! (ToPrimitive, ToNumber, ToBigInt, ToIndex and friends), the BigInt
//! constructor with `BigInt.asIntN` and `BigInt.asUintN`, and the DataView
//! constructor and prototype methods on top of a fixed-length ArrayBuffer.
//!
//! Every coercion may call back into embedder-supplied functions, which can
//! in turn detach the ArrayBuffer an operation is working on. Detachment is
//! only ever checked at the points ECMA-262 mandates.

pub mod ecmascript;
pub mod heap;

pub use heap::Heap;
