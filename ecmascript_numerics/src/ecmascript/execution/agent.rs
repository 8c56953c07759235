// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Notes
//!
//! - This is inspired by and/or copied from Kiesel engine:
//!   Copyright (c) 2023-2024 Linus Groh

use std::fmt;

use super::Intrinsics;
use crate::{
    Heap,
    ecmascript::{
        builtins::error::{Error, ErrorHeapData},
        types::{String, Value},
    },
    heap::CreateHeapData,
};

/// Agent configuration, fixed for the lifetime of the [`Agent`].
#[derive(Debug, Clone)]
pub struct Options {
    /// The Agent Record's `[[LittleEndian]]` field. Used by buffer reads and
    /// writes that do not receive an explicit byte order.
    pub little_endian: bool,
    /// Largest Data Block `CreateByteDataBlock` is willing to allocate.
    pub max_array_buffer_byte_length: u64,
    /// Largest bit length any BigInt value may reach.
    pub max_bigint_bits: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            little_endian: cfg!(target_endian = "little"),
            max_array_buffer_byte_length: u32::MAX as u64,
            max_bigint_bits: 1 << 30,
        }
    }
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// A thrown ECMAScript value.
///
/// Values thrown by embedder callbacks are carried through unchanged; errors
/// raised by the engine itself are [`Error`] objects.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    /// The kind of engine error, or `None` if a non-Error value was thrown.
    pub fn exception_type(self, agent: &Agent) -> Option<ExceptionType> {
        match self.0 {
            Value::Error(error) => Some(agent[error].kind),
            _ => None,
        }
    }

    pub fn message(self, agent: &Agent) -> Option<&str> {
        match self.0 {
            Value::Error(error) => agent[error].message.map(|message| message.as_str(agent)),
            _ => None,
        }
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    pub(crate) intrinsics: Intrinsics,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Agent {
    pub fn new(options: Options) -> Self {
        let mut agent = Self {
            heap: Heap::new(),
            options,
            intrinsics: Intrinsics::_def(),
        };
        Intrinsics::create_intrinsics(&mut agent);
        agent
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    pub fn throw_exception(&mut self, kind: ExceptionType, message: &str) -> JsError {
        log::trace!("throwing {kind}: {message}");
        let message = String::from_str(self, message);
        let error: Error = self.heap.create(ErrorHeapData::new(kind, Some(message)));
        JsError(Value::Error(error))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    AggregateError,
    EvalError,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
    UriError,
}

impl fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExceptionType::Error => "Error",
            ExceptionType::AggregateError => "AggregateError",
            ExceptionType::EvalError => "EvalError",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::ReferenceError => "ReferenceError",
            ExceptionType::SyntaxError => "SyntaxError",
            ExceptionType::TypeError => "TypeError",
            ExceptionType::UriError => "URIError",
        })
    }
}
