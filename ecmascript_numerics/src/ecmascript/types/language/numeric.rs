// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{BigInt, IntoValue, Number, Value};

/// A Number or a BigInt: the result of ToNumeric and the value carried in
/// and out of ArrayBuffer reads and writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Number(Number),
    BigInt(BigInt),
}

impl IntoValue for Numeric {
    fn into_value(self) -> Value {
        match self {
            Numeric::Number(n) => Value::Number(n),
            Numeric::BigInt(b) => Value::BigInt(b),
        }
    }
}

impl From<Number> for Numeric {
    fn from(value: Number) -> Self {
        Numeric::Number(value)
    }
}

impl From<BigInt> for Numeric {
    fn from(value: BigInt) -> Self {
        Numeric::BigInt(value)
    }
}

impl TryFrom<Value> for Numeric {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Number(n) => Ok(Numeric::Number(n)),
            Value::BigInt(b) => Ok(Numeric::BigInt(b)),
            _ => Err(()),
        }
    }
}
