// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num_bigint::Sign;

use super::BigInt;
use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};

/// Attempts to convert `rhs` into a valid shifting value
/// within the range ±u32::MAX else returning none.
fn to_shift_rhs_operand(rhs: &num_bigint::BigInt) -> Option<i64> {
    // Any bigint which can't be represented as an i64 is going to be too
    // large to use as the rhs operand of a shift.
    let rhs = i64::try_from(rhs).ok()?;
    if (-(u32::MAX as i64)..=(u32::MAX as i64)).contains(&rhs) {
        Some(rhs)
    } else {
        None
    }
}

fn left_shift_u32(agent: &mut Agent, x: BigInt, y: u32) -> JsResult<BigInt> {
    let data = &agent[x].data;
    if data.sign() == Sign::NoSign || y == 0 {
        return Ok(x);
    }
    if data.bits() + y as u64 > agent.options.max_bigint_bits {
        return Err(agent.throw_exception(
            ExceptionType::RangeError,
            "Maximum BigInt size exceeded",
        ));
    }
    let result = data << y;
    Ok(BigInt::from_num_bigint(agent, result))
}

fn right_shift_u32(agent: &mut Agent, x: BigInt, y: u32) -> BigInt {
    // num-bigint rounds towards negative infinity, as the language requires.
    let result = &agent[x].data >> y;
    BigInt::from_num_bigint(agent, result)
}

/// Shifting everything out leaves the sign bit behind.
fn right_shift_out_of_range(agent: &mut Agent, x: BigInt) -> BigInt {
    if agent[x].data.sign() == Sign::Minus {
        BigInt::from_i64(agent, -1)
    } else {
        BigInt::zero(agent)
    }
}

/// ### [6.1.6.2.9 BigInt::leftShift ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-leftShift)
pub(crate) fn left_shift(agent: &mut Agent, x: BigInt, y: BigInt) -> JsResult<BigInt> {
    match to_shift_rhs_operand(&agent[y].data) {
        Some(y) if y >= 0 => left_shift_u32(agent, x, y as u32),
        // A negative rhs operand when doing a left shift means is the same as
        // right shifting by the negation of that amount.
        Some(y) => Ok(right_shift_u32(agent, x, y.unsigned_abs() as u32)),
        None if agent[y].data.sign() == Sign::Minus => Ok(right_shift_out_of_range(agent, x)),
        None if agent[x].data.sign() == Sign::NoSign => Ok(x),
        None => Err(agent.throw_exception(
            ExceptionType::RangeError,
            "Maximum BigInt size exceeded",
        )),
    }
}

/// ### [6.1.6.2.10 BigInt::signedRightShift ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-signedRightShift)
pub(crate) fn signed_right_shift(agent: &mut Agent, x: BigInt, y: BigInt) -> JsResult<BigInt> {
    // 1. Return BigInt::leftShift(x, -y).
    match to_shift_rhs_operand(&agent[y].data) {
        Some(y) if y >= 0 => Ok(right_shift_u32(agent, x, y as u32)),
        Some(y) => left_shift_u32(agent, x, y.unsigned_abs() as u32),
        None if agent[y].data.sign() == Sign::Minus => {
            if agent[x].data.sign() == Sign::NoSign {
                Ok(x)
            } else {
                Err(agent.throw_exception(
                    ExceptionType::RangeError,
                    "Maximum BigInt size exceeded",
                ))
            }
        }
        None => Ok(right_shift_out_of_range(agent, x)),
    }
}
