// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        testing_and_comparison::is_integral_number,
        type_conversion::{to_big_int, to_index, to_primitive},
    },
    builders::builtin_function_builder::BuiltinFunctionBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, ExceptionType, JsResult},
    types::{BigInt, IntoValue, Number, Object, Value, f64_to_exact_bigint},
};

/// ### [21.2.1 The BigInt Constructor](https://tc39.es/ecma262/#sec-bigint-constructor)
pub struct BigIntConstructor;

impl Builtin for BigIntConstructor {
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::behaviour);
    const LENGTH: u8 = 1;
    const NAME: &'static str = "BigInt";
}

struct BigIntAsIntN;
impl Builtin for BigIntAsIntN {
    const BEHAVIOUR: Behaviour = Behaviour::Regular(BigIntConstructor::as_int_n);
    const LENGTH: u8 = 2;
    const NAME: &'static str = "asIntN";
}
struct BigIntAsUintN;
impl Builtin for BigIntAsUintN {
    const BEHAVIOUR: Behaviour = Behaviour::Regular(BigIntConstructor::as_uint_n);
    const LENGTH: u8 = 2;
    const NAME: &'static str = "asUintN";
}

impl BigIntConstructor {
    /// ### [21.2.1.1 BigInt ( value )](https://tc39.es/ecma262/#sec-bigint-constructor-number-value)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If NewTarget is not undefined, throw a TypeError exception.
        if new_target.is_some() {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "BigInt is not a constructor")
            );
        }
        // 2. Let prim be ? ToPrimitive(value).
        let prim = to_primitive(agent, arguments.get(0), None)?;
        // 3. If prim is a Number, return ? NumberToBigInt(prim).
        if let Ok(prim) = Number::try_from(prim) {
            return number_to_big_int(agent, prim).map(IntoValue::into_value);
        }
        // 4. Otherwise, return ? ToBigInt(prim).
        to_big_int(agent, prim).map(IntoValue::into_value)
    }

    /// ### [21.2.2.1 BigInt.asIntN ( bits, bigint )](https://tc39.es/ecma262/#sec-bigint.asintn)
    fn as_int_n(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Set bits to ? ToIndex(bits).
        let bits = to_index(agent, arguments.get(0))?;
        // 2. Set bigint to ? ToBigInt(bigint).
        let bigint = to_big_int(agent, arguments.get(1))?;
        // 3. Let mod be ℝ(bigint) modulo 2**bits.
        // 4. If mod ≥ 2**(bits - 1), return ℤ(mod - 2**bits); otherwise, return ℤ(mod).
        BigInt::as_int_n(agent, bits, bigint).map(IntoValue::into_value)
    }

    /// ### [21.2.2.2 BigInt.asUintN ( bits, bigint )](https://tc39.es/ecma262/#sec-bigint.asuintn)
    fn as_uint_n(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Set bits to ? ToIndex(bits).
        let bits = to_index(agent, arguments.get(0))?;
        // 2. Set bigint to ? ToBigInt(bigint).
        let bigint = to_big_int(agent, arguments.get(1))?;
        // 3. Return ℤ(ℝ(bigint) modulo 2**bits).
        BigInt::as_uint_n(agent, bits, bigint).map(IntoValue::into_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        agent.intrinsics.big_int = BuiltinFunctionBuilder::new::<BigIntConstructor>(agent)
            .with_builtin_function_property::<BigIntAsIntN>()
            .with_builtin_function_property::<BigIntAsUintN>()
            .build();
    }
}

/// ### [21.2.1.1.1 NumberToBigInt ( number )](https://tc39.es/ecma262/#sec-numbertobigint)
///
/// The abstract operation NumberToBigInt takes argument number (a Number)
/// and returns either a normal completion containing a BigInt or a throw
/// completion.
pub(crate) fn number_to_big_int(agent: &mut Agent, number: Number) -> JsResult<BigInt> {
    // 1. If IsIntegralNumber(number) is false, throw a RangeError exception.
    if !is_integral_number(number) {
        return Err(agent.throw_exception(
            ExceptionType::RangeError,
            "Cannot convert a non-integer Number to a BigInt",
        ));
    }
    // 2. Return ℤ(ℝ(number)).
    let data = f64_to_exact_bigint(number.into_f64());
    BigInt::try_from_num_bigint(agent, data)
}

#[cfg(test)]
mod test {
    use super::number_to_big_int;
    use crate::ecmascript::{
        execution::{Agent, ExceptionType},
        types::Number,
    };

    #[test]
    fn integral_numbers_convert_exactly() {
        let mut agent = Agent::default();
        let big = number_to_big_int(&mut agent, Number::from(2f64.powi(80))).unwrap();
        assert_eq!(
            *big.as_num_bigint(&agent),
            num_bigint::BigInt::from(1u128 << 80)
        );
        let zero = number_to_big_int(&mut agent, Number::neg_zero()).unwrap();
        assert_eq!(*zero.as_num_bigint(&agent), num_bigint::BigInt::from(0));
    }

    #[test]
    fn fractional_and_infinite_numbers_are_range_errors() {
        let mut agent = Agent::default();
        for number in [Number::from(0.5), Number::nan(), Number::neg_inf()] {
            let error = number_to_big_int(&mut agent, number).unwrap_err();
            assert_eq!(error.exception_type(&agent), Some(ExceptionType::RangeError));
        }
    }
}
