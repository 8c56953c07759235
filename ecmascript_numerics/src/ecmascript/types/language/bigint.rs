// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;
mod operators;

use std::ops::Index;

use num_bigint::Sign;
use num_traits::{One, Zero};

use super::{IntoValue, Numeric, Value};
use crate::{
    Heap,
    ecmascript::execution::{Agent, ExceptionType, JsResult},
    heap::{CreateHeapData, indexes::BigIntIndex},
};
pub use data::BigIntHeapData;
pub(crate) use data::f64_to_exact_bigint;

/// The sign of a BigInt value. Zero has a sign of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntSign {
    Negative,
    Zero,
    Positive,
}

impl From<Sign> for BigIntSign {
    fn from(value: Sign) -> Self {
        match value {
            Sign::Minus => BigIntSign::Negative,
            Sign::NoSign => BigIntSign::Zero,
            Sign::Plus => BigIntSign::Positive,
        }
    }
}

/// ### [6.1.6.2 The BigInt Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-bigint-type)
///
/// The BigInt type represents an integer value. The value may be any size and
/// is not limited to a particular bit-width. Generally, where not otherwise
/// noted, operations are designed to return exact mathematically-based
/// answers. For binary operations, BigInts act as two's complement binary
/// strings, with negative numbers treated as having bits set infinitely to the
/// left.
///
/// The handle compares by identity; use [`BigInt::equal`] to compare values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BigInt(BigIntIndex);

impl BigInt {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn zero(agent: &mut Agent) -> Self {
        agent.heap.create(BigIntHeapData {
            data: num_bigint::BigInt::zero(),
        })
    }

    pub fn from_i64(agent: &mut Agent, value: i64) -> Self {
        agent.heap.create(BigIntHeapData { data: value.into() })
    }

    pub fn from_u64(agent: &mut Agent, value: u64) -> Self {
        agent.heap.create(BigIntHeapData { data: value.into() })
    }

    pub fn from_num_bigint(agent: &mut Agent, value: num_bigint::BigInt) -> Self {
        agent.heap.create(BigIntHeapData { data: value })
    }

    /// Allocates `value` unless its bit length exceeds the agent's
    /// configured BigInt size limit, in which case a RangeError is thrown.
    pub fn try_from_num_bigint(agent: &mut Agent, value: num_bigint::BigInt) -> JsResult<Self> {
        if value.bits() > agent.options.max_bigint_bits {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "Maximum BigInt size exceeded",
            ));
        }
        Ok(Self::from_num_bigint(agent, value))
    }

    pub fn as_num_bigint(self, agent: &Agent) -> &num_bigint::BigInt {
        &agent[self].data
    }

    pub fn sign(self, agent: &Agent) -> BigIntSign {
        agent[self].data.sign().into()
    }

    /// ### [6.1.6.2.1 BigInt::unaryMinus ( x )](https://tc39.es/ecma262/#sec-numeric-types-bigint-unaryMinus)
    ///
    /// The abstract operation BigInt::unaryMinus takes argument x (a BigInt)
    /// and returns a BigInt.
    pub fn unary_minus(agent: &mut Agent, x: BigInt) -> BigInt {
        // 1. If x is 0ℤ, return 0ℤ.
        // NOTE: num-bigint has no negative zero; negation handles this.
        // 2. Return -x.
        let result = -&agent[x].data;
        Self::from_num_bigint(agent, result)
    }

    /// ### [6.1.6.2.4 BigInt::multiply ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-multiply)
    pub fn multiply(agent: &mut Agent, x: BigInt, y: BigInt) -> BigInt {
        let result = &agent[x].data * &agent[y].data;
        Self::from_num_bigint(agent, result)
    }

    /// ### [6.1.6.2.7 BigInt::add ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-add)
    pub fn add(agent: &mut Agent, x: BigInt, y: BigInt) -> BigInt {
        let result = &agent[x].data + &agent[y].data;
        Self::from_num_bigint(agent, result)
    }

    /// ### [6.1.6.2.8 BigInt::subtract ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-subtract)
    pub fn subtract(agent: &mut Agent, x: BigInt, y: BigInt) -> BigInt {
        let result = &agent[x].data - &agent[y].data;
        Self::from_num_bigint(agent, result)
    }

    /// ### [6.1.6.2.9 BigInt::leftShift ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-leftShift)
    pub fn left_shift(agent: &mut Agent, x: BigInt, y: BigInt) -> JsResult<BigInt> {
        operators::left_shift(agent, x, y)
    }

    /// ### [6.1.6.2.10 BigInt::signedRightShift ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-signedRightShift)
    pub fn signed_right_shift(agent: &mut Agent, x: BigInt, y: BigInt) -> JsResult<BigInt> {
        operators::signed_right_shift(agent, x, y)
    }

    /// ### [6.1.6.2.12 BigInt::lessThan ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-lessThan)
    ///
    /// The abstract operation BigInt::lessThan takes arguments x (a BigInt)
    /// and y (a BigInt) and returns a Boolean.
    pub fn less_than(agent: &Agent, x: BigInt, y: BigInt) -> bool {
        // 1. If ℝ(x) < ℝ(y), return true; otherwise return false.
        agent[x].data < agent[y].data
    }

    /// ### [6.1.6.2.13 BigInt::equal ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-bigint-equal)
    ///
    /// The abstract operation BigInt::equal takes arguments x (a BigInt) and y
    /// (a BigInt) and returns a Boolean.
    pub fn equal(agent: &Agent, x: BigInt, y: BigInt) -> bool {
        // 1. If ℝ(x) = ℝ(y), return true; otherwise return false.
        x == y || agent[x].data == agent[y].data
    }

    /// ### [21.2.2.1 BigInt.asIntN ( bits, bigint )](https://tc39.es/ecma262/#sec-bigint.asintn) steps 3-4
    ///
    /// Reduces `x` modulo 2^`bits` and reinterprets the residue as a
    /// two's complement integer of width `bits`.
    pub fn as_int_n(agent: &mut Agent, bits: u64, x: BigInt) -> JsResult<BigInt> {
        if bits == 0 {
            return Ok(Self::zero(agent));
        }
        // |x| < 2^(bits-1) already lies in the target range.
        if agent[x].data.bits() < bits {
            return Ok(x);
        }
        // bits is now below x's bit length, which the heap already holds.
        let bits = usize::try_from(bits).map_err(|_| {
            agent.throw_exception(ExceptionType::RangeError, "Maximum BigInt size exceeded")
        })?;
        // 3. Let mod be ℝ(bigint) modulo 2^bits.
        let modulus = num_bigint::BigInt::one() << bits;
        let residue = euclidean_residue(&agent[x].data, &modulus);
        // 4. If mod ≥ 2^(bits - 1), return ℤ(mod - 2^bits); otherwise,
        //    return ℤ(mod).
        let half = num_bigint::BigInt::one() << (bits - 1);
        let result = if residue >= half {
            residue - modulus
        } else {
            residue
        };
        Ok(Self::from_num_bigint(agent, result))
    }

    /// ### [21.2.2.2 BigInt.asUintN ( bits, bigint )](https://tc39.es/ecma262/#sec-bigint.asuintn) step 3
    ///
    /// Returns the residue of `x` modulo 2^`bits`, always non-negative.
    pub fn as_uint_n(agent: &mut Agent, bits: u64, x: BigInt) -> JsResult<BigInt> {
        if bits == 0 {
            return Ok(Self::zero(agent));
        }
        let data = &agent[x].data;
        let negative = data.sign() == Sign::Minus;
        if !negative && data.bits() <= bits {
            return Ok(x);
        }
        // A negative residue has exactly `bits` bits; refuse to build
        // anything larger than the heap would otherwise allow.
        if negative && bits > agent.options.max_bigint_bits {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "Maximum BigInt size exceeded",
            ));
        }
        let bits = usize::try_from(bits).map_err(|_| {
            agent.throw_exception(ExceptionType::RangeError, "Maximum BigInt size exceeded")
        })?;
        // 3. Return ℤ(ℝ(bigint) modulo 2^bits).
        let modulus = num_bigint::BigInt::one() << bits;
        let result = euclidean_residue(&agent[x].data, &modulus);
        Ok(Self::from_num_bigint(agent, result))
    }

    /// The BigInt64 reduction: the low 64 bits of the two's complement
    /// representation, reinterpreted as signed.
    pub fn to_i64_wrapping(self, agent: &Agent) -> i64 {
        self.to_u64_wrapping(agent) as i64
    }

    /// The BigUint64 reduction: ℝ(x) modulo 2^64.
    pub fn to_u64_wrapping(self, agent: &Agent) -> u64 {
        let data = &agent[self].data;
        let low = data.iter_u64_digits().next().unwrap_or(0);
        if data.sign() == Sign::Minus {
            low.wrapping_neg()
        } else {
            low
        }
    }
}

/// `value` modulo `modulus` with the result in `[0, modulus)`.
fn euclidean_residue(value: &num_bigint::BigInt, modulus: &num_bigint::BigInt) -> num_bigint::BigInt {
    let mut residue = value % modulus;
    if residue.sign() == Sign::Minus {
        residue += modulus;
    }
    residue
}

impl IntoValue for BigInt {
    fn into_value(self) -> Value {
        Value::BigInt(self)
    }
}

impl TryFrom<Value> for BigInt {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::BigInt(x) = value {
            Ok(x)
        } else {
            Err(())
        }
    }
}

impl TryFrom<Numeric> for BigInt {
    type Error = ();

    fn try_from(value: Numeric) -> Result<Self, Self::Error> {
        if let Numeric::BigInt(x) = value {
            Ok(x)
        } else {
            Err(())
        }
    }
}

impl Index<BigInt> for Agent {
    type Output = BigIntHeapData;

    fn index(&self, index: BigInt) -> &Self::Output {
        self.heap
            .bigints
            .get(index.get_index())
            .expect("BigInt out of bounds")
    }
}

impl CreateHeapData<BigIntHeapData, BigInt> for Heap {
    fn create(&mut self, data: BigIntHeapData) -> BigInt {
        self.bigints.push(data);
        BigInt(BigIntIndex::last(&self.bigints))
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt as NumBigInt;

    use super::{BigInt, BigIntSign};
    use crate::ecmascript::execution::{Agent, ExceptionType, Options};

    fn big(agent: &mut Agent, value: i64) -> BigInt {
        BigInt::from_i64(agent, value)
    }

    fn parse(agent: &mut Agent, digits: &str) -> BigInt {
        let value = digits.parse::<NumBigInt>().unwrap();
        BigInt::from_num_bigint(agent, value)
    }

    #[test]
    fn arithmetic_is_exact() {
        let mut agent = Agent::default();
        let x = parse(&mut agent, "123456789012345678901234567890");
        let y = big(&mut agent, -987654321);
        let sum = BigInt::add(&mut agent, x, y);
        assert_eq!(
            sum.as_num_bigint(&agent).to_string(),
            "123456789012345678900246913569"
        );
        let difference = BigInt::subtract(&mut agent, sum, x);
        assert!(BigInt::equal(&agent, difference, y));
        let product = BigInt::multiply(&mut agent, x, x);
        assert_eq!(
            product.as_num_bigint(&agent).to_string(),
            "15241578753238836750495351562536198787501905199875019052100"
        );
        let negated = BigInt::unary_minus(&mut agent, y);
        assert_eq!(negated.sign(&agent), BigIntSign::Positive);
        assert!(BigInt::less_than(&agent, y, negated));
        let zero = BigInt::zero(&mut agent);
        let negated_zero = BigInt::unary_minus(&mut agent, zero);
        assert_eq!(negated_zero.sign(&agent), BigIntSign::Zero);
    }

    #[test]
    fn shifts_floor_negative_values() {
        let mut agent = Agent::default();
        let x = big(&mut agent, -5);
        let one = big(&mut agent, 1);
        let shifted = BigInt::signed_right_shift(&mut agent, x, one).unwrap();
        assert_eq!(*shifted.as_num_bigint(&agent), NumBigInt::from(-3));
        let shifted = BigInt::left_shift(&mut agent, x, one).unwrap();
        assert_eq!(*shifted.as_num_bigint(&agent), NumBigInt::from(-10));
        let minus_one = big(&mut agent, -1);
        let shifted = BigInt::left_shift(&mut agent, x, minus_one).unwrap();
        assert_eq!(*shifted.as_num_bigint(&agent), NumBigInt::from(-3));
    }

    #[test]
    fn huge_shifts() {
        let mut agent = Agent::default();
        let x = big(&mut agent, -5);
        let huge = parse(&mut agent, "100000000000000000000");
        let shifted = BigInt::signed_right_shift(&mut agent, x, huge).unwrap();
        assert_eq!(*shifted.as_num_bigint(&agent), NumBigInt::from(-1));
        let error = BigInt::left_shift(&mut agent, x, huge).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::RangeError));
        let zero = BigInt::zero(&mut agent);
        let shifted = BigInt::left_shift(&mut agent, zero, huge).unwrap();
        assert_eq!(shifted.sign(&agent), BigIntSign::Zero);
    }

    #[test]
    fn shift_respects_size_limit() {
        let mut agent = Agent::new(Options {
            max_bigint_bits: 64,
            ..Default::default()
        });
        let x = big(&mut agent, 1);
        let sixty_three = big(&mut agent, 63);
        assert!(BigInt::left_shift(&mut agent, x, sixty_three).is_ok());
        let sixty_four = big(&mut agent, 64);
        let error = BigInt::left_shift(&mut agent, x, sixty_four).unwrap_err();
        assert_eq!(error.message(&agent), Some("Maximum BigInt size exceeded"));
    }

    #[test]
    fn as_int_n_reinterprets_residue() {
        let mut agent = Agent::default();
        let x = big(&mut agent, 0xab);
        let result = BigInt::as_int_n(&mut agent, 8, x).unwrap();
        assert_eq!(*result.as_num_bigint(&agent), NumBigInt::from(-0x55));
        let result = BigInt::as_uint_n(&mut agent, 8, x).unwrap();
        assert_eq!(*result.as_num_bigint(&agent), NumBigInt::from(0xab));
        let minus_one = big(&mut agent, -1);
        let result = BigInt::as_uint_n(&mut agent, 8, minus_one).unwrap();
        assert_eq!(*result.as_num_bigint(&agent), NumBigInt::from(0xff));
        let result = BigInt::as_int_n(&mut agent, 1, minus_one).unwrap();
        assert_eq!(*result.as_num_bigint(&agent), NumBigInt::from(-1));
        let min = big(&mut agent, -128);
        let result = BigInt::as_int_n(&mut agent, 8, min).unwrap();
        assert_eq!(*result.as_num_bigint(&agent), NumBigInt::from(-128));
    }

    #[test]
    fn zero_width_is_always_zero() {
        let mut agent = Agent::default();
        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            let x = big(&mut agent, value);
            let signed = BigInt::as_int_n(&mut agent, 0, x).unwrap();
            let unsigned = BigInt::as_uint_n(&mut agent, 0, x).unwrap();
            assert_eq!(signed.sign(&agent), BigIntSign::Zero);
            assert_eq!(unsigned.sign(&agent), BigIntSign::Zero);
        }
    }

    #[test]
    fn as_uint_n_of_negative_respects_size_limit() {
        let mut agent = Agent::new(Options {
            max_bigint_bits: 128,
            ..Default::default()
        });
        let minus_one = big(&mut agent, -1);
        let result = BigInt::as_uint_n(&mut agent, 128, minus_one).unwrap();
        assert_eq!(result.as_num_bigint(&agent).bits(), 128);
        let error = BigInt::as_uint_n(&mut agent, 129, minus_one).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::RangeError));
        // Wide unsigned reductions of non-negative values are the identity.
        let one = big(&mut agent, 1);
        let result = BigInt::as_uint_n(&mut agent, 1 << 40, one).unwrap();
        assert_eq!(result, one);
    }

    #[test]
    fn wrapping_64_bit_reductions() {
        let mut agent = Agent::default();
        let minus_one = big(&mut agent, -1);
        assert_eq!(minus_one.to_u64_wrapping(&agent), u64::MAX);
        assert_eq!(minus_one.to_i64_wrapping(&agent), -1);
        let two_pow_64_plus_5 = parse(&mut agent, "18446744073709551621");
        assert_eq!(two_pow_64_plus_5.to_u64_wrapping(&agent), 5);
        let two_pow_63 = parse(&mut agent, "9223372036854775808");
        assert_eq!(two_pow_63.to_i64_wrapping(&agent), i64::MIN);
        let zero = BigInt::zero(&mut agent);
        assert_eq!(zero.to_u64_wrapping(&agent), 0);
    }
}
