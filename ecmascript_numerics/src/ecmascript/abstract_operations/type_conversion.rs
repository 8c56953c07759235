// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. To clarify the semantics of certain constructs it is useful to
//! define a set of conversion abstract operations. The conversion abstract
//! operations are polymorphic; they can accept a value of any ECMAScript
//! language type. But no other specification types are used with these
//! operations.
//!
//! The BigInt type has no implicit conversions in the ECMAScript language;
//! programmers must call BigInt explicitly to convert values from other types.

use num_bigint::Sign;
use num_traits::{ToPrimitive, Zero};

use super::operations_on_objects::{call, call_function, get, get_method};
use super::testing_and_comparison::is_callable;
use crate::{
    ecmascript::{
        builtins::ArgumentsList,
        execution::{Agent, ExceptionType, JsResult},
        types::{BigInt, IntoValue, Number, Numeric, Object, PropertyKey, String, Value},
    },
    heap::WellKnownSymbolIndexes,
};

/// 2^53 - 1, the largest integer index.
const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
/// If an object is capable of converting to more than one primitive type, it
/// may use the optional hint preferredType to favour that type. It performs
/// the following steps when called:
///
/// > NOTE: When ToPrimitive is called without a hint, then it generally
/// > behaves as if the hint were NUMBER. However, objects may over-ride this
/// > behaviour by defining a @@toPrimitive method.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    let Ok(input) = Object::try_from(input) else {
        // 2. Return input.
        return Ok(input);
    };
    // a. Let exoticToPrim be ? GetMethod(input, @@toPrimitive).
    let exotic_to_prim = get_method(
        agent,
        input.into_value(),
        PropertyKey::Symbol(WellKnownSymbolIndexes::ToPrimitive.into()),
    )?;
    // b. If exoticToPrim is not undefined, then
    let Some(exotic_to_prim) = exotic_to_prim else {
        // c. If preferredType is not present, let preferredType be NUMBER.
        // d. Return ? OrdinaryToPrimitive(input, preferredType).
        return ordinary_to_primitive(
            agent,
            input,
            preferred_type.unwrap_or(PreferredType::Number),
        );
    };
    let hint = match preferred_type {
        // i. If preferredType is not present, then
        // 1. Let hint be "default".
        None => "default",
        // ii. Else if preferredType is STRING, then
        // 1. Let hint be "string".
        Some(PreferredType::String) => "string",
        // iii. Else,
        // 1. Assert: preferredType is NUMBER.
        // 2. Let hint be "number".
        Some(PreferredType::Number) => "number",
    };
    let hint = String::from_str(agent, hint);
    // iv. Let result be ? Call(exoticToPrim, input, « hint »).
    let result = call_function(
        agent,
        exotic_to_prim,
        input.into_value(),
        Some(ArgumentsList::new(&[hint.into_value()])),
    )?;
    if !result.is_object() {
        // v. If result is not an Object, return result.
        Ok(result)
    } else {
        // vi. Throw a TypeError exception.
        Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert object to primitive value",
        ))
    }
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = PropertyKey::from_str(agent, "toString");
    let value_of_key = PropertyKey::from_str(agent, "valueOf");
    let method_names = match hint {
        PreferredType::String => {
            // 1. If hint is STRING, then
            // a. Let methodNames be « "toString", "valueOf" ».
            [to_string_key, value_of_key]
        }
        PreferredType::Number => {
            // 2. Else,
            // a. Let methodNames be « "valueOf", "toString" ».
            [value_of_key, to_string_key]
        }
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if is_callable(method) {
            // i. Let result be ? Call(method, O).
            let result = call(agent, method, o.into_value(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
pub fn to_boolean(agent: &Agent, argument: Value) -> bool {
    match argument {
        // 1. If argument is a Boolean, return argument.
        Value::Boolean(value) => value,
        // 2. If argument is one of undefined, null, +0𝔽, -0𝔽, NaN, 0ℤ, or the
        //    empty String, return false.
        Value::Undefined | Value::Null => false,
        Value::Number(number) => !(number.is_nan() || number.into_f64() == 0.0),
        Value::BigInt(bigint) => bigint.as_num_bigint(agent).sign() != Sign::NoSign,
        Value::String(string) => !string.is_empty(agent),
        // 4. Return true.
        Value::Symbol(_)
        | Value::Object(_)
        | Value::Function(_)
        | Value::ArrayBuffer(_)
        | Value::DataView(_)
        | Value::Error(_) => true,
    }
}

/// ### [7.1.3 ToNumeric ( value )](https://tc39.es/ecma262/#sec-tonumeric)
///
/// The abstract operation ToNumeric takes argument value (an ECMAScript
/// language value) and returns either a normal completion containing either a
/// Number or a BigInt, or a throw completion. It returns value converted to a
/// Number or a BigInt.
pub fn to_numeric(agent: &mut Agent, value: Value) -> JsResult<Numeric> {
    // 1. Let primValue be ? ToPrimitive(value, NUMBER).
    let prim_value = to_primitive(agent, value, Some(PreferredType::Number))?;
    // 2. If primValue is a BigInt, return primValue.
    if let Value::BigInt(bigint) = prim_value {
        return Ok(Numeric::BigInt(bigint));
    }
    // 3. Return ? ToNumber(primValue).
    to_number(agent, prim_value).map(Numeric::Number)
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
///
/// The abstract operation ToNumber takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a Number
/// or a throw completion. It converts argument to a value of type Number.
pub fn to_number(agent: &mut Agent, argument: Value) -> JsResult<Number> {
    match argument {
        // 1. If argument is a Number, return argument.
        Value::Number(number) => Ok(number),
        // 2. If argument is either a Symbol or a BigInt, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a number",
        )),
        Value::BigInt(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a BigInt value to a number",
        )),
        // 3. If argument is undefined, return NaN.
        Value::Undefined => Ok(Number::nan()),
        // 4. If argument is either null or false, return +0𝔽.
        Value::Null | Value::Boolean(false) => Ok(Number::pos_zero()),
        // 5. If argument is true, return 1𝔽.
        Value::Boolean(true) => Ok(Number::from(1)),
        // 6. If argument is a String, return StringToNumber(argument).
        Value::String(string) => Ok(string_to_number(string.as_str(agent))),
        // 7. Assert: argument is an Object.
        Value::Object(_)
        | Value::Function(_)
        | Value::ArrayBuffer(_)
        | Value::DataView(_)
        | Value::Error(_) => {
            // 8. Let primValue be ? ToPrimitive(argument, NUMBER).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::Number))?;
            // 9. Assert: primValue is not an Object.
            debug_assert!(!prim_value.is_object());
            // 10. Return ? ToNumber(primValue).
            to_number(agent, prim_value)
        }
    }
}

/// WhiteSpace and LineTerminator code points, as stripped by
/// StringToNumber and StringToBigInt.
pub fn is_trimmable_whitespace(c: char) -> bool {
    matches!(
        c,
        // WhiteSpace
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{FEFF}'
            // Zs
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            // LineTerminator
            | '\u{000A}'
            | '\u{000D}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits a `0x`, `0o` or `0b` prefix (in either case) off `literal`.
fn split_non_decimal_prefix(literal: &str) -> Option<(u32, &str)> {
    let bytes = literal.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &literal[2..]))
}

/// Parses a NonDecimalIntegerLiteral body exactly. Separators are not part
/// of the string numeric grammar, so every character must be a digit.
fn parse_non_decimal_digits(digits: &str, radix: u32) -> Option<num_bigint::BigInt> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    num_bigint::BigInt::parse_bytes(digits.as_bytes(), radix)
}

/// Whether `literal` is a StrUnsignedDecimalLiteral other than Infinity:
/// digits with an optional fraction and exponent, at least one digit in
/// the mantissa.
fn is_unsigned_decimal_literal(literal: &str) -> bool {
    let bytes = literal.as_bytes();
    let mut index = 0;
    let skip_digits = |index: &mut usize| {
        let start = *index;
        while *index < bytes.len() && bytes[*index].is_ascii_digit() {
            *index += 1;
        }
        *index - start
    };
    let mut mantissa_digits = skip_digits(&mut index);
    if index < bytes.len() && bytes[index] == b'.' {
        index += 1;
        mantissa_digits += skip_digits(&mut index);
    }
    if mantissa_digits == 0 {
        return false;
    }
    if index < bytes.len() && (bytes[index] == b'e' || bytes[index] == b'E') {
        index += 1;
        if index < bytes.len() && (bytes[index] == b'+' || bytes[index] == b'-') {
            index += 1;
        }
        if skip_digits(&mut index) == 0 {
            return false;
        }
    }
    index == bytes.len()
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
///
/// The abstract operation StringToNumber takes argument str (a String) and
/// returns a Number.
pub fn string_to_number(str: &str) -> Number {
    // 1. Let text be StringToCodePoints(str).
    // 2. Let literal be ParseText(text, StringNumericLiteral).
    let literal = str.trim_matches(is_trimmable_whitespace);
    // StringNumericLiteral ::: StrWhiteSpace_opt
    if literal.is_empty() {
        return Number::pos_zero();
    }
    // NonDecimalIntegerLiteral carries no sign.
    if let Some((radix, digits)) = split_non_decimal_prefix(literal) {
        // 3. If literal is a List of errors, return NaN.
        return match parse_non_decimal_digits(digits, radix) {
            // RoundMVResult: num-bigint rounds to nearest, ties to even.
            Some(value) => Number::from(value.to_f64().unwrap_or(f64::INFINITY)),
            None => Number::nan(),
        };
    }
    let unsigned = literal.strip_prefix(['+', '-']).unwrap_or(literal);
    if unsigned == "Infinity" {
        return if literal.starts_with('-') {
            Number::neg_inf()
        } else {
            Number::pos_inf()
        };
    }
    // fast_float also accepts spellings such as "inf" and "nan", which are
    // not StrDecimalLiterals.
    if !is_unsigned_decimal_literal(unsigned) {
        return Number::nan();
    }
    // 4. Return StringNumericValue of literal.
    match fast_float::parse::<f64, _>(literal) {
        Ok(value) => Number::from(value),
        Err(_) => Number::nan(),
    }
}

/// ### [7.1.5 ToIntegerOrInfinity ( argument )](https://tc39.es/ecma262/#sec-tointegerorinfinity)
///
/// The abstract operation ToIntegerOrInfinity takes argument argument (an
/// ECMAScript language value) and returns either a normal completion
/// containing either an integer, +∞, or -∞, or a throw completion. It
/// converts argument to an integer representing its Number value with
/// fractional part truncated, or to +∞ or -∞ when that Number value is
/// infinite.
pub fn to_integer_or_infinity(agent: &mut Agent, argument: Value) -> JsResult<f64> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    Ok(to_integer_or_infinity_number(number))
}

pub(crate) fn to_integer_or_infinity_number(number: Number) -> f64 {
    // 2. If number is one of NaN, +0𝔽, or -0𝔽, return 0.
    if number.is_nan() || number.into_f64() == 0.0 {
        return 0.0;
    }
    // 3. If number is +∞𝔽, return +∞.
    // 4. If number is -∞𝔽, return -∞.
    // 5. Return truncate(ℝ(number)).
    // Adding +0 turns a -0 produced by truncation into +0.
    number.truncate().into_f64() + 0.0
}

/// Reduces an integral-or-infinite Number modulo 2^`bits`, the shared core of
/// ToInt32, ToUint16 and friends.
fn to_uint_modular(number: Number, bits: u32) -> u64 {
    let number = number.into_f64();
    // 1. If number is not finite or number is either +0𝔽 or -0𝔽, return +0𝔽.
    if !number.is_finite() || number == 0.0 {
        return 0;
    }
    // 2. Let int be truncate(ℝ(number)).
    let int = number.trunc();
    // 3. Let intNbit be int modulo 2^bits.
    let modulus = (1u64 << bits) as f64;
    int.rem_euclid(modulus) as u64
}

macro_rules! int_conversion {
    ($name:ident, $number_name:ident, $ty:ty, $bits:literal, $title:literal, $link:literal) => {
        #[doc = concat!("### [", $title, "](", $link, ")")]
        pub fn $name(agent: &mut Agent, argument: Value) -> JsResult<$ty> {
            // 1. Let number be ? ToNumber(argument).
            let number = to_number(agent, argument)?;
            Ok($number_name(number))
        }

        pub fn $number_name(number: Number) -> $ty {
            // Truncating the residue to the target width reinterprets the
            // upper half of the unsigned range as negative for signed types.
            to_uint_modular(number, $bits) as $ty
        }
    };
}

int_conversion!(
    to_int32,
    to_int32_number,
    i32,
    32,
    "7.1.6 ToInt32 ( argument )",
    "https://tc39.es/ecma262/#sec-toint32"
);
int_conversion!(
    to_uint32,
    to_uint32_number,
    u32,
    32,
    "7.1.7 ToUint32 ( argument )",
    "https://tc39.es/ecma262/#sec-touint32"
);
int_conversion!(
    to_int16,
    to_int16_number,
    i16,
    16,
    "7.1.8 ToInt16 ( argument )",
    "https://tc39.es/ecma262/#sec-toint16"
);
int_conversion!(
    to_uint16,
    to_uint16_number,
    u16,
    16,
    "7.1.9 ToUint16 ( argument )",
    "https://tc39.es/ecma262/#sec-touint16"
);
int_conversion!(
    to_int8,
    to_int8_number,
    i8,
    8,
    "7.1.10 ToInt8 ( argument )",
    "https://tc39.es/ecma262/#sec-toint8"
);
int_conversion!(
    to_uint8,
    to_uint8_number,
    u8,
    8,
    "7.1.11 ToUint8 ( argument )",
    "https://tc39.es/ecma262/#sec-touint8"
);

/// ### [7.1.13 ToBigInt ( argument )](https://tc39.es/ecma262/#sec-tobigint)
///
/// The abstract operation ToBigInt takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a BigInt
/// or a throw completion. It converts argument to a BigInt value, or throws if
/// an implicit conversion from Number would be required.
///
/// Objects are converted without a preferred type, so a @@toPrimitive method
/// receives the hint "default".
pub fn to_big_int(agent: &mut Agent, argument: Value) -> JsResult<BigInt> {
    // 1. Let prim be ? ToPrimitive(argument).
    let prim = to_primitive(agent, argument, None)?;
    // 2. Return the value that prim corresponds to in Table 12.
    match prim {
        // Throw a TypeError exception.
        Value::Undefined => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert undefined to a BigInt",
        )),
        Value::Null => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert null to a BigInt",
        )),
        // Return 1n if prim is true and 0n if prim is false.
        Value::Boolean(value) => Ok(BigInt::from_i64(agent, value as i64)),
        // Return prim.
        Value::BigInt(bigint) => Ok(bigint),
        // Throw a TypeError exception.
        Value::Number(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Number to a BigInt",
        )),
        // 1. Let n be StringToBigInt(prim).
        // 2. If n is undefined, throw a SyntaxError exception.
        // 3. Return n.
        Value::String(string) => match string_to_big_int(agent, string)? {
            Some(bigint) => Ok(bigint),
            None => Err(agent.throw_exception(
                ExceptionType::SyntaxError,
                "Cannot convert string to a BigInt",
            )),
        },
        // Throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a BigInt",
        )),
        Value::Object(_)
        | Value::Function(_)
        | Value::ArrayBuffer(_)
        | Value::DataView(_)
        | Value::Error(_) => unreachable!(),
    }
}

/// Parses a StringIntegerLiteral: optional surrounding whitespace around
/// either a signed decimal integer or an unsigned `0x`/`0o`/`0b` integer.
/// The empty and all-whitespace strings parse to zero.
pub(crate) fn parse_string_integer_literal(str: &str) -> Option<num_bigint::BigInt> {
    let literal = str.trim_matches(is_trimmable_whitespace);
    if literal.is_empty() {
        return Some(num_bigint::BigInt::zero());
    }
    if let Some((radix, digits)) = split_non_decimal_prefix(literal) {
        return parse_non_decimal_digits(digits, radix);
    }
    let (negative, digits) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = num_bigint::BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// ### [7.1.14 StringToBigInt ( str )](https://tc39.es/ecma262/#sec-stringtobigint)
///
/// The abstract operation StringToBigInt takes argument str (a String) and
/// returns a BigInt or undefined. Results wider than the agent's BigInt size
/// limit are a RangeError.
pub fn string_to_big_int(agent: &mut Agent, str: String) -> JsResult<Option<BigInt>> {
    // 1. Let text be StringToCodePoints(str).
    // 2. Let literal be ParseText(text, StringIntegerLiteral).
    // 3. If literal is a List of errors, return undefined.
    let Some(mv) = parse_string_integer_literal(str.as_str(agent)) else {
        return Ok(None);
    };
    // 4. Let mv be the MV of literal.
    // 5. Assert: mv is an integer.
    // 6. Return ℤ(mv).
    BigInt::try_from_num_bigint(agent, mv).map(Some)
}

/// ### [7.1.15 ToBigInt64 ( argument )](https://tc39.es/ecma262/#sec-tobigint64)
pub fn to_big_int64(agent: &mut Agent, argument: Value) -> JsResult<i64> {
    // 1. Let n be ? ToBigInt(argument).
    let n = to_big_int(agent, argument)?;
    // 2. Let int64bit be ℝ(n) modulo 2^64.
    // 3. If int64bit ≥ 2^63, return ℤ(int64bit - 2^64); otherwise return
    //    ℤ(int64bit).
    Ok(n.to_i64_wrapping(agent))
}

/// ### [7.1.16 ToBigUint64 ( argument )](https://tc39.es/ecma262/#sec-tobiguint64)
pub fn to_big_uint64(agent: &mut Agent, argument: Value) -> JsResult<u64> {
    // 1. Let n be ? ToBigInt(argument).
    let n = to_big_int(agent, argument)?;
    // 2. Let int64bit be ℝ(n) modulo 2^64.
    // 3. Return ℤ(int64bit).
    Ok(n.to_u64_wrapping(agent))
}

/// ### [7.1.22 ToIndex ( value )](https://tc39.es/ecma262/#sec-toindex)
///
/// The abstract operation ToIndex takes argument value (an ECMAScript
/// language value) and returns either a normal completion containing a
/// non-negative integer or a throw completion. It converts value to an
/// integer and returns that integer if it is non-negative and corresponds
/// with an integer index.
pub fn to_index(agent: &mut Agent, value: Value) -> JsResult<u64> {
    // 1. Let integer be ? ToIntegerOrInfinity(value).
    let integer = to_integer_or_infinity(agent, value)?;
    // 2. If integer is not in the inclusive interval from 0 to 2**53 - 1,
    //    throw a RangeError exception.
    if !(0.0..=MAX_SAFE_INTEGER).contains(&integer) {
        return Err(agent.throw_exception(ExceptionType::RangeError, "Index out of range"));
    }
    // 3. Return integer.
    Ok(integer as u64)
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use num_bigint::BigInt as NumBigInt;

    use super::{
        PreferredType, is_trimmable_whitespace, parse_string_integer_literal,
        string_to_number, to_big_int, to_boolean, to_index, to_int8_number, to_int16_number,
        to_int32_number, to_integer_or_infinity, to_number, to_numeric, to_primitive,
        to_uint8_number, to_uint16_number, to_uint32_number,
    };
    use crate::{
        ecmascript::{
            abstract_operations::operations_on_objects::{
                create_data_property, ordinary_object_create,
            },
            builtins::create_closure_function,
            execution::{Agent, ExceptionType, JsError},
            types::{Number, Numeric, OrdinaryObject, PropertyKey, String, Value},
        },
        heap::WellKnownSymbolIndexes,
    };

    /// An object whose `valueOf` and `toString` record their calls in `log`
    /// and return the given values.
    fn logging_object(
        agent: &mut Agent,
        log: &Rc<RefCell<Vec<&'static str>>>,
        value_of: Value,
        to_string: Value,
    ) -> OrdinaryObject {
        let object = ordinary_object_create(agent);
        for (name, result) in [("valueOf", value_of), ("toString", to_string)] {
            let log = log.clone();
            let method = create_closure_function(agent, name, 0, move |_, _, _| {
                log.borrow_mut().push(name);
                Ok(result)
            });
            let key = PropertyKey::from_str(agent, name);
            create_data_property(agent, object, key, method.into());
        }
        object
    }

    #[test]
    fn ordinary_to_primitive_follows_hint_order() {
        let mut agent = Agent::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let object = logging_object(&mut agent, &log, Value::from(1), Value::from(2));
        let result = to_primitive(&mut agent, object.into(), Some(PreferredType::Number));
        assert_eq!(result.unwrap(), Value::from(1));
        let result = to_primitive(&mut agent, object.into(), Some(PreferredType::String));
        assert_eq!(result.unwrap(), Value::from(2));
        assert_eq!(*log.borrow(), ["valueOf", "toString"]);
    }

    #[test]
    fn ordinary_to_primitive_skips_object_results() {
        let mut agent = Agent::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let other = ordinary_object_create(&mut agent);
        let object = logging_object(&mut agent, &log, other.into(), Value::from(7));
        let result = to_primitive(&mut agent, object.into(), None).unwrap();
        assert_eq!(result, Value::from(7));
        assert_eq!(*log.borrow(), ["valueOf", "toString"]);

        let object = logging_object(&mut agent, &log, other.into(), other.into());
        let error = to_primitive(&mut agent, object.into(), None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn exotic_to_primitive_receives_hint_and_wins() {
        let mut agent = Agent::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let object = logging_object(&mut agent, &log, Value::from(1), Value::from(2));
        let hints = Rc::new(RefCell::new(Vec::new()));
        let seen = hints.clone();
        let exotic = create_closure_function(
            &mut agent,
            "[Symbol.toPrimitive]",
            1,
            move |agent, _, arguments| {
                let hint = String::try_from(arguments.get(0)).unwrap();
                seen.borrow_mut().push(hint.as_str(agent).to_owned());
                Ok(Value::from(3))
            },
        );
        let key = PropertyKey::Symbol(WellKnownSymbolIndexes::ToPrimitive.into());
        create_data_property(&mut agent, object, key, exotic.into());
        for hint in [None, Some(PreferredType::Number), Some(PreferredType::String)] {
            let result = to_primitive(&mut agent, object.into(), hint).unwrap();
            assert_eq!(result, Value::from(3));
        }
        assert_eq!(*hints.borrow(), ["default", "number", "string"]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn exotic_to_primitive_must_be_callable_and_return_primitive() {
        let mut agent = Agent::default();
        let object = ordinary_object_create(&mut agent);
        let key = PropertyKey::Symbol(WellKnownSymbolIndexes::ToPrimitive.into());
        create_data_property(&mut agent, object, key, Value::from(1));
        let error = to_primitive(&mut agent, object.into(), None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));

        let returns_object = create_closure_function(&mut agent, "f", 0, |_, this, _| Ok(this));
        create_data_property(&mut agent, object, key, returns_object.into());
        let error = to_primitive(&mut agent, object.into(), None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));

        // undefined and null fall back to OrdinaryToPrimitive.
        create_data_property(&mut agent, object, key, Value::Null);
        let error = to_primitive(&mut agent, object.into(), None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        let value_of = create_closure_function(&mut agent, "valueOf", 0, |_, _, _| {
            Ok(Value::from(5))
        });
        let value_of_key = PropertyKey::from_str(&mut agent, "valueOf");
        create_data_property(&mut agent, object, value_of_key, value_of.into());
        assert_eq!(
            to_primitive(&mut agent, object.into(), None).unwrap(),
            Value::from(5)
        );
    }

    #[test]
    fn callback_errors_propagate_unchanged() {
        let mut agent = Agent::default();
        let object = ordinary_object_create(&mut agent);
        let thrown = Value::from(1234);
        let value_of = create_closure_function(&mut agent, "valueOf", 0, move |_, _, _| {
            Err(JsError::new(thrown))
        });
        let key = PropertyKey::from_str(&mut agent, "valueOf");
        create_data_property(&mut agent, object, key, value_of.into());
        let error = to_number(&mut agent, object.into()).unwrap_err();
        assert_eq!(error.value(), thrown);
    }

    #[test]
    fn to_number_of_primitives() {
        let mut agent = Agent::default();
        assert!(to_number(&mut agent, Value::Undefined).unwrap().is_nan());
        assert!(to_number(&mut agent, Value::Null).unwrap().is_pos_zero());
        assert_eq!(to_number(&mut agent, Value::from(true)).unwrap(), Number::from(1));
        let string = String::from_str(&mut agent, "  12.5e1 \n");
        assert_eq!(
            to_number(&mut agent, string.into()).unwrap(),
            Number::from(125.0)
        );
        let bigint = Value::BigInt(crate::ecmascript::types::BigInt::from_i64(&mut agent, 1));
        let error = to_number(&mut agent, bigint).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        assert_eq!(
            to_numeric(&mut agent, bigint).unwrap(),
            Numeric::try_from(bigint).unwrap()
        );
    }

    #[test]
    fn string_to_number_grammar() {
        assert!(string_to_number("").is_pos_zero());
        assert!(string_to_number(" \t\u{FEFF}\u{2028} ").is_pos_zero());
        assert!(string_to_number("-0").is_neg_zero());
        assert_eq!(string_to_number("0x1F"), Number::from(31));
        assert_eq!(string_to_number("0B101"), Number::from(5));
        assert_eq!(string_to_number("0o17"), Number::from(15));
        assert_eq!(string_to_number(".5"), Number::from(0.5));
        assert_eq!(string_to_number("5."), Number::from(5.0));
        assert_eq!(string_to_number("+1e3"), Number::from(1000.0));
        assert!(string_to_number("-Infinity").is_neg_infinity());
        assert!(string_to_number("Infinity").is_pos_infinity());
        for invalid in ["-0x10", "0x", "1_000", "inf", "nan", "1e", ".", "12px", "0x1g"] {
            assert!(string_to_number(invalid).is_nan(), "{invalid}");
        }
        // 2^53 + 1 rounds to even.
        assert_eq!(
            string_to_number("0x20000000000001"),
            Number::from(9007199254740992.0)
        );
    }

    #[test]
    fn whitespace_table() {
        assert!(is_trimmable_whitespace('\u{00A0}'));
        assert!(is_trimmable_whitespace('\u{FEFF}'));
        assert!(!is_trimmable_whitespace('\u{0085}'));
        assert!(!is_trimmable_whitespace('\u{200B}'));
    }

    #[test]
    fn to_integer_or_infinity_truncates() {
        let mut agent = Agent::default();
        let result = to_integer_or_infinity(&mut agent, Value::from(-0.9)).unwrap();
        assert_eq!(result.to_bits(), 0.0f64.to_bits());
        assert_eq!(
            to_integer_or_infinity(&mut agent, Value::from(f64::NEG_INFINITY)).unwrap(),
            f64::NEG_INFINITY
        );
        assert_eq!(
            to_integer_or_infinity(&mut agent, Value::from(f64::NAN)).unwrap(),
            0.0
        );
    }

    #[test]
    fn to_index_bounds() {
        let mut agent = Agent::default();
        assert_eq!(to_index(&mut agent, Value::Undefined).unwrap(), 0);
        assert_eq!(to_index(&mut agent, Value::from(-0.9)).unwrap(), 0);
        assert_eq!(to_index(&mut agent, Value::from(1.9)).unwrap(), 1);
        assert_eq!(
            to_index(&mut agent, Value::from(9007199254740991.0)).unwrap(),
            9007199254740991
        );
        for out_of_range in [-1.0, 9007199254740992.0, f64::INFINITY] {
            let error = to_index(&mut agent, Value::from(out_of_range)).unwrap_err();
            assert_eq!(error.exception_type(&agent), Some(ExceptionType::RangeError));
        }
        let symbol = crate::ecmascript::types::Symbol::new(&mut agent, None);
        let error = to_index(&mut agent, symbol.into()).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn modular_integer_conversions() {
        assert_eq!(to_int32_number(Number::from(2147483648.0)), -2147483648);
        assert_eq!(to_int32_number(Number::from(-1.5)), -1);
        assert_eq!(to_uint32_number(Number::from(-1.0)), 4294967295);
        assert_eq!(to_uint32_number(Number::from(4294967296.5)), 0);
        assert_eq!(to_int16_number(Number::from(32768.0)), -32768);
        assert_eq!(to_uint16_number(Number::from(-2.0)), 65534);
        assert_eq!(to_int8_number(Number::from(255.0)), -1);
        assert_eq!(to_uint8_number(Number::from(256.0)), 0);
        assert_eq!(to_uint8_number(Number::from(-0.0)), 0);
        assert_eq!(to_uint8_number(Number::nan()), 0);
        assert_eq!(to_int32_number(Number::pos_inf()), 0);
        assert_eq!(to_int32_number(Number::from(1e20)), 1661992960);
    }

    #[test]
    fn to_big_int_rejects_numbers_and_nullish() {
        let mut agent = Agent::default();
        for value in [Value::Undefined, Value::Null, Value::from(1)] {
            let error = to_big_int(&mut agent, value).unwrap_err();
            assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        }
        let one = to_big_int(&mut agent, Value::from(true)).unwrap();
        assert_eq!(*one.as_num_bigint(&agent), NumBigInt::from(1));
        let string = String::from_str(&mut agent, "1n");
        let error = to_big_int(&mut agent, string.into()).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::SyntaxError));
    }

    #[test]
    fn string_integer_literal_grammar() {
        let parse = |s: &str| parse_string_integer_literal(s).map(|n| n.to_string());
        assert_eq!(parse("").as_deref(), Some("0"));
        assert_eq!(parse("  \n ").as_deref(), Some("0"));
        assert_eq!(parse(" -123 ").as_deref(), Some("-123"));
        assert_eq!(parse("+7").as_deref(), Some("7"));
        assert_eq!(parse("-0").as_deref(), Some("0"));
        assert_eq!(parse("0xFF").as_deref(), Some("255"));
        assert_eq!(parse("0O777").as_deref(), Some("511"));
        assert_eq!(parse("0b11").as_deref(), Some("3"));
        for invalid in [
            "-0x1", "+0b1", "0x", "1n", "1 2", "1_000", "1.0", "1e3", "Infinity", "0x_1", "--1",
            "-", "+",
        ] {
            assert_eq!(parse(invalid), None, "{invalid}");
        }
    }

    #[test]
    fn to_boolean_of_primitives() {
        let mut agent = Agent::default();
        assert!(!to_boolean(&agent, Value::from(f64::NAN)));
        assert!(!to_boolean(&agent, Value::from(-0.0)));
        assert!(to_boolean(&agent, Value::from(0.1)));
        let empty = String::from_str(&mut agent, "");
        assert!(!to_boolean(&agent, empty.into()));
        let zero = crate::ecmascript::types::BigInt::zero(&mut agent);
        assert!(!to_boolean(&agent, zero.into()));
        let object = ordinary_object_create(&mut agent);
        assert!(to_boolean(&agent, object.into()));
    }
}
