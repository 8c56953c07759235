// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::types::{Number, Value};

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
///
/// The abstract operation IsCallable takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// callable function with a \[\[Call]] internal method.
pub fn is_callable(argument: Value) -> bool {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Call]] internal method, return true.
    // 3. Return false.
    matches!(argument, Value::Function(_))
}

/// ### [7.2.6 IsIntegralNumber ( argument )](https://tc39.es/ecma262/#sec-isintegralnumber)
pub fn is_integral_number(argument: Number) -> bool {
    // 1. If argument is not a Number, return false.
    // 2. If argument is not finite, return false.
    if !argument.is_finite() {
        return false;
    }
    // 3. If truncate(ℝ(argument)) ≠ ℝ(argument), return false.
    // 4. Return true.
    argument.truncate().into_f64() == argument.into_f64()
}

#[cfg(test)]
mod test {
    use super::is_integral_number;
    use crate::ecmascript::types::Number;

    #[test]
    fn integral_numbers() {
        assert!(is_integral_number(Number::from(3)));
        assert!(is_integral_number(Number::neg_zero()));
        assert!(is_integral_number(Number::from(1e300)));
        assert!(!is_integral_number(Number::from(0.5)));
        assert!(!is_integral_number(Number::nan()));
        assert!(!is_integral_number(Number::pos_inf()));
    }
}
