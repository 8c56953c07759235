// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Deref;

use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct BigIntHeapData {
    pub(crate) data: BigInt,
}

impl Deref for BigIntHeapData {
    type Target = BigInt;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Convert an integral f64 to an exact BigInt.
/// f64 (IEEE 754 double): 1 sign bit, 11 exponent bits, 52 mantissa bits.
///
/// The caller must ensure `value` is finite and has no fractional part.
pub(crate) fn f64_to_exact_bigint(value: f64) -> BigInt {
    debug_assert!(value.is_finite() && value.trunc() == value);
    if value == 0.0 {
        return BigInt::from(0);
    }

    let bits = value.to_bits();
    let sign_bit = bits >> 63;
    let exponent_bits = ((bits >> 52) & 0x7ff) as i32;
    let mantissa_bits = bits & 0xf_ffff_ffff_ffff;

    // Integral values are never subnormal, so the implicit bit is set.
    let exponent = exponent_bits - 1023;
    let mantissa = mantissa_bits | 0x10_0000_0000_0000u64;

    // The value is mantissa * 2^(exponent - 52)
    let shift = exponent - 52;

    let result = if shift >= 0 {
        BigInt::from(mantissa) << (shift as usize)
    } else {
        // Integral, so the shifted-out bits are all zero.
        BigInt::from(mantissa) >> ((-shift) as usize)
    };

    if sign_bit == 1 { -result } else { result }
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt;

    use super::f64_to_exact_bigint;

    #[test]
    fn exact_conversion_of_integral_doubles() {
        assert_eq!(f64_to_exact_bigint(0.0), BigInt::from(0));
        assert_eq!(f64_to_exact_bigint(-0.0), BigInt::from(0));
        assert_eq!(f64_to_exact_bigint(1.0), BigInt::from(1));
        assert_eq!(f64_to_exact_bigint(-42.0), BigInt::from(-42));
        assert_eq!(
            f64_to_exact_bigint(9007199254740993.0),
            BigInt::from(9007199254740992u64)
        );
        assert_eq!(f64_to_exact_bigint(2f64.powi(100)), BigInt::from(1) << 100);
    }
}
