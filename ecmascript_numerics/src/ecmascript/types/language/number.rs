// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IntoValue, Value};

/// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
///
/// An IEEE 754-2019 binary64 value. The bits are carried around untouched:
/// equality is bitwise so that NaN payloads and the sign of zero survive
/// every copy.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Number(f64);

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Number {
    pub const fn nan() -> Self {
        Self(f64::NAN)
    }

    pub const fn pos_zero() -> Self {
        Self(0.0)
    }

    pub const fn neg_zero() -> Self {
        Self(-0.0)
    }

    pub const fn pos_inf() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn neg_inf() -> Self {
        Self(f64::NEG_INFINITY)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(f64::from_bits(bits))
    }

    pub const fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    pub const fn into_f64(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    pub fn is_pos_zero(self) -> bool {
        self.0.to_bits() == 0.0f64.to_bits()
    }

    pub fn is_neg_zero(self) -> bool {
        self.0.to_bits() == (-0.0f64).to_bits()
    }

    pub fn is_pos_infinity(self) -> bool {
        self.0 == f64::INFINITY
    }

    pub fn is_neg_infinity(self) -> bool {
        self.0 == f64::NEG_INFINITY
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// ### [truncate(x)](https://tc39.es/ecma262/#eqn-truncate)
    pub fn truncate(self) -> Self {
        Self(self.0.trunc())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(value as f64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self(value as f64)
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Self(value as f64)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Self(value as f64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Self(value as f64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Self(value as f64)
    }
}

impl IntoValue for Number {
    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl TryFrom<Value> for Number {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(()),
        }
    }
}

const F32_MANTISSA_BITS: u32 = 23;
const F64_MANTISSA_BITS: u32 = 52;
const MANTISSA_SHIFT: u32 = F64_MANTISSA_BITS - F32_MANTISSA_BITS;

/// Widens a binary32 value to binary64. Hardware conversion may quiet a
/// signalling NaN; NaNs are instead rebuilt from their sign and payload bits.
pub(crate) fn f32_to_f64_preserving_nan(value: f32) -> f64 {
    if !value.is_nan() {
        return value as f64;
    }
    let bits = value.to_bits();
    let sign = ((bits >> 31) as u64) << 63;
    let payload = ((bits & 0x007f_ffff) as u64) << MANTISSA_SHIFT;
    f64::from_bits(sign | 0x7ff0_0000_0000_0000 | payload)
}

/// Narrows a binary64 value to binary32 with roundTiesToEven. NaNs keep
/// their sign and the upper payload bits, which includes the quiet bit.
pub(crate) fn f64_to_f32_preserving_nan(value: f64) -> f32 {
    if !value.is_nan() {
        return value as f32;
    }
    let bits = value.to_bits();
    let sign = ((bits >> 63) as u32) << 31;
    let mut payload = ((bits & 0x000f_ffff_ffff_ffff) >> MANTISSA_SHIFT) as u32;
    if payload == 0 {
        // Payload only lived in the discarded low bits; keep it a NaN.
        payload = 1;
    }
    f32::from_bits(sign | 0x7f80_0000 | payload)
}

#[cfg(test)]
mod test {
    use super::{Number, f32_to_f64_preserving_nan, f64_to_f32_preserving_nan};

    #[test]
    fn zero_signs_are_distinct() {
        assert_ne!(Number::pos_zero(), Number::neg_zero());
        assert!(Number::neg_zero().is_neg_zero());
        assert!(!Number::neg_zero().is_pos_zero());
        assert_eq!(Number::from(0), Number::pos_zero());
    }

    #[test]
    fn nan_equality_is_bitwise() {
        let quiet = Number::from_bits(0x7ff8_0000_0000_0000);
        let payload = Number::from_bits(0x7ff8_0000_0000_0001);
        assert_eq!(quiet, Number::nan());
        assert_ne!(quiet, payload);
        assert!(payload.is_nan());
    }

    #[test]
    fn signalling_nan_survives_f32_round_trip() {
        let signalling = f32::from_bits(0x7f80_0001);
        let widened = f32_to_f64_preserving_nan(signalling);
        assert!(widened.is_nan());
        assert_eq!(f64_to_f32_preserving_nan(widened).to_bits(), 0x7f80_0001);

        let negative_quiet = f32::from_bits(0xffc0_1234);
        let widened = f32_to_f64_preserving_nan(negative_quiet);
        assert_eq!(f64_to_f32_preserving_nan(widened).to_bits(), 0xffc0_1234);
    }

    #[test]
    fn narrowing_keeps_nan_with_low_payload() {
        let low_payload = f64::from_bits(0x7ff0_0000_0000_0001);
        let narrowed = f64_to_f32_preserving_nan(low_payload);
        assert!(narrowed.is_nan());
    }

    #[test]
    fn narrowing_rounds_ties_to_even() {
        // 1 + 2^-24 lies exactly between two binary32 values.
        let tie = 1.0 + f64::powi(2.0, -24);
        assert_eq!(f64_to_f32_preserving_nan(tie), 1.0);
        assert_eq!(f64_to_f32_preserving_nan(-0.0).to_bits(), 0x8000_0000);
    }
}
