// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Deref;

use super::{ArrayBuffer, ArrayBufferHeapData};
use crate::{
    ecmascript::{
        abstract_operations::type_conversion::{
            to_int8_number, to_int16_number, to_int32_number, to_uint8_number, to_uint16_number,
            to_uint32_number,
        },
        execution::{Agent, JsResult},
        types::{
            BigInt, DataBlock, Number, Numeric, f32_to_f64_preserving_nan,
            f64_to_f32_preserving_nan,
        },
    },
    heap::CreateHeapData,
};

/// ### [Table 71: The TypedArray Constructors](https://tc39.es/ecma262/#table-the-typedarray-constructors)
///
/// The element types a DataView can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    BigInt64,
    BigUint64,
    Float32,
    Float64,
}

impl ElementType {
    /// The Element Size column of Table 71, in bytes.
    pub const fn element_size(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::Uint8 => 1,
            ElementType::Int16 | ElementType::Uint16 => 2,
            ElementType::Int32 | ElementType::Uint32 | ElementType::Float32 => 4,
            ElementType::BigInt64 | ElementType::BigUint64 | ElementType::Float64 => 8,
        }
    }

    /// #### [25.1.3.9 IsUnsignedElementType ( type )](https://tc39.es/ecma262/#sec-isunsignedelementtype)
    pub const fn is_unsigned(self) -> bool {
        // 1. If type is one of UINT8, UINT8CLAMPED, UINT16, UINT32, or BIGUINT64, return true.
        // 2. Return false.
        matches!(
            self,
            ElementType::Uint8 | ElementType::Uint16 | ElementType::Uint32 | ElementType::BigUint64
        )
    }

    /// #### [25.1.3.11 IsBigIntElementType ( type )](https://tc39.es/ecma262/#sec-isbigintelementtype)
    pub const fn is_big_int(self) -> bool {
        // 1. If type is either BIGUINT64 or BIGINT64, return true.
        // 2. Return false.
        matches!(self, ElementType::BigInt64 | ElementType::BigUint64)
    }
}

/// The bytes of a single element, at most eight of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawBytes {
    bytes: [u8; 8],
    len: usize,
}

impl RawBytes {
    fn from_le_bytes<const N: usize>(le_bytes: [u8; N], is_little_endian: bool) -> Self {
        let mut bytes = [0; 8];
        bytes[..N].copy_from_slice(&le_bytes);
        if !is_little_endian {
            bytes[..N].reverse();
        }
        Self { bytes, len: N }
    }
}

impl Deref for RawBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// #### [25.1.3.1 AllocateArrayBuffer ( constructor, byteLength \[ , maxByteLength \] )](https://tc39.es/ecma262/#sec-allocatearraybuffer)
///
/// The abstract operation AllocateArrayBuffer takes arguments *constructor*
/// (a constructor) and *byteLength* (a non-negative integer) and returns
/// either a normal completion containing an ArrayBuffer or a throw
/// completion. It is used to create an ArrayBuffer.
pub(crate) fn allocate_array_buffer(agent: &mut Agent, byte_length: u64) -> JsResult<ArrayBuffer> {
    // 5. Let block be ? CreateByteDataBlock(byteLength).
    let block = DataBlock::create_byte_data_block(agent, byte_length)?;
    // 6. Set obj.[[ArrayBufferData]] to block.
    // 7. Set obj.[[ArrayBufferByteLength]] to byteLength.
    let array_buffer = agent
        .heap
        .create(ArrayBufferHeapData::new_fixed_length(block));
    log::debug!("allocated {byte_length} byte ArrayBuffer {array_buffer:?}");
    // 9. Return obj.
    Ok(array_buffer)
}

/// #### [25.1.3.2 ArrayBufferByteLength ( arrayBuffer, order )](https://tc39.es/ecma262/#sec-arraybufferbytelength)
///
/// The abstract operation ArrayBufferByteLength takes arguments arrayBuffer
/// (an ArrayBuffer) and order (SEQ-CST or UNORDERED) and returns a
/// non-negative integer.
pub(crate) fn array_buffer_byte_length(agent: &Agent, array_buffer: ArrayBuffer) -> usize {
    // 2. Assert: IsDetachedBuffer(arrayBuffer) is false.
    debug_assert!(!is_detached_buffer(agent, array_buffer));
    // 3. Return arrayBuffer.[[ArrayBufferByteLength]].
    agent[array_buffer].byte_length()
}

/// #### [25.1.3.3 IsDetachedBuffer ( arrayBuffer )](https://tc39.es/ecma262/#sec-isdetachedbuffer)
///
/// The abstract operation IsDetachedBuffer takes argument *arrayBuffer* (an
/// ArrayBuffer) and returns a Boolean.
#[inline]
pub(crate) fn is_detached_buffer(agent: &Agent, array_buffer: ArrayBuffer) -> bool {
    // 1. If arrayBuffer.[[ArrayBufferData]] is null, return true.
    // 2. Return false.
    agent[array_buffer].is_detached_buffer()
}

/// #### [25.1.3.4 DetachArrayBuffer ( arrayBuffer \[ , key \] )](https://tc39.es/ecma262/#sec-detacharraybuffer)
///
/// The abstract operation DetachArrayBuffer takes argument *arrayBuffer* (an
/// ArrayBuffer) and returns UNUSED. Detach keys are not supported, so this
/// cannot fail. Detaching an already detached buffer does nothing.
pub(crate) fn detach_array_buffer(agent: &mut Agent, array_buffer: ArrayBuffer) {
    if is_detached_buffer(agent, array_buffer) {
        return;
    }
    // 4. Set arrayBuffer.[[ArrayBufferData]] to null.
    // 5. Set arrayBuffer.[[ArrayBufferByteLength]] to 0.
    agent[array_buffer].detach();
    log::debug!("detached ArrayBuffer {array_buffer:?}");
    // 6. Return UNUSED.
}

/// #### [25.1.3.13 RawBytesToNumeric ( type, rawBytes, isLittleEndian )](https://tc39.es/ecma262/#sec-rawbytestonumeric)
///
/// The abstract operation RawBytesToNumeric takes arguments type (a
/// TypedArray element type), rawBytes (a List of byte values), and
/// isLittleEndian (a Boolean) and returns a Number or a BigInt.
///
/// Floats are decoded from their bit patterns, so NaN payloads are kept.
pub(crate) fn raw_bytes_to_numeric(
    agent: &mut Agent,
    r#type: ElementType,
    raw_bytes: &[u8],
    is_little_endian: bool,
) -> Numeric {
    // 1. Let elementSize be the Element Size value specified in Table 71 for Element Type type.
    let element_size = r#type.element_size();
    debug_assert_eq!(raw_bytes.len(), element_size);
    // 2. If isLittleEndian is false, reverse the order of the elements of rawBytes.
    let mut le_bytes = [0u8; 8];
    le_bytes[..element_size].copy_from_slice(raw_bytes);
    if !is_little_endian {
        le_bytes[..element_size].reverse();
    }
    let bits = u64::from_le_bytes(le_bytes);
    match r#type {
        // 3. If type is FLOAT32, then
        // a. Let value be the byte elements of rawBytes concatenated and
        //    interpreted as a little-endian bit string encoding of an IEEE
        //    754-2019 binary32 value.
        // c. Return the Number value that corresponds to value.
        ElementType::Float32 => {
            let value = f32::from_bits(bits as u32);
            Number::from(f32_to_f64_preserving_nan(value)).into()
        }
        // 4. If type is FLOAT64, then
        ElementType::Float64 => Number::from_bits(bits).into(),
        ElementType::Int8
        | ElementType::Uint8
        | ElementType::Int16
        | ElementType::Uint16
        | ElementType::Int32
        | ElementType::Uint32
        | ElementType::BigInt64
        | ElementType::BigUint64 => {
            // 5. If IsUnsignedElementType(type) is true, then
            if r#type.is_unsigned() {
                // a. Let intValue be the byte elements of rawBytes concatenated
                //    and interpreted as a bit string encoding of an unsigned
                //    little-endian binary number.
                // 7. If IsBigIntElementType(type) is true, return the BigInt
                //    value that corresponds to intValue.
                if r#type.is_big_int() {
                    return BigInt::from_u64(agent, bits).into();
                }
                // 8. Otherwise, return the Number value that corresponds to intValue.
                return Number::from(bits as f64).into();
            }
            // 6. Else,
            // a. Let intValue be the byte elements of rawBytes concatenated and
            //    interpreted as a bit string encoding of a binary little-endian
            //    two's complement number of bit length elementSize × 8.
            let shift = 64 - 8 * element_size as u32;
            let int_value = ((bits << shift) as i64) >> shift;
            if r#type.is_big_int() {
                BigInt::from_i64(agent, int_value).into()
            } else {
                Number::from(int_value as f64).into()
            }
        }
    }
}

/// #### [25.1.3.15 GetValueFromBuffer ( arrayBuffer, byteIndex, type, isTypedArray, order \[ , isLittleEndian \] )](https://tc39.es/ecma262/#sec-getvaluefrombuffer)
///
/// The abstract operation GetValueFromBuffer takes arguments arrayBuffer
/// (an ArrayBuffer), byteIndex (a non-negative integer) and type (a
/// TypedArray element type) and optional argument isLittleEndian (a
/// Boolean) and returns a Number or a BigInt.
pub(crate) fn get_value_from_buffer(
    agent: &mut Agent,
    array_buffer: ArrayBuffer,
    byte_index: usize,
    r#type: ElementType,
    is_little_endian: Option<bool>,
) -> Numeric {
    // 1. Assert: IsDetachedBuffer(arrayBuffer) is false.
    // 2. Assert: There are sufficient bytes in arrayBuffer starting at byteIndex to represent a value of type.
    // 3. Let block be arrayBuffer.[[ArrayBufferData]].
    let Some(block) = agent[array_buffer].get_data_block() else {
        unreachable!("read from detached ArrayBuffer");
    };
    // 4. Let elementSize be the Element Size value specified in Table 71 for Element Type type.
    let element_size = r#type.element_size();
    // 6. Else,
    // a. Let rawValue be a List whose elements are bytes from block at
    //    indices in the interval from byteIndex (inclusive) to byteIndex +
    //    elementSize (exclusive).
    let mut raw_value = [0u8; 8];
    // 7. Assert: The number of elements in rawValue is elementSize.
    raw_value[..element_size]
        .copy_from_slice(&block.as_slice()[byte_index..byte_index + element_size]);
    // 8. If isLittleEndian is not present, set isLittleEndian to the value of
    //    the [[LittleEndian]] field of the surrounding agent's Agent Record.
    let is_little_endian = is_little_endian.unwrap_or(agent.options.little_endian);
    // 9. Return RawBytesToNumeric(type, rawValue, isLittleEndian).
    raw_bytes_to_numeric(agent, r#type, &raw_value[..element_size], is_little_endian)
}

/// #### [25.1.3.16 NumericToRawBytes ( type, value, isLittleEndian )](https://tc39.es/ecma262/#sec-numerictorawbytes)
///
/// The abstract operation NumericToRawBytes takes arguments type (a
/// TypedArray element type), value (a Number or a BigInt), and
/// isLittleEndian (a Boolean) and returns a List of byte values.
pub(crate) fn numeric_to_raw_bytes(
    agent: &Agent,
    r#type: ElementType,
    value: Numeric,
    is_little_endian: bool,
) -> RawBytes {
    match (r#type, value) {
        // 1. If type is FLOAT32, then
        // a. Let rawBytes be a List whose elements are the 4 bytes that are
        //    the result of converting value to IEEE 754-2019 binary32
        //    format using roundTiesToEven mode.
        (ElementType::Float32, Numeric::Number(value)) => {
            let value = f64_to_f32_preserving_nan(value.into_f64());
            RawBytes::from_le_bytes(value.to_bits().to_le_bytes(), is_little_endian)
        }
        // 2. Else if type is FLOAT64, then
        // a. Let rawBytes be a List whose elements are the 8 bytes that are
        //    the IEEE 754-2019 binary64 format encoding of value.
        (ElementType::Float64, Numeric::Number(value)) => {
            RawBytes::from_le_bytes(value.to_bits().to_le_bytes(), is_little_endian)
        }
        // 3. Else,
        // a. Let n be the Element Size value specified in Table 71 for Element Type type.
        // b. Let convOp be the abstract operation named in the Conversion
        //    Operation column in Table 71 for Element Type type.
        // c. Let intValue be ℝ(convOp(value)).
        // d. If intValue ≥ 0, then
        // i. Let rawBytes be a List whose elements are the n-byte binary
        //    encoding of intValue.
        // e. Else,
        // i. Let rawBytes be a List whose elements are the n-byte binary
        //    two's complement encoding of intValue.
        (ElementType::Int8, Numeric::Number(value)) => {
            RawBytes::from_le_bytes(to_int8_number(value).to_le_bytes(), is_little_endian)
        }
        (ElementType::Uint8, Numeric::Number(value)) => {
            RawBytes::from_le_bytes(to_uint8_number(value).to_le_bytes(), is_little_endian)
        }
        (ElementType::Int16, Numeric::Number(value)) => {
            RawBytes::from_le_bytes(to_int16_number(value).to_le_bytes(), is_little_endian)
        }
        (ElementType::Uint16, Numeric::Number(value)) => {
            RawBytes::from_le_bytes(to_uint16_number(value).to_le_bytes(), is_little_endian)
        }
        (ElementType::Int32, Numeric::Number(value)) => {
            RawBytes::from_le_bytes(to_int32_number(value).to_le_bytes(), is_little_endian)
        }
        (ElementType::Uint32, Numeric::Number(value)) => {
            RawBytes::from_le_bytes(to_uint32_number(value).to_le_bytes(), is_little_endian)
        }
        (ElementType::BigInt64, Numeric::BigInt(value)) => RawBytes::from_le_bytes(
            value.to_i64_wrapping(agent).to_le_bytes(),
            is_little_endian,
        ),
        (ElementType::BigUint64, Numeric::BigInt(value)) => RawBytes::from_le_bytes(
            value.to_u64_wrapping(agent).to_le_bytes(),
            is_little_endian,
        ),
        _ => unreachable!("{:?} element cannot hold {:?}", r#type, value),
    }
}

/// #### [25.1.3.17 SetValueInBuffer ( arrayBuffer, byteIndex, type, value, isTypedArray, order \[ , isLittleEndian \] )](https://tc39.es/ecma262/#sec-setvalueinbuffer)
///
/// The abstract operation SetValueInBuffer takes arguments arrayBuffer (an
/// ArrayBuffer), byteIndex (a non-negative integer), type (a TypedArray
/// element type) and value (a Number or a BigInt) and optional argument
/// isLittleEndian (a Boolean) and returns UNUSED.
pub(crate) fn set_value_in_buffer(
    agent: &mut Agent,
    array_buffer: ArrayBuffer,
    byte_index: usize,
    r#type: ElementType,
    value: Numeric,
    is_little_endian: Option<bool>,
) {
    // 1. Assert: IsDetachedBuffer(arrayBuffer) is false.
    debug_assert!(!is_detached_buffer(agent, array_buffer));
    // 3. Assert: value is a BigInt if IsBigIntElementType(type) is true; otherwise, value is a Number.
    debug_assert_eq!(r#type.is_big_int(), matches!(value, Numeric::BigInt(_)));
    // 6. If isLittleEndian is not present, set isLittleEndian to the value of
    //    the [[LittleEndian]] field of the surrounding agent's Agent Record.
    let is_little_endian = is_little_endian.unwrap_or(agent.options.little_endian);
    // 7. Let rawBytes be NumericToRawBytes(type, value, isLittleEndian).
    let raw_bytes = numeric_to_raw_bytes(agent, r#type, value, is_little_endian);
    // 4. Let block be arrayBuffer.[[ArrayBufferData]].
    let Some(block) = agent[array_buffer].get_data_block_mut() else {
        unreachable!("write to detached ArrayBuffer");
    };
    // 9. Else,
    // a. Store the individual bytes of rawBytes into block, starting at block[byteIndex].
    let written = block.set(byte_index, &raw_bytes);
    // 2. Assert: There are sufficient bytes in arrayBuffer starting at byteIndex to represent a value of type.
    debug_assert!(written);
    // 10. Return UNUSED.
}
