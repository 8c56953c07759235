// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::DataView;
use crate::ecmascript::{
    abstract_operations::type_conversion::{to_big_int, to_boolean, to_index, to_number},
    builtins::array_buffer::{
        ElementType,
        abstract_operations::{
            array_buffer_byte_length, get_value_from_buffer, is_detached_buffer,
            set_value_in_buffer,
        },
    },
    execution::{Agent, ExceptionType, JsResult},
    types::{IntoValue, Numeric, Value},
};

/// The viewed buffer's byte length, or `None` once it has been detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CachedBufferByteLength(Option<usize>);

/// ### [25.3.1.1 DataView With Buffer Witness Records](https://tc39.es/ecma262/#sec-dataview-with-buffer-witness-records)
///
/// A DataView With Buffer Witness Record is a Record value used to encapsulate
/// a DataView along with a cached byte length of the viewed buffer.
#[derive(Debug, Clone)]
pub(crate) struct DataViewWithBufferWitnessRecord {
    /// ### [\[\[Object\]\]](https://tc39.es/ecma262/#table-dataview-with-buffer-witness-record-fields)
    object: DataView,
    /// ### [\[\[CachedBufferByteLength\]\]](https://tc39.es/ecma262/#table-dataview-with-buffer-witness-record-fields)
    cached_buffer_byte_length: CachedBufferByteLength,
}

/// [25.3.1.2 MakeDataViewWithBufferWitnessRecord ( obj, order )](https://tc39.es/ecma262/#sec-makedataviewwithbufferwitnessrecord)
///
/// The abstract operation MakeDataViewWithBufferWitnessRecord takes arguments
/// obj (a DataView) and order (seq-cst or unordered) and returns a DataView
/// With Buffer Witness Record.
pub(crate) fn make_data_view_with_buffer_witness_record(
    agent: &Agent,
    obj: DataView,
) -> DataViewWithBufferWitnessRecord {
    // 1. Let buffer be obj.[[ViewedArrayBuffer]].
    let buffer = obj.get_viewed_array_buffer(agent);
    // 2. If IsDetachedBuffer(buffer) is true, then
    let byte_length = if is_detached_buffer(agent, buffer) {
        // a. Let byteLength be detached.
        CachedBufferByteLength(None)
    } else {
        // 3. Else,
        // a. Let byteLength be ArrayBufferByteLength(buffer, order).
        CachedBufferByteLength(Some(array_buffer_byte_length(agent, buffer)))
    };
    // 4. Return the DataView With Buffer Witness Record { [[Object]]: obj, [[CachedBufferByteLength]]: byteLength }.
    DataViewWithBufferWitnessRecord {
        object: obj,
        cached_buffer_byte_length: byte_length,
    }
}

/// [25.3.1.3 GetViewByteLength ( viewRecord )](https://tc39.es/ecma262/#sec-getviewbytelength)
///
/// The abstract operation GetViewByteLength takes argument viewRecord
/// (a DataView With Buffer Witness Record) and returns a non-negative integer.
pub(crate) fn get_view_byte_length(
    agent: &Agent,
    view_record: &DataViewWithBufferWitnessRecord,
) -> usize {
    // 1. Assert: IsViewOutOfBounds(viewRecord) is false.
    debug_assert!(!is_view_out_of_bounds(agent, view_record));
    // 2. Let view be viewRecord.[[Object]].
    // 3. If view.[[ByteLength]] is not auto, return view.[[ByteLength]].
    view_record.object.byte_length(agent)
}

/// [25.3.1.4 IsViewOutOfBounds ( viewRecord )](https://tc39.es/ecma262/#sec-isviewoutofbounds)
///
/// The abstract operation IsViewOutOfBounds takes argument viewRecord
/// (a DataView With Buffer Witness Record) and returns a Boolean.
pub(crate) fn is_view_out_of_bounds(
    agent: &Agent,
    view_record: &DataViewWithBufferWitnessRecord,
) -> bool {
    // 1. Let view be viewRecord.[[Object]].
    let view = view_record.object;
    // 2. Let bufferByteLength be viewRecord.[[CachedBufferByteLength]].
    // 3. Assert: IsDetachedBuffer(view.[[ViewedArrayBuffer]]) is true if and
    //    only if bufferByteLength is detached.
    debug_assert_eq!(
        is_detached_buffer(agent, view.get_viewed_array_buffer(agent)),
        view_record.cached_buffer_byte_length.0.is_none()
    );
    // 4. If bufferByteLength is detached, return true.
    let Some(buffer_byte_length) = view_record.cached_buffer_byte_length.0 else {
        return true;
    };
    // 5. Let byteOffsetStart be view.[[ByteOffset]].
    let byte_offset_start = view.byte_offset(agent);
    // 7. Else,
    // a. Let byteOffsetEnd be byteOffsetStart + view.[[ByteLength]].
    let byte_offset_end = byte_offset_start + view.byte_length(agent);
    // 8. If byteOffsetStart > bufferByteLength or byteOffsetEnd >
    //    bufferByteLength, return true.
    // 9. NOTE: 0-length DataViews are not considered out-of-bounds.
    // 10. Return false.
    byte_offset_start > buffer_byte_length || byte_offset_end > buffer_byte_length
}

/// ### [10.4.6.1 RequireInternalSlot ( O, internalSlot )](https://tc39.es/ecma262/#sec-requireinternalslot)
///
/// Checks that `o` has a \[\[DataView\]\] internal slot.
pub(crate) fn require_internal_slot_data_view(agent: &mut Agent, o: Value) -> JsResult<DataView> {
    match o {
        // 1. If O is not an Object, throw a TypeError exception.
        // 2. If O does not have an internalSlot internal slot, throw a TypeError exception.
        Value::DataView(data_view) => Ok(data_view),
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Expected this to be DataView")),
    }
}

/// Checks the view against its buffer after every argument has been
/// coerced, returning the absolute byte index of the access.
fn resolve_buffer_index(
    agent: &mut Agent,
    view: DataView,
    get_index: u64,
    r#type: ElementType,
) -> JsResult<usize> {
    // Let viewOffset be view.[[ByteOffset]].
    let view_offset = view.byte_offset(agent);
    // Let viewRecord be MakeDataViewWithBufferWitnessRecord(view, UNORDERED).
    let view_record = make_data_view_with_buffer_witness_record(agent, view);
    // If IsViewOutOfBounds(viewRecord) is true, throw a TypeError exception.
    if is_view_out_of_bounds(agent, &view_record) {
        return Err(agent.throw_exception(ExceptionType::TypeError, "DataView is out of bounds"));
    }
    // Let viewSize be GetViewByteLength(viewRecord).
    let view_size = get_view_byte_length(agent, &view_record);
    // Let elementSize be the Element Size value specified in Table 71 for Element Type type.
    let element_size = r#type.element_size();
    // If getIndex + elementSize > viewSize, throw a RangeError exception.
    let get_index = match usize::try_from(get_index) {
        Ok(get_index) if get_index.saturating_add(element_size) <= view_size => get_index,
        _ => {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "Offset is outside the bounds of the DataView",
            ));
        }
    };
    // Let bufferIndex be getIndex + viewOffset.
    let buffer_index = get_index + view_offset;
    log::trace!(
        "DataView {view:?} {:?} access at buffer index {buffer_index}",
        r#type
    );
    Ok(buffer_index)
}

/// ### [25.3.1.5 GetViewValue ( view, requestIndex, isLittleEndian, type )](https://tc39.es/ecma262/#sec-getviewvalue)
///
/// The abstract operation GetViewValue takes arguments view (an ECMAScript
/// language value), requestIndex (an ECMAScript language value),
/// isLittleEndian (an ECMAScript language value), and type (a TypedArray
/// element type) and returns either a normal completion containing either a
/// Number or a BigInt, or a throw completion. It is used by functions on
/// DataView instances to retrieve values from the view's buffer.
pub(crate) fn get_view_value(
    agent: &mut Agent,
    view: Value,
    request_index: Value,
    is_little_endian: Value,
    r#type: ElementType,
) -> JsResult<Value> {
    // 1. Perform ? RequireInternalSlot(view, [[DataView]]).
    // 2. Assert: view has a [[ViewedArrayBuffer]] internal slot.
    let view = require_internal_slot_data_view(agent, view)?;
    // 3. Let getIndex be ? ToIndex(requestIndex).
    let get_index = to_index(agent, request_index)?;
    // 4. Set isLittleEndian to ToBoolean(isLittleEndian).
    let is_little_endian = to_boolean(agent, is_little_endian);
    // 5. Let viewOffset be view.[[ByteOffset]].
    // 6. Let viewRecord be MakeDataViewWithBufferWitnessRecord(view, UNORDERED).
    // 7. If IsViewOutOfBounds(viewRecord) is true, throw a TypeError exception.
    // 8. Let viewSize be GetViewByteLength(viewRecord).
    // 9. Let elementSize be the Element Size value specified in Table 71 for Element Type type.
    // 10. If getIndex + elementSize > viewSize, throw a RangeError exception.
    // 11. Let bufferIndex be getIndex + viewOffset.
    let buffer_index = resolve_buffer_index(agent, view, get_index, r#type)?;
    // 12. Return GetValueFromBuffer(view.[[ViewedArrayBuffer]], bufferIndex, type, false, UNORDERED, isLittleEndian).
    let buffer = view.get_viewed_array_buffer(agent);
    let value = get_value_from_buffer(
        agent,
        buffer,
        buffer_index,
        r#type,
        Some(is_little_endian),
    );
    Ok(value.into_value())
}

/// ### [25.3.1.6 SetViewValue ( view, requestIndex, isLittleEndian, type, value )](https://tc39.es/ecma262/#sec-setviewvalue)
///
/// The abstract operation SetViewValue takes arguments view (an ECMAScript
/// language value), requestIndex (an ECMAScript language value),
/// isLittleEndian (an ECMAScript language value), type (a TypedArray element
/// type), and value (an ECMAScript language value) and returns either a
/// normal completion containing undefined or a throw completion. It is used
/// by functions on DataView instances to store values into the view's
/// buffer.
pub(crate) fn set_view_value(
    agent: &mut Agent,
    view: Value,
    request_index: Value,
    is_little_endian: Value,
    r#type: ElementType,
    value: Value,
) -> JsResult<Value> {
    // 1. Perform ? RequireInternalSlot(view, [[DataView]]).
    // 2. Assert: view has a [[ViewedArrayBuffer]] internal slot.
    let view = require_internal_slot_data_view(agent, view)?;
    // 3. Let getIndex be ? ToIndex(requestIndex).
    let get_index = to_index(agent, request_index)?;
    let number_value = if r#type.is_big_int() {
        // 4. If IsBigIntElementType(type) is true, let numberValue be ? ToBigInt(value).
        Numeric::BigInt(to_big_int(agent, value)?)
    } else {
        // 5. Otherwise, let numberValue be ? ToNumber(value).
        Numeric::Number(to_number(agent, value)?)
    };
    // 6. Set isLittleEndian to ToBoolean(isLittleEndian).
    let is_little_endian = to_boolean(agent, is_little_endian);
    // 7. Let viewOffset be view.[[ByteOffset]].
    // 8. Let viewRecord be MakeDataViewWithBufferWitnessRecord(view, UNORDERED).
    // 9. If IsViewOutOfBounds(viewRecord) is true, throw a TypeError exception.
    // 10. Let viewSize be GetViewByteLength(viewRecord).
    // 11. Let elementSize be the Element Size value specified in Table 71 for Element Type type.
    // 12. If getIndex + elementSize > viewSize, throw a RangeError exception.
    // 13. Let bufferIndex be getIndex + viewOffset.
    let buffer_index = resolve_buffer_index(agent, view, get_index, r#type)?;
    // 14. Perform SetValueInBuffer(view.[[ViewedArrayBuffer]], bufferIndex, type, numberValue, false, UNORDERED, isLittleEndian).
    let buffer = view.get_viewed_array_buffer(agent);
    set_value_in_buffer(
        agent,
        buffer,
        buffer_index,
        r#type,
        number_value,
        Some(is_little_endian),
    );
    // 15. Return undefined.
    Ok(Value::Undefined)
}

#[cfg(test)]
mod test {
    use super::{get_view_value, set_view_value};
    use crate::{
        ecmascript::{
            builtins::{
                ArrayBuffer, DataView, array_buffer::ElementType, data_view::data::DataViewHeapData,
            },
            execution::{Agent, ExceptionType},
            types::{Number, Value},
        },
        heap::CreateHeapData,
    };

    fn view_over(
        agent: &mut Agent,
        len: u64,
        byte_offset: usize,
        byte_length: usize,
    ) -> (ArrayBuffer, DataView) {
        let buffer = ArrayBuffer::new(agent, len).unwrap();
        let view = agent.heap.create(DataViewHeapData {
            viewed_array_buffer: buffer,
            byte_length,
            byte_offset,
        });
        (buffer, view)
    }

    #[test]
    fn accesses_are_relative_to_the_view_offset() {
        let mut agent = Agent::default();
        let (buffer, view) = view_over(&mut agent, 8, 2, 4);
        set_view_value(
            &mut agent,
            view.into(),
            Value::from(1),
            Value::Undefined,
            ElementType::Uint16,
            Value::from(0x0102),
        )
        .unwrap();
        assert_eq!(buffer.as_slice(&agent).unwrap(), &[0, 0, 0, 1, 2, 0, 0, 0]);
        let value = get_view_value(
            &mut agent,
            view.into(),
            Value::from(1),
            Value::from(true),
            ElementType::Uint16,
        )
        .unwrap();
        assert_eq!(value, Value::from(0x0201));
    }

    #[test]
    fn bounds_are_checked_against_the_view_length() {
        let mut agent = Agent::default();
        let (_, view) = view_over(&mut agent, 8, 2, 4);
        let error = get_view_value(
            &mut agent,
            view.into(),
            Value::from(1),
            Value::Undefined,
            ElementType::Int32,
        )
        .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::RangeError));
        let value = get_view_value(
            &mut agent,
            view.into(),
            Value::from(0),
            Value::Undefined,
            ElementType::Float32,
        )
        .unwrap();
        assert_eq!(value, Value::from(Number::pos_zero()));
    }

    #[test]
    fn detached_buffer_wins_over_range() {
        let mut agent = Agent::default();
        let (buffer, view) = view_over(&mut agent, 4, 0, 4);
        buffer.detach(&mut agent);
        let error = get_view_value(
            &mut agent,
            view.into(),
            Value::from(100),
            Value::Undefined,
            ElementType::Int8,
        )
        .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn index_errors_come_before_detach_checks() {
        let mut agent = Agent::default();
        let (buffer, view) = view_over(&mut agent, 4, 0, 4);
        buffer.detach(&mut agent);
        let error = set_view_value(
            &mut agent,
            view.into(),
            Value::from(-1),
            Value::Undefined,
            ElementType::Int8,
            Value::from(0),
        )
        .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::RangeError));
    }

    #[test]
    fn receiver_must_be_a_data_view() {
        let mut agent = Agent::default();
        let (buffer, _) = view_over(&mut agent, 4, 0, 4);
        let error = get_view_value(
            &mut agent,
            buffer.into(),
            Value::from(0),
            Value::Undefined,
            ElementType::Int8,
        )
        .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn big_int_views_require_big_int_values() {
        let mut agent = Agent::default();
        let (_, view) = view_over(&mut agent, 8, 0, 8);
        let error = set_view_value(
            &mut agent,
            view.into(),
            Value::from(0),
            Value::Undefined,
            ElementType::BigInt64,
            Value::from(1),
        )
        .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }
}
