// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::type_conversion::to_index,
        builders::builtin_function_builder::BuiltinFunctionBuilder,
        builtins::{
            ArgumentsList, ArrayBuffer, Behaviour, Builtin, DataView,
            array_buffer::abstract_operations::{array_buffer_byte_length, is_detached_buffer},
            data_view::data::DataViewHeapData,
        },
        execution::{Agent, ExceptionType, JsResult},
        types::{IntoValue, Object, Value},
    },
    heap::CreateHeapData,
};

pub(crate) struct DataViewConstructor;
impl Builtin for DataViewConstructor {
    const NAME: &'static str = "DataView";

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Constructor(DataViewConstructor::behaviour);
}

impl DataViewConstructor {
    /// ### [25.3.2.1 DataView ( buffer \[ , byteOffset \[ , byteLength \] \] )](https://tc39.es/ecma262/#sec-dataview-buffer-byteoffset-bytelength)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        let byte_offset = arguments.get(1);
        let byte_length = arguments.get(2);
        // 1. If NewTarget is undefined, throw a TypeError exception.
        if new_target.is_none() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Constructor DataView requires 'new'",
            ));
        }
        // 2. Perform ? RequireInternalSlot(buffer, [[ArrayBufferData]]).
        let Ok(buffer) = ArrayBuffer::try_from(arguments.get(0)) else {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "First argument to DataView constructor must be an ArrayBuffer",
            ));
        };
        // 3. Let offset be ? ToIndex(byteOffset).
        let offset = to_index(agent, byte_offset)?;
        // 4. If IsDetachedBuffer(buffer) is true, throw a TypeError exception.
        if is_detached_buffer(agent, buffer) {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Attempting to access detached ArrayBuffer",
            ));
        }
        // 5. Let bufferByteLength be ArrayBufferByteLength(buffer, SEQ-CST).
        let buffer_byte_length = array_buffer_byte_length(agent, buffer) as u64;
        // 6. If offset > bufferByteLength, throw a RangeError exception.
        if offset > buffer_byte_length {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "Start offset is outside the bounds of the buffer",
            ));
        }
        // 8. If byteLength is undefined, then
        let view_byte_length = if byte_length.is_undefined() {
            // b. Else,
            // i. Let viewByteLength be bufferByteLength - offset.
            None
        } else {
            // 9. Else,
            // a. Let viewByteLength be ? ToIndex(byteLength).
            let view_byte_length = to_index(agent, byte_length)?;
            // b. If offset + viewByteLength > bufferByteLength, throw a RangeError exception.
            if offset + view_byte_length > buffer_byte_length {
                return Err(agent.throw_exception(
                    ExceptionType::RangeError,
                    "Invalid DataView length",
                ));
            }
            Some(view_byte_length)
        };
        // 11. If IsDetachedBuffer(buffer) is true, throw a TypeError exception.
        if is_detached_buffer(agent, buffer) {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Attempting to access detached ArrayBuffer",
            ));
        }
        // 12. Set bufferByteLength to ArrayBufferByteLength(buffer, SEQ-CST).
        let buffer_byte_length = array_buffer_byte_length(agent, buffer) as u64;
        // 13. If offset > bufferByteLength, throw a RangeError exception.
        if offset > buffer_byte_length {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "Start offset is outside the bounds of the buffer",
            ));
        }
        // 14. If byteLength is not undefined, then
        // a. If offset + viewByteLength > bufferByteLength, throw a RangeError exception.
        let view_byte_length = match view_byte_length {
            Some(view_byte_length) if offset + view_byte_length > buffer_byte_length => {
                return Err(agent.throw_exception(
                    ExceptionType::RangeError,
                    "Invalid DataView length",
                ));
            }
            Some(view_byte_length) => view_byte_length,
            None => buffer_byte_length - offset,
        };
        // 10. Let O be ? OrdinaryCreateFromConstructor(NewTarget, "%DataView.prototype%", « [[DataView]], [[ViewedArrayBuffer]], [[ByteLength]], [[ByteOffset]] »).
        // 15. Set O.[[ViewedArrayBuffer]] to buffer.
        // 16. Set O.[[ByteLength]] to viewByteLength.
        // 17. Set O.[[ByteOffset]] to offset.
        // Both values are bounded by the buffer's usize length.
        let o: DataView = agent.heap.create(DataViewHeapData {
            viewed_array_buffer: buffer,
            byte_length: view_byte_length as usize,
            byte_offset: offset as usize,
        });
        // 18. Return O.
        Ok(o.into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let data_view_prototype = agent.intrinsics.data_view_prototype;
        agent.intrinsics.data_view = BuiltinFunctionBuilder::new::<DataViewConstructor>(agent)
            .with_prototype_property(data_view_prototype)
            .build();
    }
}

#[cfg(test)]
mod test {
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call_function, construct},
        builtins::{ArgumentsList, ArrayBuffer, DataView},
        execution::{Agent, ExceptionType},
        types::{Object, Value},
    };

    fn new_data_view(agent: &mut Agent, arguments: &[Value]) -> Result<DataView, Option<ExceptionType>> {
        let constructor = agent.intrinsics().data_view();
        match construct(agent, constructor, Some(ArgumentsList::new(arguments)), None) {
            Ok(Object::DataView(view)) => Ok(view),
            Ok(other) => panic!("unexpected {other:?}"),
            Err(error) => Err(error.exception_type(agent)),
        }
    }

    #[test]
    fn defaults_cover_the_rest_of_the_buffer() {
        let mut agent = Agent::default();
        let buffer = ArrayBuffer::new(&mut agent, 8).unwrap();
        let view = new_data_view(&mut agent, &[buffer.into(), Value::from(3)]).unwrap();
        assert_eq!(view.byte_offset(&agent), 3);
        assert_eq!(view.byte_length(&agent), 5);
        assert_eq!(view.get_viewed_array_buffer(&agent), buffer);
        let view = new_data_view(&mut agent, &[buffer.into()]).unwrap();
        assert_eq!(view.byte_length(&agent), 8);
        let view =
            new_data_view(&mut agent, &[buffer.into(), Value::from(8), Value::from(0)]).unwrap();
        assert_eq!(view.byte_length(&agent), 0);
    }

    #[test]
    fn offsets_and_lengths_are_validated() {
        let mut agent = Agent::default();
        let buffer = ArrayBuffer::new(&mut agent, 8).unwrap();
        assert_eq!(
            new_data_view(&mut agent, &[buffer.into(), Value::from(9)]),
            Err(Some(ExceptionType::RangeError))
        );
        assert_eq!(
            new_data_view(&mut agent, &[buffer.into(), Value::from(4), Value::from(5)]),
            Err(Some(ExceptionType::RangeError))
        );
        assert_eq!(
            new_data_view(&mut agent, &[buffer.into(), Value::from(-1)]),
            Err(Some(ExceptionType::RangeError))
        );
        assert_eq!(
            new_data_view(&mut agent, &[Value::from(1)]),
            Err(Some(ExceptionType::TypeError))
        );
        buffer.detach(&mut agent);
        assert_eq!(
            new_data_view(&mut agent, &[buffer.into()]),
            Err(Some(ExceptionType::TypeError))
        );
    }

    #[test]
    fn calling_without_new_throws() {
        let mut agent = Agent::default();
        let buffer = ArrayBuffer::new(&mut agent, 8).unwrap();
        let constructor = agent.intrinsics().data_view();
        let error = call_function(
            &mut agent,
            constructor,
            Value::Undefined,
            Some(ArgumentsList::new(&[buffer.into()])),
        )
        .unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }
}
