// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinGetter,
        array_buffer::{ElementType, abstract_operations::is_detached_buffer},
        data_view::abstract_operations::{
            get_view_value, require_internal_slot_data_view, set_view_value,
        },
    },
    execution::{Agent, JsResult},
    types::{IntoValue, Number, Value},
};

pub(crate) struct DataViewPrototype;

struct DataViewPrototypeGetBuffer;
impl Builtin for DataViewPrototypeGetBuffer {
    const NAME: &'static str = "get buffer";
    const KEY: Option<&'static str> = Some("buffer");
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_buffer);
}
impl BuiltinGetter for DataViewPrototypeGetBuffer {}
struct DataViewPrototypeGetByteLength;
impl Builtin for DataViewPrototypeGetByteLength {
    const NAME: &'static str = "get byteLength";
    const KEY: Option<&'static str> = Some("byteLength");
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_byte_length);
}
impl BuiltinGetter for DataViewPrototypeGetByteLength {}
struct DataViewPrototypeGetByteOffset;
impl Builtin for DataViewPrototypeGetByteOffset {
    const NAME: &'static str = "get byteOffset";
    const KEY: Option<&'static str> = Some("byteOffset");
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_byte_offset);
}
impl BuiltinGetter for DataViewPrototypeGetByteOffset {}
struct DataViewPrototypeGetBigInt64;
impl Builtin for DataViewPrototypeGetBigInt64 {
    const NAME: &'static str = "getBigInt64";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_big_int64);
}
struct DataViewPrototypeGetBigUint64;
impl Builtin for DataViewPrototypeGetBigUint64 {
    const NAME: &'static str = "getBigUint64";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_big_uint64);
}
struct DataViewPrototypeGetFloat32;
impl Builtin for DataViewPrototypeGetFloat32 {
    const NAME: &'static str = "getFloat32";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_float32);
}
struct DataViewPrototypeGetFloat64;
impl Builtin for DataViewPrototypeGetFloat64 {
    const NAME: &'static str = "getFloat64";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_float64);
}
struct DataViewPrototypeGetInt8;
impl Builtin for DataViewPrototypeGetInt8 {
    const NAME: &'static str = "getInt8";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_int8);
}
struct DataViewPrototypeGetInt16;
impl Builtin for DataViewPrototypeGetInt16 {
    const NAME: &'static str = "getInt16";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_int16);
}
struct DataViewPrototypeGetInt32;
impl Builtin for DataViewPrototypeGetInt32 {
    const NAME: &'static str = "getInt32";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_int32);
}
struct DataViewPrototypeGetUint8;
impl Builtin for DataViewPrototypeGetUint8 {
    const NAME: &'static str = "getUint8";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_uint8);
}
struct DataViewPrototypeGetUint16;
impl Builtin for DataViewPrototypeGetUint16 {
    const NAME: &'static str = "getUint16";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_uint16);
}
struct DataViewPrototypeGetUint32;
impl Builtin for DataViewPrototypeGetUint32 {
    const NAME: &'static str = "getUint32";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::get_uint32);
}
struct DataViewPrototypeSetBigInt64;
impl Builtin for DataViewPrototypeSetBigInt64 {
    const NAME: &'static str = "setBigInt64";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_big_int64);
}
struct DataViewPrototypeSetBigUint64;
impl Builtin for DataViewPrototypeSetBigUint64 {
    const NAME: &'static str = "setBigUint64";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_big_uint64);
}
struct DataViewPrototypeSetFloat32;
impl Builtin for DataViewPrototypeSetFloat32 {
    const NAME: &'static str = "setFloat32";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_float32);
}
struct DataViewPrototypeSetFloat64;
impl Builtin for DataViewPrototypeSetFloat64 {
    const NAME: &'static str = "setFloat64";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_float64);
}
struct DataViewPrototypeSetInt8;
impl Builtin for DataViewPrototypeSetInt8 {
    const NAME: &'static str = "setInt8";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_int8);
}
struct DataViewPrototypeSetInt16;
impl Builtin for DataViewPrototypeSetInt16 {
    const NAME: &'static str = "setInt16";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_int16);
}
struct DataViewPrototypeSetInt32;
impl Builtin for DataViewPrototypeSetInt32 {
    const NAME: &'static str = "setInt32";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_int32);
}
struct DataViewPrototypeSetUint8;
impl Builtin for DataViewPrototypeSetUint8 {
    const NAME: &'static str = "setUint8";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_uint8);
}
struct DataViewPrototypeSetUint16;
impl Builtin for DataViewPrototypeSetUint16 {
    const NAME: &'static str = "setUint16";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_uint16);
}
struct DataViewPrototypeSetUint32;
impl Builtin for DataViewPrototypeSetUint32 {
    const NAME: &'static str = "setUint32";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(DataViewPrototype::set_uint32);
}

impl DataViewPrototype {
    /// ### [25.3.4.1 get DataView.prototype.buffer](https://tc39.es/ecma262/#sec-get-dataview.prototype.buffer)
    ///
    /// DataView.prototype.buffer is an accessor property whose set accessor
    /// function is undefined.
    fn get_buffer(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. Perform ? RequireInternalSlot(O, [[DataView]]).
        // 3. Assert: O has a [[ViewedArrayBuffer]] internal slot.
        let o = require_internal_slot_data_view(agent, this_value)?;
        // 4. Let buffer be O.[[ViewedArrayBuffer]].
        // 5. Return buffer.
        Ok(o.get_viewed_array_buffer(agent).into_value())
    }

    /// ### [25.3.4.2 get DataView.prototype.byteLength](https://tc39.es/ecma262/#sec-get-dataview.prototype.bytelength)
    ///
    /// Reports 0 once the viewed buffer has been detached.
    fn get_byte_length(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. Perform ? RequireInternalSlot(O, [[DataView]]).
        // 3. Assert: O has a [[ViewedArrayBuffer]] internal slot.
        let o = require_internal_slot_data_view(agent, this_value)?;
        if is_detached_buffer(agent, o.get_viewed_array_buffer(agent)) {
            return Ok(Number::pos_zero().into_value());
        }
        // 6. Let size be GetViewByteLength(viewRecord).
        // 7. Return 𝔽(size).
        Ok(Number::from(o.byte_length(agent) as f64).into_value())
    }

    /// ### [25.3.4.3 get DataView.prototype.byteOffset](https://tc39.es/ecma262/#sec-get-dataview.prototype.byteoffset)
    ///
    /// Reports 0 once the viewed buffer has been detached.
    fn get_byte_offset(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. Perform ? RequireInternalSlot(O, [[DataView]]).
        // 3. Assert: O has a [[ViewedArrayBuffer]] internal slot.
        let o = require_internal_slot_data_view(agent, this_value)?;
        if is_detached_buffer(agent, o.get_viewed_array_buffer(agent)) {
            return Ok(Number::pos_zero().into_value());
        }
        // 6. Return 𝔽(O.[[ByteOffset]]).
        Ok(Number::from(o.byte_offset(agent) as f64).into_value())
    }

    /// ### [25.3.4.5 DataView.prototype.getBigInt64 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getbigint64)
    fn get_big_int64(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, BIGINT64).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::BigInt64,
        )
    }

    /// ### [25.3.4.6 DataView.prototype.getBigUint64 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getbiguint64)
    fn get_big_uint64(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, BIGUINT64).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::BigUint64,
        )
    }

    /// ### [25.3.4.8 DataView.prototype.getFloat32 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getfloat32)
    fn get_float32(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, FLOAT32).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::Float32,
        )
    }

    /// ### [25.3.4.9 DataView.prototype.getFloat64 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getfloat64)
    fn get_float64(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, FLOAT64).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::Float64,
        )
    }

    /// ### [25.3.4.10 DataView.prototype.getInt8 ( byteOffset )](https://tc39.es/ecma262/#sec-dataview.prototype.getint8)
    fn get_int8(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. Return ? GetViewValue(v, byteOffset, true, INT8).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            Value::Boolean(true),
            ElementType::Int8,
        )
    }

    /// ### [25.3.4.11 DataView.prototype.getInt16 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getint16)
    fn get_int16(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, INT16).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::Int16,
        )
    }

    /// ### [25.3.4.12 DataView.prototype.getInt32 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getint32)
    fn get_int32(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, INT32).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::Int32,
        )
    }

    /// ### [25.3.4.13 DataView.prototype.getUint8 ( byteOffset )](https://tc39.es/ecma262/#sec-dataview.prototype.getuint8)
    fn get_uint8(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. Return ? GetViewValue(v, byteOffset, true, UINT8).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            Value::Boolean(true),
            ElementType::Uint8,
        )
    }

    /// ### [25.3.4.14 DataView.prototype.getUint16 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getuint16)
    fn get_uint16(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, UINT16).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::Uint16,
        )
    }

    /// ### [25.3.4.15 DataView.prototype.getUint32 ( byteOffset \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.getuint32)
    fn get_uint32(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? GetViewValue(v, byteOffset, littleEndian, UINT32).
        get_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(1),
            ElementType::Uint32,
        )
    }

    /// ### [25.3.4.16 DataView.prototype.setBigInt64 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setbigint64)
    fn set_big_int64(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, BIGINT64, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::BigInt64,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.17 DataView.prototype.setBigUint64 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setbiguint64)
    fn set_big_uint64(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, BIGUINT64, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::BigUint64,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.19 DataView.prototype.setFloat32 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setfloat32)
    fn set_float32(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, FLOAT32, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::Float32,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.20 DataView.prototype.setFloat64 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setfloat64)
    fn set_float64(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, FLOAT64, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::Float64,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.21 DataView.prototype.setInt8 ( byteOffset, value )](https://tc39.es/ecma262/#sec-dataview.prototype.setint8)
    fn set_int8(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. Return ? SetViewValue(v, byteOffset, true, INT8, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            Value::Boolean(true),
            ElementType::Int8,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.22 DataView.prototype.setInt16 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setint16)
    fn set_int16(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, INT16, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::Int16,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.23 DataView.prototype.setInt32 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setint32)
    fn set_int32(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, INT32, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::Int32,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.24 DataView.prototype.setUint8 ( byteOffset, value )](https://tc39.es/ecma262/#sec-dataview.prototype.setuint8)
    fn set_uint8(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. Return ? SetViewValue(v, byteOffset, true, UINT8, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            Value::Boolean(true),
            ElementType::Uint8,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.25 DataView.prototype.setUint16 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setuint16)
    fn set_uint16(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, UINT16, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::Uint16,
            arguments.get(1),
        )
    }

    /// ### [25.3.4.26 DataView.prototype.setUint32 ( byteOffset, value \[ , littleEndian \] )](https://tc39.es/ecma262/#sec-dataview.prototype.setuint32)
    fn set_uint32(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let v be the this value.
        // 2. If littleEndian is not present, set littleEndian to false.
        // 3. Return ? SetViewValue(v, byteOffset, littleEndian, UINT32, value).
        set_view_value(
            agent,
            this_value,
            arguments.get(0),
            arguments.get(2),
            ElementType::Uint32,
            arguments.get(1),
        )
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let this = agent.intrinsics.data_view_prototype;
        let data_view_constructor = agent.intrinsics.data_view;

        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(24)
            .with_builtin_function_getter_property::<DataViewPrototypeGetBuffer>()
            .with_builtin_function_getter_property::<DataViewPrototypeGetByteLength>()
            .with_builtin_function_getter_property::<DataViewPrototypeGetByteOffset>()
            .with_constructor_property(data_view_constructor)
            .with_builtin_function_property::<DataViewPrototypeGetBigInt64>()
            .with_builtin_function_property::<DataViewPrototypeGetBigUint64>()
            .with_builtin_function_property::<DataViewPrototypeGetFloat32>()
            .with_builtin_function_property::<DataViewPrototypeGetFloat64>()
            .with_builtin_function_property::<DataViewPrototypeGetInt8>()
            .with_builtin_function_property::<DataViewPrototypeGetInt16>()
            .with_builtin_function_property::<DataViewPrototypeGetInt32>()
            .with_builtin_function_property::<DataViewPrototypeGetUint8>()
            .with_builtin_function_property::<DataViewPrototypeGetUint16>()
            .with_builtin_function_property::<DataViewPrototypeGetUint32>()
            .with_builtin_function_property::<DataViewPrototypeSetBigInt64>()
            .with_builtin_function_property::<DataViewPrototypeSetBigUint64>()
            .with_builtin_function_property::<DataViewPrototypeSetFloat32>()
            .with_builtin_function_property::<DataViewPrototypeSetFloat64>()
            .with_builtin_function_property::<DataViewPrototypeSetInt8>()
            .with_builtin_function_property::<DataViewPrototypeSetInt16>()
            .with_builtin_function_property::<DataViewPrototypeSetInt32>()
            .with_builtin_function_property::<DataViewPrototypeSetUint8>()
            .with_builtin_function_property::<DataViewPrototypeSetUint16>()
            .with_builtin_function_property::<DataViewPrototypeSetUint32>()
            .build();
    }
}

#[cfg(test)]
mod test {
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call_function, get},
        builtins::{ArgumentsList, ArrayBuffer, DataView, data_view::data::DataViewHeapData},
        execution::{Agent, ExceptionType, JsResult},
        types::{BigInt, Function, Number, PropertyKey, PropertyStorage, Value},
    };
    use crate::heap::CreateHeapData;

    fn view_over(agent: &mut Agent, byte_length: u64) -> (ArrayBuffer, DataView) {
        let buffer = ArrayBuffer::new(agent, byte_length).unwrap();
        let view = agent.heap.create(DataViewHeapData {
            viewed_array_buffer: buffer,
            byte_length: byte_length as usize,
            byte_offset: 0,
        });
        (buffer, view)
    }

    fn invoke(agent: &mut Agent, name: &str, this: Value, arguments: &[Value]) -> JsResult<Value> {
        let prototype = agent.intrinsics().data_view_prototype();
        let key = PropertyKey::from_str(agent, name);
        let method = Function::try_from(get(agent, prototype, key).unwrap()).unwrap();
        call_function(agent, method, this, Some(ArgumentsList::new(arguments)))
    }

    fn accessor(agent: &mut Agent, name: &str, this: Value) -> JsResult<Value> {
        let prototype = agent.intrinsics().data_view_prototype();
        let key = PropertyKey::from_str(agent, name);
        let Some(PropertyStorage::Accessor { get: Some(getter) }) =
            prototype.property_storage(agent, key)
        else {
            panic!("{name} is not a getter");
        };
        call_function(agent, getter, this, None)
    }

    #[test]
    fn methods_have_expected_lengths() {
        let mut agent = Agent::default();
        let prototype = agent.intrinsics().data_view_prototype();
        for (name, length) in [("getInt8", 1), ("getBigUint64", 1), ("setFloat64", 2), ("setUint8", 2)] {
            let key = PropertyKey::from_str(&mut agent, name);
            let method = Function::try_from(get(&mut agent, prototype, key).unwrap()).unwrap();
            assert_eq!(method.length(&agent), length);
            assert_eq!(method.name(&agent), name);
        }
        let key = PropertyKey::from_str(&mut agent, "constructor");
        let constructor = get(&mut agent, prototype, key).unwrap();
        assert_eq!(constructor, Value::Function(agent.intrinsics().data_view()));
    }

    #[test]
    fn byte_order_follows_little_endian_argument() {
        let mut agent = Agent::default();
        let (buffer, view) = view_over(&mut agent, 4);
        let view = Value::DataView(view);
        let result = invoke(&mut agent, "setUint16", view, &[Value::from(0), Value::from(0x1234)]);
        assert_eq!(result.unwrap(), Value::Undefined);
        invoke(
            &mut agent,
            "setUint16",
            view,
            &[Value::from(2), Value::from(0x1234), Value::Boolean(true)],
        )
        .unwrap();
        assert_eq!(buffer.as_slice(&agent).unwrap(), &[0x12, 0x34, 0x34, 0x12]);
        let value = invoke(&mut agent, "getUint16", view, &[Value::from(2), Value::Boolean(true)]);
        assert_eq!(value.unwrap(), Value::from(0x1234));
        let value = invoke(&mut agent, "getInt8", view, &[Value::from(1)]);
        assert_eq!(value.unwrap(), Value::from(0x34));
    }

    #[test]
    fn float32_sign_bit_reads_as_negative_zero() {
        let mut agent = Agent::default();
        let (buffer, view) = view_over(&mut agent, 4);
        buffer.as_mut_slice(&mut agent).unwrap()[0] = 0x80;
        let value = invoke(&mut agent, "getFloat32", Value::DataView(view), &[Value::from(0)]);
        assert_eq!(value.unwrap(), Value::Number(Number::neg_zero()));
    }

    #[test]
    fn big_int_elements_wrap() {
        let mut agent = Agent::default();
        let (_, view) = view_over(&mut agent, 8);
        let view = Value::DataView(view);
        let minus_one = BigInt::from_i64(&mut agent, -1);
        invoke(&mut agent, "setBigInt64", view, &[Value::from(0), minus_one.into()]).unwrap();
        let value = invoke(&mut agent, "getBigUint64", view, &[Value::from(0)]).unwrap();
        let value = BigInt::try_from(value).unwrap();
        assert_eq!(value.to_u64_wrapping(&agent), u64::MAX);
        let error =
            invoke(&mut agent, "setBigInt64", view, &[Value::from(0), Value::from(1)]).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn getters_report_zero_once_detached() {
        let mut agent = Agent::default();
        let (buffer, view) = view_over(&mut agent, 8);
        let view = Value::DataView(view);
        assert_eq!(accessor(&mut agent, "byteLength", view).unwrap(), Value::from(8));
        buffer.detach(&mut agent);
        assert_eq!(accessor(&mut agent, "byteLength", view).unwrap(), Value::from(0));
        assert_eq!(accessor(&mut agent, "byteOffset", view).unwrap(), Value::from(0));
        assert_eq!(accessor(&mut agent, "buffer", view).unwrap(), Value::ArrayBuffer(buffer));
        let error = invoke(&mut agent, "getInt8", view, &[Value::from(0)]).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn getters_require_a_data_view() {
        let mut agent = Agent::default();
        for name in ["buffer", "byteLength", "byteOffset"] {
            let error = accessor(&mut agent, name, Value::from(1)).unwrap_err();
            assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
        }
    }
}
