// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)
//!
//! Objects have no prototype chain at this layer: property lookups only see
//! own properties.

use super::testing_and_comparison::is_callable;
use crate::{
    ecmascript::{
        builtins::{ArgumentsList, Behaviour},
        execution::{Agent, ExceptionType, JsResult},
        types::{
            Function, IntoObject, IntoValue, Object, ObjectHeapData, OrdinaryObject, PropertyKey,
            PropertyStorage, Value,
        },
    },
    heap::CreateHeapData,
};

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
///
/// The abstract operation Get takes arguments O (an Object) and P (a property
/// key) and returns either a normal completion containing an ECMAScript
/// language value or a throw completion. It is used to retrieve the value of a
/// specific property of an object.
pub fn get(agent: &mut Agent, o: impl IntoObject, p: PropertyKey) -> JsResult<Value> {
    let o = o.into_object();
    // 1. Return ? O.[[Get]](P, O).
    let Some(backing_object) = o.get_backing_object(agent) else {
        return Ok(Value::Undefined);
    };
    match backing_object.property_storage(agent, p) {
        None => Ok(Value::Undefined),
        Some(PropertyStorage::Data(value)) => Ok(value),
        Some(PropertyStorage::Accessor { get: None }) => Ok(Value::Undefined),
        Some(PropertyStorage::Accessor { get: Some(getter) }) => {
            call_function(agent, getter, o.into_value(), None)
        }
    }
}

/// ### [7.3.3 GetV ( V, P )](https://tc39.es/ecma262/#sec-getv)
///
/// Primitives carry no properties of their own here, so looking up a
/// property on one yields undefined.
pub(crate) fn get_v(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Value> {
    match Object::try_from(v) {
        Ok(o) => get(agent, o, p),
        Err(()) => Ok(Value::Undefined),
    }
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// The abstract operation GetMethod takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing either a function object or undefined, or a throw completion.
/// It is used to get the value of a specific property of an ECMAScript
/// language value when the value of the property is expected to be a function.
pub fn get_method(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Option<Function>> {
    // 1. Let func be ? GetV(V, P).
    let func = get_v(agent, v, p)?;
    // 2. If func is either undefined or null, return undefined.
    if func.is_undefined() || func.is_null() {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    // 4. Return func.
    match Function::try_from(func) {
        Ok(func) => Ok(Some(func)),
        Err(()) => Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object")),
    }
}

/// ### [7.3.13 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
///
/// The abstract operation Call takes arguments F (an ECMAScript language
/// value) and V (an ECMAScript language value) and optional argument
/// argumentsList (a List of ECMAScript language values) and returns either a
/// normal completion containing an ECMAScript language value or a throw
/// completion. It is used to call the \[\[Call]] internal method of a function
/// object. F is the function object, V is an ECMAScript language value that is
/// the this value of the \[\[Call]], and argumentsList is the value passed to
/// the corresponding argument of the internal method. If argumentsList is not
/// present, a new empty List is used as its value.
pub fn call(
    agent: &mut Agent,
    f: Value,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    if !is_callable(f) {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object"));
    }
    let Value::Function(f) = f else {
        unreachable!();
    };
    // 3. Return ? F.[[Call]](V, argumentsList).
    call_function(agent, f, v, arguments_list)
}

/// Calls a value already known to be a function object.
pub fn call_function(
    agent: &mut Agent,
    f: Function,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 1. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    // The behaviour is cloned out so that the callee may freely mutate the
    // heap, including the function's own heap data.
    match agent[f].behaviour.clone() {
        Behaviour::Regular(behaviour) => behaviour(agent, v, arguments_list),
        Behaviour::Constructor(behaviour) => behaviour(agent, v, arguments_list, None),
        Behaviour::Closure(behaviour) => behaviour(agent, v, arguments_list),
    }
}

/// ### [7.3.14 Construct ( F \[ , argumentsList \[ , newTarget \] \] )](https://tc39.es/ecma262/#sec-construct)
///
/// The abstract operation Construct takes argument F (a constructor) and
/// optional arguments argumentsList (a List of ECMAScript language values)
/// and newTarget (a constructor) and returns either a normal completion
/// containing an Object or a throw completion. It is used to call the
/// \[\[Construct]] internal method of a function object.
pub fn construct(
    agent: &mut Agent,
    f: Function,
    arguments_list: Option<ArgumentsList>,
    new_target: Option<Function>,
) -> JsResult<Object> {
    // 1. If newTarget is not present, set newTarget to F.
    let new_target = new_target.unwrap_or(f);
    // 2. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    // 3. Return ? F.[[Construct]](argumentsList, newTarget).
    let Behaviour::Constructor(behaviour) = agent[f].behaviour.clone() else {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Not a constructor"));
    };
    let result = behaviour(
        agent,
        Value::Undefined,
        arguments_list,
        Some(new_target.into_object()),
    )?;
    Object::try_from(result).map_err(|()| {
        agent.throw_exception(ExceptionType::TypeError, "Constructor did not return an object")
    })
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
///
/// Creates an empty ordinary object.
pub fn ordinary_object_create(agent: &mut Agent) -> OrdinaryObject {
    agent.heap.create(ObjectHeapData::default())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
///
/// Ordinary objects here are always extensible and their properties always
/// configurable, so defining the property cannot fail.
pub fn create_data_property(agent: &mut Agent, o: OrdinaryObject, p: PropertyKey, v: Value) {
    agent[o].properties.insert(p, PropertyStorage::Data(v));
}

/// Defines (or replaces) an accessor property with only a getter.
pub fn define_accessor_property(
    agent: &mut Agent,
    o: OrdinaryObject,
    p: PropertyKey,
    getter: Function,
) {
    agent[o]
        .properties
        .insert(p, PropertyStorage::Accessor { get: Some(getter) });
}

#[cfg(test)]
mod test {
    use std::{cell::Cell, rc::Rc};

    use super::{
        call, call_function, create_data_property, define_accessor_property, get, get_method,
        ordinary_object_create,
    };
    use crate::ecmascript::{
        builtins::{ArgumentsList, create_closure_function},
        execution::{Agent, ExceptionType},
        types::{PropertyKey, Value},
    };

    #[test]
    fn get_runs_getters_with_the_object_as_receiver() {
        let mut agent = Agent::default();
        let object = ordinary_object_create(&mut agent);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let getter = create_closure_function(&mut agent, "get answer", 0, move |_, this, _| {
            counter.set(counter.get() + 1);
            assert!(this.is_object());
            Ok(Value::from(42))
        });
        let key = PropertyKey::from_str(&mut agent, "answer");
        define_accessor_property(&mut agent, object, key, getter);
        assert_eq!(get(&mut agent, object, key).unwrap(), Value::from(42));
        assert_eq!(get(&mut agent, object, key).unwrap(), Value::from(42));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn get_method_rejects_non_callables() {
        let mut agent = Agent::default();
        let object = ordinary_object_create(&mut agent);
        let key = PropertyKey::from_str(&mut agent, "valueOf");
        assert_eq!(get_method(&mut agent, object.into(), key).unwrap(), None);
        create_data_property(&mut agent, object, key, Value::Null);
        assert_eq!(get_method(&mut agent, object.into(), key).unwrap(), None);
        create_data_property(&mut agent, object, key, Value::from(1));
        let error = get_method(&mut agent, object.into(), key).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }

    #[test]
    fn primitives_have_no_methods() {
        let mut agent = Agent::default();
        let key = PropertyKey::from_str(&mut agent, "valueOf");
        assert_eq!(get_method(&mut agent, Value::from(1), key).unwrap(), None);
    }

    #[test]
    fn call_passes_this_and_arguments() {
        let mut agent = Agent::default();
        let function = create_closure_function(&mut agent, "pick", 2, |_, this, arguments| {
            assert_eq!(this, Value::from(true));
            Ok(arguments.get(1))
        });
        let arguments = [Value::from(1), Value::from(2)];
        let result = call_function(
            &mut agent,
            function,
            Value::from(true),
            Some(ArgumentsList::new(&arguments)),
        )
        .unwrap();
        assert_eq!(result, Value::from(2));
        let error = call(&mut agent, Value::from(3), Value::Undefined, None).unwrap_err();
        assert_eq!(error.exception_type(&agent), Some(ExceptionType::TypeError));
    }
}
