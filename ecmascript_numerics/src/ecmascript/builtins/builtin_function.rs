// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{fmt, ops::Deref, rc::Rc};

use crate::{
    ecmascript::{
        execution::{Agent, JsResult},
        types::{Function, FunctionHeapData, Object, String, Value},
    },
    heap::CreateHeapData,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn new(arguments: &'a [Value]) -> Self {
        Self(arguments)
    }
}

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArgumentsList<'_> {
    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;
pub type ConstructorFn =
    fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>;
/// Embedder-provided behaviour. Closures run with full access to the agent
/// and may, for instance, detach ArrayBuffers.
pub type ClosureFn = Rc<dyn Fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>>;

#[derive(Clone)]
pub enum Behaviour {
    Regular(RegularFn),
    Constructor(ConstructorFn),
    Closure(ClosureFn),
}

impl fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behaviour::Regular(_) => f.write_str("Behaviour::Regular"),
            Behaviour::Constructor(_) => f.write_str("Behaviour::Constructor"),
            Behaviour::Closure(_) => f.write_str("Behaviour::Closure"),
        }
    }
}

impl Behaviour {
    pub(crate) fn is_constructor(&self) -> bool {
        matches!(self, Behaviour::Constructor(_))
    }
}

pub trait Builtin {
    const NAME: &'static str;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// Set to Some if this builtin's property key is different from `NAME`.
    const KEY: Option<&'static str> = None;
}

pub trait BuiltinGetter: Builtin {}

#[derive(Debug, Default)]
pub struct BuiltinFunctionArgs {
    pub length: u8,
    pub name: &'static str,
}

impl BuiltinFunctionArgs {
    pub fn new(length: u8, name: &'static str) -> Self {
        Self { length, name }
    }
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, additionalInternalSlotsList \[ , realm \[ , prototype \[ , prefix \] \] \] )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// Creates a function object with no own properties besides `length` and
/// `name`, which are held directly in the function's heap data.
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> Function {
    // 11. If prefix is not present, then
    // a. Perform SetFunctionName(func, name).
    let name = String::from_str(agent, args.name);
    // 10. Perform SetFunctionLength(func, length).
    agent.heap.create(FunctionHeapData {
        object_index: None,
        name,
        length: args.length,
        behaviour,
    })
}

/// Wraps an embedder closure in a callable function object.
///
/// This is how host code supplies `valueOf`, `toString` and
/// `[Symbol.toPrimitive]` implementations with arbitrary side effects.
pub fn create_closure_function(
    agent: &mut Agent,
    name: &str,
    length: u8,
    closure: impl Fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value> + 'static,
) -> Function {
    let name = String::from_str(agent, name);
    agent.heap.create(FunctionHeapData {
        object_index: None,
        name,
        length,
        behaviour: Behaviour::Closure(Rc::new(closure)),
    })
}

#[cfg(test)]
mod test {
    use super::{ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function};
    use crate::ecmascript::{
        execution::{Agent, JsResult},
        types::Value,
    };

    fn second(_: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
        Ok(arguments.get(1))
    }

    #[test]
    fn missing_arguments_are_undefined() {
        let arguments = [Value::from(1)];
        let arguments = ArgumentsList::new(&arguments);
        assert_eq!(arguments.get(0), Value::from(1));
        assert_eq!(arguments.get(1), Value::Undefined);
        assert_eq!(arguments.len(), 1);
    }

    #[test]
    fn builtin_functions_record_name_and_length() {
        let mut agent = Agent::default();
        let function = create_builtin_function(
            &mut agent,
            Behaviour::Regular(second),
            BuiltinFunctionArgs::new(2, "second"),
        );
        assert_eq!(function.name(&agent), "second");
        assert_eq!(function.length(&agent), 2);
        assert!(!function.is_constructor(&agent));
    }
}
