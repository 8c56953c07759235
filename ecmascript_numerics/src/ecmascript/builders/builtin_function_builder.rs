// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ordinary_object_builder::OrdinaryObjectBuilder;
use crate::{
    ecmascript::{
        builtins::{Behaviour, Builtin},
        execution::Agent,
        types::{Function, FunctionHeapData, OrdinaryObject, PropertyKey, String, Value},
    },
    heap::CreateHeapData,
};

pub struct BuiltinFunctionBuilder<'agent> {
    pub(crate) agent: &'agent mut Agent,
    length: u8,
    name: String,
    behaviour: Behaviour,
    properties: Vec<(PropertyKey, Value)>,
}

impl<'agent> BuiltinFunctionBuilder<'agent> {
    #[must_use]
    pub fn new<T: Builtin>(agent: &'agent mut Agent) -> Self {
        let name = String::from_str(agent, T::NAME);
        Self {
            agent,
            length: T::LENGTH,
            name,
            behaviour: T::BEHAVIOUR,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_data_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties.push((key, value));
        self
    }

    /// Adds the `prototype` property of a constructor.
    #[must_use]
    pub fn with_prototype_property(self, prototype: OrdinaryObject) -> Self {
        let key = PropertyKey::from_str(self.agent, "prototype");
        self.with_data_property(key, prototype.into())
    }

    /// Adds a method of this function, such as `BigInt.asIntN`.
    #[must_use]
    pub fn with_builtin_function_property<T: Builtin>(self) -> Self {
        let function = BuiltinFunctionBuilder::new::<T>(self.agent).build();
        let key = PropertyKey::from_str(self.agent, T::KEY.unwrap_or(T::NAME));
        self.with_data_property(key, function.into())
    }

    pub fn build(self) -> Function {
        let Self {
            agent,
            length,
            name,
            behaviour,
            properties,
        } = self;
        let object_index = if properties.is_empty() {
            None
        } else {
            let mut builder =
                OrdinaryObjectBuilder::new(agent).with_property_capacity(properties.len());
            for (key, value) in properties {
                builder = builder.with_data_property(key, value);
            }
            Some(builder.build())
        };
        agent.heap.create(FunctionHeapData {
            object_index,
            name,
            length,
            behaviour,
        })
    }
}
