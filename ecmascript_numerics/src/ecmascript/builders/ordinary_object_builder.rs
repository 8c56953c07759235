// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::AHashMap;

use super::builtin_function_builder::BuiltinFunctionBuilder;
use crate::{
    ecmascript::{
        builtins::{Builtin, BuiltinGetter},
        execution::Agent,
        types::{Function, ObjectHeapData, OrdinaryObject, PropertyKey, PropertyStorage, Value},
    },
    heap::CreateHeapData,
};

pub struct OrdinaryObjectBuilder<'agent> {
    pub(crate) agent: &'agent mut Agent,
    this: Option<OrdinaryObject>,
    properties: Vec<(PropertyKey, PropertyStorage)>,
}

impl<'agent> OrdinaryObjectBuilder<'agent> {
    #[must_use]
    pub fn new(agent: &'agent mut Agent) -> Self {
        Self {
            agent,
            this: None,
            properties: Vec::new(),
        }
    }

    /// Fills in an object that was allocated before its properties could be
    /// created, such as an intrinsic prototype its constructor refers to.
    #[must_use]
    pub(crate) fn new_intrinsic_object(agent: &'agent mut Agent, this: OrdinaryObject) -> Self {
        Self {
            agent,
            this: Some(this),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property_capacity(mut self, cap: usize) -> Self {
        self.properties.reserve(cap);
        self
    }

    #[must_use]
    pub fn with_data_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties.push((key, PropertyStorage::Data(value)));
        self
    }

    #[must_use]
    pub fn with_constructor_property(mut self, constructor: Function) -> Self {
        let key = PropertyKey::from_str(self.agent, "constructor");
        self.properties
            .push((key, PropertyStorage::Data(constructor.into())));
        self
    }

    #[must_use]
    pub fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let function = BuiltinFunctionBuilder::new::<T>(self.agent).build();
        let key = PropertyKey::from_str(self.agent, T::KEY.unwrap_or(T::NAME));
        self.properties
            .push((key, PropertyStorage::Data(function.into())));
        self
    }

    #[must_use]
    pub(crate) fn with_builtin_function_getter_property<T: BuiltinGetter>(mut self) -> Self {
        let getter_function = BuiltinFunctionBuilder::new::<T>(self.agent).build();
        let key = PropertyKey::from_str(self.agent, T::KEY.unwrap_or(T::NAME));
        self.properties.push((
            key,
            PropertyStorage::Accessor {
                get: Some(getter_function),
            },
        ));
        self
    }

    pub fn build(self) -> OrdinaryObject {
        let mut properties = AHashMap::with_capacity(self.properties.len());
        properties.extend(self.properties);
        let data = ObjectHeapData { properties };
        match self.this {
            Some(this) => {
                self.agent[this] = data;
                this
            }
            None => self.agent.heap.create(data),
        }
    }
}
