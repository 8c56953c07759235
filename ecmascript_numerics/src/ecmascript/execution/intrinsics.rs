// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Agent;
use crate::ecmascript::{
    abstract_operations::operations_on_objects::ordinary_object_create,
    builtins::{
        numbers_and_dates::bigint_objects::bigint_constructor::BigIntConstructor,
        structured_data::data_view_objects::{
            data_view_constructor::DataViewConstructor, data_view_prototype::DataViewPrototype,
        },
    },
    types::{Function, OrdinaryObject},
};

/// ### [6.1.7.4 Well-Known Intrinsic Objects](https://tc39.es/ecma262/#sec-well-known-intrinsic-objects)
///
/// The subset of intrinsics this engine core provides.
#[derive(Debug, Clone)]
pub struct Intrinsics {
    /// %BigInt%
    pub(crate) big_int: Function,
    /// %DataView%
    pub(crate) data_view: Function,
    /// %DataView.prototype%
    pub(crate) data_view_prototype: OrdinaryObject,
}

impl Intrinsics {
    pub(crate) const fn _def() -> Self {
        Self {
            big_int: Function::_def(),
            data_view: Function::_def(),
            data_view_prototype: OrdinaryObject::_def(),
        }
    }

    pub(crate) fn create_intrinsics(agent: &mut Agent) {
        // %DataView.prototype% must exist before %DataView% so that the
        // constructor's prototype property can point at it.
        agent.intrinsics.data_view_prototype = ordinary_object_create(agent);
        BigIntConstructor::create_intrinsic(agent);
        DataViewConstructor::create_intrinsic(agent);
        DataViewPrototype::create_intrinsic(agent);
    }

    pub fn big_int(&self) -> Function {
        self.big_int
    }

    pub fn data_view(&self) -> Function {
        self.data_view
    }

    pub fn data_view_prototype(&self) -> OrdinaryObject {
        self.data_view_prototype
    }
}
