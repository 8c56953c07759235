// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builtins::{
        array_buffer::ArrayBufferHeapData, data_view::data::DataViewHeapData,
        error::ErrorHeapData,
    },
    types::{
        BigIntHeapData, FunctionHeapData, ObjectHeapData, StringHeapData, SymbolHeapData,
    },
};
use core::fmt::Debug;
use std::{
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::size_of,
    num::NonZeroU32,
};

/// A struct containing a non-zero index into an array or
/// vector of `T`s. Due to the non-zero value, the offset
/// in the vector is offset by one.
pub struct BaseIndex<T: ?Sized>(NonZeroU32, PhantomData<T>);

const _INDEX_SIZE_IS_U32: () = assert!(size_of::<BaseIndex<()>>() == size_of::<u32>());
const _OPTION_INDEX_SIZE_IS_U32: () =
    assert!(size_of::<Option<BaseIndex<()>>>() == size_of::<u32>());

impl<T: ?Sized> Debug for BaseIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.into_u32_index().fmt(f)
    }
}

impl<T: ?Sized> Clone for BaseIndex<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for BaseIndex<T> {}

impl<T: ?Sized> PartialEq for BaseIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized> Eq for BaseIndex<T> {}

impl<T: ?Sized> PartialOrd for BaseIndex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for BaseIndex<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: ?Sized> Hash for BaseIndex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: ?Sized> BaseIndex<T> {
    pub const fn into_index(self) -> usize {
        self.0.get() as usize - 1
    }

    pub const fn into_u32_index(self) -> u32 {
        self.0.get() - 1
    }

    pub const fn from_u32_index(value: u32) -> Self {
        match value.checked_add(1) {
            Some(value) => match NonZeroU32::new(value) {
                Some(value) => Self(value, PhantomData),
                None => unreachable!(),
            },
            None => panic!("BaseIndex overflow"),
        }
    }

    pub const fn from_index(value: usize) -> Self {
        assert!(value < u32::MAX as usize);
        Self::from_u32_index(value as u32)
    }
}

impl<T> BaseIndex<T> {
    pub fn last(vec: &[T]) -> Self {
        assert!(!vec.is_empty());
        Self::from_index(vec.len() - 1)
    }
}

pub type ArrayBufferIndex = BaseIndex<ArrayBufferHeapData>;
pub type BigIntIndex = BaseIndex<BigIntHeapData>;
pub type DataViewIndex = BaseIndex<DataViewHeapData>;
pub type ErrorIndex = BaseIndex<ErrorHeapData>;
pub type FunctionIndex = BaseIndex<FunctionHeapData>;
pub type ObjectIndex = BaseIndex<ObjectHeapData>;
pub type StringIndex = BaseIndex<StringHeapData>;
pub type SymbolIndex = BaseIndex<SymbolHeapData>;

#[cfg(test)]
mod test {
    use super::BaseIndex;

    #[test]
    fn index_is_offset_by_one() {
        let index = BaseIndex::<u8>::from_index(0);
        assert_eq!(index.into_index(), 0);
        assert_eq!(index.into_u32_index(), 0);
        let index = BaseIndex::<u8>::last(&[1, 2, 3]);
        assert_eq!(index.into_index(), 2);
        assert_eq!(format!("{index:?}"), "2");
    }

    #[test]
    fn option_index_is_niche_optimised() {
        assert_eq!(
            std::mem::size_of::<Option<BaseIndex<u8>>>(),
            std::mem::size_of::<u32>()
        );
    }
}
