// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::execution::{Agent, ExceptionType, JsResult};

/// The largest size CreateByteDataBlock accepts: 2^53 - 1.
const MAX_DATA_BLOCK_SIZE: u64 = (1 << 53) - 1;

/// # Data Block
///
/// The Data Block specification type is used to describe a distinct and
/// mutable sequence of byte-sized (8 bit) numeric values. A byte value
/// is an integer in the inclusive interval from 0 to 255. A Data Block
/// value is created with a fixed number of bytes that each have the
/// initial value 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataBlock(Box<[u8]>);

impl DataBlock {
    fn new(len: usize) -> Self {
        Self(vec![0; len].into_boxed_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Reads `N` bytes starting at `offset`, or `None` if they do not all
    /// lie inside the block.
    pub fn get<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        let end = offset.checked_add(N)?;
        self.0.get(offset..end)?.try_into().ok()
    }

    /// Writes `bytes` starting at `offset`. Returns `false` and leaves the
    /// block untouched if the bytes do not fit.
    pub fn set(&mut self, offset: usize, bytes: &[u8]) -> bool {
        let Some(end) = offset.checked_add(bytes.len()) else {
            return false;
        };
        match self.0.get_mut(offset..end) {
            Some(target) => {
                target.copy_from_slice(bytes);
                true
            }
            None => false,
        }
    }

    /// ### [6.2.9.1 CreateByteDataBlock ( size )](https://tc39.es/ecma262/#sec-createbytedatablock)
    ///
    /// The abstract operation CreateByteDataBlock takes argument size (a non-negative integer)
    /// and returns either a normal completion containing a Data Block or a throw completion.
    pub fn create_byte_data_block(agent: &mut Agent, size: u64) -> JsResult<Self> {
        // 1. If size > 2**53 - 1, throw a RangeError exception.
        if size > MAX_DATA_BLOCK_SIZE {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "Array buffer length too large",
            ));
        }
        // 2. Let db be a new Data Block value consisting of size bytes. If it
        //    is impossible to create such a Data Block, throw a RangeError
        //    exception.
        let size = match usize::try_from(size) {
            Ok(size) if size as u64 <= agent.options.max_array_buffer_byte_length => size,
            _ => {
                return Err(agent.throw_exception(
                    ExceptionType::RangeError,
                    "Failed to allocate array buffer",
                ));
            }
        };
        // 3. Set all of the bytes of db to 0.
        // 4. Return db.
        Ok(Self::new(size))
    }
}
