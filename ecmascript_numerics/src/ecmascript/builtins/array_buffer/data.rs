// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::DataBlock;

#[derive(Debug)]
pub(crate) enum InternalBuffer {
    Detached,
    FixedLength(DataBlock),
}

#[derive(Debug)]
pub struct ArrayBufferHeapData {
    pub(super) buffer: InternalBuffer,
}

impl Default for ArrayBufferHeapData {
    #[inline(always)]
    fn default() -> Self {
        Self {
            buffer: InternalBuffer::Detached,
        }
    }
}

impl ArrayBufferHeapData {
    pub(crate) fn new_fixed_length(db: DataBlock) -> Self {
        Self {
            buffer: InternalBuffer::FixedLength(db),
        }
    }

    #[inline]
    pub(crate) fn is_detached_buffer(&self) -> bool {
        matches!(self.buffer, InternalBuffer::Detached)
    }

    #[inline]
    pub(crate) fn byte_length(&self) -> usize {
        match &self.buffer {
            InternalBuffer::Detached => 0,
            InternalBuffer::FixedLength(db) => db.len(),
        }
    }

    pub(crate) fn get_data_block(&self) -> Option<&DataBlock> {
        match &self.buffer {
            InternalBuffer::Detached => None,
            InternalBuffer::FixedLength(db) => Some(db),
        }
    }

    pub(crate) fn get_data_block_mut(&mut self) -> Option<&mut DataBlock> {
        match &mut self.buffer {
            InternalBuffer::Detached => None,
            InternalBuffer::FixedLength(db) => Some(db),
        }
    }

    /// Drops the Data Block. The buffer stays detached forever after.
    pub(super) fn detach(&mut self) {
        self.buffer = InternalBuffer::Detached;
    }
}
