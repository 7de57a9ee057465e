use log::{debug, trace};

use crate::{codec::Decode, order::ByteOrder, Error};

/// A forward-only view over an immutable byte slice.
///
/// The only mutable state is the read offset, which advances on every
/// successful [`ByteCursor::take`] and never moves backwards. Many cursors
/// may borrow the same slice at once; each owns its own offset.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// # Description
    /// Returns the next `len` bytes and advances the offset past them.
    ///
    /// # Arguments
    /// * `len`: The number of bytes to consume.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if fewer than `len` bytes remain. The
    /// offset is left untouched in that case.
    ///
    /// # Returns
    /// The sub-slice `data[offset..offset + len]`.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let remaining = self.remaining();
        if len > remaining {
            debug!(
                "rejected take of {len} bytes at offset {} with {remaining} remaining",
                self.offset
            );
            return Err(Error::OutOfRange {
                offset: self.offset,
                len,
                remaining,
            });
        }

        let start = self.offset;
        self.offset += len;
        trace!("took {len} bytes at offset {start}");
        Ok(&self.data[start..self.offset])
    }

    /// Same as [`ByteCursor::take`] but with the length fixed at compile time.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.take(N)?);
        Ok(bytes)
    }

    /// # Description
    /// Decodes a value of type `T` at the current offset.
    ///
    /// # Arguments
    /// * `order`: The byte order of the encoded value. Ignored for single bytes.
    ///
    /// # Errors
    /// See [`Error`] for more details.
    pub fn decode<T>(&mut self, order: ByteOrder) -> Result<T, Error>
    where
        T: Decode,
    {
        T::decode(self, order)
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
