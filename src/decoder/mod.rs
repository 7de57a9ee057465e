use crate::{
    codec::{self, Decode, Integer, Signedness, Width},
    config::Config,
    cursor::ByteCursor,
    order::ByteOrder,
    Error,
};

/// A [`ByteCursor`] with a byte order bound at construction.
///
/// Every multi-byte read uses the bound order, so a record whose fields all
/// share one wire order can be read without repeating it.
#[derive(Debug)]
pub struct Decoder<'a> {
    cursor: ByteCursor<'a>,
    byte_order: ByteOrder,
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub fn new(data: &'a [u8], config: &Config) -> Self {
        Self::with_byte_order(data, config.byte_order)
    }

    #[must_use]
    pub const fn with_byte_order(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            byte_order,
        }
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub const fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub const fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        self.cursor.take(len)
    }

    pub fn read<T>(&mut self) -> Result<T, Error>
    where
        T: Decode,
    {
        self.cursor.decode(self.byte_order)
    }

    pub fn read_integer(&mut self, width: Width, signedness: Signedness) -> Result<Integer, Error> {
        codec::decode(&mut self.cursor, width, signedness, self.byte_order)
    }

    pub fn tiny_unsigned(&mut self) -> Result<u8, Error> {
        codec::tiny_unsigned(&mut self.cursor)
    }

    pub fn tiny_signed(&mut self) -> Result<i8, Error> {
        codec::tiny_signed(&mut self.cursor)
    }

    pub fn small_unsigned(&mut self) -> Result<u16, Error> {
        codec::small_unsigned(&mut self.cursor, self.byte_order)
    }

    pub fn small_signed(&mut self) -> Result<i16, Error> {
        codec::small_signed(&mut self.cursor, self.byte_order)
    }

    pub fn medium_unsigned(&mut self) -> Result<u32, Error> {
        codec::medium_unsigned(&mut self.cursor, self.byte_order)
    }

    pub fn medium_signed(&mut self) -> Result<i32, Error> {
        codec::medium_signed(&mut self.cursor, self.byte_order)
    }

    pub fn regular_unsigned(&mut self) -> Result<u32, Error> {
        codec::regular_unsigned(&mut self.cursor, self.byte_order)
    }

    pub fn regular_signed(&mut self) -> Result<i32, Error> {
        codec::regular_signed(&mut self.cursor, self.byte_order)
    }

    pub fn big_unsigned(&mut self) -> Result<u64, Error> {
        codec::big_unsigned(&mut self.cursor, self.byte_order)
    }

    pub fn big_signed(&mut self) -> Result<i64, Error> {
        codec::big_signed(&mut self.cursor, self.byte_order)
    }

    /// Releases the underlying cursor, keeping its offset.
    pub fn into_cursor(self) -> ByteCursor<'a> {
        self.cursor
    }
}
