use std::fmt;

use log::trace;

use crate::{
    cursor::ByteCursor,
    order::{ByteOrder, Endian},
    Error,
};

use super::{Decode, Width};

/// An unsigned 24-bit integer, stored in the low three bytes of a `u32`.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct U24(u32);

/// A signed 24-bit integer, sign-extended into an `i32`.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct I24(i32);

impl U24 {
    pub const MAX: Self = Self(0x00ff_ffff);
    pub const MIN: Self = Self(0);

    /// Returns `None` if `value` does not fit in 24 bits.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    const fn from_bytes(bytes: [u8; 3], endian: Endian) -> Self {
        let [msb, mid, lsb] = match endian {
            Endian::Big => bytes,
            Endian::Little => [bytes[2], bytes[1], bytes[0]],
        };
        Self(u32::from_be_bytes([0, msb, mid, lsb]))
    }
}

impl I24 {
    pub const MAX: Self = Self(0x007f_ffff);
    pub const MIN: Self = Self(-0x0080_0000);

    /// Returns `None` if `value` does not fit in 24 bits.
    #[must_use]
    pub const fn new(value: i32) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<U24> for I24 {
    /// Two's-complement reinterpretation of the 24-bit pattern.
    fn from(value: U24) -> Self {
        let magnitude = value.0 as i32;
        if magnitude > Self::MAX.0 {
            Self(magnitude - (1 << 24))
        } else {
            Self(magnitude)
        }
    }
}

impl From<U24> for u32 {
    fn from(value: U24) -> Self {
        value.0
    }
}

impl From<U24> for u64 {
    fn from(value: U24) -> Self {
        value.0.into()
    }
}

impl From<I24> for i32 {
    fn from(value: I24) -> Self {
        value.0
    }
}

impl From<I24> for i64 {
    fn from(value: I24) -> Self {
        value.0.into()
    }
}

impl fmt::Display for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for I24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Decode for U24 {
    const WIDTH: Width = Width::Medium;

    fn decode(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<Self, Error> {
        let value = Self::from_bytes(cursor.take_array()?, order.resolve());
        trace!("decoded u24 {value} ({order})");
        Ok(value)
    }
}

impl Decode for I24 {
    const WIDTH: Width = Width::Medium;

    fn decode(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<Self, Error> {
        let value = Self::from(U24::from_bytes(cursor.take_array()?, order.resolve()));
        trace!("decoded i24 {value} ({order})");
        Ok(value)
    }
}
