use std::{fmt, str::FromStr};

use crate::Error;

/// The byte order requested for a multi-byte decode.
///
/// There is no default: wire data must always state its order, and
/// `NativeEndian` is only resolved to the host order when asked for.
#[derive(
    Copy, Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
    NativeEndian,
}

/// A byte order with `NativeEndian` already resolved against the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };
}

impl ByteOrder {
    #[must_use]
    pub const fn resolve(self) -> Endian {
        match self {
            Self::BigEndian => Endian::Big,
            Self::LittleEndian => Endian::Little,
            Self::NativeEndian => Endian::NATIVE,
        }
    }
}

impl From<Endian> for ByteOrder {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Big => Self::BigEndian,
            Endian::Little => Self::LittleEndian,
        }
    }
}

impl From<ByteOrder> for u8 {
    fn from(val: ByteOrder) -> Self {
        match val {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => 1,
            ByteOrder::NativeEndian => 2,
        }
    }
}

impl TryFrom<u8> for ByteOrder {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::BigEndian),
            1 => Ok(Self::LittleEndian),
            2 => Ok(Self::NativeEndian),
            _ => Err(Error::InvalidByteOrder(value.to_string())),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" | "big_endian" => Ok(Self::BigEndian),
            "little" | "le" | "little_endian" => Ok(Self::LittleEndian),
            "native" | "ne" | "native_endian" => Ok(Self::NativeEndian),
            _ => Err(Error::InvalidByteOrder(s.to_owned())),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BigEndian => f.write_str("big_endian"),
            Self::LittleEndian => f.write_str("little_endian"),
            Self::NativeEndian => f.write_str("native_endian"),
        }
    }
}
