use crate::order::ByteOrder;

/// Settings for a [`crate::Decoder`].
///
/// The byte order has no default; it must be spelled out wherever the
/// config is loaded from.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    pub byte_order: ByteOrder,
}

impl Config {
    #[must_use]
    pub const fn new(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }
}
