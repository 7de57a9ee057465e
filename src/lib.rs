#![cfg_attr(nightly, feature(no_coverage))]

//! Forward-only decoding of fixed-width integers from byte slices.
//!
//! A [`ByteCursor`] hands out consecutive sub-slices of its buffer, and the
//! functions in [`codec`] turn those into 1, 2, 3, 4 and 8 byte signed or
//! unsigned integers in big, little or native byte order.

pub mod codec;
pub use codec::Decode;

pub mod config;
pub use config::Config;

pub mod cursor;
pub use cursor::ByteCursor;

pub mod decoder;
pub use decoder::Decoder;

mod error;
pub use error::Error;

pub mod order;
pub use order::{ByteOrder, Endian};
