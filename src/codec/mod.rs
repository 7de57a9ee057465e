use std::fmt;

use log::trace;

use crate::{
    cursor::ByteCursor,
    order::{ByteOrder, Endian},
    Error,
};

mod medium;
pub use medium::{I24, U24};

/// The encoded size of a fixed-width integer.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Width {
    Tiny = 1,
    Small = 2,
    Medium = 3,
    Regular = 4,
    Big = 8,
}

impl Width {
    #[must_use]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32 * 8
    }
}

impl TryFrom<usize> for Width {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Tiny),
            2 => Ok(Self::Small),
            3 => Ok(Self::Medium),
            4 => Ok(Self::Regular),
            8 => Ok(Self::Big),
            _ => Err(Error::InvalidWidth(value)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// An integer decoded from a runtime-selected width and signedness.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Integer {
    Signed(i64),
    Unsigned(u64),
}

impl Integer {
    /// Widens to `i128`, which holds every value of either variant.
    #[must_use]
    pub const fn as_i128(self) -> i128 {
        match self {
            Self::Signed(value) => value as i128,
            Self::Unsigned(value) => value as i128,
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(value) => value.fmt(f),
            Self::Unsigned(value) => value.fmt(f),
        }
    }
}

pub trait Decode: Sized {
    const WIDTH: Width;

    /// # Description
    /// Decode a value from the next [`Decode::WIDTH`] bytes of `cursor`.
    ///
    /// # Arguments
    /// * `cursor`: The cursor to consume bytes from.
    /// * `order`: The byte order of the encoded value.
    ///
    /// # Errors
    /// This function will return an error if the cursor does not hold enough bytes.
    /// See [`Error`] for more details.
    ///
    /// # Returns
    /// The decoded value of type `Self`.
    fn decode(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<Self, Error>;
}

/// # Description
/// Decode an integer whose width and signedness are only known at runtime.
///
/// The bytes are reassembled into an unsigned magnitude according to `order`,
/// then reinterpreted as two's complement for signed fields by subtracting
/// `2^(8 * width)` when the top bit of the field is set.
///
/// # Arguments
/// * `cursor`: The cursor to consume `width` bytes from.
/// * `width`: The encoded size of the field.
/// * `signedness`: Whether to apply two's-complement reinterpretation.
/// * `order`: The byte order of the field. Ignored for [`Width::Tiny`].
///
/// # Errors
/// Returns [`Error::OutOfRange`] if fewer than `width` bytes remain.
pub fn decode(
    cursor: &mut ByteCursor<'_>,
    width: Width,
    signedness: Signedness,
    order: ByteOrder,
) -> Result<Integer, Error> {
    let magnitude = magnitude(cursor.take(width.bytes())?, order.resolve());
    let value = match signedness {
        Signedness::Unsigned => Integer::Unsigned(magnitude),
        Signedness::Signed => Integer::Signed(sign_extend(magnitude, width)),
    };
    trace!("decoded {width:?} {signedness:?} {value} ({order})");
    Ok(value)
}

fn magnitude(bytes: &[u8], endian: Endian) -> u64 {
    let accumulate = |acc: u64, byte: &u8| (acc << 8) | u64::from(*byte);
    match endian {
        Endian::Big => bytes.iter().fold(0, accumulate),
        Endian::Little => bytes.iter().rev().fold(0, accumulate),
    }
}

fn sign_extend(magnitude: u64, width: Width) -> i64 {
    let bits = width.bits();
    if bits == u64::BITS {
        return magnitude as i64;
    }

    // magnitude < 2^56 here, so both operands fit in an i64.
    let modulus = 1i64 << bits;
    let value = magnitude as i64;
    if value >= modulus >> 1 {
        value - modulus
    } else {
        value
    }
}

pub fn tiny_unsigned(cursor: &mut ByteCursor<'_>) -> Result<u8, Error> {
    let [byte] = cursor.take_array::<1>()?;
    trace!("decoded u8 {byte}");
    Ok(byte)
}

pub fn tiny_signed(cursor: &mut ByteCursor<'_>) -> Result<i8, Error> {
    let bytes = cursor.take_array::<1>()?;
    let value = i8::from_be_bytes(bytes);
    trace!("decoded i8 {value}");
    Ok(value)
}

macro_rules! fixed_width {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $name(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<$ty, Error> {
            let bytes = cursor.take_array()?;
            let value = match order.resolve() {
                Endian::Big => <$ty>::from_be_bytes(bytes),
                Endian::Little => <$ty>::from_le_bytes(bytes),
            };
            trace!("decoded {} {value} ({order})", stringify!($ty));
            Ok(value)
        }
    };
}

fixed_width!(small_unsigned, u16);
fixed_width!(small_signed, i16);
fixed_width!(regular_unsigned, u32);
fixed_width!(regular_signed, i32);
fixed_width!(
    /// Decodes the full unsigned 64-bit range, including values above `i64::MAX`.
    big_unsigned,
    u64
);
fixed_width!(big_signed, i64);

pub fn medium_unsigned(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<u32, Error> {
    U24::decode(cursor, order).map(U24::get)
}

pub fn medium_signed(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<i32, Error> {
    I24::decode(cursor, order).map(I24::get)
}

macro_rules! impl_decode {
    ($ty:ty, $func:ident) => {
        impl Decode for $ty {
            const WIDTH: Width = Width::Tiny;

            fn decode(cursor: &mut ByteCursor<'_>, _order: ByteOrder) -> Result<Self, Error> {
                $func(cursor)
            }
        }
    };
    ($ty:ty, $width:expr, $func:ident) => {
        impl Decode for $ty {
            const WIDTH: Width = $width;

            fn decode(cursor: &mut ByteCursor<'_>, order: ByteOrder) -> Result<Self, Error> {
                $func(cursor, order)
            }
        }
    };
}

impl_decode!(u8, tiny_unsigned);
impl_decode!(i8, tiny_signed);
impl_decode!(u16, Width::Small, small_unsigned);
impl_decode!(i16, Width::Small, small_signed);
impl_decode!(u32, Width::Regular, regular_unsigned);
impl_decode!(i32, Width::Regular, regular_signed);
impl_decode!(u64, Width::Big, big_unsigned);
impl_decode!(i64, Width::Big, big_signed);

#[cfg(test)]
mod tests {
    use matches::assert_matches;
    use rand::Rng;
    use test_case::test_case;

    use crate::{cursor::ByteCursor, order::ByteOrder, Error};

    use super::{
        big_signed, big_unsigned, decode, medium_signed, medium_unsigned, regular_signed,
        regular_unsigned, small_signed, small_unsigned, tiny_signed, tiny_unsigned, Integer,
        Signedness, Width,
    };

    const ORDERS: [ByteOrder; 3] = [
        ByteOrder::BigEndian,
        ByteOrder::LittleEndian,
        ByteOrder::NativeEndian,
    ];
    const WIDTHS: [Width; 5] = [
        Width::Tiny,
        Width::Small,
        Width::Medium,
        Width::Regular,
        Width::Big,
    ];

    #[test_case(0x8c, -116; "negative")]
    #[test_case(0x74, 116; "positive")]
    #[test_case(0x80, -128; "min")]
    #[test_case(0x7f, 127; "max")]
    #[test_case(0xff, -1; "minus one")]
    fn tiny_twos_complement(byte: u8, expected: i8) {
        let data = [byte];
        assert_eq!(tiny_signed(&mut ByteCursor::new(&data)).unwrap(), expected);
        assert_eq!(tiny_unsigned(&mut ByteCursor::new(&data)).unwrap(), byte);
    }

    #[test_case(ByteOrder::BigEndian, 256; "big endian")]
    #[test_case(ByteOrder::LittleEndian, 1; "little endian")]
    fn small_byte_order(order: ByteOrder, expected: u16) {
        let data = [0x01, 0x00];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(small_unsigned(&mut cursor, order).unwrap(), expected);
        assert_eq!(cursor.offset(), 2);
    }

    #[test_case([0xff, 0xff, 0xff], ByteOrder::BigEndian, 16_777_215, -1; "all ones")]
    #[test_case([0x80, 0x00, 0x00], ByteOrder::BigEndian, 8_388_608, -8_388_608; "min be")]
    #[test_case([0x00, 0x00, 0x80], ByteOrder::LittleEndian, 8_388_608, -8_388_608; "min le")]
    #[test_case([0x7f, 0xff, 0xff], ByteOrder::BigEndian, 8_388_607, 8_388_607; "max be")]
    #[test_case([0x01, 0x02, 0x03], ByteOrder::BigEndian, 0x010203, 0x010203; "positive be")]
    #[test_case([0x01, 0x02, 0x03], ByteOrder::LittleEndian, 0x030201, 0x030201; "positive le")]
    #[test_case([0xfe, 0xff, 0xff], ByteOrder::LittleEndian, 0xfffffe, -2; "minus two le")]
    fn medium(data: [u8; 3], order: ByteOrder, unsigned: u32, signed: i32) {
        assert_eq!(
            medium_unsigned(&mut ByteCursor::new(&data), order).unwrap(),
            unsigned
        );
        assert_eq!(
            medium_signed(&mut ByteCursor::new(&data), order).unwrap(),
            signed
        );
    }

    #[test]
    fn big_unsigned_keeps_full_range() {
        let data = [0xff; 8];
        let value = big_unsigned(&mut ByteCursor::new(&data), ByteOrder::BigEndian).unwrap();
        assert_eq!(value, 18_446_744_073_709_551_615);
        assert_eq!(value, u64::MAX);
        assert_eq!(
            big_signed(&mut ByteCursor::new(&data), ByteOrder::BigEndian).unwrap(),
            -1
        );
        assert_eq!(
            decode(
                &mut ByteCursor::new(&data),
                Width::Big,
                Signedness::Unsigned,
                ByteOrder::LittleEndian
            )
            .unwrap(),
            Integer::Unsigned(u64::MAX)
        );
    }

    #[test]
    fn regular_extremes() {
        let data = [0x80, 0x00, 0x00, 0x00];
        assert_eq!(
            regular_signed(&mut ByteCursor::new(&data), ByteOrder::BigEndian).unwrap(),
            i32::MIN
        );
        assert_eq!(
            regular_unsigned(&mut ByteCursor::new(&data), ByteOrder::LittleEndian).unwrap(),
            0x80
        );
    }

    #[test]
    fn sequential_fields() {
        let data = [0x8c, 0x01, 0x00, 0xaa];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(tiny_signed(&mut cursor).unwrap(), -116);
        assert_eq!(small_unsigned(&mut cursor, ByteOrder::LittleEndian).unwrap(), 1);
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn short_buffer_does_not_advance() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data);
        cursor.take(1).unwrap();

        assert_matches!(
            regular_unsigned(&mut cursor, ByteOrder::BigEndian),
            Err(Error::OutOfRange {
                offset: 1,
                len: 4,
                remaining: 2,
            })
        );
        assert_matches!(
            medium_signed(&mut cursor, ByteOrder::BigEndian),
            Err(Error::OutOfRange { len: 3, .. })
        );
        assert_matches!(
            decode(&mut cursor, Width::Big, Signedness::Signed, ByteOrder::BigEndian),
            Err(Error::OutOfRange { len: 8, .. })
        );
        assert_eq!(cursor.offset(), 1);
        assert_eq!(small_signed(&mut cursor, ByteOrder::BigEndian).unwrap(), 0x0203);
    }

    #[test]
    fn width_from_bytes() {
        for width in WIDTHS {
            assert_eq!(Width::try_from(width.bytes()).unwrap(), width);
        }
        assert_matches!(Width::try_from(5usize), Err(Error::InvalidWidth(5)));
        assert_matches!(Width::try_from(0usize), Err(Error::InvalidWidth(0)));
    }

    // The runtime path uses explicit reassembly and two's-complement arithmetic,
    // the typed path uses std conversions; both must agree.
    #[test]
    fn runtime_decode_agrees_with_typed() {
        let mut rng = rand::thread_rng();

        for _ in 0..512 {
            let mut data = [0u8; 8];
            rng.fill(&mut data[..]);

            for order in ORDERS {
                for width in WIDTHS {
                    let signed = decode(
                        &mut ByteCursor::new(&data),
                        width,
                        Signedness::Signed,
                        order,
                    )
                    .unwrap();
                    let unsigned = decode(
                        &mut ByteCursor::new(&data),
                        width,
                        Signedness::Unsigned,
                        order,
                    )
                    .unwrap();

                    let (expected_signed, expected_unsigned) = typed(&data, width, order);
                    assert_eq!(signed, Integer::Signed(expected_signed));
                    assert_eq!(unsigned, Integer::Unsigned(expected_unsigned));
                }
            }
        }
    }

    fn typed(data: &[u8], width: Width, order: ByteOrder) -> (i64, u64) {
        let signed = &mut ByteCursor::new(data);
        let unsigned = &mut ByteCursor::new(data);
        match width {
            Width::Tiny => (
                tiny_signed(signed).unwrap().into(),
                tiny_unsigned(unsigned).unwrap().into(),
            ),
            Width::Small => (
                small_signed(signed, order).unwrap().into(),
                small_unsigned(unsigned, order).unwrap().into(),
            ),
            Width::Medium => (
                medium_signed(signed, order).unwrap().into(),
                medium_unsigned(unsigned, order).unwrap().into(),
            ),
            Width::Regular => (
                regular_signed(signed, order).unwrap().into(),
                regular_unsigned(unsigned, order).unwrap().into(),
            ),
            Width::Big => (
                big_signed(signed, order).unwrap(),
                big_unsigned(unsigned, order).unwrap(),
            ),
        }
    }

    #[test]
    fn round_trip_through_std_encoding() {
        let mut rng = rand::thread_rng();

        for _ in 0..512 {
            let small: i16 = rng.gen();
            let regular: u32 = rng.gen();
            let big: u64 = rng.gen();

            let mut data = Vec::new();
            data.extend_from_slice(&small.to_le_bytes());
            data.extend_from_slice(&regular.to_be_bytes());
            data.extend_from_slice(&big.to_ne_bytes());

            let mut cursor = ByteCursor::new(&data);
            assert_eq!(small_signed(&mut cursor, ByteOrder::LittleEndian).unwrap(), small);
            assert_eq!(
                regular_unsigned(&mut cursor, ByteOrder::BigEndian).unwrap(),
                regular
            );
            assert_eq!(big_unsigned(&mut cursor, ByteOrder::NativeEndian).unwrap(), big);
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn integer_widens() {
        assert_eq!(Integer::Unsigned(u64::MAX).as_i128(), u64::MAX as i128);
        assert_eq!(Integer::Signed(i64::MIN).as_i128(), i64::MIN as i128);
        assert_eq!(Integer::Signed(-3).to_string(), "-3");
    }
}
