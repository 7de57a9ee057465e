#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid byte order: {0}")]
    InvalidByteOrder(String),

    #[error("invalid width: {0} is not one of 1, 2, 3, 4 or 8")]
    InvalidWidth(usize),

    #[error("out of range: {len} bytes at offset {offset} with {remaining} remaining")]
    OutOfRange {
        offset: usize,
        len: usize,
        remaining: usize,
    },
}
