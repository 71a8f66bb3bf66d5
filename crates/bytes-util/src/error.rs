use thiserror::Error;

/// Errors produced while reading from a bitstream
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitError {
    /// The read needs more bits than the buffer has left
    #[error("buffer underrun: requested {requested} bits, {available} available")]
    BufferUnderrun {
        /// Bits the read asked for
        requested: usize,
        /// Bits that were left in the buffer
        available: usize,
    },

    /// An Exp-Golomb prefix ran past the 32 leading zero safety cap, or the
    /// decoded `ue(v)` value does not fit in 32 bits
    #[error("malformed exp-golomb code: {leading_zeros} leading zero bits")]
    MalformedExpGolomb {
        /// Leading zeros counted before giving up
        leading_zeros: u32,
    },

    /// A `se(v)` code number whose signed value does not fit in an `i32`
    #[error("signed exp-golomb code number {code_num} overflows i32")]
    SignedExpGolombOverflow {
        /// The decoded `ue(v)` code number
        code_num: u32,
    },

    /// A fixed width read asked for more than 32 bits
    #[error("invalid bit width: {0} (max 32)")]
    InvalidWidth(u8),
}
