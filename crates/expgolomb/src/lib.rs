//! A set of helper functions to encode and decode exponential-golomb values.
//!
//! This crate extends upon the [`BitReader`] and [`BitWriter`] from the
//! [`bytes-util`](bytes_util) crate to provide functionality
//! for reading and writing the `ue(v)` and `se(v)` codes used throughout
//! H.264 parameter sets.
//!
//! ```rust
//! # fn test() -> Result<(), bytes_util::BitError> {
//! use expgolomb::{BitReaderExpGolombExt, BitWriterExpGolombExt};
//! use bytes_util::{BitReader, BitWriter};
//!
//! let mut bit_writer = BitWriter::new();
//! bit_writer.write_exp_golomb(0);
//! bit_writer.write_exp_golomb(1);
//! bit_writer.write_signed_exp_golomb(-2);
//!
//! let data = bit_writer.finish();
//!
//! let mut bit_reader = BitReader::new(&data);
//!
//! assert_eq!(bit_reader.read_exp_golomb()?, 0);
//! assert_eq!(bit_reader.read_exp_golomb()?, 1);
//! assert_eq!(bit_reader.read_signed_exp_golomb()?, -2);
//! # Ok(())
//! # }
//! # test().expect("failed to run test");
//! ```
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or
//! [Apache-2.0](./LICENSE.Apache-2.0) license. You can choose between one of
//! them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

use bytes_util::{BitError, BitReader, BitWriter};

/// Longest zero prefix accepted before a code is rejected as malformed.
///
/// 32 zeros is the longest prefix whose code can still decode to a `u32`.
pub const MAX_LEADING_ZEROS: u32 = 32;

/// Extension trait for reading Exp-Golomb encoded numbers from a bit reader
///
/// See: <https://en.wikipedia.org/wiki/Exponential-Golomb_coding>
///
/// - [`BitReader`]
pub trait BitReaderExpGolombExt {
    /// Reads an Exp-Golomb encoded number, `ue(v)`
    fn read_exp_golomb(&mut self) -> Result<u32, BitError>;

    /// Reads a signed Exp-Golomb encoded number, `se(v)`
    ///
    /// Code numbers map as 0 → 0, 1 → 1, 2 → -1, 3 → 2, 4 → -2, ...
    fn read_signed_exp_golomb(&mut self) -> Result<i32, BitError> {
        let code_num = self.read_exp_golomb()?;
        let exp_glob = code_num as i64;

        let value = if exp_glob % 2 == 0 {
            -(exp_glob / 2)
        } else {
            (exp_glob + 1) / 2
        };

        i32::try_from(value).map_err(|_| BitError::SignedExpGolombOverflow { code_num })
    }
}

impl BitReaderExpGolombExt for BitReader<'_> {
    fn read_exp_golomb(&mut self) -> Result<u32, BitError> {
        let mut leading_zeros = 0;
        while !self.read_bit()? {
            leading_zeros += 1;
            if leading_zeros > MAX_LEADING_ZEROS {
                return Err(BitError::MalformedExpGolomb { leading_zeros });
            }
        }

        // read_bits(0) is a no-op, so a bare `1` decodes to 0
        let suffix = self.read_bits(leading_zeros as u8)? as u64;
        let result = (1u64 << leading_zeros) - 1 + suffix;

        u32::try_from(result).map_err(|_| BitError::MalformedExpGolomb { leading_zeros })
    }
}

/// Extension trait for writing Exp-Golomb encoded numbers to a bit writer
///
/// See: <https://en.wikipedia.org/wiki/Exponential-Golomb_coding>
///
/// - [`BitWriter`]
pub trait BitWriterExpGolombExt {
    /// Writes an Exp-Golomb encoded number
    fn write_exp_golomb(&mut self, input: u32);

    /// Writes a signed Exp-Golomb encoded number
    fn write_signed_exp_golomb(&mut self, number: i32) {
        self.write_exp_golomb(signed_to_code_num(number));
    }
}

impl BitWriterExpGolombExt for BitWriter {
    fn write_exp_golomb(&mut self, input: u32) {
        let number = input as u64 + 1;
        let leading_zeros = (63 - number.leading_zeros()) as u8;

        self.write_bits(0, leading_zeros);
        self.write_bits(number, leading_zeros + 1);
    }
}

fn signed_to_code_num(number: i32) -> u32 {
    let number = number as i64;
    if number <= 0 {
        // i32::MIN has no code number that fits in 32 bits
        (-number * 2).min(u32::MAX as i64) as u32
    } else {
        (number * 2 - 1) as u32
    }
}

/// Returns the number of bits that a signed Exp-Golomb encoded number would take up.
///
/// See: <https://en.wikipedia.org/wiki/Exponential-Golomb_coding>
pub fn size_of_signed_exp_golomb(number: i32) -> u64 {
    size_of_exp_golomb(signed_to_code_num(number))
}

/// Returns the number of bits that an Exp-Golomb encoded number would take up.
///
/// See: <https://en.wikipedia.org/wiki/Exponential-Golomb_coding>
pub fn size_of_exp_golomb(number: u32) -> u64 {
    let number = number as u64 + 1;
    let leading_zeros = 63 - number.leading_zeros() as u64;

    leading_zeros * 2 + 1
}
