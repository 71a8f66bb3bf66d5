//! Adds some helpful utilities for working with bits and bytes.
//!
//! [`BitReader`] is a cursor over a borrowed byte slice that reads fixed
//! width fields most-significant-bit first, and [`BitWriter`] packs bits
//! into an owned buffer in the same order.
//!
//! ```rust
//! use bytes_util::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0x3FF, 10);
//! let data = writer.finish();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(10).unwrap(), 0x3FF);
//! assert_eq!(reader.position(), 13);
//! ```
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or [Apache-2.0](./LICENSE.Apache-2.0) license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod bit_read;
mod bit_write;
mod error;

pub use bit_read::BitReader;
pub use bit_write::BitWriter;
pub use error::BitError;
