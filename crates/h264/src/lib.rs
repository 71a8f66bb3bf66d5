//! A pure Rust H.264 Annex-B scanner and sequence parameter set parser.
//!
//! This crate finds the NAL units of an Annex-B byte stream, classifies them
//! by type, counts group of pictures lengths and decodes every SPS it meets
//! up to the VUI.
//!
//! ## Why do we need this?
//!
//! Raw `.h264` dumps carry their stream parameters only in SPS units. Reading
//! the profile, level and resolution out of them needs nothing more than a
//! start code scanner and an Exp-Golomb bit reader, so there is no reason to
//! pull in a decoder for it.
//!
//! ## Notable features
//!
//! - Zero copy scanning: units are byte ranges into one shared [`bytes::Bytes`]
//! - A truncated or malformed SPS is reported for that unit only, the session keeps going
//! - Both start code lengths, leading garbage and back-to-back markers are handled
//! - The unit after the last start code is kept or dropped per [`TrailingUnitPolicy`]
//!
//! ## Examples
//!
//! ### Parsing a stream
//!
//! ```rust
//! use h264::{ParseSession, SessionConfig};
//!
//! // an SPS followed by the start of an IDR slice
//! let stream = b"\x00\x00\x00\x01\x67\x64\x00\x1F\xAC\xD9\x41\xE0\x6D\xF9\xE6\xA0\x20\x20\x28\x00\x00\x03\x00\x08\x00\x00\x03\x01\xE0\x00\x00\x01\x65\x88\x84";
//!
//! let report = ParseSession::from_slice(stream, SessionConfig::default()).run();
//!
//! let sps = report.sps_records().next().unwrap();
//! assert_eq!(sps.profile_idc, 100);
//! assert_eq!(sps.level_idc, 31);
//! assert_eq!((sps.cropped_width(), sps.cropped_height()), (480, 852));
//! assert_eq!(report.units.len(), 2);
//! ```
//!
//! ### Parsing a single SPS
//!
//! ```rust
//! use h264::SpsRecord;
//!
//! let sps = SpsRecord::parse(b"\x67\x64\x00\x1F\xAC\xD9\x41\xE0\x6D\xF9\xE6\xA0\x20\x20\x28").unwrap();
//! assert_eq!(sps.width(), 480);
//! assert_eq!(sps.height(), 864);
//! ```
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or [Apache-2.0](./LICENSE.Apache-2.0) license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod annexb;
mod classify;
mod config;
mod enums;
mod error;
pub mod rbsp;
mod session;
mod sps;

pub use bytes_util::BitError;
pub use enums::*;
pub use sps::*;

pub use self::annexb::{
    AnnexBScanner, NalRange, NalUnits, ScanState, ScanStep, StartCode, find_next_separator,
};
pub use self::classify::{Dispatch, GopCounter, NalHeader, classify};
pub use self::config::{ScalingListHandling, SessionConfig, TrailingUnitPolicy};
pub use self::error::{SessionError, SpsError};
pub use self::session::{ParseSession, SessionReport, UnitOutcome, UnitReport};
