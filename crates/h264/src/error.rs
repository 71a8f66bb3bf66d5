use bytes_util::BitError;
use thiserror::Error;

use crate::NALUnitType;

/// Errors that end the parse of a single SPS unit.
///
/// These are contained to the unit they occur in; a session keeps scanning
/// after reporting one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpsError {
    /// The bitstream ran out or carried a malformed Exp-Golomb code
    #[error(transparent)]
    Bit(#[from] BitError),

    /// The unit has no header byte
    #[error("empty NAL unit payload")]
    EmptyPayload,

    /// The header byte does not announce an SPS
    #[error("NAL unit type is not SPS: {0:?}")]
    NotSps(NALUnitType),

    /// `pic_order_cnt_type` outside of 0..=2
    #[error("invalid pic_order_cnt_type: {0}")]
    InvalidPicOrderCntType(u32),
}

/// Conditions that end a whole session without producing any unit.
///
/// Neither is fatal to the caller: the session simply has nothing to report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SessionError {
    /// The input buffer was empty
    #[error("input buffer is empty")]
    EmptyInput,

    /// The buffer contains no Annex-B start code
    #[error("no start code found in {0} bytes of input")]
    NoSeparatorFound(usize),
}
