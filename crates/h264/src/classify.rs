use crate::NALUnitType;

/// The one byte NAL unit header.
///
/// ISO/IEC-14496-10-2022 - 7.3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NalHeader {
    /// Must be 0 in a conforming stream. Reported, never enforced.
    pub forbidden_zero_bit: bool,
    /// 2 bits; non-zero for reference pictures and parameter sets
    pub nal_ref_idc: u8,
    /// The low 5 bits of the header
    pub nal_unit_type: NALUnitType,
}

impl NalHeader {
    /// Splits a header byte into its fields
    pub const fn parse(byte: u8) -> Self {
        Self {
            forbidden_zero_bit: byte & 0x80 != 0,
            nal_ref_idc: (byte >> 5) & 0x03,
            nal_unit_type: NALUnitType::from_header(byte),
        }
    }
}

/// Where a NAL unit is routed after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Type 1, counts towards the current GOP
    NonIdrSlice,
    /// Type 5, starts a new GOP
    IdrSlice,
    /// Type 7, handed to the SPS parser
    Sps,
    /// Type 8, not parsed
    Pps,
    /// Everything else, not parsed
    Other(NALUnitType),
}

impl From<NALUnitType> for Dispatch {
    fn from(nal_unit_type: NALUnitType) -> Self {
        match nal_unit_type {
            NALUnitType::NonIDRSliceLayerWithoutPartitioning => Dispatch::NonIdrSlice,
            NALUnitType::IDRSliceLayerWithoutPartitioning => Dispatch::IdrSlice,
            NALUnitType::SPS => Dispatch::Sps,
            NALUnitType::PPS => Dispatch::Pps,
            other => Dispatch::Other(other),
        }
    }
}

/// Classifies a NAL unit by the type in its first byte.
///
/// Returns `None` for an empty payload.
pub fn classify(payload: &[u8]) -> Option<(NalHeader, Dispatch)> {
    let header = NalHeader::parse(*payload.first()?);
    Some((header, header.nal_unit_type.into()))
}

/// Counts the pictures of the current group of pictures.
///
/// The count restarts at 1 on every IDR slice and grows by one on every
/// non-IDR slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GopCounter {
    count: u32,
}

impl GopCounter {
    /// A counter that has not seen any slice yet
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Records a non-IDR slice and returns the running count
    pub fn on_non_idr(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Records an IDR slice. Returns the length of the GOP it closes, if one
    /// was open.
    pub fn on_idr(&mut self) -> Option<u32> {
        let finished = (self.count != 0).then_some(self.count);
        self.count = 1;
        finished
    }

    /// Current count
    pub const fn count(&self) -> u32 {
        self.count
    }
}
