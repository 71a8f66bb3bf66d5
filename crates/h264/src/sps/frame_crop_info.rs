use bytes_util::{BitError, BitReader};
use expgolomb::BitReaderExpGolombExt;

/// `FrameCropInfo` contains the frame cropping info.
///
/// The offsets are kept exactly as coded. They are expressed in crop units,
/// which depend on the chroma format and on `frame_mbs_only_flag`; see
/// [`SpsRecord::cropped_width`](crate::SpsRecord::cropped_width).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameCropInfo {
    /// The `frame_crop_left_offset`
    pub frame_crop_left_offset: u32,

    /// The `frame_crop_right_offset`
    pub frame_crop_right_offset: u32,

    /// The `frame_crop_top_offset`
    pub frame_crop_top_offset: u32,

    /// The `frame_crop_bottom_offset`
    pub frame_crop_bottom_offset: u32,
}

impl FrameCropInfo {
    /// Parses the fields defined when the `frame_cropping_flag == 1` from a bitstream.
    /// Returns a `FrameCropInfo` struct.
    pub fn parse(reader: &mut BitReader<'_>) -> Result<Self, BitError> {
        let frame_crop_left_offset = reader.read_exp_golomb()?;
        let frame_crop_right_offset = reader.read_exp_golomb()?;
        let frame_crop_top_offset = reader.read_exp_golomb()?;
        let frame_crop_bottom_offset = reader.read_exp_golomb()?;

        Ok(FrameCropInfo {
            frame_crop_left_offset,
            frame_crop_right_offset,
            frame_crop_top_offset,
            frame_crop_bottom_offset,
        })
    }

    /// Sum of the left and right offsets
    pub fn horizontal(&self) -> u64 {
        self.frame_crop_left_offset as u64 + self.frame_crop_right_offset as u64
    }

    /// Sum of the top and bottom offsets
    pub fn vertical(&self) -> u64 {
        self.frame_crop_top_offset as u64 + self.frame_crop_bottom_offset as u64
    }
}
