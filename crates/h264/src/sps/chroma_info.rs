use bytes_util::{BitError, BitReader};
use expgolomb::BitReaderExpGolombExt;

use crate::ScalingListHandling;

/// The chroma, bit depth and scaling matrix fields that only the high
/// profiles carry.
/// ISO/IEC-14496-10-2022 - 7.3.2.1.1
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChromaInfo {
    /// The `chroma_format_idc`. This is the chroma sampling relative
    /// to the luma sampling specified in subclause 6.2.
    ///
    /// 0 is monochrome, 1 is 4:2:0, 2 is 4:2:2 and 3 is 4:4:4.
    pub chroma_format_idc: u32,

    /// The `separate_colour_plane_flag` is a single bit, only present when
    /// `chroma_format_idc == 3`. Inferred as false otherwise.
    ///
    /// 1 means the 3 color components of the 4:4:4 chroma format are coded separately and
    /// `ChromaArrayType` is set to 0.
    pub separate_color_plane_flag: bool,

    /// The `bit_depth_luma_minus8`. The luma bit depth is `8 + bit_depth_luma_minus8`.
    pub bit_depth_luma_minus8: u32,

    /// The `bit_depth_chroma_minus8`. The chroma bit depth is `8 + bit_depth_chroma_minus8`.
    pub bit_depth_chroma_minus8: u32,

    /// The `qpprime_y_zero_transform_bypass_flag` is a single bit.
    ///
    /// 1 means that when QP'_Y is 0 a transform bypass operation is applied
    /// before the deblocking filter process from subclause 8.5.
    pub qpprime_y_zero_transform_bypass_flag: bool,

    /// The `seq_scaling_matrix_present_flag` is a single bit.
    pub seq_scaling_matrix_present_flag: bool,

    /// One `seq_scaling_list_present_flag` per list: 8 entries, or 12 when
    /// `chroma_format_idc == 3`. Empty when no matrix is present.
    ///
    /// The lists themselves are not decoded.
    pub seq_scaling_list_present_flags: Vec<bool>,
}

impl ChromaInfo {
    /// Parses the high profile fields from a bitstream.
    /// Returns a `ChromaInfo` struct.
    pub fn parse(
        reader: &mut BitReader<'_>,
        scaling_lists: ScalingListHandling,
    ) -> Result<Self, BitError> {
        let chroma_format_idc = reader.read_exp_golomb()?;
        // Defaults to false: ISO/IEC-14496-10-2022 - 7.4.2.1.1
        let mut separate_color_plane_flag = false;
        if chroma_format_idc == 3 {
            separate_color_plane_flag = reader.read_bit()?;
        }

        let bit_depth_luma_minus8 = reader.read_exp_golomb()?;
        let bit_depth_chroma_minus8 = reader.read_exp_golomb()?;
        let qpprime_y_zero_transform_bypass_flag = reader.read_bit()?;
        let seq_scaling_matrix_present_flag = reader.read_bit()?;

        let mut seq_scaling_list_present_flags = vec![];
        if seq_scaling_matrix_present_flag {
            let count = if chroma_format_idc != 3 { 8 } else { 12 };
            for i in 0..count {
                let present = reader.read_bit()?;
                seq_scaling_list_present_flags.push(present);

                if present && scaling_lists == ScalingListHandling::Skip {
                    let size = if i < 6 { 16 } else { 64 };
                    skip_scaling_list(reader, size)?;
                }
            }
        }

        Ok(ChromaInfo {
            chroma_format_idc,
            separate_color_plane_flag,
            bit_depth_luma_minus8,
            bit_depth_chroma_minus8,
            qpprime_y_zero_transform_bypass_flag,
            seq_scaling_matrix_present_flag,
            seq_scaling_list_present_flags,
        })
    }

    /// `ChromaArrayType` from 7.4.2.1.1
    pub fn chroma_array_type(&self) -> u32 {
        if self.separate_color_plane_flag {
            0
        } else {
            self.chroma_format_idc
        }
    }
}

/// Consumes one `scaling_list()` (7.3.2.1.1.1) without keeping its values.
fn skip_scaling_list(reader: &mut BitReader<'_>, size: usize) -> Result<(), BitError> {
    let mut last_scale: i64 = 8;
    for _ in 0..size {
        let delta_scale = reader.read_signed_exp_golomb()? as i64;
        let next_scale = (last_scale + delta_scale).rem_euclid(256);
        if next_scale == 0 {
            break;
        }
        last_scale = next_scale;
    }

    Ok(())
}
