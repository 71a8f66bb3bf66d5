mod chroma_info;
pub use self::chroma_info::ChromaInfo;

mod frame_crop_info;
pub use self::frame_crop_info::FrameCropInfo;

mod pic_order_count_type1;
use bytes_util::BitReader;
use expgolomb::BitReaderExpGolombExt;

pub use self::pic_order_count_type1::PicOrderCountType1;
use crate::{NALUnitType, NalHeader, ScalingListHandling, SpsError, rbsp};

/// Profiles that carry the chroma, bit depth and scaling matrix fields.
///
/// ISO/IEC-14496-10-2022 - 7.3.2.1.1
pub const HIGH_PROFILES: [u8; 9] = [100, 110, 122, 244, 44, 83, 86, 118, 128];

/// The picture order count fields, one variant per `pic_order_cnt_type`.
///
/// ISO/IEC-14496-10-2022 - 7.4.2.1.1
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PicOrderCnt {
    /// `pic_order_cnt_type == 0`
    Type0 {
        /// `MaxPicOrderCntLsb = 2 ^ (log2_max_pic_order_cnt_lsb_minus4 + 4)`
        log2_max_pic_order_cnt_lsb_minus4: u32,
    },
    /// `pic_order_cnt_type == 1`
    Type1(PicOrderCountType1),
    /// `pic_order_cnt_type == 2`, no further fields
    Type2,
}

impl PicOrderCnt {
    /// The coded `pic_order_cnt_type`
    pub const fn pic_order_cnt_type(&self) -> u32 {
        match self {
            PicOrderCnt::Type0 { .. } => 0,
            PicOrderCnt::Type1(_) => 1,
            PicOrderCnt::Type2 => 2,
        }
    }

    fn parse(reader: &mut BitReader<'_>) -> Result<Self, SpsError> {
        match reader.read_exp_golomb()? {
            0 => Ok(PicOrderCnt::Type0 {
                log2_max_pic_order_cnt_lsb_minus4: reader.read_exp_golomb()?,
            }),
            1 => Ok(PicOrderCnt::Type1(PicOrderCountType1::parse(reader)?)),
            2 => Ok(PicOrderCnt::Type2),
            other => Err(SpsError::InvalidPicOrderCntType(other)),
        }
    }
}

/// The Sequence Parameter Set, read up to `vui_parameters_present_flag`.
///
/// The VUI itself is never decoded.
/// ISO/IEC-14496-10-2022 - 7.3.2.1.1
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpsRecord {
    /// The `nal_ref_idc` of the header byte, 2 bits.
    ///
    /// Non-zero for every conforming SPS.
    pub nal_ref_idc: u8,

    /// The `profile_idc` of the coded video sequence.
    ///
    /// 66 is Baseline, 77 Main, 100 High. ISO/IEC-14496-10-2022 - A.2
    pub profile_idc: u8,

    /// `constraint_set0_flag` thru `constraint_set3_flag`.
    ///
    /// The four bits that follow are not kept.
    pub constraint_flags: [bool; 4],

    /// The `level_idc`, ten times the level number (31 is level 3.1).
    pub level_idc: u8,

    /// The `seq_parameter_set_id`, 0 to 31 in a conforming stream.
    pub seq_parameter_set_id: u32,

    /// Present only when `profile_idc` is one of [`HIGH_PROFILES`].
    pub chroma_info: Option<ChromaInfo>,

    /// `MaxFrameNum = 2 ^ (log2_max_frame_num_minus4 + 4)`
    pub log2_max_frame_num_minus4: u32,

    /// `pic_order_cnt_type` with the fields that depend on it.
    pub pic_order_cnt: PicOrderCnt,

    /// The `max_num_ref_frames`
    pub max_num_ref_frames: u32,

    /// The `gaps_in_frame_num_value_allowed_flag` is a single bit.
    pub gaps_in_frame_num_value_allowed_flag: bool,

    /// Width in macroblocks, minus one.
    pub pic_width_in_mbs_minus1: u32,

    /// Height in slice group map units, minus one.
    ///
    /// A map unit is a macroblock pair when `frame_mbs_only_flag` is unset.
    pub pic_height_in_map_units_minus1: u32,

    /// The `frame_mbs_only_flag` is a single bit.
    ///
    /// 1 means every coded picture is a frame.
    pub frame_mbs_only_flag: bool,

    /// Only read when `frame_mbs_only_flag` is unset.
    pub mb_adaptive_frame_field_flag: Option<bool>,

    /// The `direct_8x8_inference_flag` is a single bit.
    pub direct_8x8_inference_flag: bool,

    /// Present when `frame_cropping_flag` is set.
    pub frame_crop_info: Option<FrameCropInfo>,

    /// The `vui_parameters_present_flag` is a single bit.
    pub vui_parameters_present_flag: bool,
}

impl SpsRecord {
    /// Parses an SPS from a NAL unit payload, header byte included.
    ///
    /// The payload must already be free of emulation prevention bytes; see
    /// [`Self::parse_with_emulation_prevention`] otherwise.
    pub fn parse(payload: &[u8]) -> Result<Self, SpsError> {
        Self::parse_with(payload, ScalingListHandling::default())
    }

    /// Same as [`Self::parse`] with an explicit scaling list mode.
    pub fn parse_with(payload: &[u8], scaling_lists: ScalingListHandling) -> Result<Self, SpsError> {
        let header = NalHeader::parse(*payload.first().ok_or(SpsError::EmptyPayload)?);
        if header.nal_unit_type != NALUnitType::SPS {
            return Err(SpsError::NotSps(header.nal_unit_type));
        }

        // skip the header byte
        let mut reader = BitReader::at(payload, 8)?;

        let profile_idc = reader.read_u8()?;
        let mut constraint_flags = [false; 4];
        for flag in &mut constraint_flags {
            *flag = reader.read_bit()?;
        }
        reader.skip_bits(4)?;
        let level_idc = reader.read_u8()?;
        let seq_parameter_set_id = reader.read_exp_golomb()?;

        let chroma_info = if HIGH_PROFILES.contains(&profile_idc) {
            Some(ChromaInfo::parse(&mut reader, scaling_lists)?)
        } else {
            None
        };

        let log2_max_frame_num_minus4 = reader.read_exp_golomb()?;
        let pic_order_cnt = PicOrderCnt::parse(&mut reader)?;

        let max_num_ref_frames = reader.read_exp_golomb()?;
        let gaps_in_frame_num_value_allowed_flag = reader.read_bit()?;
        let pic_width_in_mbs_minus1 = reader.read_exp_golomb()?;
        let pic_height_in_map_units_minus1 = reader.read_exp_golomb()?;

        let frame_mbs_only_flag = reader.read_bit()?;
        let mut mb_adaptive_frame_field_flag = None;
        if !frame_mbs_only_flag {
            mb_adaptive_frame_field_flag = Some(reader.read_bit()?);
        }

        let direct_8x8_inference_flag = reader.read_bit()?;

        let frame_cropping_flag = reader.read_bit()?;
        let mut frame_crop_info = None;
        if frame_cropping_flag {
            frame_crop_info = Some(FrameCropInfo::parse(&mut reader)?);
        }

        let vui_parameters_present_flag = reader.read_bit()?;

        Ok(SpsRecord {
            nal_ref_idc: header.nal_ref_idc,
            profile_idc,
            constraint_flags,
            level_idc,
            seq_parameter_set_id,
            chroma_info,
            log2_max_frame_num_minus4,
            pic_order_cnt,
            max_num_ref_frames,
            gaps_in_frame_num_value_allowed_flag,
            pic_width_in_mbs_minus1,
            pic_height_in_map_units_minus1,
            frame_mbs_only_flag,
            mb_adaptive_frame_field_flag,
            direct_8x8_inference_flag,
            frame_crop_info,
            vui_parameters_present_flag,
        })
    }

    /// Parses an SPS from a payload that may still contain emulation prevention bytes.
    /// Is the same as calling [`Self::parse_with`] on [`rbsp::to_rbsp`] of the payload.
    pub fn parse_with_emulation_prevention(
        payload: &[u8],
        scaling_lists: ScalingListHandling,
    ) -> Result<Self, SpsError> {
        Self::parse_with(&rbsp::to_rbsp(payload), scaling_lists)
    }

    /// The coded `pic_order_cnt_type`, 0 to 2.
    pub const fn pic_order_cnt_type(&self) -> u32 {
        self.pic_order_cnt.pic_order_cnt_type()
    }

    /// `ChromaArrayType`. Without the high profile fields `chroma_format_idc`
    /// is inferred as 1 (4:2:0).
    pub fn chroma_array_type(&self) -> u32 {
        self.chroma_info.as_ref().map_or(1, |chroma| chroma.chroma_array_type())
    }

    /// The coded width in luma samples, before cropping.
    ///
    /// `width = (pic_width_in_mbs_minus1 + 1) * 16`
    pub fn width(&self) -> u64 {
        (self.pic_width_in_mbs_minus1 as u64 + 1) * 16
    }

    /// The coded height in luma samples, before cropping.
    ///
    /// `height = (pic_height_in_map_units_minus1 + 1) * 16 * (2 - frame_mbs_only_flag)`
    pub fn height(&self) -> u64 {
        (self.pic_height_in_map_units_minus1 as u64 + 1) * 16 * (2 - self.frame_mbs_only_flag as u64)
    }

    /// The width after the crop offsets are applied in crop units.
    ///
    /// ISO/IEC-14496-10-2022 - 7.4.2.1.1 (7-19, 7-21)
    pub fn cropped_width(&self) -> u64 {
        let (crop_unit_x, _) = self.crop_units();
        self.frame_crop_info.as_ref().map_or(self.width(), |crop| {
            self.width().saturating_sub(crop.horizontal() * crop_unit_x)
        })
    }

    /// The height after the crop offsets are applied in crop units.
    ///
    /// ISO/IEC-14496-10-2022 - 7.4.2.1.1 (7-20, 7-22)
    pub fn cropped_height(&self) -> u64 {
        let (_, crop_unit_y) = self.crop_units();
        self.frame_crop_info.as_ref().map_or(self.height(), |crop| {
            self.height().saturating_sub(crop.vertical() * crop_unit_y)
        })
    }

    fn crop_units(&self) -> (u64, u64) {
        let field_factor = 2 - self.frame_mbs_only_flag as u64;

        // SubWidthC and SubHeightC, Table 6-1
        let (sub_width_c, sub_height_c) = match self.chroma_array_type() {
            0 => return (1, field_factor),
            1 => (2, 2),
            2 => (2, 1),
            _ => (1, 1),
        };

        (sub_width_c, sub_height_c * field_factor)
    }
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use bytes_util::{BitError, BitWriter};
    use expgolomb::BitWriterExpGolombExt;

    use crate::sps::{PicOrderCnt, SpsRecord};
    use crate::{NALUnitType, ScalingListHandling, SpsError};

    /// Writes the header byte and the fields up to `seq_parameter_set_id`.
    fn write_prefix(writer: &mut BitWriter, profile_idc: u8, level_idc: u8, sps_id: u32) {
        writer.write_bits(0x67, 8);
        writer.write_bits(profile_idc as u64, 8);
        writer.write_bits(0b1100, 4); // constraint_set0 and 1
        writer.write_bits(0, 4);
        writer.write_bits(level_idc as u64, 8);
        writer.write_exp_golomb(sps_id);
    }

    /// Everything after `pic_order_cnt`: one reference frame, 1280x720 with
    /// no cropping and no VUI.
    fn write_tail(writer: &mut BitWriter) {
        writer.write_exp_golomb(1); // max_num_ref_frames
        writer.write_bit(false); // gaps_in_frame_num_value_allowed_flag
        writer.write_exp_golomb(79); // pic_width_in_mbs_minus1
        writer.write_exp_golomb(44); // pic_height_in_map_units_minus1
        writer.write_bit(true); // frame_mbs_only_flag
        writer.write_bit(true); // direct_8x8_inference_flag
        writer.write_bit(false); // frame_cropping_flag
        writer.write_bit(false); // vui_parameters_present_flag
    }

    /// Inserts `0x03` after every two zero bytes followed by a byte <= 3
    fn escape(rbsp: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(rbsp.len() + 4);
        let mut zero_count = 0;
        for &byte in rbsp {
            if zero_count >= 2 && byte <= 0x03 {
                out.push(0x03);
                zero_count = 0;
            }
            out.push(byte);
            zero_count = if byte == 0 { zero_count + 1 } else { 0 };
        }
        out
    }

    #[test]
    fn test_parse_baseline_skips_high_profile_fields() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 66, 30, 0);
        // these would be chroma_format_idc and bit depths in a high profile
        writer.write_exp_golomb(2); // log2_max_frame_num_minus4
        writer.write_exp_golomb(0); // pic_order_cnt_type
        writer.write_exp_golomb(3); // log2_max_pic_order_cnt_lsb_minus4
        write_tail(&mut writer);
        let data = writer.finish_rbsp();

        assert_eq!(&data[..4], &[0x67, 0x42, 0xC0, 0x1E]);

        let result = SpsRecord::parse(&data).unwrap();

        insta::assert_debug_snapshot!(result, @r"
        SpsRecord {
            nal_ref_idc: 3,
            profile_idc: 66,
            constraint_flags: [
                true,
                true,
                false,
                false,
            ],
            level_idc: 30,
            seq_parameter_set_id: 0,
            chroma_info: None,
            log2_max_frame_num_minus4: 2,
            pic_order_cnt: Type0 {
                log2_max_pic_order_cnt_lsb_minus4: 3,
            },
            max_num_ref_frames: 1,
            gaps_in_frame_num_value_allowed_flag: false,
            pic_width_in_mbs_minus1: 79,
            pic_height_in_map_units_minus1: 44,
            frame_mbs_only_flag: true,
            mb_adaptive_frame_field_flag: None,
            direct_8x8_inference_flag: true,
            frame_crop_info: None,
            vui_parameters_present_flag: false,
        }
        ");

        assert_eq!(result.width(), 1280);
        assert_eq!(result.height(), 720);
        assert_eq!(result.cropped_width(), 1280);
        assert_eq!(result.cropped_height(), 720);
        assert_eq!(result.chroma_array_type(), 1);
    }

    #[test]
    fn test_parse_real_high_profile_sps() {
        // 480x852 High@3.1 SPS as written by x264
        let data = [
            0x67, 0x64, 0x00, 0x1F, 0xAC, 0xD9, 0x41, 0xE0, 0x6D, 0xF9, 0xE6, 0xA0, 0x20, 0x20, 0x28, 0x00, 0x00,
            0x00, 0x08, 0x00, 0x00, 0x01, 0xE0,
        ];

        let result = SpsRecord::parse(&data).unwrap();

        insta::assert_debug_snapshot!(result, @r"
        SpsRecord {
            nal_ref_idc: 3,
            profile_idc: 100,
            constraint_flags: [
                false,
                false,
                false,
                false,
            ],
            level_idc: 31,
            seq_parameter_set_id: 0,
            chroma_info: Some(
                ChromaInfo {
                    chroma_format_idc: 1,
                    separate_color_plane_flag: false,
                    bit_depth_luma_minus8: 0,
                    bit_depth_chroma_minus8: 0,
                    qpprime_y_zero_transform_bypass_flag: false,
                    seq_scaling_matrix_present_flag: false,
                    seq_scaling_list_present_flags: [],
                },
            ),
            log2_max_frame_num_minus4: 0,
            pic_order_cnt: Type0 {
                log2_max_pic_order_cnt_lsb_minus4: 2,
            },
            max_num_ref_frames: 4,
            gaps_in_frame_num_value_allowed_flag: false,
            pic_width_in_mbs_minus1: 29,
            pic_height_in_map_units_minus1: 53,
            frame_mbs_only_flag: true,
            mb_adaptive_frame_field_flag: None,
            direct_8x8_inference_flag: true,
            frame_crop_info: Some(
                FrameCropInfo {
                    frame_crop_left_offset: 0,
                    frame_crop_right_offset: 0,
                    frame_crop_top_offset: 0,
                    frame_crop_bottom_offset: 6,
                },
            ),
            vui_parameters_present_flag: true,
        }
        ");

        assert_eq!(result.width(), 480);
        assert_eq!(result.height(), 864);
        assert_eq!(result.cropped_width(), 480);
        assert_eq!(result.cropped_height(), 852);
    }

    #[test]
    fn test_parse_pic_order_cnt_type_2_reads_nothing_extra() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 77, 40, 1);
        writer.write_exp_golomb(0); // log2_max_frame_num_minus4
        writer.write_exp_golomb(2); // pic_order_cnt_type
        write_tail(&mut writer);
        let data = writer.finish_rbsp();

        let result = SpsRecord::parse(&data).unwrap();
        assert_eq!(result.pic_order_cnt, PicOrderCnt::Type2);
        assert_eq!(result.pic_order_cnt_type(), 2);
        // a stray read in the type 2 branch would shift every field after it
        assert_eq!(result.max_num_ref_frames, 1);
        assert_eq!(result.pic_width_in_mbs_minus1, 79);
        assert_eq!(result.pic_height_in_map_units_minus1, 44);
        assert!(!result.vui_parameters_present_flag);
    }

    #[test]
    fn test_parse_pic_order_cnt_type_1() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 77, 40, 0);
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(1); // pic_order_cnt_type
        writer.write_bit(false); // delta_pic_order_always_zero_flag
        writer.write_signed_exp_golomb(-2); // offset_for_non_ref_pic
        writer.write_signed_exp_golomb(1); // offset_for_top_to_bottom_field
        writer.write_exp_golomb(3); // num_ref_frames_in_pic_order_cnt_cycle
        writer.write_signed_exp_golomb(2);
        writer.write_signed_exp_golomb(-4);
        writer.write_signed_exp_golomb(6);
        write_tail(&mut writer);
        let data = writer.finish_rbsp();

        let result = SpsRecord::parse(&data).unwrap();
        let PicOrderCnt::Type1(poc) = &result.pic_order_cnt else {
            panic!("expected pic_order_cnt_type 1, got {:?}", result.pic_order_cnt);
        };

        assert_eq!(poc.offset_for_non_ref_pic, -2);
        assert_eq!(poc.offset_for_top_to_bottom_field, 1);
        assert_eq!(poc.offset_for_ref_frame, vec![2, -4, 6]);
        assert_eq!(poc.expected_delta_per_pic_order_cnt_cycle(), 4);
        assert_eq!(result.max_num_ref_frames, 1);
        assert_eq!(result.width(), 1280);
    }

    #[test]
    fn test_parse_invalid_pic_order_cnt_type() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 66, 30, 0);
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(3);
        write_tail(&mut writer);
        let data = writer.finish_rbsp();

        assert_eq!(SpsRecord::parse(&data), Err(SpsError::InvalidPicOrderCntType(3)));
    }

    #[test]
    fn test_parse_interlaced_with_crop() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 77, 40, 0);
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(2);
        writer.write_exp_golomb(4); // max_num_ref_frames
        writer.write_bit(false);
        writer.write_exp_golomb(119); // 1920
        writer.write_exp_golomb(33); // 34 mb pairs, 1088
        writer.write_bit(false); // frame_mbs_only_flag
        writer.write_bit(true); // mb_adaptive_frame_field_flag
        writer.write_bit(true);
        writer.write_bit(true); // frame_cropping_flag
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(2); // 2 * SubHeightC * 2 = 8 lines
        writer.write_bit(false);
        let data = writer.finish_rbsp();

        let result = SpsRecord::parse(&data).unwrap();
        assert!(!result.frame_mbs_only_flag);
        assert_eq!(result.mb_adaptive_frame_field_flag, Some(true));
        assert_eq!(result.width(), 1920);
        assert_eq!(result.height(), 1088);
        assert_eq!(result.cropped_height(), 1080);
        assert_eq!(result.cropped_width(), 1920);
    }

    #[test]
    fn test_crop_units_follow_chroma_format() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 244, 51, 0);
        writer.write_exp_golomb(3); // chroma_format_idc, 4:4:4
        writer.write_bit(false); // separate_colour_plane_flag
        writer.write_exp_golomb(2);
        writer.write_exp_golomb(2);
        writer.write_bit(false);
        writer.write_bit(false);
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(2);
        writer.write_exp_golomb(1);
        writer.write_bit(false);
        writer.write_exp_golomb(19); // 320
        writer.write_exp_golomb(14); // 240
        writer.write_bit(true);
        writer.write_bit(true);
        writer.write_bit(true);
        writer.write_exp_golomb(1);
        writer.write_exp_golomb(1);
        writer.write_exp_golomb(3);
        writer.write_exp_golomb(1);
        writer.write_bit(false);
        let data = writer.finish_rbsp();

        let result = SpsRecord::parse(&data).unwrap();
        assert_eq!(result.chroma_array_type(), 3);
        // 4:4:4 crops in single samples
        assert_eq!(result.cropped_width(), 318);
        assert_eq!(result.cropped_height(), 236);
    }

    #[test]
    fn test_parse_truncated_sps() {
        // a header and a profile_idc with nothing after it
        let result = SpsRecord::parse(&[0x67, 0x42]);
        assert_eq!(
            result,
            Err(SpsError::Bit(BitError::BufferUnderrun {
                requested: 1,
                available: 0
            }))
        );

        let result = SpsRecord::parse(&[0x67, 0x42, 0x00, 0x1E]);
        assert!(matches!(result, Err(SpsError::Bit(BitError::BufferUnderrun { .. }))));
    }

    #[test]
    fn test_parse_rejects_other_units() {
        assert_eq!(
            SpsRecord::parse(&[0x68, 0xEE, 0x3C, 0x80]),
            Err(SpsError::NotSps(NALUnitType::PPS))
        );
        assert_eq!(SpsRecord::parse(&[]), Err(SpsError::EmptyPayload));
    }

    #[test]
    fn test_forbidden_bit_is_not_enforced() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 66, 30, 0);
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(2);
        write_tail(&mut writer);
        let mut data = writer.finish_rbsp();
        data[0] |= 0x80;

        assert!(SpsRecord::parse(&data).is_ok());
    }

    #[test]
    fn test_parse_with_emulation_prevention() {
        // level_idc 0 followed by a long sps id puts 00 00 02 in the payload
        let mut rbsp_writer = BitWriter::new();
        rbsp_writer.write_bits(0x67, 8);
        rbsp_writer.write_bits(66, 8);
        rbsp_writer.write_bits(0, 8);
        rbsp_writer.write_bits(0, 8);
        rbsp_writer.write_exp_golomb(63);
        rbsp_writer.write_exp_golomb(0);
        rbsp_writer.write_exp_golomb(2);
        write_tail(&mut rbsp_writer);
        let rbsp = rbsp_writer.finish_rbsp();

        let escaped = escape(&rbsp);
        assert_eq!(&escaped[..6], &[0x67, 0x42, 0x00, 0x00, 0x03, 0x02]);

        let expected = SpsRecord::parse(&rbsp).unwrap();
        assert_eq!(expected.seq_parameter_set_id, 63);
        assert_eq!(
            SpsRecord::parse_with_emulation_prevention(&escaped, ScalingListHandling::PresenceOnly),
            Ok(expected.clone())
        );
        assert_ne!(SpsRecord::parse(&escaped).ok(), Some(expected));
    }

    #[test]
    fn test_scaling_list_handling_changes_the_walk() {
        let mut writer = BitWriter::new();
        write_prefix(&mut writer, 100, 40, 0);
        writer.write_exp_golomb(1); // chroma_format_idc
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(0);
        writer.write_bit(false);
        writer.write_bit(true); // seq_scaling_matrix_present_flag
        writer.write_bit(true); // list 0 present
        writer.write_signed_exp_golomb(-8); // next_scale 0, list ends
        for _ in 1..8 {
            writer.write_bit(false);
        }
        writer.write_exp_golomb(0);
        writer.write_exp_golomb(2);
        write_tail(&mut writer);
        let data = writer.finish_rbsp();

        let skipped = SpsRecord::parse_with(&data, ScalingListHandling::Skip).unwrap();
        assert_eq!(skipped.pic_order_cnt_type(), 2);
        assert_eq!(skipped.width(), 1280);
        assert_eq!(skipped.height(), 720);

        // without skipping, the list payload is read as the following fields
        let presence_only = SpsRecord::parse_with(&data, ScalingListHandling::PresenceOnly);
        assert_ne!(presence_only.ok(), Some(skipped));
    }
}
