use bytes_util::{BitError, BitReader};
use expgolomb::BitReaderExpGolombExt;

/// `PicOrderCountType1` contains the fields that are set when `pic_order_cnt_type == 1`.
///
/// This contains the following fields: `delta_pic_order_always_zero_flag`,
/// `offset_for_non_ref_pic`, `offset_for_top_to_bottom_field`, and
/// `offset_for_ref_frame`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PicOrderCountType1 {
    /// The `delta_pic_order_always_zero_flag` is a single bit.
    ///
    /// 1 means the `delta_pic_order_cnt[0]` and `delta_pic_order_cnt[1]` are NOT in the slice headers
    /// and will be set to 0 by default.
    ///
    /// ISO/IEC-14496-10-2022 - 7.4.2.1.1
    pub delta_pic_order_always_zero_flag: bool,

    /// The `offset_for_non_ref_pic` is used to calculate the pic order count for a non-reference picture
    /// from subclause 8.2.1.
    ///
    /// This is encoded by a SIGNED exp golomb.
    pub offset_for_non_ref_pic: i32,

    /// The `offset_for_top_to_bottom_field` is used to calculate the pic order count of a bottom field from
    /// subclause 8.2.1.
    ///
    /// This is encoded by a SIGNED exp golomb.
    pub offset_for_top_to_bottom_field: i32,

    /// The `num_ref_frames_in_pic_order_cnt_cycle`, the number of entries in
    /// `offset_for_ref_frame`.
    ///
    /// The value of this ranges from \[0, 255\] in a conforming stream.
    pub num_ref_frames_in_pic_order_cnt_cycle: u32,

    /// One `offset_for_ref_frame` per reference frame in the cycle.
    ///
    /// `ExpectedDeltaPerPicOrderCntCycle` is the sum of these values.
    pub offset_for_ref_frame: Vec<i32>,
}

impl PicOrderCountType1 {
    /// Parses the fields defined when the `pic_order_count_type == 1` from a bitstream.
    /// Returns a `PicOrderCountType1` struct.
    pub fn parse(reader: &mut BitReader<'_>) -> Result<Self, BitError> {
        let delta_pic_order_always_zero_flag = reader.read_bit()?;
        let offset_for_non_ref_pic = reader.read_signed_exp_golomb()?;
        let offset_for_top_to_bottom_field = reader.read_signed_exp_golomb()?;
        let num_ref_frames_in_pic_order_cnt_cycle = reader.read_exp_golomb()?;

        // every entry takes at least one bit, so the count can't outgrow the buffer
        let capacity = (num_ref_frames_in_pic_order_cnt_cycle as usize).min(reader.remaining_bits());
        let mut offset_for_ref_frame = Vec::with_capacity(capacity);
        for _ in 0..num_ref_frames_in_pic_order_cnt_cycle {
            offset_for_ref_frame.push(reader.read_signed_exp_golomb()?);
        }

        Ok(PicOrderCountType1 {
            delta_pic_order_always_zero_flag,
            offset_for_non_ref_pic,
            offset_for_top_to_bottom_field,
            num_ref_frames_in_pic_order_cnt_cycle,
            offset_for_ref_frame,
        })
    }

    /// `ExpectedDeltaPerPicOrderCntCycle` from 7.4.2.1.1
    pub fn expected_delta_per_pic_order_cnt_cycle(&self) -> i64 {
        self.offset_for_ref_frame.iter().map(|&offset| offset as i64).sum()
    }
}
