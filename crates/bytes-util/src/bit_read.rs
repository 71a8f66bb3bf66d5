use crate::BitError;

/// A reader that reads individual bits from a byte slice.
///
/// Bits are consumed most-significant-bit first: bit `i` of the stream is bit
/// `7 - i % 8` of byte `i / 8`. The cursor lives inside the reader value, so
/// independent readers over the same slice never interfere with each other.
#[derive(Debug, Clone)]
#[must_use]
pub struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit of `data`
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Creates a new BitReader positioned at `bit_position`
    ///
    /// A position past the end of `data` is a [`BitError::BufferUnderrun`].
    /// Starting exactly at the end is allowed and leaves nothing to read.
    pub fn at(data: &'a [u8], bit_position: usize) -> Result<Self, BitError> {
        let reader = Self::new(data);
        reader.ensure(bit_position)?;
        Ok(Self {
            position: bit_position,
            ..reader
        })
    }

    /// Reads a single bit
    pub fn read_bit(&mut self) -> Result<bool, BitError> {
        self.ensure(1)?;

        let byte = self.data[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1;
        self.position += 1;

        Ok(bit == 1)
    }

    /// Reads `count` bits (at most 32) as an unsigned integer.
    ///
    /// Reading zero bits returns `0` and leaves the cursor untouched. If fewer
    /// than `count` bits remain, nothing is consumed and
    /// [`BitError::BufferUnderrun`] is returned.
    pub fn read_bits(&mut self, count: u8) -> Result<u32, BitError> {
        if count > 32 {
            return Err(BitError::InvalidWidth(count));
        }

        self.ensure(count as usize)?;

        let mut bits = 0u32;
        let mut left = count as usize;
        while left > 0 {
            let byte = self.data[self.position / 8];
            let offset = self.position % 8;
            // bits still unread in the current byte
            let available = 8 - offset;
            let take = available.min(left);

            let chunk = (byte >> (available - take)) & (0xFF >> (8 - take));
            bits = (bits << take) | chunk as u32;

            self.position += take;
            left -= take;
        }

        Ok(bits)
    }

    /// Reads a whole byte, regardless of alignment
    pub fn read_u8(&mut self) -> Result<u8, BitError> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Skips `count` bits without decoding them
    pub fn skip_bits(&mut self, count: usize) -> Result<(), BitError> {
        self.ensure(count)?;
        self.position += count;
        Ok(())
    }

    fn ensure(&self, requested: usize) -> Result<(), BitError> {
        let available = self.remaining_bits();
        if requested > available {
            return Err(BitError::BufferUnderrun {
                requested,
                available,
            });
        }

        Ok(())
    }
}

impl<'a> BitReader<'a> {
    /// Returns the underlying slice
    #[inline(always)]
    #[must_use]
    pub const fn get_ref(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the current position in bits from the start of the slice
    #[inline(always)]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the total length of the slice in bits
    #[inline(always)]
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    /// Returns the number of bits left to read
    #[inline(always)]
    #[must_use]
    pub const fn remaining_bits(&self) -> usize {
        self.bit_len() - self.position
    }

    /// Returns the bit position inside the current byte (0-7)
    #[inline(always)]
    #[must_use]
    pub const fn bit_pos(&self) -> u8 {
        (self.position % 8) as u8
    }

    /// Checks if the reader is aligned to the byte boundary
    #[inline(always)]
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.position % 8 == 0
    }
}
