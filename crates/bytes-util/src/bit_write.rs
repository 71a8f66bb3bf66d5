/// A writer that packs bits most-significant-bit first into an owned buffer.
///
/// Used to assemble bitstreams (parameter sets, Exp-Golomb sequences) in tests
/// and benchmarks.
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_pos: u8,
    current_byte: u8,
}

impl BitWriter {
    /// Creates an empty BitWriter
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_pos: 0,
            current_byte: 0,
        }
    }

    /// Writes a single bit
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.current_byte |= 1 << (7 - self.bit_pos);
        }

        self.bit_pos += 1;

        if self.bit_pos == 8 {
            self.bytes.push(self.current_byte);
            self.current_byte = 0;
            self.bit_pos = 0;
        }
    }

    /// Writes the low `count` bits of `bits` (the most significant bit is
    /// written first). Higher bits of `bits` are ignored.
    pub fn write_bits(&mut self, bits: u64, count: u8) {
        let count = count.min(64);

        for i in (0..count).rev() {
            self.write_bit((bits >> i) & 1 == 1);
        }
    }

    /// Writes raw bytes, regardless of alignment
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.write_bits(*byte as u64, 8);
        }
    }

    /// Pads with zero bits up to the next byte boundary
    pub fn align(&mut self) {
        while !self.is_aligned() {
            self.write_bit(false);
        }
    }

    /// Aligns the writer and returns the written bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.align();
        self.bytes
    }

    /// Writes the `rbsp_stop_one_bit` followed by zero alignment bits and
    /// returns the written bytes
    pub fn finish_rbsp(mut self) -> Vec<u8> {
        self.write_bit(true);
        self.finish()
    }
}

impl BitWriter {
    /// Returns the number of bits written so far
    #[inline(always)]
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_pos as usize
    }

    /// Returns the current bit position (0-7)
    #[inline(always)]
    #[must_use]
    pub const fn bit_pos(&self) -> u8 {
        self.bit_pos
    }

    /// Checks if the writer is aligned to the byte boundary
    #[inline(always)]
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.bit_pos == 0
    }
}
