//! Emulation prevention removal.

use std::borrow::Cow;

/// Strips emulation prevention bytes (`0x03` following two zero bytes) from a
/// NAL unit payload, giving its raw byte sequence payload.
///
/// Borrows the input when it contains nothing to strip.
pub fn to_rbsp(payload: &[u8]) -> Cow<'_, [u8]> {
    let Some(first) = first_escape(payload) else {
        return Cow::Borrowed(payload);
    };

    let mut out = Vec::with_capacity(payload.len());
    out.extend_from_slice(&payload[..first]);

    let mut zero_count = 0u8;
    for &byte in &payload[first..] {
        match byte {
            0x03 if zero_count >= 2 => {
                zero_count = 0;
                continue;
            }
            0x00 => zero_count = zero_count.saturating_add(1),
            _ => zero_count = 0,
        }
        out.push(byte);
    }

    Cow::Owned(out)
}

/// Index of the first byte that starts a `00 00 03` run, if any.
fn first_escape(payload: &[u8]) -> Option<usize> {
    payload.windows(3).position(|window| window == [0x00, 0x00, 0x03])
}
