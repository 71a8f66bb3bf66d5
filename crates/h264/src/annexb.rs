//! Annex-B byte stream scanning.
//!
//! NAL units in an Annex-B stream are delimited by start codes, either
//! `00 00 01` or `00 00 00 01`. The scanner walks a fully materialized buffer
//! and hands out the byte ranges between them without copying.

use std::ops::Range;

use tracing::trace;

use crate::TrailingUnitPolicy;

/// A start code found in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartCode {
    /// Index of the first byte of the marker
    pub offset: usize,
    /// Marker length, 3 or 4
    pub len: usize,
}

impl StartCode {
    /// Index of the first payload byte after the marker
    pub const fn payload_start(&self) -> usize {
        self.offset + self.len
    }
}

/// A half-open byte range `[start, end)` holding one NAL unit's payload,
/// header byte included and start codes excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NalRange {
    /// First byte of the unit (its header)
    pub start: usize,
    /// One past the last byte of the unit
    pub end: usize,
}

impl NalRange {
    /// Number of bytes in the unit
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for ranges produced by the scanner
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Borrows the unit's bytes out of the scanned buffer
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.start..self.end]
    }
}

impl From<NalRange> for Range<usize> {
    fn from(range: NalRange) -> Self {
        range.start..range.end
    }
}

/// Finds the next start code at or after `from`.
///
/// Both patterns are tried at every position, the 3-byte one first, so
/// `00 00 00 01` is reported as a 4-byte marker starting at its first zero.
/// A pattern is only matched when it lies entirely inside the buffer.
pub fn find_next_separator(buffer: &[u8], from: usize) -> Option<StartCode> {
    let mut search = from;

    while search < buffer.len() {
        // every marker ends in 0x01, so only look behind those
        let one = search + memchr::memchr(0x01, &buffer[search..])?;

        if one >= from + 3 && buffer[one - 3..one] == [0, 0, 0] {
            return Some(StartCode {
                offset: one - 3,
                len: 4,
            });
        }

        if one >= from + 2 && buffer[one - 2..one] == [0, 0] {
            return Some(StartCode {
                offset: one - 2,
                len: 3,
            });
        }

        search = one + 1;
    }

    None
}

/// Resumable position of an [`AnnexBScanner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Byte offset the next step starts from
    pub position: usize,
    /// Start codes seen so far
    pub markers_seen: usize,
    /// Set once the end of the buffer was handled
    pub finished: bool,
}

/// One step of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep {
    /// A start code that does not close a unit: the very first marker of the
    /// stream, or one directly following another marker. `skipped` counts the
    /// bytes before the first marker, which never form a unit.
    LeadingMarker {
        /// The marker found
        marker: StartCode,
        /// Bytes jumped over in front of it
        skipped: usize,
    },
    /// A unit closed by the next start code.
    ///
    /// Zero bytes in front of a 4-byte marker that are not themselves part of
    /// a marker still end up here, so `00 00 01 00 00 00 00 01` yields a
    /// one byte unit holding `0x00` (a header of type 0).
    Unit(NalRange),
    /// The bytes after the last start code, closed by the end of the buffer
    Trailing(NalRange),
    /// No further start code. `residual` holds the bytes that were dropped
    /// under [`TrailingUnitPolicy::Discard`].
    NoSeparator {
        /// Dropped bytes, if any
        residual: Option<NalRange>,
    },
}

/// Walks an Annex-B buffer step by step.
///
/// The scanner never copies the buffer; it only tracks a [`ScanState`], which
/// can be saved and resumed or reset with [`AnnexBScanner::restart`].
#[derive(Debug, Clone)]
pub struct AnnexBScanner<'a> {
    buffer: &'a [u8],
    state: ScanState,
    policy: TrailingUnitPolicy,
}

impl<'a> AnnexBScanner<'a> {
    /// Creates a scanner at the start of `buffer`
    pub fn new(buffer: &'a [u8], policy: TrailingUnitPolicy) -> Self {
        Self::resume(buffer, ScanState::default(), policy)
    }

    /// Creates a scanner continuing from a saved state
    pub fn resume(buffer: &'a [u8], state: ScanState, policy: TrailingUnitPolicy) -> Self {
        Self {
            buffer,
            state,
            policy,
        }
    }

    /// Restarts the scan at `from`, as if the stream began there
    pub fn restart(&mut self, from: usize) {
        self.state = ScanState {
            position: from,
            ..ScanState::default()
        };
    }

    /// The current scan state
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// The scanned buffer
    pub const fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Advances to the next step, or `None` once the buffer is exhausted
    pub fn next_step(&mut self) -> Option<ScanStep> {
        if self.state.finished || self.state.position >= self.buffer.len() {
            self.state.finished = true;
            return None;
        }

        let unit_start = self.state.position;

        let Some(marker) = find_next_separator(self.buffer, unit_start) else {
            self.state.finished = true;
            self.state.position = self.buffer.len();

            // bytes before any start code are not a unit
            if self.state.markers_seen == 0 {
                return Some(ScanStep::NoSeparator { residual: None });
            }

            let residual = NalRange {
                start: unit_start,
                end: self.buffer.len(),
            };

            return Some(match self.policy {
                TrailingUnitPolicy::ImplicitTerminator => ScanStep::Trailing(residual),
                TrailingUnitPolicy::Discard => ScanStep::NoSeparator {
                    residual: Some(residual),
                },
            });
        };

        // always move past the marker, even when it closes nothing
        self.state.position = marker.payload_start();
        let first_marker = self.state.markers_seen == 0;
        self.state.markers_seen += 1;

        if first_marker || marker.offset == unit_start {
            let skipped = if first_marker {
                marker.offset - unit_start
            } else {
                0
            };

            trace!(offset = marker.offset, len = marker.len, skipped, "leading start code");
            return Some(ScanStep::LeadingMarker { marker, skipped });
        }

        Some(ScanStep::Unit(NalRange {
            start: unit_start,
            end: marker.offset,
        }))
    }
}

/// Iterator over the NAL units of an Annex-B buffer.
#[derive(Debug, Clone)]
pub struct NalUnits<'a> {
    scanner: AnnexBScanner<'a>,
}

impl<'a> NalUnits<'a> {
    /// Iterates the units of `buffer`
    pub fn new(buffer: &'a [u8], policy: TrailingUnitPolicy) -> Self {
        Self {
            scanner: AnnexBScanner::new(buffer, policy),
        }
    }
}

impl Iterator for NalUnits<'_> {
    type Item = NalRange;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.scanner.next_step()? {
                ScanStep::Unit(range) | ScanStep::Trailing(range) => return Some(range),
                ScanStep::LeadingMarker { .. } => continue,
                ScanStep::NoSeparator { .. } => return None,
            }
        }
    }
}
