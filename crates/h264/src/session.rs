use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::{
    AnnexBScanner, Dispatch, GopCounter, NalHeader, NalRange, ScanState, ScanStep, SessionConfig,
    SessionError, SpsError, SpsRecord, classify,
};

/// What the session did with one NAL unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// An SPS that parsed
    Sps(SpsRecord),
    /// An SPS whose parse failed. The session keeps going after it.
    SpsFailed(SpsError),
    /// An IDR slice. Carries the length of the group it closed, if any.
    Idr {
        /// Length of the previous group of pictures
        finished_gop: Option<u32>,
    },
    /// A non-IDR slice, with the running length of the current group
    NonIdr {
        /// Pictures in the current group so far
        gop_length: u32,
    },
    /// PPS and every other unit type
    Ignored,
}

/// One NAL unit as reported by a [`ParseSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    /// Zero based position of the unit in the stream
    pub index: usize,
    /// Where the unit lives in the session buffer
    pub range: NalRange,
    /// The decoded header byte
    pub header: NalHeader,
    /// Where the classifier routed the unit
    pub dispatch: Dispatch,
    /// The result of handling it
    pub outcome: UnitOutcome,
}

/// Everything a finished session produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Units in encounter order
    pub units: Vec<UnitReport>,
    /// Length of every group of pictures closed by an IDR slice
    pub gop_lengths: Vec<u32>,
    /// Pictures counted in the group still open at the end
    pub open_gop: u32,
    /// Bytes after the last start code that were dropped by policy
    pub dropped_trailing: Option<NalRange>,
    /// Set when the input had nothing to parse
    pub terminal: Option<SessionError>,
}

impl SessionReport {
    /// All SPS records that parsed, in stream order
    pub fn sps_records(&self) -> impl Iterator<Item = &SpsRecord> {
        self.units.iter().filter_map(|unit| match &unit.outcome {
            UnitOutcome::Sps(sps) => Some(sps),
            _ => None,
        })
    }

    /// All SPS failures with the index of the unit they belong to
    pub fn sps_failures(&self) -> impl Iterator<Item = (usize, &SpsError)> {
        self.units.iter().filter_map(|unit| match &unit.outcome {
            UnitOutcome::SpsFailed(err) => Some((unit.index, err)),
            _ => None,
        })
    }
}

/// Drives scanning, classification and SPS parsing over one owned buffer.
///
/// A session is an iterator of [`UnitReport`]s; [`ParseSession::run`] drains
/// it into a [`SessionReport`]. Sessions share nothing, so independent
/// buffers can be parsed on independent threads.
#[derive(Debug, Clone)]
pub struct ParseSession {
    buffer: Bytes,
    config: SessionConfig,
    scan: ScanState,
    gop: GopCounter,
    units_emitted: usize,
    gop_lengths: Vec<u32>,
    dropped_trailing: Option<NalRange>,
    terminal: Option<SessionError>,
    done: bool,
}

impl ParseSession {
    /// Creates a session over a fully materialized Annex-B buffer
    pub fn new(buffer: impl Into<Bytes>, config: SessionConfig) -> Self {
        Self {
            buffer: buffer.into(),
            config,
            scan: ScanState::default(),
            gop: GopCounter::new(),
            units_emitted: 0,
            gop_lengths: Vec::new(),
            dropped_trailing: None,
            terminal: None,
            done: false,
        }
    }

    /// Creates a session over a copy of `buffer`
    pub fn from_slice(buffer: &[u8], config: SessionConfig) -> Self {
        Self::new(Bytes::copy_from_slice(buffer), config)
    }

    /// The session buffer
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// The session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The condition that ended the session early, if any
    pub fn terminal(&self) -> Option<SessionError> {
        self.terminal
    }

    /// Runs the session to the end
    pub fn run(mut self) -> SessionReport {
        let units: Vec<UnitReport> = self.by_ref().collect();

        debug!(
            "Session finished: {} units, {} closed GOPs",
            units.len(),
            self.gop_lengths.len()
        );

        SessionReport {
            units,
            gop_lengths: self.gop_lengths,
            open_gop: self.gop.count(),
            dropped_trailing: self.dropped_trailing,
            terminal: self.terminal,
        }
    }

    fn next_step(&mut self) -> Option<ScanStep> {
        let mut scanner = AnnexBScanner::resume(&self.buffer, self.scan, self.config.trailing_unit);
        let step = scanner.next_step();
        self.scan = scanner.state();
        step
    }

    fn report(&mut self, range: NalRange) -> Option<UnitReport> {
        let payload = range.slice(&self.buffer);
        let (header, dispatch) = classify(payload)?;

        if header.forbidden_zero_bit {
            warn!("forbidden_zero_bit set on unit at byte {}", range.start);
        }

        let outcome = match dispatch {
            Dispatch::Sps => self.parse_sps(payload, range),
            Dispatch::IdrSlice => {
                let finished_gop = self.gop.on_idr();
                if let Some(length) = finished_gop {
                    debug!("GOP closed after {} pictures", length);
                    self.gop_lengths.push(length);
                }
                UnitOutcome::Idr { finished_gop }
            }
            Dispatch::NonIdrSlice => UnitOutcome::NonIdr {
                gop_length: self.gop.on_non_idr(),
            },
            Dispatch::Pps | Dispatch::Other(_) => {
                trace!("Skipping {:?} unit at byte {}", header.nal_unit_type, range.start);
                UnitOutcome::Ignored
            }
        };

        let index = self.units_emitted;
        self.units_emitted += 1;

        Some(UnitReport {
            index,
            range,
            header,
            dispatch,
            outcome,
        })
    }

    fn parse_sps(&self, payload: &[u8], range: NalRange) -> UnitOutcome {
        let result = if self.config.emulation_prevention {
            SpsRecord::parse_with_emulation_prevention(payload, self.config.scaling_lists)
        } else {
            SpsRecord::parse_with(payload, self.config.scaling_lists)
        };

        match result {
            Ok(sps) => {
                debug!(
                    "SPS {} at byte {}: profile {} level {}, {}x{}",
                    sps.seq_parameter_set_id,
                    range.start,
                    sps.profile_idc,
                    sps.level_idc,
                    sps.cropped_width(),
                    sps.cropped_height()
                );
                UnitOutcome::Sps(sps)
            }
            Err(err) => {
                warn!("Failed to parse SPS at byte {}: {}", range.start, err);
                UnitOutcome::SpsFailed(err)
            }
        }
    }
}

impl Iterator for ParseSession {
    type Item = UnitReport;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.buffer.is_empty() {
            debug!("Empty input, nothing to parse");
            self.terminal = Some(SessionError::EmptyInput);
            self.done = true;
            return None;
        }

        if self
            .config
            .max_units
            .is_some_and(|max| self.units_emitted >= max)
        {
            debug!("Unit limit of {} reached", self.units_emitted);
            self.done = true;
            return None;
        }

        loop {
            let Some(step) = self.next_step() else {
                self.done = true;
                return None;
            };

            match step {
                ScanStep::LeadingMarker { marker, skipped } => {
                    if skipped > 0 {
                        debug!("Skipped {} bytes before the start code at {}", skipped, marker.offset);
                    }
                }
                ScanStep::Unit(range) | ScanStep::Trailing(range) => {
                    if let Some(report) = self.report(range) {
                        return Some(report);
                    }
                }
                ScanStep::NoSeparator { residual: None } => {
                    warn!("No start code in {} bytes of input", self.buffer.len());
                    self.terminal = Some(SessionError::NoSeparatorFound(self.buffer.len()));
                }
                ScanStep::NoSeparator {
                    residual: Some(range),
                } => {
                    debug!("Dropping {} trailing bytes at {}", range.len(), range.start);
                    self.dropped_trailing = Some(range);
                }
            }
        }
    }
}
