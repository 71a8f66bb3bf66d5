use std::fmt::Write;

use h264::{NALUnitType, NalRange, SessionReport, SpsRecord, UnitOutcome, UnitReport};
use serde::Serialize;

use crate::{cli::OutputFormat, error::Result};

#[derive(Serialize)]
struct ReportView<'a> {
    units: Vec<UnitView<'a>>,
    gop_lengths: &'a [u32],
    open_gop: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    dropped_trailing: Option<NalRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terminal: Option<String>,
}

#[derive(Serialize)]
struct UnitView<'a> {
    index: usize,
    start: usize,
    end: usize,
    nal_unit_type: NALUnitType,
    nal_ref_idc: u8,
    forbidden_zero_bit: bool,
    #[serde(flatten)]
    outcome: OutcomeView<'a>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum OutcomeView<'a> {
    Sps {
        sps: &'a SpsRecord,
        width: u64,
        height: u64,
        cropped_width: u64,
        cropped_height: u64,
    },
    SpsFailed {
        error: String,
    },
    Idr {
        finished_gop: Option<u32>,
    },
    NonIdr {
        gop_length: u32,
    },
    Ignored,
}

impl<'a> From<&'a UnitReport> for UnitView<'a> {
    fn from(unit: &'a UnitReport) -> Self {
        let outcome = match &unit.outcome {
            UnitOutcome::Sps(sps) => OutcomeView::Sps {
                sps,
                width: sps.width(),
                height: sps.height(),
                cropped_width: sps.cropped_width(),
                cropped_height: sps.cropped_height(),
            },
            UnitOutcome::SpsFailed(err) => OutcomeView::SpsFailed {
                error: err.to_string(),
            },
            UnitOutcome::Idr { finished_gop } => OutcomeView::Idr {
                finished_gop: *finished_gop,
            },
            UnitOutcome::NonIdr { gop_length } => OutcomeView::NonIdr {
                gop_length: *gop_length,
            },
            UnitOutcome::Ignored => OutcomeView::Ignored,
        };

        Self {
            index: unit.index,
            start: unit.range.start,
            end: unit.range.end,
            nal_unit_type: unit.header.nal_unit_type,
            nal_ref_idc: unit.header.nal_ref_idc,
            forbidden_zero_bit: unit.header.forbidden_zero_bit,
            outcome,
        }
    }
}

pub struct OutputManager {
    all_units: bool,
}

impl OutputManager {
    pub fn new(all_units: bool) -> Self {
        Self { all_units }
    }

    pub fn format_report(&self, report: &SessionReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.format_pretty(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::view(report))?),
            OutputFormat::JsonCompact => Ok(serde_json::to_string(&Self::view(report))?),
        }
    }

    fn view(report: &SessionReport) -> ReportView<'_> {
        ReportView {
            units: report.units.iter().map(UnitView::from).collect(),
            gop_lengths: &report.gop_lengths,
            open_gop: report.open_gop,
            dropped_trailing: report.dropped_trailing,
            terminal: report.terminal.map(|err| err.to_string()),
        }
    }

    fn format_pretty(&self, report: &SessionReport) -> String {
        let mut output = String::new();

        if let Some(terminal) = report.terminal {
            let _ = writeln!(output, "Nothing to parse: {terminal}");
            return output;
        }

        let _ = writeln!(
            output,
            "NAL units: {} (SPS: {}, failed SPS: {})",
            report.units.len(),
            report.sps_records().count(),
            report.sps_failures().count()
        );

        for unit in &report.units {
            match &unit.outcome {
                UnitOutcome::Sps(sps) => format_sps(&mut output, unit, sps),
                UnitOutcome::SpsFailed(err) => {
                    let _ = writeln!(
                        output,
                        "\nSPS at byte {} could not be parsed: {err}",
                        unit.range.start
                    );
                }
                _ if self.all_units => {
                    let _ = writeln!(
                        output,
                        "  #{:<5} {:>10}..{:<10} {:?}",
                        unit.index, unit.range.start, unit.range.end, unit.header.nal_unit_type
                    );
                }
                _ => {}
            }
        }

        if !report.gop_lengths.is_empty() || report.open_gop > 0 {
            let _ = writeln!(
                output,
                "\nGOPs: {:?} (open: {})",
                report.gop_lengths, report.open_gop
            );
        }

        if let Some(range) = report.dropped_trailing {
            let _ = writeln!(
                output,
                "Dropped {} trailing bytes at {}",
                range.len(),
                range.start
            );
        }

        output
    }
}

fn format_sps(output: &mut String, unit: &UnitReport, sps: &SpsRecord) {
    let _ = writeln!(
        output,
        "\nSPS {} at byte {}",
        sps.seq_parameter_set_id, unit.range.start
    );
    let _ = writeln!(
        output,
        "  Profile: {} ({}), level {}.{}",
        sps.profile_idc,
        profile_name(sps.profile_idc),
        sps.level_idc / 10,
        sps.level_idc % 10
    );

    if let Some(chroma) = &sps.chroma_info {
        let _ = writeln!(
            output,
            "  Chroma format: {}, bit depth {}/{}",
            chroma.chroma_format_idc,
            u64::from(chroma.bit_depth_luma_minus8) + 8,
            u64::from(chroma.bit_depth_chroma_minus8) + 8
        );
    }

    let _ = writeln!(
        output,
        "  Resolution: {}x{} (coded {}x{})",
        sps.cropped_width(),
        sps.cropped_height(),
        sps.width(),
        sps.height()
    );
    let _ = writeln!(output, "  Picture order count type: {}", sps.pic_order_cnt_type());
    let _ = writeln!(output, "  Reference frames: {}", sps.max_num_ref_frames);
    let _ = writeln!(
        output,
        "  Frames only: {}, VUI present: {}",
        sps.frame_mbs_only_flag, sps.vui_parameters_present_flag
    );
}

fn profile_name(profile_idc: u8) -> &'static str {
    match profile_idc {
        66 => "Baseline",
        77 => "Main",
        88 => "Extended",
        100 => "High",
        110 => "High 10",
        122 => "High 4:2:2",
        244 => "High 4:4:4 Predictive",
        44 => "CAVLC 4:4:4 Intra",
        83 | 86 => "Scalable",
        118 | 128 => "Multiview",
        _ => "Unknown",
    }
}
