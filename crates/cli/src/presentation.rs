// crates/cli/src/presentation.rs
use crate::config::Config;
use invalid_ids_engine::options::OutputFormat;
use invalid_ids_engine::stats::{RangeReport, RunResult};
use invalid_ids_shared_kernel::{IdSum, InvalidIdsError, Result};
use serde::Serialize;
use std::io::Write;

/// Machine-readable shape shared by the JSON and YAML outputs.
#[derive(Debug, Serialize)]
struct Summary {
    total: IdSum,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranges: Option<Vec<RangeEntry>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Serialize)]
struct RangeEntry {
    index: usize,
    range: String,
    windows: Vec<String>,
    sum: IdSum,
}

#[derive(Debug, Serialize)]
struct SkippedEntry {
    index: usize,
    segment: String,
    error: String,
}

impl From<&RangeReport> for RangeEntry {
    fn from(report: &RangeReport) -> Self {
        Self {
            index: report.index,
            range: report.range.to_string(),
            windows: report.windows.iter().map(ToString::to_string).collect(),
            sum: report.sum,
        }
    }
}

impl Summary {
    fn new(result: &RunResult, breakdown: bool) -> Self {
        Self {
            total: result.total,
            ranges: breakdown.then(|| result.reports.iter().map(RangeEntry::from).collect()),
            skipped: result
                .skipped
                .iter()
                .map(|e| SkippedEntry {
                    index: e.index,
                    segment: e.segment.clone(),
                    error: e.fault.to_string(),
                })
                .collect(),
        }
    }
}

/// Render `result` in the configured format.
///
/// # Errors
/// Returns an error if serialization or the write to `out` fails.
pub fn write_results<W: Write>(result: &RunResult, config: &Config, out: &mut W) -> Result<()> {
    match config.format {
        OutputFormat::Plain => write_plain(result, config.breakdown, out),
        OutputFormat::Json => {
            let summary = Summary::new(result, config.breakdown);
            let json = serde_json::to_string_pretty(&summary)?;
            writeln!(out, "{json}").map_err(write_error)
        }
        OutputFormat::Yaml => {
            let summary = Summary::new(result, config.breakdown);
            let yaml = serde_yaml::to_string(&summary)?;
            write!(out, "{yaml}").map_err(write_error)
        }
    }
}

fn write_plain<W: Write>(result: &RunResult, breakdown: bool, out: &mut W) -> Result<()> {
    if breakdown {
        write_table(result, out).map_err(write_error)
    } else {
        writeln!(out, "{}", result.total).map_err(write_error)
    }
}

fn write_table<W: Write>(result: &RunResult, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{:<28} {:>21}  WINDOWS", "RANGE", "SUM")?;
    writeln!(out, "{}", "-".repeat(64))?;
    for report in &result.reports {
        let windows = if report.windows.is_empty() {
            "-".to_string()
        } else {
            report
                .windows
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(
            out,
            "{:<28} {:>21}  {windows}",
            report.range.to_string(),
            report.sum
        )?;
    }
    writeln!(out, "---")?;
    for skipped in &result.skipped {
        writeln!(out, "skipped {skipped}")?;
    }
    writeln!(
        out,
        "TOTAL {} ({} ranges)",
        result.total,
        result.range_count()
    )
}

fn write_error(source: std::io::Error) -> InvalidIdsError {
    InvalidIdsError::OutputWrite { source }
}
