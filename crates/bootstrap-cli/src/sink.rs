//! Writing trial results

use crate::config::OutputFormat;
use crate::error::Result;
use bootstrap_confidence::format_percent;
use bootstrap_trials::TrialReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `report` in the requested format
///
/// Text output has one line per trial interval, labelled with `label`,
/// followed by the total and average runtime in microseconds.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &TrialReport,
    label: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, report, label),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(writer: &mut W, report: &TrialReport, label: &str) -> Result<()> {
    for ci in &report.intervals {
        writeln!(
            writer,
            "{}% Confidence Interval for {}: [{:.2}, {:.2}]",
            format_percent(ci.confidence_level()),
            label,
            ci.lower,
            ci.upper
        )?;
    }
    writeln!(writer, "Total runtime: {}", report.summary.total_micros)?;
    writeln!(writer, "Average runtime: {:.3}", report.summary.average_micros)?;
    Ok(())
}

/// Create (or truncate) `path` and write the report to it
pub fn write_report_to_path<P: AsRef<Path>>(
    path: P,
    report: &TrialReport,
    label: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_report(&mut writer, report, label, format)?;
    writer.flush()?;
    Ok(())
}
