//! CSV export for simulation trace samples.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::Sample;

/// Schema v1 column header for CSV trace export.
const HEADER: &str = "step,time_hours,soc_percent,ocv_volts,terminal_volts,current_amps";

/// Exports a simulation trace to a CSV file at the given path.
///
/// Writes a header row followed by one data row per sample using the
/// schema v1 column layout. Produces deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(trace: &[Sample], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(trace, buf)
}

/// Writes a simulation trace as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(trace: &[Sample], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for s in trace {
        wtr.write_record(&[
            s.step.to_string(),
            format!("{:.6}", s.time_hours),
            format!("{:.6}", s.soc_percent),
            format!("{:.6}", s.ocv_volts),
            format!("{:.6}", s.terminal_volts),
            format!("{:.6}", s.current_amps),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
