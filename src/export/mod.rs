//! CSV export of due records
//!
//! One flat row per (vehicle, service type, dimension), matching the shape
//! dashboard tables render.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::DueRecord;

/// Write due records to a CSV file
pub fn export_due_records(path: &Path, records: &[DueRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, records)
}

/// Write due records to any writer
pub fn export_due_records_to_writer<W: Write>(writer: W, records: &[DueRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    write_records(&mut writer, records)
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, records: &[DueRecord]) -> Result<()> {
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
