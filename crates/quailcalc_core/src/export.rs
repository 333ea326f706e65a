//! Snapshot and CSV export formats.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::calculation::compute;
use crate::error::{ExportError, Result};
use crate::model::{FarmInputs, FarmResults};
use crate::sensitivity::{SensitivityResult, SweepVariable};

/// File name offered for the sensitivity export.
pub const SENSITIVITY_CSV_FILE_NAME: &str = "quail_sensitivity.csv";

/// File name used when a snapshot is saved instead of copied.
pub const SNAPSHOT_FILE_NAME: &str = "quail_snapshot.json";

const CSV_HEADER: [&str; 3] = ["type", "variable", "value"];

/// Inputs together with the results they produce.
///
/// Non-finite numbers serialize as JSON `null` and will not parse back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub inputs: FarmInputs,
    pub results: FarmResults,
}

impl Snapshot {
    pub fn new(inputs: FarmInputs) -> Self {
        Self {
            inputs,
            results: compute(&inputs),
        }
    }

    pub fn from_parts(inputs: FarmInputs, results: FarmResults) -> Self {
        Self { inputs, results }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One data row of the sensitivity CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub variable: SweepVariable,
    pub label: String,
    pub value: f64,
}

/// Write the header and all 27 sweep rows, one record per line.
pub fn write_sensitivity_csv<W: Write>(sensitivity: &SensitivityResult, writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for (variable, point) in sensitivity.iter_rows() {
        let value = point.value.to_string();
        writer.write_record([variable.csv_type(), point.label.as_str(), value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn sensitivity_csv_string(sensitivity: &SensitivityResult) -> Result<String> {
    let mut buf = Vec::new();
    write_sensitivity_csv(sensitivity, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Parse a document produced by [`write_sensitivity_csv`].
pub fn read_sensitivity_csv<R: Read>(reader: R) -> Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(ExportError::Header(headers.iter().collect::<Vec<_>>().join(",")));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let variable = SweepVariable::from_csv_type(&record[0]).ok_or_else(|| {
            ExportError::UnknownType {
                line,
                value: record[0].to_string(),
            }
        })?;
        let value = record[2].parse::<f64>().map_err(|_| ExportError::Value {
            line,
            value: record[2].to_string(),
        })?;

        rows.push(CsvRow {
            variable,
            label: record[1].to_string(),
            value,
        });
    }
    Ok(rows)
}
