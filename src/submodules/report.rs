use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::type_lib::NumericData;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed numeric line '{0}'")]
    MalformedLine(String),
}

/// One completed grid point: composition coordinates plus the two derived
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub index: usize,
    pub cr: NumericData,
    pub co: NumericData,
    pub c_n: NumericData,
    pub hcs: NumericData,
    pub grf: NumericData,
}

/// Appends one line per record to two flat files: a human-readable summary
/// and a comma-delimited numeric log.
pub struct ReportWriter {
    summary_path: PathBuf,
    numeric_path: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: &Path) -> Self {
        ReportWriter {
            summary_path: output_dir.join("scheil_curve_calculation.txt"),
            numeric_path: output_dir.join("scheil_curve_calculation_numerical_results.txt"),
        }
    }

    pub fn append(&self, record: &SweepRecord) -> Result<(), ReportError> {
        let mut summary = OpenOptions::new().append(true).create(true).open(&self.summary_path)?;
        writeln!(summary, "{}", ReportWriter::format_summary_line(record))?;

        let mut numeric = OpenOptions::new().append(true).create(true).open(&self.numeric_path)?;
        writeln!(numeric, "{}", ReportWriter::format_numeric_line(record))?;
        Ok(())
    }

    pub fn format_summary_line(record: &SweepRecord) -> String {
        format!(
            "Index: {}, X(Cr)={:.2} , X(Co)={:.2} , X(C/N)={:.4} , Hot cracking susceptibility (HCS) = {:.4}, Growth restriction factor (GRF)= {:.4}",
            record.index, record.cr, record.co, record.c_n, record.hcs, record.grf
        )
    }

    pub fn format_numeric_line(record: &SweepRecord) -> String {
        format!(
            "{}, {:.2}, {:.2}, {:.4}, {:.4}, {:.4}",
            record.index, record.cr, record.co, record.c_n, record.hcs, record.grf
        )
    }

    pub fn parse_numeric_line(line: &str) -> Result<SweepRecord, ReportError> {
        let malformed = || ReportError::MalformedLine(line.to_owned());
        let fields: Vec<&str> = line.split(',').map(|field| field.trim()).collect();
        if fields.len() != 6 {
            return Err(malformed());
        }
        Ok(SweepRecord {
            index: fields[0].parse().map_err(|_| malformed())?,
            cr: fields[1].parse().map_err(|_| malformed())?,
            co: fields[2].parse().map_err(|_| malformed())?,
            c_n: fields[3].parse().map_err(|_| malformed())?,
            hcs: fields[4].parse().map_err(|_| malformed())?,
            grf: fields[5].parse().map_err(|_| malformed())?,
        })
    }
}

/// Serializes any value to a JSON file, one file per dump.
pub fn dump_json<T: Serialize + ?Sized>(item: &T, path: &Path) -> Result<(), ReportError> {
    let mut file = std::fs::File::create(path)?;
    let json = serde_json::to_string(item)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SweepRecord {
        SweepRecord {
            index: 7,
            cr: 12.25,
            co: 1.5,
            c_n: 0.2,
            hcs: 0.625,
            grf: 50.0,
        }
    }

    #[test]
    fn numeric_line_round_trips_within_tolerance() {
        let original = record();
        let line = ReportWriter::format_numeric_line(&original);
        let parsed = ReportWriter::parse_numeric_line(&line).unwrap();
        assert_eq!(parsed.index, original.index);
        assert!((parsed.hcs - original.hcs).abs() < 1e-4);
        assert!((parsed.grf - original.grf).abs() < 1e-4);
        assert!((parsed.cr - original.cr).abs() < 1e-2);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(matches!(
            ReportWriter::parse_numeric_line("1, 2.0, 3.0"),
            Err(ReportError::MalformedLine(_))
        ));
        assert!(matches!(
            ReportWriter::parse_numeric_line("a, 2.0, 3.0, 4.0, 5.0, 6.0"),
            Err(ReportError::MalformedLine(_))
        ));
    }

    #[test]
    fn append_grows_both_files_by_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());
        writer.append(&record()).unwrap();
        let mut second = record();
        second.index = 8;
        writer.append(&second).unwrap();

        let numeric = std::fs::read_to_string(dir.path().join("scheil_curve_calculation_numerical_results.txt")).unwrap();
        let lines: Vec<&str> = numeric.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(ReportWriter::parse_numeric_line(lines[1]).unwrap().index, 8);

        let summary = std::fs::read_to_string(dir.path().join("scheil_curve_calculation.txt")).unwrap();
        assert_eq!(summary.lines().count(), 2);
        assert!(summary.starts_with("Index: 7, X(Cr)=12.25"));
    }

    #[test]
    fn records_survive_a_json_dump() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let records = vec![record()];
        dump_json(&records, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let reloaded: Vec<SweepRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(reloaded, records);
    }
}
