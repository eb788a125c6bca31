//! CSV result report
//!
//! One `result.csv` per run: a fixed header row plus at most one data row
//! for the selected structure. Absence (an NMR structure with no resolution)
//! is an `Option` everywhere inside the program and becomes the literal
//! string `NULL` only here, at the serialization boundary.

use crate::record::PdbCrossReference;
use opdb_common::Result;
use std::fs::File;
use std::path::Path;

/// Report file name inside the output directory
pub const REPORT_FILE_NAME: &str = "result.csv";

/// Fixed header row
const HEADER: [&str; 5] = [
    "UniProt ID",
    "Best PDB ID",
    "PDB Length",
    "Resolution",
    "Chains",
];

/// Rendering of absent values in the CSV
const NULL_FIELD: &str = "NULL";

/// One data row of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub uniprot_id: String,
    pub pdb_id: String,
    pub resolved_length: u32,
    pub resolution: Option<f64>,
    pub chain_spec: String,
}

impl ReportRow {
    /// Build a row for an accession from the selected structure
    pub fn new(uniprot_id: &str, best: &PdbCrossReference) -> Self {
        Self {
            uniprot_id: uniprot_id.to_string(),
            pdb_id: best.pdb_id.clone(),
            resolved_length: best.resolved_length(),
            resolution: best.resolution,
            chain_spec: best.chain_spec.clone(),
        }
    }
}

/// Writer for the run's `result.csv`
pub struct ReportWriter {
    writer: csv::Writer<File>,
}

impl ReportWriter {
    /// Create `<output_dir>/result.csv` and write the header row
    ///
    /// An existing report from a previous run is overwritten.
    pub fn create(output_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(output_dir)?;
        let file = File::create(output_dir.join(REPORT_FILE_NAME))?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Append one data row
    pub fn append(&mut self, row: &ReportRow) -> Result<()> {
        let resolution = row
            .resolution
            .map_or_else(|| NULL_FIELD.to_string(), |r| r.to_string());
        let length = row.resolved_length.to_string();
        self.writer.write_record([
            row.uniprot_id.as_str(),
            row.pdb_id.as_str(),
            length.as_str(),
            resolution.as_str(),
            row.chain_spec.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_report(dir: &TempDir) -> String {
        std::fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap()
    }

    #[test]
    fn test_create_writes_header_only() {
        let dir = TempDir::new().unwrap();
        ReportWriter::create(dir.path()).unwrap();
        assert_eq!(
            read_report(&dir),
            "UniProt ID,Best PDB ID,PDB Length,Resolution,Chains\n"
        );
    }

    #[test]
    fn test_create_makes_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out");
        ReportWriter::create(&nested).unwrap();
        assert!(nested.join(REPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_append_row_with_resolution() {
        let dir = TempDir::new().unwrap();
        let mut writer = ReportWriter::create(dir.path()).unwrap();
        writer
            .append(&ReportRow {
                uniprot_id: "P01308".to_string(),
                pdb_id: "1ABC".to_string(),
                resolved_length: 150,
                resolution: Some(2.5),
                chain_spec: "A/B=10-159".to_string(),
            })
            .unwrap();

        let report = read_report(&dir);
        assert!(report.ends_with("P01308,1ABC,150,2.5,A/B=10-159\n"));
    }

    #[test]
    fn test_absent_resolution_renders_as_null() {
        let dir = TempDir::new().unwrap();
        let mut writer = ReportWriter::create(dir.path()).unwrap();
        writer
            .append(&ReportRow {
                uniprot_id: "P01308".to_string(),
                pdb_id: "2XYZ".to_string(),
                resolved_length: 100,
                resolution: None,
                chain_spec: "A=1-100".to_string(),
            })
            .unwrap();

        assert!(read_report(&dir).contains("P01308,2XYZ,100,NULL,A=1-100"));
    }
}
