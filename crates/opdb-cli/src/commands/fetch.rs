//! `opdb fetch` command implementation
//!
//! Resolves one accession to its best structure, downloads the coordinate
//! file, and records the result in `result.csv`.

use crate::client::{PdbClient, UniprotClient};
use crate::report::{ReportRow, ReportWriter};
use opdb_common::Result;
use std::path::Path;
use tracing::{error, info};

/// Fetch the best structure for an accession into the output directory
///
/// The report always gets its header row. A data row is appended only when
/// a structure was both selected and downloaded; a failed download is
/// logged and leaves the report without a row for this accession. Only
/// filesystem and report-writing failures propagate to the caller.
pub async fn run(
    accession: &str,
    output: &str,
    uniprot_url: String,
    pdb_url: String,
) -> Result<()> {
    let output_dir = Path::new(output);
    let mut report = ReportWriter::create(output_dir)?;

    info!(accession = %accession, "resolving best structure");

    let uniprot = UniprotClient::new(uniprot_url)?;
    let Some(best) = uniprot.best_structure(accession).await else {
        info!(accession = %accession, "no structure found, report contains header only");
        return Ok(());
    };

    info!(
        accession = %accession,
        pdb_id = %best.pdb_id,
        length = best.resolved_length(),
        resolution = ?best.resolution,
        "selected best structure"
    );

    let pdb = PdbClient::new(pdb_url)?;
    match pdb.download(&best.pdb_id, output_dir).await {
        Ok(path) => {
            info!(path = %path.display(), "structure saved");
            report.append(&ReportRow::new(accession, &best))?;
        },
        Err(e) => {
            error!(pdb_id = %best.pdb_id, error = %e, "download failed, row not recorded");
        },
    }

    Ok(())
}
