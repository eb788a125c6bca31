//! HTTP clients for UniProt and the PDB repository
//!
//! Thin wrappers over `reqwest` for the two external collaborators: the
//! UniProt host serving plain-text records and the PDB repository serving
//! coordinate files. No retries, no caching.

use crate::record::{self, PdbCrossReference};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use opdb_common::{OpdbError, Result};
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for HTTP requests in seconds.
/// Can be overridden via OPDB_HTTP_TIMEOUT_SECS environment variable.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 300;

fn build_client() -> Result<Client> {
    let timeout_secs = std::env::var("OPDB_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Client for fetching plain-text UniProt records
pub struct UniprotClient {
    client: Client,
    base_url: String,
}

impl UniprotClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: String) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url,
        })
    }

    /// Fetch the plain-text record for an accession
    pub async fn fetch_record(&self, accession: &str) -> Result<String> {
        let url = format!("{}/uniprot/{}.txt", self.base_url, accession);
        debug!(url = %url, "fetching UniProt record");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(OpdbError::retrieval(url, response.status().as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Resolve the best structure cross-referenced by an accession
    ///
    /// Retrieval failures are downgraded to `None` with a warning; the run
    /// continues without a structure. A cross-reference line that fails to
    /// parse is skipped with a diagnostic rather than aborting the
    /// accession.
    pub async fn best_structure(&self, accession: &str) -> Option<PdbCrossReference> {
        let text = match self.fetch_record(accession).await {
            Ok(text) => text,
            Err(e) => {
                warn!(accession = %accession, error = %e, "failed to retrieve UniProt record");
                return None;
            },
        };

        let candidates = text
            .lines()
            .filter(|line| record::is_cross_reference(line))
            .filter_map(|line| match record::parse_cross_reference(line) {
                Ok(xref) => Some(xref),
                Err(e) => {
                    warn!(line = %line, error = %e, "skipping malformed cross-reference line");
                    None
                },
            });

        record::select_best(candidates)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Client for downloading coordinate files from the PDB repository
pub struct PdbClient {
    client: Client,
    base_url: String,
}

impl PdbClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: String) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url,
        })
    }

    /// Download `<pdb_id>.pdb` into the output directory
    ///
    /// The body is written verbatim; no checksum or content validation.
    /// Returns the path of the written file.
    pub async fn download(&self, pdb_id: &str, output_dir: &Path) -> Result<PathBuf> {
        let url = format!("{}/download/{}.pdb", self.base_url, pdb_id);
        debug!(url = %url, "downloading structure");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(OpdbError::retrieval(url, response.status().as_u16()));
        }

        std::fs::create_dir_all(output_dir)?;
        let output_path = output_dir.join(format!("{}.pdb", pdb_id));

        let total_size = response.content_length().unwrap_or(0);
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(format!("Downloading {}.pdb", pdb_id));

        let mut file = std::fs::File::create(&output_path)?;
        let mut downloaded = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }

        pb.finish_with_message(format!("Downloaded {}.pdb", pdb_id));

        Ok(output_path)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let uniprot = UniprotClient::new("http://localhost:8000".to_string()).unwrap();
        assert_eq!(uniprot.base_url(), "http://localhost:8000");

        let pdb = PdbClient::new("http://localhost:8001".to_string()).unwrap();
        assert_eq!(pdb.base_url(), "http://localhost:8001");
    }

    #[tokio::test]
    async fn test_best_structure_picks_longest_entry() {
        let server = MockServer::start().await;
        let body = "\
ID   TEST_HUMAN              Reviewed;         150 AA.
DR   PDB; 1AAA; X-ray; 1.20 A; A=1-100.
DR   PDB; 2BBB; X-ray; 2.80 A; A/B=1-150.
DR   PDBsum; 1AAA; -.
";
        Mock::given(method("GET"))
            .and(path("/uniprot/P99999.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = UniprotClient::new(server.uri()).unwrap();
        let best = client.best_structure("P99999").await.unwrap();
        assert_eq!(best.pdb_id, "2BBB");
        assert_eq!(best.resolved_length(), 150);
        assert_eq!(best.chain_spec, "A/B=1-150");
    }

    #[tokio::test]
    async fn test_best_structure_skips_malformed_line() {
        let server = MockServer::start().await;
        let body = "\
DR   PDB; 1AAA; X-ray; garbage; A=1-100.
DR   PDB; 2BBB; NMR; -; A=1-80.
";
        Mock::given(method("GET"))
            .and(path("/uniprot/P99999.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = UniprotClient::new(server.uri()).unwrap();
        let best = client.best_structure("P99999").await.unwrap();
        assert_eq!(best.pdb_id, "2BBB");
    }

    #[tokio::test]
    async fn test_best_structure_skips_reversed_range_line() {
        let server = MockServer::start().await;
        let body = "\
DR   PDB; 9REV; X-ray; 1.00 A; A=159-10.
DR   PDB; 2BBB; X-ray; 2.80 A; A=1-100.
";
        Mock::given(method("GET"))
            .and(path("/uniprot/P99999.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = UniprotClient::new(server.uri()).unwrap();
        let best = client.best_structure("P99999").await.unwrap();
        assert_eq!(best.pdb_id, "2BBB");
        assert_eq!(best.resolved_length(), 100);
    }

    #[tokio::test]
    async fn test_best_structure_downgrades_retrieval_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uniprot/BOGUS.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = UniprotClient::new(server.uri()).unwrap();
        assert!(client.best_structure("BOGUS").await.is_none());
    }

    #[tokio::test]
    async fn test_download_writes_body_verbatim() {
        let server = MockServer::start().await;
        let body = "HEADER    TEST STRUCTURE\nATOM      1  N   MET A   1\nEND\n";
        Mock::given(method("GET"))
            .and(path("/download/1AAA.pdb"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let client = PdbClient::new(server.uri()).unwrap();
        let path = client.download("1AAA", dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join("1AAA.pdb"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_download_non_success_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download/9ZZZ.pdb"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let client = PdbClient::new(server.uri()).unwrap();
        let err = client.download("9ZZZ", dir.path()).await.unwrap_err();
        assert!(matches!(err, OpdbError::Retrieval { status: 404, .. }));
        assert!(!dir.path().join("9ZZZ.pdb").exists());
    }
}
