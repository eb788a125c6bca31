//! opdb CLI Library
//!
//! Command-line tool that resolves a UniProt accession to the best
//! experimentally-determined PDB structure, downloads its coordinate file,
//! and records the result in a CSV report.
//!
//! # Overview
//!
//! - **Resolution**: parse the PDB cross-references of a UniProt record and
//!   pick the structure covering the most residues (`opdb fetch`)
//! - **Download**: save the chosen structure as `<output>/<pdb_id>.pdb`
//! - **Report**: append the choice to `<output>/result.csv`

pub mod client;
pub mod commands;
pub mod record;
pub mod report;

// Re-export commonly used types
pub use opdb_common::{OpdbError, Result};
pub use record::PdbCrossReference;

use clap::{Parser, Subcommand};

/// Default UniProt host serving plain-text records
pub const DEFAULT_UNIPROT_URL: &str = "https://www.uniprot.org";

/// Default PDB repository host serving coordinate files
pub const DEFAULT_PDB_URL: &str = "https://files.rcsb.org";

/// opdb - best-PDB-structure resolver for UniProt accessions
#[derive(Parser, Debug)]
#[command(name = "opdb")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// UniProt base URL
    #[arg(long, env = "OPDB_UNIPROT_URL", default_value = DEFAULT_UNIPROT_URL, global = true)]
    pub uniprot_url: String,

    /// PDB repository base URL
    #[arg(long, env = "OPDB_PDB_URL", default_value = DEFAULT_PDB_URL, global = true)]
    pub pdb_url: String,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an accession, download the best structure, write the report
    Fetch {
        /// UniProt accession (e.g. "P01308")
        accession: String,

        /// Output directory for the structure file and result.csv
        #[arg(short, long, default_value = "./pdb_files")]
        output: String,
    },
}
