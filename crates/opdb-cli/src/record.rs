//! UniProt record handling
//!
//! Parses the `DR   PDB;` cross-reference lines of a plain-text UniProt
//! record and selects the best structure among them. Both operations are
//! pure; all network access lives in [`crate::client`].

use opdb_common::{OpdbError, Result};
use serde::{Deserialize, Serialize};

/// Fixed prefix of a PDB cross-reference line in a UniProt record
pub const PDB_XREF_PREFIX: &str = "DR   PDB; ";

/// Field delimiter within a cross-reference line
const FIELD_DELIMITER: &str = "; ";

/// One PDB structure entry cross-referenced by a UniProt record
///
/// Example source line:
///
/// ```text
/// DR   PDB; 1ABC; X-ray; 2.50 A; A/B=10-159.
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdbCrossReference {
    /// 4-character PDB identifier
    pub pdb_id: String,

    /// Experimental method (X-ray, NMR, EM, ...)
    pub method: String,

    /// Resolution in Ångström; None for methods without one (e.g. NMR)
    pub resolution: Option<f64>,

    /// Inclusive residue span covered by the structure
    pub residue_span: (u32, u32),

    /// Raw chain/range specification, e.g. "A/B=10-159"
    pub chain_spec: String,
}

impl PdbCrossReference {
    /// Number of residues covered by the structure
    pub fn resolved_length(&self) -> u32 {
        let (start, end) = self.residue_span;
        end - start + 1
    }
}

/// Whether a record line is a PDB cross-reference
pub fn is_cross_reference(line: &str) -> bool {
    line.starts_with(PDB_XREF_PREFIX)
}

/// Parse one PDB cross-reference line into a [`PdbCrossReference`]
///
/// The line is `"; "`-delimited: prefix, PDB ID, method, resolution token,
/// chain/range spec. A `-` resolution token means the method has no
/// resolution value. Only the first `=`-separated range of the chain spec
/// contributes to the residue span; non-digit characters inside each bound
/// are stripped before conversion, which tolerates the trailing `.` record
/// terminator and stray formatting.
pub fn parse_cross_reference(line: &str) -> Result<PdbCrossReference> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
    if fields.len() < 5 {
        return Err(OpdbError::parse(format!(
            "expected 5 '; '-delimited fields, got {}: {:?}",
            fields.len(),
            line
        )));
    }

    let pdb_id = fields[1].to_string();
    let method = fields[2].to_string();

    let resolution = match fields[3].split(' ').next().unwrap_or_default() {
        "-" => None,
        token => Some(token.parse::<f64>().map_err(|_| {
            OpdbError::parse(format!("invalid resolution token: {:?}", token))
        })?),
    };

    let chain_spec = fields[4].trim_end_matches('.').to_string();
    let (_, range) = chain_spec.split_once('=').ok_or_else(|| {
        OpdbError::parse(format!("chain spec has no '=' range: {:?}", chain_spec))
    })?;
    let (start, end) = range.split_once('-').ok_or_else(|| {
        OpdbError::parse(format!("residue range has no '-' separator: {:?}", range))
    })?;
    let residue_span = (parse_bound(start)?, parse_bound(end)?);
    if residue_span.0 > residue_span.1 {
        return Err(OpdbError::parse(format!(
            "residue range is reversed: {:?}",
            range
        )));
    }

    Ok(PdbCrossReference {
        pdb_id,
        method,
        resolution,
        residue_span,
        chain_spec,
    })
}

/// Strip non-digit characters from a residue bound and convert it
fn parse_bound(bound: &str) -> Result<u32> {
    let digits: String = bound.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(OpdbError::parse(format!(
            "residue bound contains no digits: {:?}",
            bound
        )));
    }
    digits
        .parse()
        .map_err(|_| OpdbError::parse(format!("residue bound out of range: {:?}", bound)))
}

/// Select the best structure among the cross-references of one record
///
/// Folds left-to-right in record order. A candidate replaces the incumbent
/// when it resolves strictly more residues, or the same number at a strictly
/// lower (better) resolution. An absent resolution never wins a resolution
/// tie-break: coverage matters more than crystallographic precision, and a
/// structure with a known resolution beats an equal-coverage one without.
pub fn select_best<I>(candidates: I) -> Option<PdbCrossReference>
where
    I: IntoIterator<Item = PdbCrossReference>,
{
    candidates.into_iter().fold(None, |best, candidate| {
        let Some(incumbent) = best else {
            return Some(candidate);
        };
        if supersedes(&candidate, &incumbent) {
            Some(candidate)
        } else {
            Some(incumbent)
        }
    })
}

fn supersedes(candidate: &PdbCrossReference, incumbent: &PdbCrossReference) -> bool {
    if candidate.resolved_length() != incumbent.resolved_length() {
        return candidate.resolved_length() > incumbent.resolved_length();
    }
    match (candidate.resolution, incumbent.resolution) {
        (Some(c), Some(b)) => c < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
