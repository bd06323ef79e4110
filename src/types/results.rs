//! Typed shape of the evaluation results document

use serde::Deserialize;
use std::path::Path;

use super::{EvalcostError, Result};

/// Group label for records carrying no usable provider id
pub const UNKNOWN_PROVIDER: &str = "unknown-provider";

/// Top-level results document: `{ "results": { "results": [...] } }`
#[derive(Debug, Default, Deserialize)]
pub struct ResultsFile {
    #[serde(default)]
    pub results: Option<ResultsEnvelope>,
}

/// Inner envelope holding the record list
#[derive(Debug, Default, Deserialize)]
pub struct ResultsEnvelope {
    #[serde(default)]
    pub results: Vec<ResultRecord>,
}

/// One evaluation run: which provider served it and what it cost.
///
/// Every field may be absent or null in the source document. A `cost`
/// that is present but not a JSON number is a parse error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ResultRecord {
    #[serde(default)]
    pub provider: Option<ProviderRef>,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Provider reference embedded in a result record
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProviderRef {
    #[serde(default)]
    pub id: Option<String>,
}

impl ResultsFile {
    /// Load and parse a results document.
    ///
    /// Missing file and malformed JSON propagate as errors; there is no
    /// recovery path for either.
    pub fn load(path: &Path) -> Result<Self> {
        let mut bytes = std::fs::read(path)?;
        simd_json::from_slice(&mut bytes).map_err(|e| EvalcostError::Parse(e.to_string()))
    }

    /// All result records, or an empty slice when the envelope is absent
    pub fn records(&self) -> &[ResultRecord] {
        self.results
            .as_ref()
            .map(|envelope| envelope.results.as_slice())
            .unwrap_or(&[])
    }
}

impl ResultRecord {
    /// Provider id, with missing/null/empty falling back to [`UNKNOWN_PROVIDER`]
    pub fn provider_id(&self) -> &str {
        self.provider
            .as_ref()
            .and_then(|p| p.id.as_deref())
            .filter(|id| !id.is_empty())
            .unwrap_or(UNKNOWN_PROVIDER)
    }

    /// Recorded cost, with missing/null falling back to 0.0
    pub fn cost_or_zero(&self) -> f64 {
        self.cost.unwrap_or(0.0)
    }
}
