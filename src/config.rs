//! Static document text, overridable from a JSON file

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::*;

/// Fixed text the assembler places around the computed table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Title shown at the top of the bill
    pub title: String,
    /// Label above the recipient name
    pub recipient_label: String,
    /// Currency label used in the narrative before the assessable value
    pub currency_label: String,
    /// Issuer name, printed bold in the signature block
    pub issuer_name: String,
    /// Lines printed under the issuer name
    pub issuer_lines: Vec<String>,
    /// File stem used when the bill number is empty
    pub default_file_stem: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            title: "BILL".to_string(),
            recipient_label: "To".to_string(),
            currency_label: "TK.".to_string(),
            issuer_name: "Divine Logistic Ltd.".to_string(),
            issuer_lines: vec![
                String::new(),
                "Md. Saiful Islam".to_string(),
                "Mob. 01719537893".to_string(),
            ],
            default_file_stem: "bill".to_string(),
        }
    }
}

impl AssemblerConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> InvoiceResult<Self> {
        serde_json::from_str(json).map_err(|e| InvoiceError::Config(e.to_string()))
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> InvoiceResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| InvoiceError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "assembler config loaded");
        Ok(config)
    }
}
