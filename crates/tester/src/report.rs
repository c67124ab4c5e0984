//! Aggregate result of one validation run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalogcheck_products::{Product, ValidationError, validate_products};

/// The only status code accepted from the products endpoint.
pub const EXPECTED_STATUS: u16 = 200;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub status_code: u16,
    pub status_code_valid: bool,
    pub total_products: usize,
    pub defect_count: usize,
    pub defects: Vec<ValidationError>,
}

impl Report {
    /// Validate `products` and combine the defects with the transport status.
    pub fn build(
        url: impl Into<String>,
        status_code: u16,
        products: &[Product],
        timestamp: DateTime<Utc>,
    ) -> Self {
        let defects = validate_products(products);
        Self {
            timestamp,
            url: url.into(),
            status_code,
            status_code_valid: status_code == EXPECTED_STATUS,
            total_products: products.len(),
            defect_count: defects.len(),
            defects,
        }
    }

    pub fn has_defects(&self) -> bool {
        !self.defects.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
