//! Payroll policy file
//!
//! ```json
//! {
//!   "commission_employees": [
//!     { "email": "tanya@example.com",
//!       "tiers": [
//!         { "less_than": { "threshold": "2800", "percentage": "0.15" } },
//!         { "greater_than_or_equal": { "threshold": "2800", "percentage": "0.18" } }
//!       ] }
//!   ],
//!   "tip_exclusions": [ { "employee_id": 14018513, "weekday": "Sun" } ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{CommissionSalesStructure, TipExclusion};

/// Commission pay configuration for one employee, matched by email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionEmployeePolicy {
    pub email: String,
    pub tiers: CommissionSalesStructure,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub commission_employees: Vec<CommissionEmployeePolicy>,
    #[serde(default)]
    pub tip_exclusions: Vec<TipExclusion>,
}

impl Policy {
    /// Load the policy file; a missing file means an empty policy
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Policy file not found, no commission employees or tip exclusions");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|e| e.with_detail("path", path.display().to_string()))
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::config(format!("invalid policy file: {}", e)))
    }

    /// Commission tiers for `email` (case-insensitive)
    pub fn commission_for(&self, email: &str) -> Option<&CommissionSalesStructure> {
        let email = email.trim();
        self.commission_employees
            .iter()
            .find(|c| c.email.trim().eq_ignore_ascii_case(email))
            .map(|c| &c.tiers)
    }
}
