//! Typed payloads for the generation endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::{JOB_STATUS_COMPLETED, JOB_STATUS_FAILED};

/// SAR generation job request
///
/// Customer, transaction and alert records are passed through as-is; the
/// service owns their schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub customer: Value,
    pub transactions: Vec<Value>,
    pub alerts: Vec<Value>,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub typology: Option<String>,
}

fn default_region() -> String {
    "US".to_string()
}

impl GenerateRequest {
    /// Creates a request for the default `US` region with no typology
    pub fn new(customer: Value, transactions: Vec<Value>, alerts: Vec<Value>) -> Self {
        Self {
            customer,
            transactions,
            alerts,
            region: default_region(),
            typology: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_typology(mut self, typology: impl Into<String>) -> Self {
        self.typology = Some(typology.into());
        self
    }
}

/// Acknowledgement returned when a job is queued
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GenerateResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

/// Job status snapshot
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl JobStatusResponse {
    /// True once the job has either completed or failed
    pub fn is_terminal(&self) -> bool {
        self.is_completed() || self.is_failed()
    }

    pub fn is_completed(&self) -> bool {
        self.status == JOB_STATUS_COMPLETED
    }

    pub fn is_failed(&self) -> bool {
        self.status == JOB_STATUS_FAILED
    }
}

impl std::fmt::Display for JobStatusResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Job {} (status: {}, progress: {}%)", self.job_id, self.status, self.progress)
    }
}
