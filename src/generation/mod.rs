//! Generation job client for the SAR generation service

mod client;
mod models;

pub use client::Client;
pub use models::{GenerateRequest, GenerateResponse, JobStatusResponse};

/// Job status constants
pub const JOB_STATUS_SUBMITTED: &str = "SUBMITTED";
pub const JOB_STATUS_PENDING: &str = "PENDING";
pub const JOB_STATUS_PROCESSING: &str = "PROCESSING";
pub const JOB_STATUS_COMPLETED: &str = "COMPLETED";
pub const JOB_STATUS_FAILED: &str = "FAILED";
