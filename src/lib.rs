//! # SAR Client Rust SDK
//!
//! This crate provides a Rust SDK for the SAR generation service. It wraps the
//! two job endpoints of the service: submitting a generation job and checking
//! the status of a submitted job.
//!
//! ## Features
//!
//! - **Opaque payloads**: Submit any JSON-serializable request and get the
//!   service response back untouched
//! - **Typed payloads**: Optional request/response models for SAR jobs
//! - **Uniform errors**: Non-success responses become a single
//!   [`RemoteCallError`] with a `"{prefix} {status}: {detail}"` message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sar_client_rust_sdk::config::ClientConfig;
//! use sar_client_rust_sdk::generation::Client;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://localhost:8000/api/v1").with_api_key("my-key");
//!     let client = Client::new(config)?;
//!
//!     let submitted = client.submit_generation(&json!({
//!         "customer": {"customer_id": "CUST-001"},
//!         "transactions": [],
//!         "alerts": [],
//!         "region": "US"
//!     })).await?;
//!
//!     let job_id = submitted["job_id"].as_str().unwrap_or_default();
//!     let status = client.get_status(job_id).await?;
//!     println!("Status: {}", status);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod generation;

pub use error::{Operation, RemoteCallError, Result, SdkError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::generation::{Client, GenerateRequest, GenerateResponse, JobStatusResponse};
    pub use crate::error::{RemoteCallError, Result, SdkError};
    pub use serde_json::{json, Value};
}
