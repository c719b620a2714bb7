//! Demo submitting a SAR generation job and checking its status once

use sar_client_rust_sdk::config::{ClientConfig, DEFAULT_BASE_URL};
use sar_client_rust_sdk::generation::{Client, GenerateRequest};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let base_url = std::env::var("SAR_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut config = ClientConfig::new(base_url);
    if let Ok(api_key) = std::env::var("SAR_API_KEY") {
        config = config.with_api_key(api_key);
    }
    let client = Client::new(config)?;

    let request = GenerateRequest::new(
        json!({
            "customer_id": "CUST-TEST-001",
            "name": "Test Company Pvt Ltd",
            "account_number": "ACC-IN-12345",
            "risk_rating": "HIGH",
            "kyc_status": "VERIFIED"
        }),
        vec![json!({
            "transaction_id": "TXN-001",
            "amount": 1500000.0,
            "currency": "INR",
            "timestamp": "2023-01-01T10:00:00Z",
            "sender_account": "ACC-IN-12345",
            "receiver_account": "ACC-EXT-999",
            "transaction_type": "NEFT"
        })],
        vec![],
    )
    .with_region("IND")
    .with_typology("Test Structuring");

    println!("Submitting SAR generation job to {}", client.base_url());

    let submitted = match client.generate_sar(&request).await {
        Ok(submitted) => submitted,
        Err(e) => {
            eprintln!("Submission failed: {}", e);
            return Ok(());
        }
    };
    println!("Job {} {}: {}", submitted.job_id, submitted.status, submitted.message);

    match client.get_job_status(&submitted.job_id).await {
        Ok(status) => println!("{}", status),
        Err(e) => eprintln!("Status check failed: {}", e),
    }

    Ok(())
}
