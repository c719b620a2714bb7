//! Generation client implementation

use reqwest::header::HeaderMap;
use reqwest::{Client as HttpClient, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use crate::config::ClientConfig;
use crate::error::{Operation, RemoteCallError, Result};
use super::models::{GenerateRequest, GenerateResponse, JobStatusResponse};

/// Client for submitting generation jobs and checking their status
///
/// The header set is computed once at construction and reused for every
/// call. Clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    headers: HeaderMap,
    http_client: HttpClient,
}

impl Client {
    /// Creates a new generation client
    ///
    /// No request is made and the base URL is not validated here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sar_client_rust_sdk::config::ClientConfig;
    /// use sar_client_rust_sdk::generation::Client;
    ///
    /// let config = ClientConfig::new("http://localhost:8000/api/v1").with_api_key("my-key");
    /// let client = Client::new(config).unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8000/api/v1");
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        let headers = config.request_headers()?;
        let http_client = HttpClient::builder().build()?;

        Ok(Self {
            base_url: config.base_url,
            headers,
            http_client,
        })
    }

    /// The base URL every endpoint is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The headers attached to every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Submits a generation job
    ///
    /// `data` is serialized as the JSON request body without any validation
    /// of its shape. On success the decoded response body is returned as-is.
    ///
    /// # Errors
    ///
    /// A non-success status yields [`RemoteCallError`] with the message
    /// `Error {status}: {detail}`. Transport failures surface as
    /// [`SdkError::Http`](crate::error::SdkError::Http).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sar_client_rust_sdk::config::ClientConfig;
    /// use sar_client_rust_sdk::generation::Client;
    /// use serde_json::json;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new(ClientConfig::default())?;
    /// let response = client.submit_generation(&json!({
    ///     "customer": {"customer_id": "CUST-001"},
    ///     "transactions": [],
    ///     "alerts": []
    /// })).await?;
    /// println!("Job ID: {}", response["job_id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_generation<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let url = format!("{}/generation/generate", self.base_url);
        let body = serde_json::to_vec(data)?;

        log::debug!("POST {}", url);
        let response = self.http_client
            .post(&url)
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await?;

        decode_response(response, Operation::Generate).await
    }

    /// Fetches the status of a previously submitted job
    ///
    /// # Errors
    ///
    /// A non-success status yields [`RemoteCallError`] with the message
    /// `Status Check Error {status}: {detail}`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sar_client_rust_sdk::config::ClientConfig;
    /// use sar_client_rust_sdk::generation::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new(ClientConfig::default())?;
    /// let status = client.get_status("job-123").await?;
    /// println!("Status: {}", status["status"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_status(&self, job_id: &str) -> Result<Value> {
        let url = format!("{}/generation/status/{}", self.base_url, job_id);

        log::debug!("GET {}", url);
        let response = self.http_client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        decode_response(response, Operation::StatusCheck).await
    }

    /// Submits a typed SAR generation request
    ///
    /// Same wire behavior as [`Client::submit_generation`], with the
    /// acknowledgement decoded into a [`GenerateResponse`].
    pub async fn generate_sar(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let value = self.submit_generation(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetches a job status decoded into a [`JobStatusResponse`]
    pub async fn get_job_status(&self, job_id: &str) -> Result<JobStatusResponse> {
        let value = self.get_status(job_id).await?;
        Ok(serde_json::from_value(value)?)
    }
}

async fn decode_response(response: Response, operation: Operation) -> Result<Value> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<Value>().await?);
    }
    let status_text = status_text(&response);

    // Intentional: an unreadable or non-JSON error body becomes an empty
    // object so the caller always gets a status-based error, never a decode error.
    let body = match response.json::<Value>().await {
        Ok(body) => body,
        Err(e) => {
            log::debug!("Could not decode error body for status {}: {}", status, e);
            Value::Object(Map::new())
        }
    };

    let error = RemoteCallError::from_body(
        operation,
        status.as_u16(),
        &status_text,
        &body,
    );
    log::warn!("{}", error);
    Err(error.into())
}

/// Reason phrase from the status line. hyper only keeps it when it differs
/// from the standard phrase for the code.
fn status_text(response: &Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response.status().canonical_reason().unwrap_or("").to_string(),
    }
}
