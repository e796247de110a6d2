use serde_json::Value;

use crate::config::Config;
use crate::error::SubmitError;
use crate::payload::Submission;
use crate::signature;

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt(pub String);

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct SubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmissionClient {
    pub fn new(config: &Config) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SubmitError::Request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// POST an already-serialized body once. No retries.
    pub async fn submit(&self, body: Vec<u8>, signature: &str) -> Result<Receipt, SubmitError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header(signature::HEADER, signature)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let resp_body = resp.text().await?;

        tracing::debug!("Endpoint responded with {}", status.as_u16());

        if !status.is_success() {
            return Err(SubmitError::Http {
                status: status.as_u16(),
                body: resp_body,
            });
        }

        parse_receipt(&resp_body)
    }
}

/// Validate the endpoint's reply and pull out the receipt.
pub fn parse_receipt(body: &str) -> Result<Receipt, SubmitError> {
    let data: Value =
        serde_json::from_str(body).map_err(|_| SubmitError::NonJson(body.to_string()))?;

    let success = data.get("success").is_some_and(is_truthy);
    let receipt = data
        .get("receipt")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());

    match receipt {
        Some(receipt) if success => Ok(Receipt(receipt.to_string())),
        _ => Err(SubmitError::Unexpected(body.to_string())),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Build, sign and send the submission described by `config`.
pub async fn run(config: &Config) -> Result<Receipt, SubmitError> {
    let submission = Submission::now(config);
    let body = submission.to_canonical_json()?;
    let signature = signature::sign(&config.signing_secret, &body);

    tracing::debug!(
        repository_link = %submission.repository_link,
        action_run_link = %submission.action_run_link,
        "Submitting {} bytes to {}",
        body.len(),
        config.endpoint
    );

    let client = SubmissionClient::new(config)?;
    let receipt = client.submit(body, &signature).await?;

    tracing::info!("Submission accepted");

    Ok(receipt)
}
