//! Client for the Supabase Management API's SQL query endpoint.
//!
//! Every statement goes through `POST /projects/{ref}/database/query` with a
//! bearer access token. Exactly HTTP 200 counts as success; anything else,
//! including transport failures, is an error the caller tallies.

use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },
}

#[derive(Clone)]
pub struct ManagementApi {
    client: reqwest::Client,
    api_base: String,
    access_token: String,
    project_ref: String,
}

impl ManagementApi {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            project_ref: config.project_ref.clone(),
        }
    }

    fn query_url(&self) -> String {
        format!(
            "{}/projects/{}/database/query",
            self.api_base, self.project_ref
        )
    }

    /// Executes one SQL statement, returning the response rows on success.
    pub async fn execute(&self, statement: &str) -> Result<serde_json::Value, QueryError> {
        let response = self
            .client
            .post(self.query_url())
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({ "query": statement }))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null));
        }

        let body = response.text().await.unwrap_or_default();
        Err(QueryError::HttpStatus {
            status,
            message: extract_error_message(&body),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Prefers the structured `message` field of an error body, falling back to
/// the raw body text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_structured_message_field() {
        let body = r#"{"message": "relation \"users\" already exists"}"#;
        assert_eq!(
            extract_error_message(body),
            "relation \"users\" already exists"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(extract_error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn json_without_message_falls_back_to_raw_body() {
        let body = r#"{"error": "bad request"}"#;
        assert_eq!(extract_error_message(body), body);
    }
}
