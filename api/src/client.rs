//! Remote task store client implementation

use crate::{
    error::ApiError,
    types::{NewTask, Task},
};
use reqwest::Client;

/// Environment variable naming the remote store's base URL
pub const BASE_URL_ENV: &str = "TASKS_API_URL";

/// HTTP client for the remote task store
///
/// The client performs exactly two operations against one configured base
/// URL: list the collection and create a record. Failures are never retried
/// here; they propagate immediately so the caller decides how local state
/// reacts.
#[derive(Clone)]
pub struct TasksClient {
    client: Client,
    base_url: String,
}

impl TasksClient {
    /// Create a new client with the base URL from the environment
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingBaseUrl`] if `TASKS_API_URL` is not set.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| ApiError::MissingBaseUrl)?;

        Ok(Self::new(base_url))
    }

    /// Create a new client with an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full remote task collection
    ///
    /// A JSON `null` or blank body counts as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport errors or a non-success
    /// status, [`ApiError::Decode`] if the body cannot be parsed.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Network(format!(
                "server returned status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let tasks: Option<Vec<Task>> =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(tasks.unwrap_or_default())
    }

    /// Create a task on the remote store
    ///
    /// The returned record carries the server-assigned identifier; that
    /// identifier is authoritative and must be used for local insertion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport errors or a non-success
    /// status, [`ApiError::Decode`] if the body cannot be parsed.
    pub async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("content-type", "application/json")
            .json(&NewTask::new(title))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Network(format!(
                "server returned status {status}"
            )));
        }

        response
            .json::<Task>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TasksClient::new("http://localhost:8080/tasks");
        assert_eq!(client.base_url, "http://localhost:8080/tasks");
    }
}
