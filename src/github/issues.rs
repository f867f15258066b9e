//! Create GitHub issues via the REST API.

use serde::{Deserialize, Serialize};

use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// A fully derived request to open one issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssueRequest {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: String,
}

/// A successfully created GitHub issue.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    /// Issue number within the repository.
    pub number: u64,
    /// HTML URL of the created issue.
    pub html_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateIssueError {
    /// Any response status other than 201.
    #[error("{status} - {message}")]
    Api { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("JSON error: {0}")]
    Json(String),
}

#[derive(Clone, Debug, Serialize)]
struct IssueCreatePayload<'a> {
    title: &'a str,
    body: &'a str,
}

/// Client for the issues endpoint of one GitHub-compatible host.
#[derive(Clone, Debug)]
pub struct GithubClient {
    base_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// POST the issue. Only HTTP 201 counts as success; no retries.
    pub fn create_issue(&self, request: &IssueRequest) -> Result<CreatedIssue, CreateIssueError> {
        let url = format!(
            "{}/repos/{}/{}/issues",
            self.base_url, request.owner, request.repo
        );
        let payload = IssueCreatePayload {
            title: &request.title,
            body: &request.body,
        };
        let req = http_client::agent()
            .post(&url)
            .set("User-Agent", "feedback-pane")
            .set("Accept", "application/vnd.github+json")
            .set("Authorization", &format!("Bearer {}", self.token));

        let response = match req.send_json(&payload) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = read_body(response).unwrap_or_else(|err| err);
                return Err(CreateIssueError::Api {
                    status: code,
                    message: error_message(&body),
                });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(CreateIssueError::Transport(err.to_string()));
            }
        };

        let status = response.status();
        let body = read_body(response).map_err(CreateIssueError::Json)?;
        if status != 201 {
            return Err(CreateIssueError::Api {
                status,
                message: error_message(&body),
            });
        }
        serde_json::from_str::<CreatedIssue>(&body)
            .map_err(|err| CreateIssueError::Json(err.to_string()))
    }
}

/// GitHub error payloads carry a human-readable `message` field.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(payload) = serde_json::from_str::<ErrorPayload>(trimmed) {
        if let Some(message) = payload.message {
            return message;
        }
    }
    if trimmed.is_empty() {
        "No response body".to_string()
    } else {
        trimmed.to_string()
    }
}

fn read_body(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
