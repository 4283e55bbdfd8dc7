use reqwest::StatusCode;
use thiserror::Error;

const MAX_BODY_CHARS: usize = 200;

/// Failures of a single list request
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid {name}: {value} (must be at least 1)")]
    InvalidParameter { name: &'static str, value: u32 },

    #[error("failed to reach {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn http_status(url: &str, status: StatusCode, body: &str) -> Self {
        Self::HttpStatus {
            url: url.to_string(),
            status,
            body: body.chars().take(MAX_BODY_CHARS).collect(),
        }
    }

    /// Status code of a non-2xx response, if that is what failed
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Add context to fetch errors at the binary boundary
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}
