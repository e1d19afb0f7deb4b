use pulse_core::PulseError;
use thiserror::Error;

/// Message used when a failure carries no description of its own.
pub const FALLBACK_MESSAGE: &str = "Analysis failed";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Analysis failed: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("{0}")]
    Request(String),

    #[error("{0}")]
    Decode(String),

    #[error(transparent)]
    Input(#[from] PulseError),
}

impl ClientError {
    pub fn http(status: reqwest::StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        ClientError::Http {
            status: status.as_u16(),
            status_text,
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        ClientError::Request(describe(message.into()))
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ClientError::Decode(describe(message.into()))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::decode(err.to_string())
        } else {
            ClientError::request(err.to_string())
        }
    }
}

fn describe(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
