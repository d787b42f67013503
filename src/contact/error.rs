//! Contact relay errors and their HTTP mapping.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Please wait {retry_after} seconds before sending another message")]
    RateLimited { retry_after: u64 },

    #[error("Server configuration error: Missing email credentials")]
    MissingCredentials,

    #[error("Failed to send email")]
    Transport(String),
}

impl ContactError {
    /// HTTP status code for this error.
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidBody | Self::MissingFields | Self::InvalidEmail => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::RateLimited { .. } => 429,
            Self::MissingCredentials | Self::Transport(_) => 500,
        }
    }

    /// JSON body sent to the client.
    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "error": self.to_string() });
        match self {
            Self::RateLimited { retry_after } => {
                body["retry_after"] = (*retry_after).into();
            }
            Self::Transport(details) => {
                body["details"] = details.as_str().into();
            }
            _ => {}
        }
        body
    }
}
