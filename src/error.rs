use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("connection failed: {0}")]
    Connectivity(String),
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error("server responded with {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Application { status: u16, detail: Option<String> },
    #[error("{0}")]
    InvalidInput(String),
    #[error("clipboard rejected the write: {0}")]
    Clipboard(String),
}

/// Failure families the UI distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or a body that could not be decoded.
    Connectivity,
    /// Well-formed rejection from the API.
    Application,
    /// Raised locally, before or outside any API call.
    Local,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Connectivity(_) | ClientError::Decode(_) => ErrorKind::Connectivity,
            ClientError::Application { .. } => ErrorKind::Application,
            ClientError::InvalidInput(_) | ClientError::Clipboard(_) => ErrorKind::Local,
        }
    }

    /// Message shown to the user, with `fallback` standing in for a missing API detail.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Application { detail, .. } => detail
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Connectivity(err.to_string())
        }
    }
}
