use thiserror::Error;

/// Fallback text when the backend rejects a document without saying why.
const UNKNOWN_ERROR: &str = "unknown error";

#[derive(Debug, Error)]
pub enum Error {
    #[error("no valid document link in input")]
    InvalidLink,

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("workflow rejected: {0}")]
    Rejected(String),

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("other: {0}")]
    Other(String),
}

impl Error {
    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }

    /// Rejection reported by the backend, with fallback text applied when
    /// the reply carried no message.
    #[inline]
    #[must_use]
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected(message.unwrap_or_else(|| UNKNOWN_ERROR.to_owned()))
    }

    /// True when the failure happened while connecting (backend down or
    /// unreachable), as opposed to a reply we could not use.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_connect())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
