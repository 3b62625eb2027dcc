use crate::orderbook::rate_limiter::RateLimiterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Quote source error: {0}")]
    Quote(#[from] QuoteError),

    #[error("Rate limiter error: {0}")]
    RateLimit(#[from] RateLimiterError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Whether a later attempt for the same ticker may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Quote(e) => e.is_retryable(),
            ProviderError::RateLimit(_) => true,
            ProviderError::Config(_) => false,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::Quote(e) => e.error_type(),
            ProviderError::RateLimit(_) => "queue_timeout",
            ProviderError::Config(_) => "config_error",
        }
    }
}

/// Errors raised while fetching a quote from the upstream market-data provider
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("No quote returned for {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl QuoteError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            QuoteError::ConnectionError(_) | QuoteError::RateLimitError(_)
        )
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            QuoteError::ConnectionError(_) => "connection_error",
            QuoteError::RateLimitError(_) => "rate_limit",
            QuoteError::ParseError(_) => "parse_error",
            QuoteError::NotFound(_) => "not_found",
            QuoteError::InternalError(_) => "internal_error",
        }
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            QuoteError::ConnectionError(
                "Request timeout. Please check your internet connection.".to_string(),
            )
        } else if err.is_connect() {
            QuoteError::ConnectionError(
                "Failed to connect to quote provider. Please check your internet connection."
                    .to_string(),
            )
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => QuoteError::RateLimitError(
                    "Too many requests to quote provider. Retry after 60 seconds.".to_string(),
                ),
                404 => QuoteError::NotFound(format!("HTTP 404 from quote provider: {}", err)),
                500..=599 => QuoteError::ConnectionError(format!(
                    "Quote provider server error (HTTP {}). Please try again later.",
                    status.as_u16()
                )),
                _ => QuoteError::InternalError(format!("HTTP error: {}", status)),
            }
        } else if err.is_decode() {
            QuoteError::ParseError(format!("Invalid quote payload: {}", err))
        } else {
            QuoteError::InternalError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::ParseError(format!("JSON parsing failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
