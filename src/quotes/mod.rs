//! Quote Source
//!
//! Upstream market-data access: the [`QuoteSource`] seam and its HTTP implementation.

pub mod client;
pub mod types;

use crate::error::QuoteError;
use std::future::Future;

// Re-export commonly used types
pub use client::QuoteClient;
pub use types::Quote;

/// Anything that can produce a best bid/ask snapshot for a ticker
pub trait QuoteSource {
    fn fetch_quote(
        &self,
        ticker: &str,
    ) -> impl Future<Output = Result<Quote, QuoteError>> + Send;
}
