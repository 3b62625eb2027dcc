// Library exports for orderflow-provider

pub mod error;

pub mod config; // Configuration management

// Upstream quote integration
pub mod quotes; // Quote source trait and HTTP client

pub mod orderbook; // Book synthesis, metrics, signals, batch driver

// Console rendering of order book reports
pub mod report;
