// Cross-module unit tests
//
// Organized by module:
// - orderbook: synthesis → analysis → signal pipeline
// - report: markdown formatting and rendering

mod orderbook;
mod report;
