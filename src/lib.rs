//! Iron Filings
//!
//! Library half of the application, exposing configuration loading so it
//! can be exercised by integration tests.

pub mod config;
