//! Music catalog client
//!
//! Library half of the `music-client` binary, exposed for tests.

pub mod app;
pub mod cli;
pub mod config;
