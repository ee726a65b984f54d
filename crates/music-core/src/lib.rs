//! Core types for the music catalog client
//!
//! Every data source the client can read from is normalized into the
//! [`Album`] record defined here, so callers never see source-specific rows
//! or wire messages.

pub mod album;

pub use album::Album;
