//! # QingLong Domain
//!
//! Pure types for talking to a QingLong panel's open API.
//!
//! This crate contains:
//! - The error type and `Result` alias shared by the client
//! - Request payload structures (jobs, subscriptions, environment variables)
//! - Id and label lists that normalize "one or many" arguments
//! - Client configuration and endpoint path constants
//!
//! ## Architecture
//! - No dependencies on other QingLong crates
//! - No I/O; everything here serializes to the wire format and nothing more

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
