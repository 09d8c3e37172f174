//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming API request:
//!     → token.rs (extract x-token from header or query, exact compare)
//!     → Pass to the method branch, or 403 Access denied
//! ```
//!
//! # Design Decisions
//! - Fail closed: an unset expected token rejects every API request
//! - The expected token is never echoed back or logged

pub mod token;

pub use token::{extract_token, is_authorized, TOKEN_HEADER};
