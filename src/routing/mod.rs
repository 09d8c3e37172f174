//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → matcher.rs (API prefix?)
//!     → yes: gateway API handler
//!     → no:  asset service, then index fallback for extensionless GETs
//! ```
//!
//! # Design Decisions
//! - Matcher built at startup, immutable at runtime
//! - Deterministic: same path always takes the same branch

pub mod matcher;

pub use matcher::{is_extensionless, PathPrefixMatcher};
