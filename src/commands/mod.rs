//! Command implementations
//!
//! - `status`: report repositories from the configured collections with pending or stashed changes
//! - `find`: walk a directory tree and print every repository root

pub mod find;
pub mod status;
