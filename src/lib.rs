//! Find git repositories and report the ones with pending or stashed changes.
//!
//! - `areas`: configuration, the workspace the repositories live in, and the repositories themselves
//! - `artifacts`: shared building blocks (line splitting, the VCS runner, report filters)
//! - `commands`: the operations exposed by the `repos` and `find-repos` binaries

pub mod areas;
pub mod artifacts;
pub mod commands;
