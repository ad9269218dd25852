//! Shared building blocks used by the core components and the commands.

pub mod core;
pub mod status;
pub mod vcs;
