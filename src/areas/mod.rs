//! Core components
//!
//! - `config`: the `~/.config/repos/config.json` loader and its collections
//! - `repository`: a single repository and its status queries
//! - `workspace`: the base directory, collection expansion and repository discovery

pub mod config;
pub mod repository;
pub mod workspace;
