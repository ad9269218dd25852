//! Version-control subprocess runner
//!
//! Every repository query shells out to the version-control executable as
//! `<program> -C <path> <args...>` and reads its stdout to completion.
//! Two tiers are offered: [`Vcs::query`] surfaces failures, while
//! [`Vcs::lines`] treats a failed query as an empty result.

use crate::artifacts::core::lines_inclusive;
use anyhow::Context;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

const DEFAULT_PROGRAM: &str = "git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vcs {
    program: OsString,
}

impl Vcs {
    pub fn new(program: impl Into<OsString>) -> Self {
        Vcs {
            program: program.into(),
        }
    }

    /// Run the query and return its stdout split into lines.
    ///
    /// Fails when the program cannot be spawned or exits unsuccessfully.
    pub fn query(&self, path: &Path, args: &[&str]) -> anyhow::Result<Vec<String>> {
        tracing::trace!(program = ?self.program, path = %path.display(), ?args, "running vcs query");

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to run {}", self.program.to_string_lossy()))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} {} exited with {}: {}",
                self.program.to_string_lossy(),
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(lines_inclusive(&String::from_utf8_lossy(&output.stdout)))
    }

    /// Run the query, treating any failure as "no output".
    ///
    /// A repository that cannot be queried is indistinguishable from a clean
    /// one; the failure only shows up in the debug log.
    pub fn lines(&self, path: &Path, args: &[&str]) -> Vec<String> {
        self.query(path, args).unwrap_or_else(|err| {
            tracing::debug!(path = %path.display(), error = %format!("{err:#}"), "vcs query failed");
            Vec::new()
        })
    }
}

impl Default for Vcs {
    fn default() -> Self {
        Vcs::new(DEFAULT_PROGRAM)
    }
}
