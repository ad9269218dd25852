//! Report filters
//!
//! The `repos` command prints a repository when it matches the selected
//! filter: pending changes, stash entries, or either of the two.

use crate::areas::repository::Repo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Uncommitted or unstaged changes.
    Pending,
    /// At least one stash entry.
    Stashed,
    /// Pending changes or stash entries.
    #[default]
    Any,
}

impl StatusFilter {
    /// Pick the filter from the command-line flags; `--pending` wins when both are set.
    pub fn from_flags(pending: bool, stashed: bool) -> Self {
        match (pending, stashed) {
            (true, _) => StatusFilter::Pending,
            (false, true) => StatusFilter::Stashed,
            (false, false) => StatusFilter::Any,
        }
    }

    pub fn matches(&self, repo: &Repo) -> bool {
        match self {
            StatusFilter::Pending => repo.has_pending(),
            StatusFilter::Stashed => repo.has_stashed(),
            StatusFilter::Any => repo.has_pending() || repo.has_stashed(),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusFilter::Pending => "pending",
            StatusFilter::Stashed => "stashed",
            StatusFilter::Any => "pending or stashed",
        };
        write!(f, "{}", name)
    }
}
