use crate::artifacts::vcs::Vcs;
use std::path::{Path, PathBuf};

const PENDING_QUERY: [&str; 2] = ["status", "--porcelain"];
// `git stash list` rejects `--porcelain`, its plain output is already one entry per line
const STASHED_QUERY: [&str; 2] = ["stash", "list"];

/// A filesystem location believed to be a git working directory.
///
/// `path` is what gets reported, `dir` is where the queries run; they differ
/// when the repository was matched by a pattern relative to the base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    path: PathBuf,
    dir: PathBuf,
    vcs: Vcs,
}

impl Repo {
    pub fn new(path: PathBuf, vcs: Vcs) -> Self {
        Repo {
            dir: path.clone(),
            path,
            vcs,
        }
    }

    pub fn with_dir(path: PathBuf, dir: PathBuf, vcs: Vcs) -> Self {
        Repo { path, dir, vcs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Porcelain status lines for files with uncommitted or unstaged changes.
    ///
    /// Empty for a clean repository, and also when the query fails.
    pub fn pending(&self) -> Vec<String> {
        self.vcs.lines(&self.dir, &PENDING_QUERY)
    }

    /// One line per stash entry; empty when nothing is stashed or the query fails.
    pub fn stashed(&self) -> Vec<String> {
        self.vcs.lines(&self.dir, &STASHED_QUERY)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending().is_empty()
    }

    pub fn has_stashed(&self) -> bool {
        !self.stashed().is_empty()
    }
}
