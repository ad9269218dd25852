use crate::areas::config::Collection;
use crate::areas::repository::Repo;
use crate::artifacts::vcs::Vcs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GIT_DIR: &str = ".git";

/// The base directory repositories are looked up from.
///
/// Relative collection patterns are resolved against `path` explicitly, so the
/// process working directory is never changed.
pub struct Workspace {
    path: Box<Path>,
    vcs: Vcs,
    writer: RefCell<Box<dyn Write>>,
}

impl Workspace {
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("cannot change into base path {}", path.display()))?;

        if !metadata.is_dir() {
            anyhow::bail!(
                "cannot change into base path {}: not a directory",
                path.display()
            );
        }

        Ok(Workspace {
            path: path.into(),
            vcs: Vcs::default(),
            writer: RefCell::new(writer),
        })
    }

    /// Query repositories with `vcs` instead of the default `git`.
    pub fn with_vcs(mut self, vcs: Vcs) -> Self {
        self.vcs = vcs;
        self
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Expand the collection's glob pattern into repositories.
    ///
    /// Matches come back in lexical order. A relative pattern yields repositories
    /// displayed relative to the workspace, an absolute one yields absolute
    /// paths; either way they are queried at the full matched path.
    pub fn expand(&self, collection: &Collection) -> anyhow::Result<Vec<Repo>> {
        let relative = Path::new(&collection.pattern).is_relative();
        let pattern = if relative {
            let base = glob::Pattern::escape(&self.path.to_string_lossy());
            Path::new(&base)
                .join(&collection.pattern)
                .to_string_lossy()
                .into_owned()
        } else {
            collection.pattern.clone()
        };

        let matches = glob::glob(&pattern).with_context(|| {
            format!(
                "invalid pattern {:?} in collection {}",
                collection.pattern, collection.name
            )
        })?;

        let repos = matches
            .filter_map(|entry| match entry {
                Ok(dir) => Some(dir),
                Err(err) => {
                    tracing::debug!(collection = %collection.name, error = %err, "skipping unreadable glob entry");
                    None
                }
            })
            .map(|dir| match relative {
                true => {
                    let path = dir
                        .strip_prefix(&self.path)
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|_| dir.clone());
                    Repo::with_dir(path, dir, self.vcs.clone())
                }
                false => Repo::new(dir, self.vcs.clone()),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            collection = %collection.name,
            pattern = %collection.pattern,
            matches = repos.len(),
            "expanded collection"
        );

        Ok(repos)
    }

    /// Expand every collection in order and concatenate the results, without deduplication.
    pub fn expand_all(&self, collections: &[Collection]) -> anyhow::Result<Vec<Repo>> {
        let mut repos = Vec::new();
        for collection in collections {
            repos.extend(self.expand(collection)?);
        }

        Ok(repos)
    }

    /// Walk the workspace and yield every directory holding a `.git` directory.
    ///
    /// The walk does not descend into a directory once it is yielded.
    pub fn repository_roots(&self, max_depth: Option<usize>) -> RepositoryRoots {
        let walker = WalkDir::new(&self.path).sort_by_file_name();
        let walker = match max_depth {
            Some(depth) => walker.max_depth(depth),
            None => walker,
        };

        RepositoryRoots {
            walker: walker.into_iter(),
        }
    }
}

/// Iterator over repository roots, see [`Workspace::repository_roots`].
pub struct RepositoryRoots {
    walker: walkdir::IntoIter,
}

impl Iterator for RepositoryRoots {
    type Item = anyhow::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(anyhow::Error::new(err).context("failed to walk"))),
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let git_dir = entry.path().join(GIT_DIR);
            let is_repository = match std::fs::metadata(&git_dir) {
                Ok(metadata) => metadata.is_dir(),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
                Err(err) => {
                    return Some(Err(anyhow::Error::new(err)
                        .context(format!("failed to inspect {}", git_dir.display()))));
                }
            };

            if is_repository {
                // the entry just yielded is a directory, so this prunes its subtree
                self.walker.skip_current_dir();
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
