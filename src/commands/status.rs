use crate::areas::config::Collection;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::StatusFilter;
use std::io::Write;

impl Workspace {
    /// Print every repository of `collections` matching `filter`, in config order.
    pub fn status(&self, collections: &[Collection], filter: StatusFilter) -> anyhow::Result<()> {
        let repos = self.expand_all(collections)?;
        tracing::debug!(repos = repos.len(), %filter, "checking repositories");

        for repo in &repos {
            tracing::trace!(path = %repo.path().display(), dir = %repo.dir().display(), "checking repository");

            if filter.matches(repo) {
                writeln!(self.writer(), "{}", repo.path().display())?;
            }
        }

        self.writer().flush()?;

        Ok(())
    }
}
