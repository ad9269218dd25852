use crate::areas::workspace::Workspace;
use std::io::Write;

impl Workspace {
    /// Print every repository root under the workspace as soon as it is found.
    ///
    /// The first filesystem error ends the walk.
    pub fn find(&self, max_depth: Option<usize>) -> anyhow::Result<()> {
        for root in self.repository_roots(max_depth) {
            let root = root?;
            tracing::debug!(path = %root.display(), "found repository");

            writeln!(self.writer(), "{}", root.display())?;
        }

        self.writer().flush()?;

        Ok(())
    }
}
