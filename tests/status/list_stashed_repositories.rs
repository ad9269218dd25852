use crate::common;
use crate::common::command::{
    DIRTY_AND_STASHED, STASHED, home_dir, repos_dir, run_repos_command, stdout_of, write_config,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_stashed_repositories(
    home_dir: TempDir,
    repos_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_config(home_dir.path(), repos_dir.path(), &[("all", "*")]);

    let actual_output = stdout_of(&mut run_repos_command(home_dir.path(), &["--stashed"]))?;

    assert_eq!(actual_output, common::lines_of(&[DIRTY_AND_STASHED, STASHED]));

    Ok(())
}
