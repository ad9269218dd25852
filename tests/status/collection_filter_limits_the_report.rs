use crate::common;
use crate::common::command::{
    DIRTY, STASHED, home_dir, repos_dir, run_repos_command, stdout_of, write_config,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn collection_filter_limits_the_report(
    home_dir: TempDir,
    repos_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_config(
        home_dir.path(),
        repos_dir.path(),
        &[("stash", "s*"), ("clean", "c*"), ("dirty", "d*")],
    );

    let actual_output = stdout_of(&mut run_repos_command(
        home_dir.path(),
        &["--collection", "dirty", "-c", "stash"],
    ))?;

    // config order, not flag order
    assert_eq!(actual_output, common::lines_of(&[STASHED, DIRTY]));

    Ok(())
}
