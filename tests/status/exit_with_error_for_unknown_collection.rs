use crate::common::command::{home_dir, repos_dir, run_repos_command, write_config};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn exit_with_error_for_unknown_collection(
    home_dir: TempDir,
    repos_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_config(home_dir.path(), repos_dir.path(), &[("all", "*")]);

    run_repos_command(home_dir.path(), &["-c", "games"])
        .assert()
        .code(1)
        .stderr(predicate::eq("Error: unknown collection games\n"));

    Ok(())
}
