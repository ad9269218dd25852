use crate::common;
use crate::common::command::{
    DIRTY, home_dir, repos_dir, run_repos_command, stdout_of, write_config_file,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn config_flag_replaces_the_default_location(
    home_dir: TempDir,
    repos_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = home_dir.path().join("elsewhere.json");
    write_config_file(&config_path, repos_dir.path(), &[("x", "dirty")]);

    let actual_output = stdout_of(&mut run_repos_command(
        home_dir.path(),
        &["--pending", "--config", &config_path.to_string_lossy()],
    ))?;

    assert_eq!(actual_output, common::lines_of(&[DIRTY]));
    assert!(!home_dir.path().join(".config").exists());

    Ok(())
}

#[rstest]
fn config_variable_replaces_the_default_location(
    home_dir: TempDir,
    repos_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = home_dir.path().join("elsewhere.json");
    write_config_file(&config_path, repos_dir.path(), &[("x", "dirty")]);

    let mut cmd = run_repos_command(home_dir.path(), &["--pending"]);
    cmd.env("REPOS_CONFIG", &config_path);
    let actual_output = stdout_of(&mut cmd)?;

    assert_eq!(actual_output, common::lines_of(&[DIRTY]));

    Ok(())
}
