use crate::common::command::{home_dir, run_find_repos_command};
use crate::common::file::{create_directory, write_generated_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use std::os::unix::fs::PermissionsExt;

#[rstest]
fn exit_with_error_for_unreadable_directory(
    home_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = home_dir.path();
    let locked = root.join("locked");
    create_directory(&locked);
    write_generated_file(&locked);
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o444))?;

    // permission bits do not apply to root
    let searchable = !matches!(
        std::fs::metadata(locked.join(".git")),
        Err(ref e) if e.kind() == std::io::ErrorKind::PermissionDenied
    );
    let outcome = run_find_repos_command(root, &["--path", &root.to_string_lossy()]).assert();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))?;
    if searchable {
        return Ok(());
    }

    outcome
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(format!(
            "Error: failed to inspect {}",
            locked.join(".git").display()
        )))
        .stderr(predicate::str::is_match(r"^Error: [^\n]+\n$")?);

    Ok(())
}
