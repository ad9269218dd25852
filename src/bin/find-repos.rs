use clap::Parser;
use repos::areas::workspace::Workspace;
use repos::artifacts::core::{init_tracing, report_error};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "find-repos",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Find git repositories under a directory",
    long_about = "This command walks a directory tree and prints every directory containing a .git \
    directory. It does not descend into a repository once it has been found.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        env = "REPOS_PATH",
        default_value = ".",
        help = "The directory to start walking from"
    )]
    path: PathBuf,
    #[arg(long, value_name = "N", help = "Do not descend more than N directories deep")]
    max_depth: Option<usize>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let workspace = Workspace::new(&cli.path, Box::new(std::io::stdout()))?;

    workspace.find(cli.max_depth)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
