use clap::Parser;
use repos::areas::config::Config;
use repos::areas::workspace::Workspace;
use repos::artifacts::core::{init_tracing, report_error};
use repos::artifacts::status::StatusFilter;
use repos::artifacts::vcs::Vcs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "repos",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "List repositories with pending or stashed changes",
    long_about = "This command expands the collections configured in ~/.config/repos/config.json \
    against the configured base path and prints every repository with pending changes, \
    stashed changes, or either of the two when no mode is selected.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, help = "Show repositories with pending changes")]
    pending: bool,
    #[arg(long, help = "Show repositories with stashed changes")]
    stashed: bool,
    #[arg(
        short,
        long = "collection",
        value_name = "NAME",
        help = "Only check the named collection (repeatable)"
    )]
    collections: Vec<String>,
    #[arg(
        long,
        env = "REPOS_CONFIG",
        value_name = "FILE",
        help = "The config file to read instead of ~/.config/repos/config.json"
    )]
    config: Option<PathBuf>,
    #[arg(
        long,
        env = "REPOS_GIT",
        value_name = "PROGRAM",
        default_value = "git",
        help = "The version-control executable to query"
    )]
    git: String,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let collections = config.select(&cli.collections)?;

    let workspace = Workspace::new(&config.base_path, Box::new(std::io::stdout()))?
        .with_vcs(Vcs::new(cli.git));

    workspace.status(&collections, StatusFilter::from_flags(cli.pending, cli.stashed))
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
