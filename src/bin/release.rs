//! `cmdkit-release` - build and publish release binaries.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::*;

use cmdkit::release::{
    build_release, new_release, remove_release, CargoCompiler, GithubApi, ReleaseConfig,
    ReleaseResult,
};

#[derive(Parser)]
#[command(name = "cmdkit-release", version, about = "Build and publish release binaries")]
struct Cli {
    /// Repository as owner/name (defaults to $CMDKIT_RELEASE_REPO)
    #[arg(long, global = true)]
    repo: Option<String>,

    /// Directory receiving built binaries (defaults to $CMDKIT_RELEASE_DIR or ./release)
    #[arg(long, global = true)]
    release_dir: Option<PathBuf>,

    /// Cargo binary to compile (defaults to the repository name)
    #[arg(long, global = true)]
    bin: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cross-compile every target into the release directory
    Build,
    /// Build, tag and publish a new release
    New { tag: String },
    /// Delete a published release
    Remove { tag: String },
}

async fn run(cli: Cli) -> ReleaseResult<()> {
    let mut config = ReleaseConfig::from_env(cli.repo, cli.release_dir)?;
    if let Some(bin) = cli.bin {
        config = config.with_binary(bin);
    }
    let compiler = CargoCompiler::default();

    match cli.action {
        Action::Build => {
            let artifacts = build_release(&compiler, &config).await?;
            for artifact in artifacts {
                println!("{} {}", "built".green(), artifact.display());
            }
        }
        Action::New { tag } => {
            let api = GithubApi::new(&config)?;
            let release = new_release(&api, &compiler, &config, &tag).await?;
            println!("{} {} {}", "released".green(), tag, release.html_url);
        }
        Action::Remove { tag } => {
            let api = GithubApi::new(&config)?;
            remove_release(&api, &tag).await?;
            println!("{} {}", "removed".green(), tag);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => match e.user_message() {
            Some(message) => {
                eprintln!("{} {}", "Error:".red().bold(), message);
                std::process::exit(1);
            }
            None => Err(e.into()),
        },
    }
}
