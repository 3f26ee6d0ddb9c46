//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    io::ErrorKind,
    path::PathBuf,
    process::{self, Command},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Library crate exercised by `test` and `bench`.
const LIB_CRATE: &str = "geohash32";

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run unit, integration and doc tests.
    Test,
    /// Run the criterion benchmarks.
    Bench {
        /// Only run benchmarks whose name contains this filter.
        filter: Option<String>,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self { root })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Bench { filter } => bench(&paths, filter.as_deref()),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests with cargo nextest when installed, then the doc tests nextest
/// does not cover.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    let krate = LIB_CRATE;
    if has_command("cargo-nextest")? {
        cmd!(sh, "cargo nextest run --all").run()?;
    } else {
        println!("cargo-nextest not found; falling back to cargo test.");
        cmd!(sh, "cargo test --all --all-targets").run()?;
    }
    cmd!(sh, "cargo test --doc -p {krate}").run()?;
    Ok(())
}

/// Run the library benchmarks, optionally filtered by name.
fn bench(paths: &RepoPaths, filter: Option<&str>) -> Result<()> {
    let sh = repo_shell(paths)?;
    let krate = LIB_CRATE;
    let filter: Vec<&str> = filter.into_iter().collect();
    cmd!(sh, "cargo bench -p {krate} -- {filter...}").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}

/// Return `true` when `name` is found on `$PATH`.
fn has_command(name: &str) -> Result<bool> {
    match Command::new(name).arg("--help").output() {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("failed to probe for {name}")),
    }
}
