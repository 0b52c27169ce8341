use std::{
    fmt,
    io::{stdout, BufWriter, Write},
};

use anyhow::Result;
use clap::{Args, Parser, ValueEnum};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::{
    manifest::Manifest,
    report::Report,
    validate::{validate_output, validate_repo},
};

#[derive(Debug, Parser)]
#[command(name = "cargo")]
#[command(bin_name = "cargo")]
#[command(styles = clap_cargo::style::CLAP_STYLING)]
pub enum Command {
    DirectDeps(DirectDepsOption),
}

/// List the direct dependencies declared in a package's Cargo.toml
#[derive(Debug, Args)]
#[command(version)]
pub struct DirectDepsOption {
    /// Package name shown in the report
    #[arg(long, value_name = "NAME")]
    package: String,

    /// Repository directory, path to Cargo.toml, or URL of a Cargo.toml
    #[arg(long, value_name = "PATH|URL")]
    repo: String,

    /// Where to look for the manifest
    #[arg(long, value_enum)]
    mode: Mode,

    /// Output image filename (.png, .jpg or .svg)
    #[arg(long, value_name = "FILE")]
    output: String,

    /// Dependency filter shown in the report
    #[arg(long, value_name = "SUBSTRING", default_value = "")]
    filter: String,

    /// Print debug logs to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
    Local,
    Remote,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

pub(crate) trait DirectDepsOptionSource {
    fn repo(&self) -> &str;
    fn mode(&self) -> Mode;
}

pub(crate) trait DirectDepsOptionOutput {
    fn output(&self) -> &str;
}

pub(crate) trait DirectDepsOptionLabel {
    fn package(&self) -> &str;
    fn filter(&self) -> &str;
}

impl DirectDepsOptionSource for DirectDepsOption {
    fn repo(&self) -> &str {
        &self.repo
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

impl DirectDepsOptionOutput for DirectDepsOption {
    fn output(&self) -> &str {
        &self.output
    }
}

impl DirectDepsOptionLabel for DirectDepsOption {
    fn package(&self) -> &str {
        &self.package
    }

    fn filter(&self) -> &str {
        &self.filter
    }
}

pub(crate) fn execute() -> Result<()> {
    let Command::DirectDeps(ref option) = Command::parse();

    init_logging(option.verbose);

    validate_repo(option.repo(), option.mode())?;
    validate_output(option.output())?;
    debug!(repo = option.repo(), mode = %option.mode(), "arguments validated");

    let manifest = Manifest::load(option.repo(), option.mode())?;
    let dependencies = manifest.dependencies();
    debug!(count = dependencies.len(), "dependencies extracted");

    let stdout = stdout();
    let mut buffer = BufWriter::new(stdout.lock());
    Report::new(option, &dependencies).write(&mut buffer)?;
    buffer.flush()?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(LevelFilter::DEBUG.to_string())
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
