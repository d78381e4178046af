use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Running without a subcommand is the same as `create`.
#[derive(Parser, Debug)]
#[command(
    name = "aether-release",
    version,
    about = "Package the Aether release: stage the README and bundle build outputs into a ZIP",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    #[command(flatten)]
    pub create: CreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write release/README.txt and the release archive
    Create(CreateArgs),
    /// Show what `create` would write, without touching disk
    Plan(PlanArgs),
    /// List the entries of an existing release archive
    Inspect(InspectArgs),
    /// Print the version
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options shared by every command that builds a package.
#[derive(Args, Debug, Clone, Default)]
pub struct PackageArgs {
    /// YAML config file (defaults to the built-in Aether release)
    #[arg(long, env = "AETHER_RELEASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the release is staged in (default: current directory)
    #[arg(long, short = 'C')]
    pub base_dir: Option<PathBuf>,

    /// Archive file name (overrides config)
    #[arg(long)]
    pub output: Option<String>,

    /// Release staging directory name (overrides config)
    #[arg(long)]
    pub release_dir: Option<String>,

    /// Package a build output instead of a placeholder (repeatable)
    #[arg(long = "source", value_name = "NAME=PATH", value_parser = parse_source)]
    pub sources: Vec<(String, PathBuf)>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    #[command(flatten)]
    pub package: PackageArgs,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub package: PackageArgs,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Release archive (.zip)
    pub archive: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

fn parse_source(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got '{s}'"))?;
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected NAME=PATH, got '{s}'"));
    }
    Ok((name.to_string(), PathBuf::from(path)))
}
