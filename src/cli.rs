use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "notify-icon",
    about = "Turn a logo into a white-silhouette notification icon"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (used only if it exists)
    #[arg(long, global = true, default_value = crate::config::CONFIG_NAME)]
    pub config: PathBuf,

    /// Source logo, overrides the config
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Output icon path, overrides the config
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the notification icon (default)
    Generate,

    /// Report on the source logo's transparency without writing anything
    Check,

    /// Write a default notify-icon.toml
    Init,
}

impl Cli {
    /// Resolves input and output paths: flags win over the config file, which
    /// wins over the built-in defaults.
    pub fn resolve_paths(&self) -> anyhow::Result<(PathBuf, PathBuf)> {
        let config = Config::load(&self.config)?;
        let input = self.input.clone().unwrap_or(config.input);
        let output = self.output.clone().unwrap_or(config.output);
        Ok((input, output))
    }
}
