use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Prints a numbered node tree built from a configuration file.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON or YAML file listing the nodes
    #[clap(long, short)]
    pub config: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
