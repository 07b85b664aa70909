//! CLI 模块

pub mod themes;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "A single-screen terminal to-do list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Theme for this run (overrides the config file)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Path to an alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive list (default)
    Tui,
    /// List available theme names
    Themes,
}
