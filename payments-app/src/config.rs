//! Configuration loading from environment and command line.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use payments_types::User;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Application configuration.
#[derive(Debug, Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Runs payment commands against an in-memory store", long_about = None)]
pub struct Config {
    /// JSON array of users to seed the user repository with
    #[arg(long, env = "PAYMENTS_USERS_FILE")]
    pub users_file: Option<PathBuf>,

    /// JSON-lines command script; commands are read from stdin when omitted
    #[arg(long, env = "PAYMENTS_COMMANDS")]
    pub commands: Option<PathBuf>,

    /// Log line format
    #[arg(long, env = "PAYMENTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from `.env`, the environment and process arguments.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    /// Reads the seed users, or none when no file is configured.
    pub fn seed_users(&self) -> anyhow::Result<Vec<User>> {
        match &self.users_file {
            Some(path) => load_users(path),
            None => Ok(Vec::new()),
        }
    }
}

fn load_users(path: &Path) -> anyhow::Result<Vec<User>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open users file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse users file {}", path.display()))
}
