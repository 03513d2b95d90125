//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the modrinth binary.

use clap::{ArgAction, Parser, Subcommand};

use crate::{ClientOptions, ModrinthClient};

/// Modrinth API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "modrinth", about = "Modrinth API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Use the staging API instead of production.
    #[arg(long, global = true, default_value = "false")]
    pub staging: bool,

    /// Token sent verbatim as the Authorization header.
    #[arg(long, global = true, env = "MODRINTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Explicit API root, overriding --staging (e.g. a local mock server).
    #[arg(long, global = true, env = "MODRINTH_API_URL")]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a project by ID or slug.
    Project {
        /// The 8-character project ID or the project slug.
        id_or_slug: String,
    },
}

impl Cli {
    /// Build the client these arguments describe.
    ///
    /// # Errors
    ///
    /// Returns an error if `--api-url` is not a valid URL.
    pub fn client(&self) -> crate::Result<ModrinthClient> {
        match &self.api_url {
            Some(url) => ModrinthClient::with_base_url(url, self.token.as_deref()),
            None => {
                let mut options = ClientOptions::new().prod(!self.staging);
                options.auth = self.token.clone();
                Ok(ModrinthClient::with_options(options))
            }
        }
    }
}
