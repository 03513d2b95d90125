//! Modrinth API CLI binary.
//!
//! A command-line interface for interacting with the Modrinth API.

use std::process::ExitCode;

use clap::Parser;
use modrinth::cli::{Cli, Command};
use modrinth::{ModrinthClient, PrettyPrint};
use serde_json::Value;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let client = match cli.client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: --api-url expects an absolute URL such as http://127.0.0.1:8080/v2");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &ModrinthClient, cli: Cli) -> modrinth::Result<()> {
    match cli.command {
        Command::Project { id_or_slug } => {
            let project = client.get_project(&id_or_slug).await?;
            output_single(&project, cli.json)
        }
    }
}

fn output_single(value: &Value, json: bool) -> modrinth::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", value.pretty_print());
    }
    Ok(())
}
