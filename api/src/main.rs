//! Main entry point for the feedhub API server

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use feedhub_api::{
    config::ApiConfig,
    errors::{ApiError, ApiResult},
    schema::export_schema_sdl,
    start_server,
};
use tracing::warn;

/// feedhub-api: GraphQL API server for the feedhub membership feed
#[derive(Debug, Parser)]
#[command(name = "feedhub-api", about = "GraphQL API server for the feedhub membership feed", version)]
struct Args {
    /// Optional path to a configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export GraphQL schema to a file in SDL format
    ExportSchema {
        /// Output file path (defaults to stdout if not specified)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Args {
    /// Loads the configuration file specified by the `--config` argument.
    ///
    /// If no configuration file is specified, the default configuration
    /// (environment variables and built-in defaults) is used.
    fn load_config(&self) -> ApiResult<ApiConfig> {
        match &self.config {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .map_err(|e| ApiError::Config(format!("cannot open {}: {}", path.display(), e)))?;
                serde_yaml::from_reader(file).map_err(|e| ApiError::Config(e.to_string()))
            }
            None => {
                warn!("no configuration file specified; using default configuration");
                Ok(ApiConfig::default())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Handle subcommands
    if let Some(Command::ExportSchema { output }) = args.command {
        let schema_sdl = export_schema_sdl();

        // Write to file or stdout
        if let Some(output_path) = output {
            std::fs::write(&output_path, schema_sdl)?;
            eprintln!("GraphQL schema exported to: {}", output_path.display());
        } else {
            println!("{}", schema_sdl);
        }

        return Ok(());
    }

    let config = args.load_config()?;
    start_server(config).await?;

    Ok(())
}
