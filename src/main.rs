use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ontologia::{build_router, Commands, Container, ContainerConfig, StatsController};

#[derive(Parser)]
#[command(name = "ontologia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        env = "ONTOLOGIA_DATA_DIR",
        default_value = "~/.ontologia"
    )]
    data_dir: String,

    #[arg(long, global = true)]
    memory_storage: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let container = Container::new(ContainerConfig {
        data_dir: expand_tilde(&cli.data_dir),
        memory_storage: cli.memory_storage,
    })?;

    match cli.command {
        Commands::Serve { host, port } => {
            let addr = format!("{}:{}", host, port);
            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            info!("Listening on http://{}", addr);
            axum::serve(listener, build_router(Arc::new(container))).await?;
        }

        Commands::Stats => {
            println!("{}", StatsController::new(&container).stats().await?);
        }
    }

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_accepts_host_and_port() {
        let cli = Cli::try_parse_from([
            "ontologia",
            "--memory-storage",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
        ])
        .expect("parse");

        assert!(cli.memory_storage);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 9000);
            }
            Commands::Stats => panic!("expected serve"),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let res = Cli::try_parse_from(["ontologia", "index", "."]);
        assert!(res.is_err());
    }

    #[test]
    fn expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/var/lib/ontologia"), "/var/lib/ontologia");
    }
}
