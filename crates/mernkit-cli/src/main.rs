mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mernkit",
    about = "Scaffold a two-tier web application: React/Vite frontend, Express/TypeScript backend",
    version,
    propagate_version = true
)]
struct Cli {
    /// Working directory (default: current directory)
    #[arg(long, global = true, env = "MERNKIT_DIR")]
    dir: Option<PathBuf>,

    /// Output the result as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new project tree
    Init {
        /// Name of the project root directory
        name: String,

        /// Abort at the first failed external tool instead of continuing
        #[arg(long)]
        strict: bool,
    },

    /// Generate a model/controller/router triplet inside a scaffolded backend
    #[command(name = "create:feature")]
    CreateFeature {
        /// Name of the feature
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        Commands::Init { name, strict } => cmd::init::run(&dir, &name, strict, cli.json),
        Commands::CreateFeature { name } => cmd::feature::run(&dir, &name, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
