//! # okr-cli
//!
//! Command-line front-end for the OKR SMART-goal workflow.
//!
//! - `okr generate --input objective.toml` — submit an objective and
//!   render the generated goals, with optional `--edit`/`--save` actions
//!   and a `--export` JSON document
//! - `okr objectives` — list the predefined manager objectives a form
//!   can select from
//! - `okr login <email>` — authenticate against the service

mod commands;
mod export;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use okr_client::{ApiConfig, ApiProfile};

/// OKR CLI — compose objectives and review AI-generated SMART goals.
#[derive(Parser)]
#[command(name = "okr", version, about)]
struct Cli {
    /// Path to an okr.toml config file (overrides --profile).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Which service environment to talk to.
    #[arg(long, global = true, value_enum, default_value_t = Profile::Local)]
    profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    Local,
    Deployed,
}

impl From<Profile> for ApiProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Local => ApiProfile::Local,
            Profile::Deployed => ApiProfile::Deployed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an objective and render the generated SMART goals.
    Generate(commands::generate::GenerateArgs),
    /// List the predefined manager objectives.
    Objectives,
    /// Authenticate against the service.
    Login {
        /// Account email address.
        email: String,
        /// Account password (prefer the OKR_PASSWORD environment
        /// variable over passing this on the command line).
        #[arg(long, env = "OKR_PASSWORD")]
        password: String,
    },
}

fn load_config(cli: &Cli) -> Result<ApiConfig> {
    match &cli.config {
        Some(path) => Ok(ApiConfig::from_file(path)?),
        None => Ok(ApiConfig::for_profile(cli.profile.into())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for rendered results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("okr_client=info".parse()?)
                .add_directive("okr_workflow=info".parse()?)
                .add_directive("okr_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Generate(args) => commands::generate::execute(args, config).await,
        Commands::Objectives => commands::objectives::execute(),
        Commands::Login { email, password } => {
            commands::login::execute(&config, email, password).await
        }
    }
}
