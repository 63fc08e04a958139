use clap::{Parser, Subcommand};
use coldroute_planner::config::PlannerConfig;
use mimalloc::MiMalloc;

use crate::{generate::GenerateSubcommands, plan::PlanArgs, session::SessionArgs};

mod generate;
mod parsers;
mod plan;
mod render;
mod session;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,

    /// OSRM base URL (overrides COLDROUTE_OSRM_URL)
    #[arg(long, global = true)]
    osrm_url: Option<String>,

    /// Nominatim base URL (overrides COLDROUTE_NOMINATIM_URL)
    #[arg(long, global = true)]
    nominatim_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a route once and print the dashboard
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Edit an itinerary interactively, re-planning after every change
    #[command(visible_alias = "s")]
    Session {
        #[command(flatten)]
        args: SessionArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = PlannerConfig::from_env()?;
    if let Some(osrm_url) = cli.osrm_url {
        config.osrm_url = osrm_url;
    }
    if let Some(nominatim_url) = cli.nominatim_url {
        config.nominatim_url = nominatim_url;
    }

    match cli.command {
        Commands::Plan { args } => plan::run(args, &config.build_planner()).await?,
        Commands::Session { args } => session::run(args, &config.build_planner()).await?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
