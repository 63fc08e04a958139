use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the dashboard request body
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// JSON schema of the itinerary actions
    ActionSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

fn write_schema(out: PathBuf, schema: String) -> Result<(), anyhow::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, schema)?;

    Ok(())
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = coldroute_planner::schema::generate_request_json_schema()?;
            write_schema(out, schema)?;
        }
        GenerateSubcommands::ActionSchema { out } => {
            let schema = coldroute_planner::schema::generate_itinerary_action_json_schema()?;
            write_schema(out, schema)?;
        }
    }

    Ok(())
}
