use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{geocode::GeocodeArgs, route::RouteArgs};

mod geocode;
mod job_file;
mod parsers;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan capacitated trips for a job file
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Resolve a file of postcode queries into job records
    Geocode {
        #[command(flatten)]
        args: GeocodeArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args)?,
        Commands::Geocode { args } => geocode::run(args).await?,
    }

    Ok(())
}
