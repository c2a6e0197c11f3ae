use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::generate::GenerateSubcommands;

mod format;
mod generate;
mod parsers;
mod report;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the solver payload from a plan document
    Format {
        #[command(flatten)]
        args: format::FormatArgs,
    },
    /// Submit a plan to the optimization service and report the tour
    Solve {
        #[command(flatten)]
        args: solve::SolveArgs,
    },
    /// Check that the optimization service is reachable
    Health {
        /// Base URL of the optimization service
        #[arg(long)]
        url: Option<String>,
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
        .init();

    match cli.command {
        Some(Commands::Format { args }) => format::run(args)?,
        Some(Commands::Solve { args }) => solve::run(args).await?,
        Some(Commands::Health { url }) => solve::health(url).await?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
