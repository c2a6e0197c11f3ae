use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use icarus_planner::json::types::JsonRoutePlan;
use tracing::{info, warn};

#[derive(Args)]
pub struct FormatArgs {
    /// The plan document to format
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Write the payload JSON here instead of stdout
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Also print the payload as numpy-style arrays
    #[arg(long)]
    dump: bool,
}

pub fn run(args: FormatArgs) -> Result<(), anyhow::Error> {
    let f = File::open(args.input)?;
    let content: JsonRoutePlan = serde_json::from_reader(BufReader::new(f))?;
    let plan = content.build_plan();

    for warning in plan.warnings() {
        warn!("{}", warning);
    }

    info!(
        "Plan has {} cities and {} routes ({} configured)",
        plan.cities().len(),
        plan.route_count(),
        plan.configured_route_count()
    );

    let payload = plan.payload();
    let json = serde_json::to_string_pretty(&payload)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, json)?;
        }
        None => println!("{json}"),
    }

    if args.dump {
        print!("{payload}");
    }

    Ok(())
}
