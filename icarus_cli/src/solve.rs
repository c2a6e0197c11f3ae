use std::{fs::File, io::BufReader, path::PathBuf, time::Duration};

use clap::Args;
use icarus_planner::json::types::JsonRoutePlan;
use icarus_planner::validation::PlanWarning;
use icarus_solver_client::solver_api::{SolverApiClient, SolverClientParams};
use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::{parsers, report};

#[derive(Args)]
pub struct SolveArgs {
    /// The plan document to solve
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Base URL of the optimization service
    #[arg(long)]
    url: Option<String>,

    /// Give up on the request after this long (e.g. "30s", "5m")
    #[arg(short, long, value_parser = parsers::parse_timeout, default_value = "120s")]
    timeout: Duration,

    /// Write the solution with a timestamp to this file
    #[arg(long, short = 'e')]
    export: Option<PathBuf>,
}

pub async fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    let f = File::open(args.input)?;
    let content: JsonRoutePlan = serde_json::from_reader(BufReader::new(f))?;
    let plan = content.build_plan();

    let warnings = plan.warnings();
    for warning in &warnings {
        warn!("{}", warning);
    }

    let blocked = warnings.iter().any(|warning| {
        matches!(
            warning,
            PlanWarning::NotEnoughCities { .. } | PlanWarning::NoRouteConfigured
        )
    });
    if blocked {
        anyhow::bail!("Plan is not ready to submit, fix the warnings above");
    }

    let client = SolverApiClient::new(client_params(args.url, args.timeout));

    info!(
        "Submitting {} cities to the optimization service at {}",
        plan.cities().len(),
        client.base_url()
    );

    let payload = plan.payload();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Waiting for the optimization service...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = client.solve(&payload).await;
    spinner.finish_and_clear();

    let solution = result?;

    report::print_solution(&solution);

    if let Some(export) = args.export {
        report::export_solution(&export, plan.cities(), &solution)?;
        info!("Solution written to {:?}", export);
    }

    Ok(())
}

pub async fn health(url: Option<String>) -> Result<(), anyhow::Error> {
    let client = SolverApiClient::new(client_params(url, Duration::from_secs(5)));

    let status = client.health().await?;

    info!("{}: {}", status.status, status.message);

    Ok(())
}

fn client_params(url: Option<String>, timeout: Duration) -> SolverClientParams {
    let mut params = SolverClientParams::from_env();
    params.request_timeout = timeout;

    if let Some(url) = url {
        params.base_url = url;
    }

    params
}
