use std::path::Path;

use comfy_table::{Table, presets::UTF8_FULL};
use icarus_planner::plan::city::City;
use icarus_solver_client::solution::RouteSolution;
use serde::Serialize;

pub fn print_solution(solution: &RouteSolution) {
    println!();
    println!("Optimal route: {}", tour_line(&solution.route_labels));

    let label = if solution.is_profitable() {
        "profit"
    } else {
        "cost"
    };
    println!("Total {}: ${:.2}", label, solution.total_cost.abs());
    println!();

    println!("{}", leg_table(solution));
    println!();

    let info = &solution.problem_info;
    println!(
        "Problem: {} cities, fuel ${}/kg, burn {} kg/km, distance scale {}x",
        info.num_cities, info.fuel_price, info.fuel_burn_per_km, info.distance_scale
    );
}

fn tour_line(labels: &[String]) -> String {
    labels.join(" -> ")
}

fn leg_table(solution: &RouteSolution) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["From", "To", "Fuel cost", "Ticket revenue", "Net"]);

    for leg in &solution.leg_breakdown {
        table.add_row(vec![
            leg.from.clone(),
            leg.to.clone(),
            format!("${:.2}", leg.fuel_cost),
            format!("${:.2}", leg.ticket_revenue),
            format!("${:.2}", leg.net_cost),
        ]);
    }

    table
}

#[derive(Serialize)]
struct ExportedCity {
    id: String,
    name: String,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    timestamp: String,
    cities: Vec<ExportedCity>,
    solution: &'a RouteSolution,
}

/// Writes the solution next to the cities it was computed for, stamped
/// with the export time.
pub fn export_solution(
    out: &Path,
    cities: &[City],
    solution: &RouteSolution,
) -> Result<(), anyhow::Error> {
    let document = ExportDocument {
        timestamp: jiff::Timestamp::now().to_string(),
        cities: cities
            .iter()
            .map(|city| ExportedCity {
                id: city.id().to_owned(),
                name: city.name().to_owned(),
                x: city.x(),
                y: city.y(),
            })
            .collect(),
        solution,
    };

    let json = serde_json::to_string_pretty(&document)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, json)?;

    Ok(())
}
