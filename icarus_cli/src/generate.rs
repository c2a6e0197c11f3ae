use std::path::{Path, PathBuf};

use clap::Subcommand;
use icarus_planner::json::schema::generate_json_schema;
use icarus_planner::json::types::{JsonCity, JsonRouteEdit, JsonRoutePlan};

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write the JSON schema of the plan document
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// Write the four-city demo plan
    Demo {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = generate_json_schema()?;
            write_output(&out, &schema)?;
        }
        GenerateSubcommands::Demo { out } => {
            let demo = serde_json::to_string_pretty(&demo_plan())?;
            write_output(&out, &demo)?;
        }
    }

    Ok(())
}

fn write_output(out: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, content)
}

fn city(name: &str, x: f64, y: f64) -> JsonCity {
    JsonCity {
        name: name.to_owned(),
        x,
        y,
    }
}

fn edit(from: &str, to: &str, ticket_price: f64, passengers: u32) -> JsonRouteEdit {
    JsonRouteEdit {
        from: from.to_owned(),
        to: to.to_owned(),
        ticket_price: Some(ticket_price),
        passengers: Some(passengers),
    }
}

fn demo_plan() -> JsonRoutePlan {
    JsonRoutePlan {
        cities: vec![
            city("SFO", 0.0, 0.0),
            city("SEA", 1.0, 3.0),
            city("DEN", 4.0, 2.5),
            city("DFW", 6.0, 0.5),
        ],
        routes: Some(vec![
            edit("SFO", "SEA", 200.0, 90),
            edit("SFO", "DEN", 180.0, 120),
            edit("SFO", "DFW", 220.0, 150),
            edit("SEA", "SFO", 200.0, 100),
            edit("SEA", "DEN", 160.0, 80),
            edit("SEA", "DFW", 190.0, 130),
            edit("DEN", "SFO", 180.0, 110),
            edit("DEN", "SEA", 160.0, 95),
            edit("DEN", "DFW", 210.0, 100),
            edit("DFW", "SFO", 220.0, 140),
            edit("DFW", "SEA", 190.0, 120),
            edit("DFW", "DEN", 210.0, 105),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_plan_builds_fully_configured() {
        let plan = demo_plan().build_plan();

        assert_eq!(plan.cities().len(), 4);
        assert_eq!(plan.route_count(), 12);
        assert_eq!(plan.configured_route_count(), 12);
    }

    #[test]
    fn test_demo_plan_round_trips() {
        let json = serde_json::to_string(&demo_plan()).unwrap();
        let parsed: JsonRoutePlan = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.cities.len(), 4);
        assert_eq!(parsed.routes.map(|routes| routes.len()), Some(12));
    }
}
