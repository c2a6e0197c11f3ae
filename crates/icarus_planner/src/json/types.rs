use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::plan::city::City;
use crate::plan::route_plan::RoutePlan;

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RoutePlan")]
pub struct JsonRoutePlan {
    pub cities: Vec<JsonCity>,
    pub routes: Option<Vec<JsonRouteEdit>>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "City")]
pub struct JsonCity {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// A sparse edit applied over the generated route batch. Routes are
/// matched by their ordered endpoint names; an edit for a pair that was
/// never generated is skipped.
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "RouteEdit")]
pub struct JsonRouteEdit {
    pub from: String,
    pub to: String,
    pub ticket_price: Option<f64>,
    pub passengers: Option<u32>,
}

impl JsonRoutePlan {
    #[instrument(skip_all, level = "debug")]
    pub fn build_plan(self) -> RoutePlan {
        let cities = self
            .cities
            .into_iter()
            .enumerate()
            .map(|(index, city)| City::new((index + 1).to_string(), city.name, city.x, city.y))
            .collect::<Vec<_>>();

        let mut plan = RoutePlan::new(cities);

        for edit in self.routes.unwrap_or_default() {
            if !plan.apply_edit(&edit.from, &edit.to, edit.ticket_price, edit.passengers) {
                warn!("No generated route from {} to {}, edit skipped", edit.from, edit.to);
            }
        }

        plan
    }
}
