use fxhash::FxHashSet;
use thiserror::Error;

use crate::plan::city::City;
use crate::plan::route::{Route, RouteId};

/// Non-fatal problems in a plan, reported before payload submission.
///
/// The formatter itself never rejects input; these name the cases where it
/// silently degrades so callers can decide what should block a submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanWarning {
    #[error("at least two named cities are required, found {count}")]
    NotEnoughCities { count: usize },

    #[error("city at position {index} has a blank name")]
    BlankCityName { index: usize },

    #[error("duplicate city name \"{name}\" overwrites an earlier entry")]
    DuplicateCityName { name: String },

    #[error("route {route_id} references unknown city \"{name}\" and will be dropped")]
    UnknownRouteEndpoint { route_id: RouteId, name: String },

    #[error("no route has a ticket price or a passenger count set")]
    NoRouteConfigured,
}

pub fn validate_plan(cities: &[City], routes: &[Route]) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();

    let named = cities
        .iter()
        .filter(|city| !city.name().trim().is_empty())
        .count();
    if named < 2 {
        warnings.push(PlanWarning::NotEnoughCities { count: named });
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for (index, city) in cities.iter().enumerate() {
        if city.name().trim().is_empty() {
            warnings.push(PlanWarning::BlankCityName { index });
        } else if !seen.insert(city.name()) {
            warnings.push(PlanWarning::DuplicateCityName {
                name: city.name().to_owned(),
            });
        }
    }

    let known_names: FxHashSet<&str> = cities.iter().map(|city| city.name()).collect();
    for route in routes {
        for name in [route.from(), route.to()] {
            if !known_names.contains(name) {
                warnings.push(PlanWarning::UnknownRouteEndpoint {
                    route_id: route.id(),
                    name: name.to_owned(),
                });
            }
        }
    }

    if !routes.is_empty() && !routes.iter().any(Route::is_configured) {
        warnings.push(PlanWarning::NoRouteConfigured);
    }

    warnings
}
