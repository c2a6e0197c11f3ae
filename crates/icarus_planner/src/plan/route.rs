use std::fmt::Display;

use tracing::debug;

use super::city::City;

/// Identifier of a generated route, unique within one generated batch.
/// Numbering starts at 1 and follows emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteId(u32);

impl RouteId {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed connection between two cities.
///
/// The distance is fixed when the batch is generated and is never
/// recomputed, even if city coordinates change afterwards. Only the ticket
/// price and the passenger count are editable.
pub struct Route {
    id: RouteId,
    from: String,
    to: String,
    distance: f64,
    ticket_price: f64,
    passengers: u32,
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Route {
    /// Generates the full batch of directed routes for a city list: one
    /// route per ordered pair of distinct cities, the forward direction
    /// immediately followed by the reverse one.
    ///
    /// Fewer than two cities yield an empty batch. Ticket prices and
    /// passenger counts start at zero.
    pub fn generate_all(cities: &[City]) -> Vec<Route> {
        let num_cities = cities.len();
        let mut routes = Vec::with_capacity(num_cities * num_cities.saturating_sub(1));
        let mut next_id = 1;

        for (i, from) in cities.iter().enumerate() {
            for to in cities.iter().skip(i + 1) {
                let distance = round_hundredths(from.euclidean_distance(to));

                routes.push(Route {
                    id: RouteId(next_id),
                    from: from.name().to_owned(),
                    to: to.name().to_owned(),
                    distance,
                    ticket_price: 0.0,
                    passengers: 0,
                });
                next_id += 1;

                routes.push(Route {
                    id: RouteId(next_id),
                    from: to.name().to_owned(),
                    to: from.name().to_owned(),
                    distance,
                    ticket_price: 0.0,
                    passengers: 0,
                });
                next_id += 1;
            }
        }

        debug!("Generated {} routes for {} cities", routes.len(), num_cities);

        routes
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn ticket_price(&self) -> f64 {
        self.ticket_price
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn set_ticket_price(&mut self, price: f64) {
        self.ticket_price = price;
    }

    pub fn set_passengers(&mut self, count: u32) {
        self.passengers = count;
    }

    /// A route counts as configured once it carries a positive ticket price
    /// or a positive passenger count.
    pub fn is_configured(&self) -> bool {
        self.ticket_price > 0.0 || self.passengers > 0
    }
}
