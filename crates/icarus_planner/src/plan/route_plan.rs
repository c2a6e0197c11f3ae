use crate::payload::SolverPayload;
use crate::validation::{PlanWarning, validate_plan};

use super::city::City;
use super::route::{Route, RouteId};

/// The editable field of a generated route.
pub enum RouteField {
    TicketPrice(f64),
    Passengers(u32),
}

/// A city list together with its generated route batch.
///
/// The route batch always belongs to the current city list: replacing the
/// cities regenerates every route from scratch and discards any ticket
/// price or passenger edits made against the previous batch.
pub struct RoutePlan {
    cities: Vec<City>,
    routes: Vec<Route>,
}

impl RoutePlan {
    pub fn new(cities: Vec<City>) -> Self {
        let routes = Route::generate_all(&cities);

        Self { cities, routes }
    }

    /// Replaces the city list and regenerates the whole route batch.
    pub fn set_cities(&mut self, cities: Vec<City>) {
        self.cities = cities;
        self.routes = Route::generate_all(&self.cities);
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn configured_route_count(&self) -> usize {
        self.routes
            .iter()
            .filter(|route| route.is_configured())
            .count()
    }

    /// Sets one editable field of the route with the given id. Returns
    /// false when no route in the current batch carries that id.
    pub fn update_route(&mut self, id: RouteId, field: RouteField) -> bool {
        let Some(route) = self.routes.iter_mut().find(|route| route.id() == id) else {
            return false;
        };

        match field {
            RouteField::TicketPrice(price) => route.set_ticket_price(price),
            RouteField::Passengers(count) => route.set_passengers(count),
        }

        true
    }

    /// Applies a sparse edit to the route matching the ordered name pair.
    /// Returns false when the pair was never generated, leaving the batch
    /// untouched.
    pub fn apply_edit(
        &mut self,
        from: &str,
        to: &str,
        ticket_price: Option<f64>,
        passengers: Option<u32>,
    ) -> bool {
        let Some(route) = self
            .routes
            .iter_mut()
            .find(|route| route.from() == from && route.to() == to)
        else {
            return false;
        };

        if let Some(price) = ticket_price {
            route.set_ticket_price(price);
        }

        if let Some(count) = passengers {
            route.set_passengers(count);
        }

        true
    }

    pub fn payload(&self) -> SolverPayload {
        SolverPayload::from_plan(&self.cities, &self.routes)
    }

    pub fn warnings(&self) -> Vec<PlanWarning> {
        validate_plan(&self.cities, &self.routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_cities() -> Vec<City> {
        vec![
            City::new("1", "A", 0.0, 0.0),
            City::new("2", "B", 3.0, 4.0),
            City::new("3", "C", 6.0, 0.0),
        ]
    }

    #[test]
    fn test_new_generates_routes() {
        let plan = RoutePlan::new(square_cities());

        assert_eq!(plan.route_count(), 6);
        assert_eq!(plan.configured_route_count(), 0);
    }

    #[test]
    fn test_update_route() {
        let mut plan = RoutePlan::new(square_cities());
        let id = plan.routes()[0].id();

        assert!(plan.update_route(id, RouteField::TicketPrice(200.0)));
        assert!(plan.update_route(id, RouteField::Passengers(90)));

        assert_eq!(plan.routes()[0].ticket_price(), 200.0);
        assert_eq!(plan.routes()[0].passengers(), 90);
        assert_eq!(plan.configured_route_count(), 1);
    }

    #[test]
    fn test_update_route_unknown_id() {
        let mut plan = RoutePlan::new(square_cities());
        let stale_id = plan.routes()[5].id();

        plan.set_cities(vec![
            City::new("1", "A", 0.0, 0.0),
            City::new("2", "B", 1.0, 0.0),
        ]);

        assert!(!plan.update_route(stale_id, RouteField::Passengers(1)));
        assert_eq!(plan.route_count(), 2);
        assert_eq!(plan.configured_route_count(), 0);
    }

    #[test]
    fn test_apply_edit_unknown_pair() {
        let mut plan = RoutePlan::new(square_cities());

        assert!(!plan.apply_edit("A", "Z", Some(100.0), None));
        assert!(!plan.apply_edit("A", "A", Some(100.0), None));
        assert_eq!(plan.configured_route_count(), 0);
    }

    #[test]
    fn test_apply_edit_partial_fields() {
        let mut plan = RoutePlan::new(square_cities());

        assert!(plan.apply_edit("B", "C", None, Some(75)));

        let route = plan
            .routes()
            .iter()
            .find(|route| route.from() == "B" && route.to() == "C")
            .unwrap();
        assert_eq!(route.ticket_price(), 0.0);
        assert_eq!(route.passengers(), 75);
    }

    #[test]
    fn test_set_cities_discards_edits() {
        let mut plan = RoutePlan::new(square_cities());
        let id = plan.routes()[0].id();
        plan.update_route(id, RouteField::TicketPrice(150.0));
        assert_eq!(plan.configured_route_count(), 1);

        plan.set_cities(square_cities());

        assert_eq!(plan.route_count(), 6);
        assert_eq!(plan.configured_route_count(), 0);
    }

    #[test]
    fn test_set_cities_regenerates_count() {
        let mut plan = RoutePlan::new(square_cities());

        plan.set_cities(vec![
            City::new("1", "A", 0.0, 0.0),
            City::new("2", "B", 1.0, 0.0),
        ]);

        assert_eq!(plan.route_count(), 2);
    }
}
