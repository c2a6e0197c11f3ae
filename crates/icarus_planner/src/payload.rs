use std::fmt::Display;

use fxhash::FxHashMap;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::debug;

use crate::plan::city::City;
use crate::plan::route::Route;

/// City-name to `[x, y]` map serialized as a JSON object.
///
/// Keys keep the position of their first occurrence while a later city with
/// the same name overwrites the value, so the map can hold fewer entries
/// than the city list it was built from.
pub struct CityCoordMap {
    entries: Vec<(String, [f64; 2])>,
}

impl CityCoordMap {
    fn from_cities(cities: &[City]) -> Self {
        let mut entries: Vec<(String, [f64; 2])> = Vec::with_capacity(cities.len());

        for city in cities {
            let coords = [city.x(), city.y()];
            match entries
                .iter_mut()
                .find(|(name, _)| name.as_str() == city.name())
            {
                Some(entry) => entry.1 = coords,
                None => entries.push((city.name().to_owned(), coords)),
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<[f64; 2]> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, coords)| *coords)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, [f64; 2])> {
        self.entries
            .iter()
            .map(|(name, coords)| (name.as_str(), *coords))
    }
}

impl Serialize for CityCoordMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, coords) in &self.entries {
            map.serialize_entry(name, coords)?;
        }
        map.end()
    }
}

/// The request body submitted to the external optimization service.
///
/// Built fresh from a plan on every submission and never mutated. Matrix
/// rows and columns follow the city list order at formatting time.
#[derive(Serialize)]
pub struct SolverPayload {
    cities: CityCoordMap,
    ticket_price_matrix: Vec<Vec<f64>>,
    passenger_matrix: Vec<Vec<u32>>,
}

impl SolverPayload {
    /// Assembles the payload for a city list and its route batch.
    ///
    /// Endpoint names resolve through a forward-built index map, so a
    /// duplicated name resolves to its last occurrence. Routes with an
    /// unknown endpoint are dropped. Matrix cells are written only for
    /// positive values; everything else stays zero. No input combination
    /// is rejected.
    pub fn from_plan(cities: &[City], routes: &[Route]) -> Self {
        let num_cities = cities.len();

        let mut city_index: FxHashMap<&str, usize> = FxHashMap::default();
        for (index, city) in cities.iter().enumerate() {
            city_index.insert(city.name(), index);
        }

        let mut ticket_price_matrix = vec![vec![0.0; num_cities]; num_cities];
        let mut passenger_matrix = vec![vec![0; num_cities]; num_cities];

        let mut skipped = 0;
        for route in routes {
            let (Some(&from), Some(&to)) = (
                city_index.get(route.from()),
                city_index.get(route.to()),
            ) else {
                skipped += 1;
                continue;
            };

            if route.ticket_price() > 0.0 {
                ticket_price_matrix[from][to] = route.ticket_price();
            }
            if route.passengers() > 0 {
                passenger_matrix[from][to] = route.passengers();
            }
        }

        if skipped > 0 {
            debug!("Dropped {} routes with unknown endpoints", skipped);
        }

        Self {
            cities: CityCoordMap::from_cities(cities),
            ticket_price_matrix,
            passenger_matrix,
        }
    }

    pub fn cities(&self) -> &CityCoordMap {
        &self.cities
    }

    pub fn ticket_price_matrix(&self) -> &[Vec<f64>] {
        &self.ticket_price_matrix
    }

    pub fn passenger_matrix(&self) -> &[Vec<u32>] {
        &self.passenger_matrix
    }
}

impl Display for SolverPayload {
    /// Renders the payload the way the solver's own examples write it: a
    /// city dict plus two `np.array` literals with row comments.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "cities = {{")?;
        for (name, coords) in self.cities.iter() {
            writeln!(f, "    \"{}\": ({}, {}),", name, coords[0], coords[1])?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "ticket_price_matrix = np.array([")?;
        for (index, row) in self.ticket_price_matrix.iter().enumerate() {
            let cells = row
                .iter()
                .map(|price| format!("{price:>3}"))
                .collect::<Vec<_>>()
                .join(", ");
            let name = self.cities.name_at(index).unwrap_or("?");
            writeln!(f, "    [{cells}],   # From {name}")?;
        }
        writeln!(f, "])")?;
        writeln!(f)?;

        writeln!(f, "passenger_matrix = np.array([")?;
        for (index, row) in self.passenger_matrix.iter().enumerate() {
            let cells = row
                .iter()
                .map(|passengers| format!("{passengers:>3}"))
                .collect::<Vec<_>>()
                .join(", ");
            let name = self.cities.name_at(index).unwrap_or("?");
            writeln!(f, "    [{cells}],   # From {name}")?;
        }
        writeln!(f, "])")
    }
}
