use geo::{Distance, Euclidean};

/// A named position on the planning grid.
///
/// Display names are what routes and payload matrices are keyed by, so two
/// cities sharing a name collapse into one payload entry. `validation`
/// surfaces that case, the formatter does not reject it.
pub struct City {
    id: String,
    name: String,
    point: geo::Point,
}

impl City {
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            point: geo::Point::new(x, y),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn euclidean_distance(&self, to: &City) -> f64 {
        let euclidean = Euclidean;
        euclidean.distance(&self.point, &to.point)
    }
}
