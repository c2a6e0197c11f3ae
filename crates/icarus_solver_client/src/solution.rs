use serde::{Deserialize, Serialize};

/// An optimized tour as returned by the optimization service.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteSolution {
    /// Visiting order as indices into the submitted city map.
    pub route_indices: Vec<usize>,

    /// City labels of the tour, closed (the first city repeats at the end).
    pub route_labels: Vec<String>,

    /// Net cost of the tour; negative when ticket revenue beats fuel cost.
    pub total_cost: f64,

    pub leg_breakdown: Vec<RouteLeg>,
    pub optimization_result: OptimizationInfo,
    pub problem_info: ProblemInfo,
}

impl RouteSolution {
    pub fn is_profitable(&self) -> bool {
        self.total_cost < 0.0
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub fuel_cost: f64,
    pub ticket_revenue: f64,
    pub net_cost: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizationInfo {
    pub fval: Option<f64>,
    pub variables: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemInfo {
    pub num_cities: usize,
    pub fuel_price: f64,
    pub fuel_burn_per_km: f64,
    pub distance_scale: f64,
}

#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
