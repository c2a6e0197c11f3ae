pub mod solution;
pub mod solver_api;
