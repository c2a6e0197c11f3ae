pub mod json;
pub mod payload;
pub mod plan;
pub mod validation;
