pub mod city;
pub mod route;
pub mod route_plan;
