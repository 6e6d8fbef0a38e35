// src/plan/mod.rs

//! Production planning.
//!
//! - [`graph`] builds the per-call dependency graph and checks references.
//! - [`planner`] orders the graph with Kahn's algorithm.
//! - [`cycles`] explains a failed plan by locating the cycles.
//! - [`error`] defines [`PlanError`].

pub mod cycles;
pub mod error;
pub mod graph;
pub mod planner;

pub use error::PlanError;
pub use graph::DependencyGraph;
pub use planner::{plan_orders, plan_production};
