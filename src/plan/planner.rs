// src/plan/planner.rs

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::model::{Order, OrderId};
use crate::plan::cycles::find_cycles;
use crate::plan::error::PlanError;
use crate::plan::graph::DependencyGraph;

/// Compute a valid production sequence for `orders`.
///
/// Every order appears strictly after its dependency. Among orders that
/// become ready at the same time, the one that entered the ready queue first
/// is placed first; initially that is input order. An empty slice yields an
/// empty plan.
///
/// # Errors
///
/// - [`PlanError::DuplicateOrder`] if two orders share an id.
/// - [`PlanError::MissingDependency`] if a dependency names an unknown order.
/// - [`PlanError::CircularDependency`] if the dependencies contain a cycle.
pub fn plan_production(orders: &[Order]) -> Result<Vec<OrderId>, PlanError> {
    let plan = plan_orders(orders)?;
    Ok(plan.into_iter().map(|order| order.id.clone()).collect())
}

/// Same as [`plan_production`], but yields the orders themselves so callers
/// keep access to durations.
pub fn plan_orders(orders: &[Order]) -> Result<Vec<&Order>, PlanError> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    debug!(orders = orders.len(), "building dependency graph");
    let graph = DependencyGraph::build(orders)?;

    let mut in_degree = graph.in_degrees();
    let mut ready: VecDeque<usize> = graph.roots().collect();
    debug!(roots = ready.len(), "seeded ready queue");

    let mut plan: Vec<&Order> = Vec::with_capacity(graph.len());

    while let Some(pos) = ready.pop_front() {
        let order = graph.order(pos);
        trace!(order = %order.id, position = plan.len(), "placing order");
        plan.push(order);

        for &next in graph.dependents_of(pos) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    if plan.len() == graph.len() {
        debug!(orders = plan.len(), "production plan complete");
        return Ok(plan);
    }

    // Reference integrity was checked while building the graph, so anything
    // left over is blocked by a cycle.
    let unresolved: Vec<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree > 0)
        .map(|(pos, _)| pos)
        .collect();
    let cycles = find_cycles(&graph, &unresolved);

    warn!(
        placed = plan.len(),
        unresolved = unresolved.len(),
        ?cycles,
        "circular dependency prevents a production plan"
    );

    Err(PlanError::CircularDependency {
        unresolved: unresolved
            .into_iter()
            .map(|pos| graph.order(pos).id.clone())
            .collect(),
        cycles,
    })
}
