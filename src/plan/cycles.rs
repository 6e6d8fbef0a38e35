// src/plan/cycles.rs

//! Cycle diagnostics for orders the planner could not place.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::model::OrderId;
use crate::plan::graph::DependencyGraph;

/// Find the cycles among the unresolved orders.
///
/// `unresolved` holds graph positions. Each returned cycle lists its members
/// in input order, and cycles are sorted by their first member, so the result
/// is deterministic for a given input.
pub fn find_cycles(graph: &DependencyGraph<'_>, unresolved: &[usize]) -> Vec<Vec<OrderId>> {
    // Edge direction: dependency -> order, same as the planner's graph.
    let mut sub: DiGraphMap<usize, ()> = DiGraphMap::new();

    for &pos in unresolved {
        sub.add_node(pos);
    }

    for &pos in unresolved {
        if let Some(dep) = graph.dependency_of(pos) {
            if sub.contains_node(dep) {
                sub.add_edge(dep, pos, ());
            }
        }
    }

    let mut cycles: Vec<Vec<usize>> = tarjan_scc(&sub)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || sub.contains_edge(component[0], component[0])
        })
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect();

    cycles.sort_unstable_by_key(|component| component[0]);

    cycles
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|pos| graph.order(pos).id.clone())
                .collect()
        })
        .collect()
}
