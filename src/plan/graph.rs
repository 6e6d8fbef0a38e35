// src/plan/graph.rs

use std::collections::HashMap;

use tracing::trace;

use crate::model::Order;
use crate::plan::error::PlanError;

/// Internal node structure: in-degree plus immediate dependents.
///
/// Nodes are addressed by their position in the input slice, which is also
/// the tie-break order used by the planner.
#[derive(Debug, Clone)]
struct OrderNode {
    /// Number of prerequisites that have not been placed yet (0 or 1).
    in_degree: usize,
    /// Orders that declare this one as their dependency, in input order.
    dependents: Vec<usize>,
}

/// Dependency graph over a slice of orders.
///
/// Edges point from a prerequisite to its dependents. The graph borrows the
/// orders and lives for a single planning call.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    orders: &'a [Order],
    index: HashMap<&'a str, usize>,
    nodes: Vec<OrderNode>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph, validating ids and dependency references.
    ///
    /// Fails with:
    /// - [`PlanError::DuplicateOrder`] if an id appears twice,
    /// - [`PlanError::MissingDependency`] for the first order (in input order)
    ///   whose dependency is unknown.
    pub fn build(orders: &'a [Order]) -> Result<Self, PlanError> {
        // First pass: index every id and seed in-degree 0.
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(orders.len());
        for (pos, order) in orders.iter().enumerate() {
            if index.insert(order.id.as_str(), pos).is_some() {
                return Err(PlanError::duplicate_order(&order.id));
            }
        }

        let mut nodes = vec![
            OrderNode {
                in_degree: 0,
                dependents: Vec::new(),
            };
            orders.len()
        ];

        // Second pass: add prerequisite -> dependent edges.
        for (pos, order) in orders.iter().enumerate() {
            let Some(dep) = order.dependency() else {
                continue;
            };

            let Some(&dep_pos) = index.get(dep) else {
                return Err(PlanError::missing_dependency(&order.id, dep));
            };

            trace!(order = %order.id, dependency = dep, "adding dependency edge");
            nodes[dep_pos].dependents.push(pos);
            nodes[pos].in_degree += 1;
        }

        Ok(Self {
            orders,
            index,
            nodes,
        })
    }

    /// Number of orders in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The order stored at `pos`.
    pub fn order(&self, pos: usize) -> &'a Order {
        &self.orders[pos]
    }

    /// Position of the order with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Initial in-degree of every order, indexed by position.
    pub fn in_degrees(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.in_degree).collect()
    }

    /// Positions of orders with no prerequisite, in input order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.in_degree == 0)
            .map(|(pos, _)| pos)
    }

    /// Immediate dependents of the order at `pos`, in input order.
    pub fn dependents_of(&self, pos: usize) -> &[usize] {
        self.nodes
            .get(pos)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Position of the prerequisite of the order at `pos`, if it has one.
    pub fn dependency_of(&self, pos: usize) -> Option<usize> {
        self.orders
            .get(pos)
            .and_then(|o| o.dependency())
            .and_then(|dep| self.position_of(dep))
    }
}
