// src/plan/error.rs

//! Errors reported by the planner.

use thiserror::Error;

use crate::model::OrderId;

/// Why no production plan could be generated.
///
/// Every variant is terminal for the current call: the planner never returns
/// a partial sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// An order names a prerequisite that is not part of the input.
    #[error("Dependency '{dependency}' for order '{order}' does not exist.")]
    MissingDependency {
        /// The order that declared the dependency.
        order: OrderId,
        /// The identifier that could not be found.
        dependency: OrderId,
    },

    /// The dependencies contain at least one cycle.
    ///
    /// The message is the same for every cycle; the fields are diagnostics.
    #[error("Circular dependency detected. Cannot generate a valid production plan.")]
    CircularDependency {
        /// Orders that never became ready, in input order. Includes orders
        /// downstream of a cycle as well as its members.
        unresolved: Vec<OrderId>,
        /// Each cycle found among the unresolved orders.
        cycles: Vec<Vec<OrderId>>,
    },

    /// Two orders share an identifier.
    #[error("Order '{order}' is declared more than once.")]
    DuplicateOrder { order: OrderId },
}

impl PlanError {
    pub fn missing_dependency(order: impl Into<OrderId>, dependency: impl Into<OrderId>) -> Self {
        Self::MissingDependency {
            order: order.into(),
            dependency: dependency.into(),
        }
    }

    pub fn duplicate_order(order: impl Into<OrderId>) -> Self {
        Self::DuplicateOrder {
            order: order.into(),
        }
    }
}
