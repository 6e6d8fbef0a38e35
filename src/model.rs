// src/model.rs

//! Production order record shared by the planner and the orders file.

use serde::{Deserialize, Serialize};

/// Identifier of a production order.
pub type OrderId = String;

/// A unit of production work.
///
/// Mirrors one `[[order]]` table in the orders file:
///
/// ```toml
/// [[order]]
/// id = "weld"
/// duration = 3.5
/// dependency = "cut"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Order {
    /// Unique identifier of this order.
    pub id: OrderId,

    /// How long the order takes. Carried through to the caller; the planner
    /// never looks at it.
    pub duration: f64,

    /// Optional prerequisite: the order that must complete before this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<OrderId>,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, duration: f64) -> Self {
        Self {
            id: id.into(),
            duration,
            dependency: None,
        }
    }

    /// Set the prerequisite of this order.
    pub fn after(mut self, dependency: impl Into<OrderId>) -> Self {
        self.dependency = Some(dependency.into());
        self
    }

    /// The declared prerequisite, if any.
    ///
    /// An empty string counts as "no dependency".
    pub fn dependency(&self) -> Option<&str> {
        self.dependency.as_deref().filter(|dep| !dep.is_empty())
    }
}
