// src/config/model.rs

use serde::{Deserialize, Serialize};

use crate::model::Order;

/// Orders file exactly as read from TOML, before validation.
///
/// ```toml
/// [[order]]
/// id = "cut"
/// duration = 2
///
/// [[order]]
/// id = "weld"
/// duration = 3.5
/// dependency = "cut"
/// ```
///
/// Orders are an array of tables rather than a keyed map so that the file's
/// order survives deserialization; the planner uses it as its tie-break.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawOrdersFile {
    /// All `[[order]]` tables, in file order.
    #[serde(default)]
    pub order: Vec<Order>,
}

/// Validated orders file.
///
/// Obtain one through `TryFrom<RawOrdersFile>` (see `config::validate`) or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone)]
pub struct OrdersFile {
    orders: Vec<Order>,
}

impl OrdersFile {
    pub(crate) fn new_unchecked(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
