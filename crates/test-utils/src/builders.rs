#![allow(dead_code)]

use prodplan::config::{OrdersFile, RawOrdersFile};
use prodplan::model::Order;

/// Builder for `OrdersFile` to simplify test setup.
pub struct OrdersFileBuilder {
    raw: RawOrdersFile,
}

impl OrdersFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawOrdersFile::default(),
        }
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.raw.order.push(order);
        self
    }

    /// Raw orders in insertion order, for handing straight to the planner.
    pub fn orders(self) -> Vec<Order> {
        self.raw.order
    }

    /// Render the orders as an orders-file TOML document.
    pub fn to_toml(&self) -> String {
        toml::to_string(&self.raw).expect("Failed to serialize orders file from builder")
    }

    pub fn build(self) -> OrdersFile {
        OrdersFile::try_from(self.raw).expect("Failed to build valid orders file from builder")
    }
}

impl Default for OrdersFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Order`.
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            order: Order::new(id, 1.0),
        }
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.order.duration = duration;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.order.dependency = Some(dep.to_string());
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}

/// Shorthand for a list of `(id, dependency)` pairs with unit durations.
pub fn orders(specs: &[(&str, Option<&str>)]) -> Vec<Order> {
    specs
        .iter()
        .map(|(id, dep)| {
            let builder = OrderBuilder::new(id);
            match dep {
                Some(dep) => builder.after(dep).build(),
                None => builder.build(),
            }
        })
        .collect()
}
