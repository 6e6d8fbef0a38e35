// src/config/validate.rs

use crate::config::model::{OrdersFile, RawOrdersFile};
use crate::errors::{ProdplanError, Result};

impl TryFrom<RawOrdersFile> for OrdersFile {
    type Error = ProdplanError;

    fn try_from(raw: RawOrdersFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_orders(&raw)?;
        Ok(OrdersFile::new_unchecked(raw.order))
    }
}

/// Field-level checks on every `[[order]]` table.
///
/// Dependency references, duplicate ids and cycles are left to the planner
/// so they are reported with the same messages everywhere.
fn validate_raw_orders(raw: &RawOrdersFile) -> Result<()> {
    validate_ids(raw)?;
    validate_durations(raw)?;
    Ok(())
}

fn validate_ids(raw: &RawOrdersFile) -> Result<()> {
    for (pos, order) in raw.order.iter().enumerate() {
        if order.id.trim().is_empty() {
            return Err(ProdplanError::ConfigError(format!(
                "order #{} has an empty `id`",
                pos + 1
            )));
        }
    }
    Ok(())
}

fn validate_durations(raw: &RawOrdersFile) -> Result<()> {
    for order in raw.order.iter() {
        if !order.duration.is_finite() || order.duration < 0.0 {
            return Err(ProdplanError::ConfigError(format!(
                "order '{}' has invalid `duration` {} (expected a finite number >= 0)",
                order.id, order.duration
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;

    fn raw(orders: Vec<Order>) -> RawOrdersFile {
        RawOrdersFile { order: orders }
    }

    #[test]
    fn accepts_empty_file() {
        let file = OrdersFile::try_from(RawOrdersFile::default()).unwrap();
        assert!(file.is_empty());
    }

    #[test]
    fn rejects_blank_id() {
        let err = OrdersFile::try_from(raw(vec![Order::new("A", 1.0), Order::new("  ", 1.0)]))
            .unwrap_err();
        match err {
            ProdplanError::ConfigError(msg) => assert!(msg.contains("order #2")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_and_nan_durations() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = OrdersFile::try_from(raw(vec![Order::new("A", bad)])).unwrap_err();
            assert!(matches!(err, ProdplanError::ConfigError(ref msg) if msg.contains("'A'")));
        }
    }

    #[test]
    fn leaves_dangling_dependencies_to_the_planner() {
        let file = OrdersFile::try_from(raw(vec![Order::new("X", 1.0).after("Y")])).unwrap();
        assert_eq!(file.len(), 1);
    }
}
