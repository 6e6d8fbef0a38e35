// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod model;
pub mod plan;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{OrdersFile, default_orders_path, load_and_validate};
use crate::model::Order;

pub use crate::model::OrderId;
pub use crate::plan::{PlanError, plan_orders, plan_production};

/// High-level entry point used by `main.rs`.
///
/// Loads the orders file, computes the plan and prints it to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let path = args.orders.clone().unwrap_or_else(default_orders_path);
    let file = load_and_validate(&path)?;
    info!(path = %path.display(), orders = file.len(), "orders file loaded");

    if args.dry_run {
        print!("{}", render_dry_run(&file));
        debug!("dry-run complete (no plan computed)");
        return Ok(());
    }

    let plan = plan_orders(file.orders()).map_err(errors::ProdplanError::from)?;
    info!(orders = plan.len(), "production plan generated");

    print!("{}", render_plan(&plan, args.durations));
    Ok(())
}

/// Format a plan for stdout: one id per line, or `id<TAB>duration` lines
/// followed by the sequential total when `durations` is set.
pub fn render_plan(plan: &[&Order], durations: bool) -> String {
    let mut out = String::new();

    if !durations {
        for order in plan {
            out.push_str(&order.id);
            out.push('\n');
        }
        return out;
    }

    let mut total = 0.0;
    for order in plan {
        total += order.duration;
        out.push_str(&format!("{}\t{}\n", order.id, order.duration));
    }
    out.push_str(&format!("total\t{total}\n"));
    out
}

/// Simple dry-run output: list orders, durations and dependencies.
pub fn render_dry_run(file: &OrdersFile) -> String {
    let mut out = format!("prodplan dry-run\norders ({}):\n", file.len());

    for order in file.orders() {
        out.push_str(&format!("  - {}\n", order.id));
        out.push_str(&format!("      duration: {}\n", order.duration));
        if let Some(dep) = order.dependency() {
            out.push_str(&format!("      dependency: {dep}\n"));
        }
    }
    out
}
