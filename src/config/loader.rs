// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{OrdersFile, RawOrdersFile};
use crate::errors::Result;

/// Load an orders file from a given path and return the raw `RawOrdersFile`.
///
/// This only performs TOML deserialization; it does **not** validate the
/// orders. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawOrdersFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawOrdersFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), orders = raw.order.len(), "loaded orders file");

    Ok(raw)
}

/// Load an orders file from path and run field validation.
///
/// The result is ready to hand to [`crate::plan::plan_orders`].
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<OrdersFile> {
    let raw = load_from_path(&path)?;
    let orders = OrdersFile::try_from(raw)?;
    Ok(orders)
}

/// Orders file used when `--orders` is not given: `Orders.toml` in the
/// current working directory.
pub fn default_orders_path() -> PathBuf {
    PathBuf::from("Orders.toml")
}
