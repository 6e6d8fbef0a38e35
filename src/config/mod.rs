// src/config/mod.rs

//! Orders file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load an orders file from disk (`loader.rs`).
//! - Validate per-order fields (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_orders_path, load_and_validate, load_from_path};
pub use model::{OrdersFile, RawOrdersFile};
