//! Type inventory loading
//!
//! Provides:
//! - Inventory Format v0 schema
//! - YAML parser with validation
//! - Registration of an inventory with a type explorer builder

pub mod format_v0;
pub mod loader;
pub mod parser;

pub use format_v0::InventoryV0;
pub use loader::{into_builder, load_explorer};
pub use parser::{parse_inventory_file, parse_inventory_str, validate};
