//! TypeX Inventory - loading type definitions from inventory documents
//!
//! Provides:
//! - Inventory Format v0 (YAML) schema
//! - Parser with schema and name validation
//! - Registration of parsed definitions with a `TypeExplorerBuilder`

pub mod errors;
pub mod inventory;

// Re-export key types
pub use errors::Result;
pub use inventory::{
    into_builder, load_explorer, parse_inventory_file, parse_inventory_str, validate, InventoryV0,
};
