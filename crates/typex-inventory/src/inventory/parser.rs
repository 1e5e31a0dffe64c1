//! Inventory parser with validation
//!
//! Parses YAML and validates schema version, names, and enumeration ordinals.
//! Cross-references between types are checked later, by resolution.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use typex_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::{from_yaml, inventory_validation, io_error, Result};
use crate::inventory::format_v0::{InventoryAttribute, InventoryV0};

/// Parse an inventory file from a path
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be read, otherwise as
/// [`parse_inventory_str`].
pub fn parse_inventory_file(path: &Path) -> Result<InventoryV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("inventory_read", e))?;
    parse_inventory_str(&content)
}

/// Parse an inventory from a string
///
/// # Errors
///
/// Returns a `Serialization` error for malformed YAML and an `InvalidInput`
/// error when validation fails.
pub fn parse_inventory_str(content: &str) -> Result<InventoryV0> {
    log_op_start!("inventory_parse");
    let start = Instant::now();

    let parsed = serde_yaml::from_str::<InventoryV0>(content)
        .map_err(from_yaml)
        .and_then(|inventory| validate(&inventory).map(|()| inventory));

    match parsed {
        Ok(inventory) => {
            log_op_end!(
                "inventory_parse",
                duration_ms = start.elapsed().as_millis() as u64,
                entity_count = inventory.entity_defs.len() as u64,
                relationship_count = inventory.relationship_defs.len() as u64,
                classification_count = inventory.classification_defs.len() as u64,
                enum_count = inventory.enum_defs.len() as u64
            );
            Ok(inventory)
        }
        Err(err) => {
            log_op_error!(
                "inventory_parse",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

/// Validate a parsed inventory
///
/// # Errors
///
/// Returns `InvalidInput` for an unsupported schema version, an empty type
/// or attribute name, or an enumeration with repeated or unknown ordinals.
pub fn validate(inventory: &InventoryV0) -> Result<()> {
    if inventory.schema_version != 0 {
        return Err(inventory_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            inventory.schema_version
        )));
    }

    if inventory.source.as_deref().is_some_and(str::is_empty) {
        return Err(inventory_validation("source label must not be empty"));
    }

    for def in &inventory.entity_defs {
        require_name("entity", &def.name)?;
        require_attribute_names(&def.name, &def.attributes)?;
    }
    for def in &inventory.relationship_defs {
        require_name("relationship", &def.name)?;
    }
    for def in &inventory.classification_defs {
        require_name("classification", &def.name)?;
        require_attribute_names(&def.name, &def.attributes)?;
    }

    for def in &inventory.enum_defs {
        require_name("enum", &def.name)?;

        let mut ordinals = HashSet::new();
        for element in &def.elements {
            if !ordinals.insert(element.ordinal) {
                return Err(inventory_validation(&format!(
                    "Duplicate ordinal {} in enum {}",
                    element.ordinal, def.name
                )));
            }
        }
        if let Some(default) = def.default_ordinal {
            if !ordinals.contains(&default) {
                return Err(inventory_validation(&format!(
                    "Default ordinal {} is not an element of enum {}",
                    default, def.name
                )));
            }
        }
    }

    Ok(())
}

fn require_name(category: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(inventory_validation(&format!(
            "{} type with empty name",
            category
        )));
    }
    Ok(())
}

fn require_attribute_names(owner: &str, attributes: &[InventoryAttribute]) -> Result<()> {
    if attributes.iter().any(|a| a.name.trim().is_empty()) {
        return Err(inventory_validation(&format!(
            "Attribute with empty name on type {}",
            owner
        )));
    }
    Ok(())
}
