//! Inventory loading into a type explorer builder
//!
//! Registers every definition of a validated inventory, in document order,
//! with a fresh builder. Registration order carries no meaning; resolution
//! is left to the caller.

use std::path::Path;

use typex_core::model::{ClassificationDef, EntityDef, EnumDef, RelationshipDef};
use typex_core::{ResolverConfig, TypeExplorer, TypeExplorerBuilder};

use crate::errors::Result;
use crate::inventory::format_v0::InventoryV0;
use crate::inventory::parser::parse_inventory_file;

/// Source label for an inventory: a configured label wins over the inventory's own
fn effective_source(inventory: &InventoryV0, config: &ResolverConfig) -> Option<String> {
    config
        .source_label
        .clone()
        .or_else(|| inventory.source.clone())
}

/// Register an inventory's definitions with a new builder
///
/// # Errors
///
/// Returns `DuplicateDefinition` when the inventory defines a name twice
/// with different content under the reject policy.
pub fn into_builder(inventory: InventoryV0, config: ResolverConfig) -> Result<TypeExplorerBuilder> {
    let source_label = effective_source(&inventory, &config);
    let mut builder = TypeExplorerBuilder::new(ResolverConfig {
        source_label,
        ..config
    });

    for def in inventory.entity_defs {
        builder.add_entity_def(EntityDef::from(def))?;
    }
    for def in inventory.relationship_defs {
        builder.add_relationship_def(RelationshipDef::from(def))?;
    }
    for def in inventory.classification_defs {
        builder.add_classification_def(ClassificationDef::from(def))?;
    }
    for def in inventory.enum_defs {
        builder.add_enum_def(EnumDef::from(def))?;
    }

    tracing::debug!(
        source = builder.source_label(),
        "inventory registered"
    );
    Ok(builder)
}

/// Parse, register and resolve an inventory file
///
/// # Errors
///
/// Any parse, validation, registration or resolution error.
pub fn load_explorer(path: &Path, config: ResolverConfig) -> Result<TypeExplorer> {
    let inventory = parse_inventory_file(path)?;
    let explorer = into_builder(inventory, config)?.resolve()?;
    Ok(explorer)
}
