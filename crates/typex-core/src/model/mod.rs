//! Raw, immutable type definitions as supplied by a metadata repository

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod attribute;
pub mod classification_def;
pub mod entity_def;
pub mod enum_def;
pub mod relationship_def;
pub mod type_def;
pub mod type_link;

pub use attribute::{AttributeCardinality, AttributeDef};
pub use classification_def::ClassificationDef;
pub use entity_def::EntityDef;
pub use enum_def::{EnumDef, EnumElement};
pub use relationship_def::{EndCardinality, EndPosition, RelationshipDef, RelationshipEndDef};
pub use type_def::TypeDef;
pub use type_link::TypeLink;

/// Category of a type definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    Entity,
    Relationship,
    Classification,
    Enum,
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeCategory::Entity => "entity",
            TypeCategory::Relationship => "relationship",
            TypeCategory::Classification => "classification",
            TypeCategory::Enum => "enum",
        };
        f.write_str(s)
    }
}

/// Definitions that form a single-parent specialization hierarchy
/// (entity and classification types).
pub trait SupertypedDef {
    fn type_name(&self) -> &str;
    fn supertype(&self) -> Option<&TypeLink>;
    fn own_attributes(&self) -> &[AttributeDef];
}
