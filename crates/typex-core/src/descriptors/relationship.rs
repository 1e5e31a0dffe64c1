use serde::Serialize;

use crate::model::{EndPosition, RelationshipDef};

/// Relationship type definition wrapper; relationships do not inherit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipDescriptor {
    def: RelationshipDef,
}

impl RelationshipDescriptor {
    pub fn new(def: RelationshipDef) -> Self {
        Self { def }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn guid(&self) -> &str {
        &self.def.guid
    }

    pub fn relationship_def(&self) -> &RelationshipDef {
        &self.def
    }

    /// Entity type name anchored at an end, if the link carries one
    pub fn end_type_name(&self, position: EndPosition) -> Option<&str> {
        self.def.end(position).entity_type.name()
    }
}
