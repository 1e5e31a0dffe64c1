use std::fmt;

use serde::{Deserialize, Serialize};

use super::TypeLink;

/// Cardinality of one relationship end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCardinality {
    AtMostOne,
    #[default]
    AnyNumber,
}

/// Which end of a relationship type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPosition {
    End1,
    End2,
}

impl fmt::Display for EndPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndPosition::End1 => write!(f, "end1"),
            EndPosition::End2 => write!(f, "end2"),
        }
    }
}

/// One end of a relationship type, anchored on an entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEndDef {
    pub entity_type: TypeLink,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(default)]
    pub cardinality: EndCardinality,
}

impl RelationshipEndDef {
    /// Create an end anchored on the named entity type
    pub fn new(entity_type_name: impl Into<String>) -> Self {
        Self {
            entity_type: TypeLink::named(entity_type_name),
            attribute_name: None,
            cardinality: EndCardinality::AnyNumber,
        }
    }

    pub fn from_link(entity_type: TypeLink) -> Self {
        Self {
            entity_type,
            attribute_name: None,
            cardinality: EndCardinality::AnyNumber,
        }
    }

    pub fn with_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = Some(name.into());
        self
    }

    pub fn with_cardinality(mut self, cardinality: EndCardinality) -> Self {
        self.cardinality = cardinality;
        self
    }
}

/// Raw relationship type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDef {
    pub name: String,
    pub guid: String,
    pub end1: RelationshipEndDef,
    pub end2: RelationshipEndDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RelationshipDef {
    pub fn new(
        name: impl Into<String>,
        guid: impl Into<String>,
        end1: RelationshipEndDef,
        end2: RelationshipEndDef,
    ) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            end1,
            end2,
            description: None,
        }
    }

    /// Shorthand for a relationship between two named entity types
    pub fn between(
        name: impl Into<String>,
        guid: impl Into<String>,
        end1_entity: impl Into<String>,
        end2_entity: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            guid,
            RelationshipEndDef::new(end1_entity),
            RelationshipEndDef::new(end2_entity),
        )
    }

    /// Get an end by position
    pub fn end(&self, position: EndPosition) -> &RelationshipEndDef {
        match position {
            EndPosition::End1 => &self.end1,
            EndPosition::End2 => &self.end2,
        }
    }
}
