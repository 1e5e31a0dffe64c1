//! Inventory Format v0 schema
//!
//! Defines the YAML structure of a type inventory. Field names are
//! snake_case; JSON documents parse too since JSON is a YAML subset.

use serde::{Deserialize, Serialize};
use typex_core::model::{
    AttributeCardinality, AttributeDef, ClassificationDef, EndCardinality, EntityDef, EnumDef,
    EnumElement, RelationshipDef, RelationshipEndDef, TypeLink,
};

/// Top-level inventory document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Label of the repository the definitions were fetched from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default)]
    pub entity_defs: Vec<InventoryEntity>,

    #[serde(default)]
    pub relationship_defs: Vec<InventoryRelationship>,

    #[serde(default)]
    pub classification_defs: Vec<InventoryClassification>,

    #[serde(default)]
    pub enum_defs: Vec<InventoryEnum>,
}

/// Reference to another type: a bare name or a `{name, guid}` map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

impl From<InventoryLink> for TypeLink {
    fn from(link: InventoryLink) -> Self {
        TypeLink {
            name: link.name,
            guid: link.guid,
        }
    }
}

impl<'de> Deserialize<'de> for InventoryLink {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct LinkVisitor;

        impl<'de> Visitor<'de> for LinkVisitor {
            type Value = InventoryLink;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a type name or a map with 'name' and/or 'guid'")
            }

            fn visit_str<E>(self, value: &str) -> Result<InventoryLink, E>
            where
                E: de::Error,
            {
                Ok(InventoryLink {
                    name: Some(value.to_string()),
                    guid: None,
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<InventoryLink, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                let mut link = InventoryLink::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => link.name = map.next_value()?,
                        "guid" => link.guid = map.next_value()?,
                        // Repositories attach extra header fields
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(link)
            }
        }

        deserializer.deserialize_any(LinkVisitor)
    }
}

/// Attribute declared on an entity or classification type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAttribute {
    pub name: String,

    /// Name of the attribute's value type
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub cardinality: AttributeCardinality,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<InventoryAttribute> for AttributeDef {
    fn from(attr: InventoryAttribute) -> Self {
        AttributeDef {
            name: attr.name,
            type_name: attr.type_name,
            cardinality: attr.cardinality,
            description: attr.description,
        }
    }
}

/// Entity type definition in an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntity {
    pub name: String,

    #[serde(default)]
    pub guid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<InventoryLink>,

    #[serde(default)]
    pub attributes: Vec<InventoryAttribute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<InventoryEntity> for EntityDef {
    fn from(def: InventoryEntity) -> Self {
        EntityDef {
            name: def.name,
            guid: def.guid,
            supertype: def.supertype.map(TypeLink::from),
            attributes: def.attributes.into_iter().map(AttributeDef::from).collect(),
            description: def.description,
        }
    }
}

/// One end of a relationship type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRelationshipEnd {
    /// Entity type the end is anchored on
    pub entity_type: InventoryLink,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    #[serde(default)]
    pub cardinality: EndCardinality,
}

impl From<InventoryRelationshipEnd> for RelationshipEndDef {
    fn from(end: InventoryRelationshipEnd) -> Self {
        RelationshipEndDef {
            entity_type: end.entity_type.into(),
            attribute_name: end.attribute_name,
            cardinality: end.cardinality,
        }
    }
}

/// Relationship type definition in an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRelationship {
    pub name: String,

    #[serde(default)]
    pub guid: String,

    pub end1: InventoryRelationshipEnd,

    pub end2: InventoryRelationshipEnd,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<InventoryRelationship> for RelationshipDef {
    fn from(def: InventoryRelationship) -> Self {
        RelationshipDef {
            name: def.name,
            guid: def.guid,
            end1: def.end1.into(),
            end2: def.end2.into(),
            description: def.description,
        }
    }
}

/// Classification type definition in an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryClassification {
    pub name: String,

    #[serde(default)]
    pub guid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<InventoryLink>,

    #[serde(default)]
    pub attributes: Vec<InventoryAttribute>,

    /// Entity types the classification may be attached to
    #[serde(default)]
    pub valid_entity_types: Vec<InventoryLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<InventoryClassification> for ClassificationDef {
    fn from(def: InventoryClassification) -> Self {
        ClassificationDef {
            name: def.name,
            guid: def.guid,
            supertype: def.supertype.map(TypeLink::from),
            attributes: def.attributes.into_iter().map(AttributeDef::from).collect(),
            valid_entity_types: def
                .valid_entity_types
                .into_iter()
                .map(TypeLink::from)
                .collect(),
            description: def.description,
        }
    }
}

/// Enumeration symbol in an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEnumElement {
    pub ordinal: i32,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Enumeration definition in an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEnum {
    pub name: String,

    #[serde(default)]
    pub guid: String,

    #[serde(default)]
    pub elements: Vec<InventoryEnumElement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ordinal: Option<i32>,
}

impl From<InventoryEnum> for EnumDef {
    fn from(def: InventoryEnum) -> Self {
        EnumDef {
            name: def.name,
            guid: def.guid,
            elements: def
                .elements
                .into_iter()
                .map(|e| EnumElement {
                    ordinal: e.ordinal,
                    value: e.value,
                    description: e.description,
                })
                .collect(),
            default_ordinal: def.default_ordinal,
        }
    }
}
