use serde::{Deserialize, Serialize};

use super::{AttributeDef, SupertypedDef, TypeLink};

/// Raw classification type definition.
///
/// `valid_entity_types` lists the entity types the classification may be
/// attached to; subtypes of those entity types are covered implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationDef {
    pub name: String,
    pub guid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<TypeLink>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    #[serde(default)]
    pub valid_entity_types: Vec<TypeLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClassificationDef {
    pub fn new(name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            supertype: None,
            attributes: Vec::new(),
            valid_entity_types: Vec::new(),
            description: None,
        }
    }

    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.supertype = Some(TypeLink::named(name));
        self
    }

    pub fn with_supertype_link(mut self, link: TypeLink) -> Self {
        self.supertype = Some(link);
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Declare an entity type (by name) this classification is valid for
    pub fn with_valid_entity_type(mut self, name: impl Into<String>) -> Self {
        self.valid_entity_types.push(TypeLink::named(name));
        self
    }

    pub fn with_valid_entity_link(mut self, link: TypeLink) -> Self {
        self.valid_entity_types.push(link);
        self
    }
}

impl SupertypedDef for ClassificationDef {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn supertype(&self) -> Option<&TypeLink> {
        self.supertype.as_ref()
    }

    fn own_attributes(&self) -> &[AttributeDef] {
        &self.attributes
    }
}
