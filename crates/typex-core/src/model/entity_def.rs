use serde::{Deserialize, Serialize};

use super::{AttributeDef, SupertypedDef, TypeLink};

/// Raw entity type definition as supplied by a metadata repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDef {
    pub name: String,
    pub guid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<TypeLink>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntityDef {
    /// Create a root entity type with no attributes
    pub fn new(name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            supertype: None,
            attributes: Vec::new(),
            description: None,
        }
    }

    /// Set the supertype by name
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

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl SupertypedDef for EntityDef {
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
