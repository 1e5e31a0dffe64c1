use serde::{Deserialize, Serialize};

/// How many values an attribute may hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeCardinality {
    AtMostOne,
    ExactlyOne,
    AtLeastOne,
    AnyNumber,
    #[default]
    Unknown,
}

/// Attribute declared by an entity or classification type.
///
/// Attributes are carried verbatim from the source definition; resolution
/// only copies them into the inheriting types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDef {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub cardinality: AttributeCardinality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AttributeDef {
    /// Create an optional single-valued attribute
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            cardinality: AttributeCardinality::AtMostOne,
            description: None,
        }
    }

    pub fn with_cardinality(mut self, cardinality: AttributeCardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
