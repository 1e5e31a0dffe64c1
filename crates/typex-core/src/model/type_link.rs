use serde::{Deserialize, Serialize};

/// Reference from one type definition to another.
///
/// Both parts are optional because repositories sometimes supply a link with
/// only one of them filled in. Resolution always goes through the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeLink {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub guid: Option<String>,
}

impl TypeLink {
    /// Create a link carrying both a name and a guid
    pub fn new(name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            guid: Some(guid.into()),
        }
    }

    /// Create a link carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            guid: None,
        }
    }

    /// The referenced type name, treating an empty string as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref()
    }
}
