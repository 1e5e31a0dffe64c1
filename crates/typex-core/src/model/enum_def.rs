use serde::{Deserialize, Serialize};

/// One symbol of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumElement {
    pub ordinal: i32,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw enumeration definition: an ordinal <-> symbol mapping.
///
/// Enumerations take no part in resolution; they are carried through to
/// the explorer for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: String,
    pub guid: String,
    #[serde(default)]
    pub elements: Vec<EnumElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ordinal: Option<i32>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            elements: Vec::new(),
            default_ordinal: None,
        }
    }

    pub fn with_element(mut self, ordinal: i32, value: impl Into<String>) -> Self {
        self.elements.push(EnumElement {
            ordinal,
            value: value.into(),
            description: None,
        });
        self
    }

    pub fn with_default_ordinal(mut self, ordinal: i32) -> Self {
        self.default_ordinal = Some(ordinal);
        self
    }

    /// Symbol for an ordinal, if the enumeration defines it
    pub fn symbol_for(&self, ordinal: i32) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.ordinal == ordinal)
            .map(|e| e.value.as_str())
    }

    /// Ordinal for a symbol, if the enumeration defines it
    pub fn ordinal_for(&self, symbol: &str) -> Option<i32> {
        self.elements
            .iter()
            .find(|e| e.value == symbol)
            .map(|e| e.ordinal)
    }

    /// Symbol of the default ordinal
    pub fn default_value(&self) -> Option<&str> {
        self.default_ordinal.and_then(|o| self.symbol_for(o))
    }
}
