//! Bidirectional name <-> guid index for entity and relationship types
//!
//! Populated as definitions register, independent of resolution. Unknown keys
//! return `None`. A name or guid maps to at most one counterpart: the first
//! pair wins and a later pair reusing either key is not indexed.

use std::collections::HashMap;

/// One name <-> guid mapping pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NameGuidMap {
    guid_by_name: HashMap<String, String>,
    name_by_guid: HashMap<String, String>,
}

impl NameGuidMap {
    /// Record a pair unless its name or guid is already mapped.
    ///
    /// The two maps stay exact inverses. Returns false when the pair clashes
    /// with an existing mapping; pairs with an empty key are never indexed.
    fn register(&mut self, name: &str, guid: &str) -> bool {
        if name.is_empty() || guid.is_empty() {
            return true;
        }
        if self.guid_by_name.contains_key(name) || self.name_by_guid.contains_key(guid) {
            return false;
        }
        self.guid_by_name.insert(name.to_string(), guid.to_string());
        self.name_by_guid.insert(guid.to_string(), name.to_string());
        true
    }
}

fn skipped(category: &str, name: &str, guid: &str) {
    tracing::warn!(
        type_category = category,
        type_name = name,
        guid = guid,
        "lookup pair not indexed: name or guid already mapped"
    );
}

/// Lookup index over entity and relationship types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupIndex {
    entities: NameGuidMap,
    relationships: NameGuidMap,
}

impl LookupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_entity(&mut self, name: &str, guid: &str) {
        if !self.entities.register(name, guid) {
            skipped("entity", name, guid);
        }
    }

    pub fn register_relationship(&mut self, name: &str, guid: &str) {
        if !self.relationships.register(name, guid) {
            skipped("relationship", name, guid);
        }
    }

    pub fn entity_guid(&self, name: &str) -> Option<&str> {
        self.entities.guid_by_name.get(name).map(String::as_str)
    }

    pub fn entity_name(&self, guid: &str) -> Option<&str> {
        self.entities.name_by_guid.get(guid).map(String::as_str)
    }

    pub fn relationship_guid(&self, name: &str) -> Option<&str> {
        self.relationships.guid_by_name.get(name).map(String::as_str)
    }

    pub fn relationship_name(&self, guid: &str) -> Option<&str> {
        self.relationships.name_by_guid.get(guid).map(String::as_str)
    }
}
