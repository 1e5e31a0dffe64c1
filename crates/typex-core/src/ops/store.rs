use std::collections::BTreeMap;

use crate::config::DuplicatePolicy;
use crate::errors::{Result, TypeXError};
use crate::model::{ClassificationDef, EntityDef, EnumDef, RelationshipDef, TypeCategory};

/// Outcome of registering one definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// First definition under this name
    Added,
    /// Same definition registered again; nothing changed
    Unchanged,
    /// A different definition already held the name and was kept
    Ignored,
}

/// In-memory store for raw type definitions
///
/// Definitions are keyed by name within their category and iterated in name
/// order, so everything derived from the store is deterministic.
/// Not thread-safe - it is only touched while an explorer is being assembled.
#[derive(Debug, Clone, Default)]
pub struct TypeDefStore {
    policy: DuplicatePolicy,
    source_label: String,
    pub(crate) entities: BTreeMap<String, EntityDef>,
    pub(crate) relationships: BTreeMap<String, RelationshipDef>,
    pub(crate) classifications: BTreeMap<String, ClassificationDef>,
    pub(crate) enums: BTreeMap<String, EnumDef>,
}

/// Insert under the duplicate policy, shared by all four categories
fn register<D: PartialEq>(
    map: &mut BTreeMap<String, D>,
    name: &str,
    def: D,
    category: TypeCategory,
    policy: DuplicatePolicy,
    source_label: &str,
) -> Result<Registration> {
    match map.get(name) {
        None => {
            map.insert(name.to_string(), def);
            Ok(Registration::Added)
        }
        Some(existing) if *existing == def => Ok(Registration::Unchanged),
        Some(_) => match policy {
            DuplicatePolicy::Reject => Err(TypeXError::DuplicateDefinition {
                category,
                type_name: name.to_string(),
                source_label: source_label.to_string(),
            }),
            DuplicatePolicy::FirstWriteWins => {
                tracing::warn!(
                    type_category = %category,
                    type_name = name,
                    source = source_label,
                    "ignoring conflicting re-registration"
                );
                Ok(Registration::Ignored)
            }
        },
    }
}

impl TypeDefStore {
    /// Create a new empty store
    pub fn new(policy: DuplicatePolicy, source_label: impl Into<String>) -> Self {
        Self {
            policy,
            source_label: source_label.into(),
            ..Self::default()
        }
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register an entity type definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` under `DuplicatePolicy::Reject` when a
    /// different definition already uses the name.
    pub fn insert_entity(&mut self, def: EntityDef) -> Result<Registration> {
        let name = def.name.clone();
        register(
            &mut self.entities,
            &name,
            def,
            TypeCategory::Entity,
            self.policy,
            &self.source_label,
        )
    }

    /// Register a relationship type definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` on a conflicting registration under `Reject`.
    pub fn insert_relationship(&mut self, def: RelationshipDef) -> Result<Registration> {
        let name = def.name.clone();
        register(
            &mut self.relationships,
            &name,
            def,
            TypeCategory::Relationship,
            self.policy,
            &self.source_label,
        )
    }

    /// Register a classification type definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` on a conflicting registration under `Reject`.
    pub fn insert_classification(&mut self, def: ClassificationDef) -> Result<Registration> {
        let name = def.name.clone();
        register(
            &mut self.classifications,
            &name,
            def,
            TypeCategory::Classification,
            self.policy,
            &self.source_label,
        )
    }

    /// Register an enumeration definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` on a conflicting registration under `Reject`.
    pub fn insert_enum(&mut self, def: EnumDef) -> Result<Registration> {
        let name = def.name.clone();
        register(
            &mut self.enums,
            &name,
            def,
            TypeCategory::Enum,
            self.policy,
            &self.source_label,
        )
    }

    pub fn get_entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(name)
    }

    pub fn get_relationship(&self, name: &str) -> Option<&RelationshipDef> {
        self.relationships.get(name)
    }

    pub fn get_classification(&self, name: &str) -> Option<&ClassificationDef> {
        self.classifications.get(name)
    }

    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enums.get(name)
    }

    /// Number of definitions registered in a category
    pub fn count(&self, category: TypeCategory) -> usize {
        match category {
            TypeCategory::Entity => self.entities.len(),
            TypeCategory::Relationship => self.relationships.len(),
            TypeCategory::Classification => self.classifications.len(),
            TypeCategory::Enum => self.enums.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.relationships.is_empty()
            && self.classifications.is_empty()
            && self.enums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeDef;

    #[test]
    fn test_new_store() {
        let store = TypeDefStore::new(DuplicatePolicy::Reject, "repo");
        assert!(store.is_empty());
        assert_eq!(store.source_label(), "repo");
    }

    #[test]
    fn test_insert_and_get_entity() {
        let mut store = TypeDefStore::new(DuplicatePolicy::Reject, "repo");
        let reg = store
            .insert_entity(EntityDef::new("Asset", "g-asset"))
            .unwrap();

        assert_eq!(reg, Registration::Added);
        assert_eq!(store.get_entity("Asset").unwrap().guid, "g-asset");
        assert_eq!(store.count(TypeCategory::Entity), 1);
        assert!(store.get_entity("Missing").is_none());
    }

    #[test]
    fn test_identical_reregistration_is_noop() {
        let mut store = TypeDefStore::new(DuplicatePolicy::Reject, "repo");
        let def = EntityDef::new("Asset", "g-asset");
        store.insert_entity(def.clone()).unwrap();

        assert_eq!(store.insert_entity(def).unwrap(), Registration::Unchanged);
        assert_eq!(store.count(TypeCategory::Entity), 1);
    }

    #[test]
    fn test_reject_conflicting_definition() {
        let mut store = TypeDefStore::new(DuplicatePolicy::Reject, "repo");
        store.insert_entity(EntityDef::new("Asset", "g-1")).unwrap();

        let err = store
            .insert_entity(EntityDef::new("Asset", "g-2"))
            .unwrap_err();
        assert_eq!(
            err,
            TypeXError::DuplicateDefinition {
                category: TypeCategory::Entity,
                type_name: "Asset".to_string(),
                source_label: "repo".to_string(),
            }
        );
        assert_eq!(store.get_entity("Asset").unwrap().guid, "g-1");
    }

    #[test]
    fn test_first_write_wins_keeps_original() {
        let mut store = TypeDefStore::new(DuplicatePolicy::FirstWriteWins, "repo");
        store.insert_entity(EntityDef::new("Asset", "g-1")).unwrap();

        let reg = store
            .insert_entity(
                EntityDef::new("Asset", "g-1").with_attribute(AttributeDef::new("x", "string")),
            )
            .unwrap();

        assert_eq!(reg, Registration::Ignored);
        assert!(store.get_entity("Asset").unwrap().attributes.is_empty());
    }

    #[test]
    fn test_categories_are_separate_namespaces() {
        let mut store = TypeDefStore::new(DuplicatePolicy::Reject, "repo");
        store.insert_entity(EntityDef::new("Shared", "g-e")).unwrap();
        store
            .insert_classification(ClassificationDef::new("Shared", "g-c"))
            .unwrap();

        assert_eq!(store.count(TypeCategory::Entity), 1);
        assert_eq!(store.count(TypeCategory::Classification), 1);
    }
}
