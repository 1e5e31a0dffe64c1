use std::time::Instant;

use crate::config::{ErrorMode, ResolverConfig};
use crate::errors::Result;
use crate::explorer::TypeExplorer;
use crate::lookup::LookupIndex;
use crate::model::{ClassificationDef, EntityDef, EnumDef, RelationshipDef, TypeCategory, TypeDef};
use crate::ops::store::{Registration, TypeDefStore};
use crate::resolve::resolve_store;
use crate::{log_op_end, log_op_error, log_op_start};

/// Assembles a [`TypeExplorer`] from raw definitions.
///
/// Definitions may be added in any order; supertypes do not need to be
/// registered before their subtypes. `resolve` consumes the builder, so an
/// explorer can only be resolved once and never receives further additions.
#[derive(Debug, Clone, Default)]
pub struct TypeExplorerBuilder {
    store: TypeDefStore,
    lookup: LookupIndex,
    error_mode: ErrorMode,
}

impl TypeExplorerBuilder {
    /// Create an empty builder
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            store: TypeDefStore::new(config.duplicate_policy, config.source_label()),
            lookup: LookupIndex::new(),
            error_mode: config.error_mode,
        }
    }

    /// Create an empty builder with default configuration and the given source label
    pub fn with_source(label: impl Into<String>) -> Self {
        Self::new(ResolverConfig::with_source(label))
    }

    pub fn source_label(&self) -> &str {
        self.store.source_label()
    }

    /// Read access to the registered definitions
    pub fn store(&self) -> &TypeDefStore {
        &self.store
    }

    /// Register an entity type definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` for a conflicting registration under
    /// the reject policy.
    pub fn add_entity_def(&mut self, def: EntityDef) -> Result<Registration> {
        let (name, guid) = (def.name.clone(), def.guid.clone());
        let registration = self.store.insert_entity(def)?;
        if registration == Registration::Added {
            self.lookup.register_entity(&name, &guid);
        }
        Ok(registration)
    }

    /// Register a relationship type definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` for a conflicting registration under
    /// the reject policy.
    pub fn add_relationship_def(&mut self, def: RelationshipDef) -> Result<Registration> {
        let (name, guid) = (def.name.clone(), def.guid.clone());
        let registration = self.store.insert_relationship(def)?;
        if registration == Registration::Added {
            self.lookup.register_relationship(&name, &guid);
        }
        Ok(registration)
    }

    /// Register a classification type definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` for a conflicting registration under
    /// the reject policy.
    pub fn add_classification_def(&mut self, def: ClassificationDef) -> Result<Registration> {
        self.store.insert_classification(def)
    }

    /// Register an enumeration definition
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` for a conflicting registration under
    /// the reject policy.
    pub fn add_enum_def(&mut self, def: EnumDef) -> Result<Registration> {
        self.store.insert_enum(def)
    }

    /// Register a definition of any category
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` for a conflicting registration under
    /// the reject policy.
    pub fn add_type_def(&mut self, def: TypeDef) -> Result<Registration> {
        match def {
            TypeDef::Entity(d) => self.add_entity_def(d),
            TypeDef::Relationship(d) => self.add_relationship_def(d),
            TypeDef::Classification(d) => self.add_classification_def(d),
            TypeDef::Enum(d) => self.add_enum_def(d),
        }
    }

    /// Register every definition of an unordered sequence
    ///
    /// # Errors
    ///
    /// Stops at the first rejected registration.
    pub fn extend<I>(&mut self, defs: I) -> Result<()>
    where
        I: IntoIterator<Item = TypeDef>,
    {
        for def in defs {
            self.add_type_def(def)?;
        }
        Ok(())
    }

    /// Resolve the registered definitions into an immutable explorer
    ///
    /// # Errors
    ///
    /// Returns the first structural error (fail-fast) or `ResolutionFailed`
    /// wrapping every structural error of the failing pass (collect-all).
    /// No explorer is produced on failure.
    pub fn resolve(self) -> Result<TypeExplorer> {
        let source_label = self.store.source_label().to_string();
        log_op_start!(
            "type_explorer_resolve",
            source = source_label.as_str(),
            entity_count = self.store.count(TypeCategory::Entity) as u64,
            relationship_count = self.store.count(TypeCategory::Relationship) as u64,
            classification_count = self.store.count(TypeCategory::Classification) as u64,
            enum_count = self.store.count(TypeCategory::Enum) as u64
        );
        let start = Instant::now();

        let resolved = resolve_store(self.store, self.error_mode).map_err(|e| {
            log_op_error!(
                "type_explorer_resolve",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                source = source_label.as_str()
            );
            e
        })?;

        let explorer = TypeExplorer::from_resolved(source_label, resolved, self.lookup);
        log_op_end!(
            "type_explorer_resolve",
            duration_ms = start.elapsed().as_millis() as u64,
            source = explorer.source_label()
        );

        Ok(explorer)
    }
}
