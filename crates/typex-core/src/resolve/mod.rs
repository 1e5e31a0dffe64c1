//! Three-pass resolution of a definition store into descriptors
//!
//! 1. Entities: subtype back-edges, then attribute inheritance.
//! 2. Relationships: both ends resolved, applicability propagated to subtypes.
//! 3. Classifications: valid-entity applicability propagated to subtypes,
//!    then the classification hierarchy resolved like the entity one.
//!
//! Each pass needs the completed state of the passes before it, so a pass
//! that reports errors stops resolution.

use crate::config::ErrorMode;
use crate::descriptors::{
    ClassificationDescriptor, DescriptorTable, EntityDescriptor, RelationshipDescriptor,
};
use crate::errors::{Result, TypeXError};
use crate::model::{EnumDef, TypeCategory};
use crate::ops::TypeDefStore;

mod classifications;
mod hierarchy;
mod propagate;
mod relationships;

/// Collects structural errors according to the configured mode
pub(crate) struct ErrorSink {
    mode: ErrorMode,
    source_label: String,
    errors: Vec<TypeXError>,
}

impl ErrorSink {
    pub(crate) fn new(mode: ErrorMode, source_label: &str) -> Self {
        Self {
            mode,
            source_label: source_label.to_string(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Fail-fast returns the error; collect-all keeps it and lets the pass continue
    pub(crate) fn record(&mut self, err: TypeXError) -> Result<()> {
        match self.mode {
            ErrorMode::FailFast => Err(err),
            ErrorMode::CollectAll => {
                if !self.errors.contains(&err) {
                    self.errors.push(err);
                }
                Ok(())
            }
        }
    }

    /// End of a pass: fail with everything collected so far
    pub(crate) fn checkpoint(&mut self) -> Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(TypeXError::ResolutionFailed {
            source_label: self.source_label.clone(),
            errors: std::mem::take(&mut self.errors),
        })
    }
}

/// Fully resolved descriptor tables
#[derive(Debug, Clone)]
pub(crate) struct Resolved {
    pub(crate) entities: DescriptorTable<EntityDescriptor>,
    pub(crate) relationships: DescriptorTable<RelationshipDescriptor>,
    pub(crate) classifications: DescriptorTable<ClassificationDescriptor>,
    pub(crate) enums: std::collections::BTreeMap<String, EnumDef>,
}

/// Run all passes over the store
pub(crate) fn resolve_store(store: TypeDefStore, mode: ErrorMode) -> Result<Resolved> {
    let mut sink = ErrorSink::new(mode, store.source_label());

    let mut entities = DescriptorTable::new();
    for (name, def) in store.entities {
        entities.insert(&name, EntityDescriptor::new(def));
    }
    let mut relationships = DescriptorTable::new();
    for (name, def) in store.relationships {
        relationships.insert(&name, RelationshipDescriptor::new(def));
    }
    let mut classifications = DescriptorTable::new();
    for (name, def) in store.classifications {
        classifications.insert(&name, ClassificationDescriptor::new(def));
    }

    // Pass 1
    hierarchy::link_subtypes(&mut entities, TypeCategory::Entity, &mut sink)?;
    sink.checkpoint()?;
    hierarchy::inherit_attributes(&mut entities, TypeCategory::Entity, &mut sink)?;
    sink.checkpoint()?;
    tracing::debug!(entity_count = entities.len(), "entity hierarchy resolved");

    // Pass 2
    relationships::apply_relationships(&relationships, &mut entities, &mut sink)?;
    sink.checkpoint()?;
    tracing::debug!(
        relationship_count = relationships.len(),
        "relationship applicability resolved"
    );

    // Pass 3
    classifications::apply_valid_entities(&mut classifications, &mut entities, &mut sink)?;
    hierarchy::link_subtypes(
        &mut classifications,
        TypeCategory::Classification,
        &mut sink,
    )?;
    sink.checkpoint()?;
    hierarchy::inherit_attributes(
        &mut classifications,
        TypeCategory::Classification,
        &mut sink,
    )?;
    sink.checkpoint()?;
    tracing::debug!(
        classification_count = classifications.len(),
        "classification applicability resolved"
    );

    Ok(Resolved {
        entities,
        relationships,
        classifications,
        enums: store.enums,
    })
}
