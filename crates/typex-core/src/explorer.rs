//! Read-only query surface over a resolved type system
//!
//! A `TypeExplorer` is only produced by a successful
//! [`TypeExplorerBuilder::resolve`](crate::ops::TypeExplorerBuilder::resolve)
//! and never changes afterwards. No query mutates or memoizes, so a shared
//! explorer can serve any number of concurrent readers.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::descriptors::{
    ClassificationDescriptor, DescriptorTable, EntityDescriptor, RelationshipDescriptor,
};
use crate::lookup::LookupIndex;
use crate::model::{EndPosition, EnumDef};
use crate::ops::TypeExplorerBuilder;
use crate::resolve::Resolved;

/// Number of resolved types per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExplorerSummary {
    pub entity_types: usize,
    pub relationship_types: usize,
    pub classification_types: usize,
    pub enum_types: usize,
}

/// Resolved, immutable model of a type system
#[derive(Debug, Clone)]
pub struct TypeExplorer {
    source_label: String,
    entities: DescriptorTable<EntityDescriptor>,
    relationships: DescriptorTable<RelationshipDescriptor>,
    classifications: DescriptorTable<ClassificationDescriptor>,
    enums: BTreeMap<String, EnumDef>,
    lookup: LookupIndex,
}

impl TypeExplorer {
    pub(crate) fn from_resolved(source_label: String, resolved: Resolved, lookup: LookupIndex) -> Self {
        Self {
            source_label,
            entities: resolved.entities,
            relationships: resolved.relationships,
            classifications: resolved.classifications,
            enums: resolved.enums,
            lookup,
        }
    }

    /// Start assembling an explorer for definitions from `source_label`
    pub fn builder(source_label: impl Into<String>) -> TypeExplorerBuilder {
        TypeExplorerBuilder::with_source(source_label)
    }

    /// Label of the repository the definitions came from
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn summary(&self) -> ExplorerSummary {
        ExplorerSummary {
            entity_types: self.entities.len(),
            relationship_types: self.relationships.len(),
            classification_types: self.classifications.len(),
            enum_types: self.enums.len(),
        }
    }

    // ===== Descriptors =====

    pub fn entity(&self, name: &str) -> Option<&EntityDescriptor> {
        self.entities.get(name)
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipDescriptor> {
        self.relationships.get(name)
    }

    pub fn classification(&self, name: &str) -> Option<&ClassificationDescriptor> {
        self.classifications.get(name)
    }

    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enums.get(name)
    }

    /// All entity descriptors in name order
    pub fn entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter()
    }

    pub fn relationships(&self) -> impl Iterator<Item = &RelationshipDescriptor> {
        self.relationships.iter()
    }

    pub fn classifications(&self) -> impl Iterator<Item = &ClassificationDescriptor> {
        self.classifications.iter()
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.enums.values()
    }

    pub fn entity_type_names(&self) -> Vec<&str> {
        self.entities.names().collect()
    }

    pub fn relationship_type_names(&self) -> Vec<&str> {
        self.relationships.names().collect()
    }

    pub fn classification_type_names(&self) -> Vec<&str> {
        self.classifications.names().collect()
    }

    pub fn enum_type_names(&self) -> Vec<&str> {
        self.enums.keys().map(String::as_str).collect()
    }

    // ===== Name <-> guid =====

    pub fn entity_guid_for_name(&self, name: &str) -> Option<&str> {
        self.lookup.entity_guid(name)
    }

    pub fn entity_name_for_guid(&self, guid: &str) -> Option<&str> {
        self.lookup.entity_name(guid)
    }

    pub fn relationship_guid_for_name(&self, name: &str) -> Option<&str> {
        self.lookup.relationship_guid(name)
    }

    pub fn relationship_name_for_guid(&self, guid: &str) -> Option<&str> {
        self.lookup.relationship_name(guid)
    }

    // ===== Hierarchy =====

    /// Entity type and its ancestors, self first; empty for an unknown name
    pub fn entity_supertype_chain(&self, name: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self.entities.get(name);
        while let Some(d) = current {
            chain.push(d.name());
            current = d.supertype_name().and_then(|s| self.entities.get(s));
        }
        chain
    }

    /// Classification type and its ancestors, self first
    pub fn classification_supertype_chain(&self, name: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self.classifications.get(name);
        while let Some(d) = current {
            chain.push(d.name());
            current = d.supertype_name().and_then(|s| self.classifications.get(s));
        }
        chain
    }

    /// True when `sub` is a direct or transitive entity subtype of `sup`
    pub fn is_subtype_of(&self, sub: &str, sup: &str) -> bool {
        self.entities
            .get(sup)
            .is_some_and(|d| d.sub_type_names().contains(sub))
    }

    /// True when `name` is `candidate` or one of its entity subtypes
    pub fn is_type_of(&self, name: &str, candidate: &str) -> bool {
        (name == candidate && self.entities.get(name).is_some()) || self.is_subtype_of(name, candidate)
    }

    // ===== Applicability =====

    /// Relationships that may be anchored on an entity type, inherited included
    pub fn valid_relationships_for_entity(&self, entity: &str) -> Option<&BTreeSet<String>> {
        self.entities.get(entity).map(|d| d.inherited_relationships())
    }

    /// Classifications that may be attached to an entity type, inherited included
    pub fn valid_classifications_for_entity(&self, entity: &str) -> Option<&BTreeSet<String>> {
        self.entities.get(entity).map(|d| d.inherited_classifications())
    }

    /// Entity types a classification may be attached to, subtypes included
    pub fn valid_entities_for_classification(&self, classification: &str) -> Option<&BTreeSet<String>> {
        self.classifications
            .get(classification)
            .map(|d| d.valid_entity_type_names())
    }

    pub fn is_classification_valid_for_entity(&self, classification: &str, entity: &str) -> bool {
        self.entities
            .get(entity)
            .is_some_and(|d| d.inherited_classifications().contains(classification))
    }

    pub fn is_relationship_valid_for_entity(&self, relationship: &str, entity: &str) -> bool {
        self.entities
            .get(entity)
            .is_some_and(|d| d.inherited_relationships().contains(relationship))
    }

    /// Entity type names at (end1, end2) of a relationship type
    pub fn relationship_end_types(&self, name: &str) -> Option<(&str, &str)> {
        let d = self.relationships.get(name)?;
        Some((
            d.end_type_name(EndPosition::End1)?,
            d.end_type_name(EndPosition::End2)?,
        ))
    }
}
