//! Resolver-computed views over raw definitions
//!
//! Descriptors live in an arena (`DescriptorTable`) indexed by type name.
//! Hierarchy edges are stored as names and resolved through the index, so
//! subtypes may register before their supertypes.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{AttributeDef, SupertypedDef};

pub mod classification;
pub mod entity;
pub mod relationship;

pub use classification::ClassificationDescriptor;
pub use entity::EntityDescriptor;
pub use relationship::RelationshipDescriptor;

/// Slot of a descriptor within its table
pub type Slot = usize;

/// Descriptors of a specialization hierarchy (entities, classifications).
///
/// The resolution passes that compute subtype sets and inherited attributes
/// are written once against this trait.
pub trait HierarchyDescriptor {
    type Def: SupertypedDef;

    fn def(&self) -> &Self::Def;
    fn sub_type_names(&self) -> &BTreeSet<String>;
    fn add_sub_type_name(&mut self, name: &str, direct: bool);
    fn set_inherited_attributes(&mut self, attributes: Vec<AttributeDef>);
}

/// Arena of descriptors with a name -> slot index
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorTable<D> {
    slots: Vec<D>,
    index: BTreeMap<String, Slot>,
}

impl<D> Default for DescriptorTable<D> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<D> DescriptorTable<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor under a name; a name already present keeps its slot
    pub fn insert(&mut self, name: &str, descriptor: D) -> Slot {
        if let Some(&slot) = self.index.get(name) {
            return slot;
        }
        let slot = self.slots.len();
        self.slots.push(descriptor);
        self.index.insert(name.to_string(), slot);
        slot
    }

    pub fn slot_of(&self, name: &str) -> Option<Slot> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&D> {
        self.slot_of(name).map(|slot| &self.slots[slot])
    }

    pub fn at(&self, slot: Slot) -> &D {
        &self.slots[slot]
    }

    pub fn at_mut(&mut self, slot: Slot) -> &mut D {
        &mut self.slots[slot]
    }

    /// Names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Slots in name order
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.index.values().copied()
    }

    /// Descriptors in name order
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.index.values().map(move |&slot| &self.slots[slot])
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
