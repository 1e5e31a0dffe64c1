use std::collections::BTreeSet;

use serde::Serialize;

use super::HierarchyDescriptor;
use crate::model::{AttributeDef, EntityDef};

/// Entity type definition decorated with resolver-computed fields.
///
/// `inherited_relationships` and `inherited_classifications` are the
/// effective sets: they include what is declared directly on this type as
/// well as everything propagated from its supertypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDescriptor {
    def: EntityDef,
    direct_sub_type_names: BTreeSet<String>,
    sub_type_names: BTreeSet<String>,
    inherited_attributes: Vec<AttributeDef>,
    direct_relationships: BTreeSet<String>,
    inherited_relationships: BTreeSet<String>,
    direct_classifications: BTreeSet<String>,
    inherited_classifications: BTreeSet<String>,
}

impl EntityDescriptor {
    pub fn new(def: EntityDef) -> Self {
        Self {
            def,
            direct_sub_type_names: BTreeSet::new(),
            sub_type_names: BTreeSet::new(),
            inherited_attributes: Vec::new(),
            direct_relationships: BTreeSet::new(),
            inherited_relationships: BTreeSet::new(),
            direct_classifications: BTreeSet::new(),
            inherited_classifications: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn guid(&self) -> &str {
        &self.def.guid
    }

    pub fn entity_def(&self) -> &EntityDef {
        &self.def
    }

    pub fn supertype_name(&self) -> Option<&str> {
        self.def.supertype.as_ref().and_then(|l| l.name())
    }

    /// Types that declare this one as their supertype
    pub fn direct_sub_type_names(&self) -> &BTreeSet<String> {
        &self.direct_sub_type_names
    }

    /// Every type whose supertype chain includes this one
    pub fn sub_type_names(&self) -> &BTreeSet<String> {
        &self.sub_type_names
    }

    /// Ancestor attributes (root-most first) followed by this type's own
    pub fn inherited_attributes(&self) -> &[AttributeDef] {
        &self.inherited_attributes
    }

    pub fn direct_relationships(&self) -> &BTreeSet<String> {
        &self.direct_relationships
    }

    pub fn inherited_relationships(&self) -> &BTreeSet<String> {
        &self.inherited_relationships
    }

    pub fn direct_classifications(&self) -> &BTreeSet<String> {
        &self.direct_classifications
    }

    pub fn inherited_classifications(&self) -> &BTreeSet<String> {
        &self.inherited_classifications
    }

    pub(crate) fn add_direct_relationship(&mut self, name: &str) {
        self.direct_relationships.insert(name.to_string());
    }

    pub(crate) fn add_inherited_relationship(&mut self, name: &str) {
        self.inherited_relationships.insert(name.to_string());
    }

    pub(crate) fn add_direct_classification(&mut self, name: &str) {
        self.direct_classifications.insert(name.to_string());
    }

    pub(crate) fn add_inherited_classification(&mut self, name: &str) {
        self.inherited_classifications.insert(name.to_string());
    }
}

impl HierarchyDescriptor for EntityDescriptor {
    type Def = EntityDef;

    fn def(&self) -> &EntityDef {
        &self.def
    }

    fn sub_type_names(&self) -> &BTreeSet<String> {
        &self.sub_type_names
    }

    fn add_sub_type_name(&mut self, name: &str, direct: bool) {
        if direct {
            self.direct_sub_type_names.insert(name.to_string());
        }
        self.sub_type_names.insert(name.to_string());
    }

    fn set_inherited_attributes(&mut self, attributes: Vec<AttributeDef>) {
        self.inherited_attributes = attributes;
    }
}
