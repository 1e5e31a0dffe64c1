use std::collections::BTreeSet;

use serde::Serialize;

use super::HierarchyDescriptor;
use crate::model::{AttributeDef, ClassificationDef};

/// Classification type definition decorated with resolver-computed fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationDescriptor {
    def: ClassificationDef,
    direct_sub_type_names: BTreeSet<String>,
    sub_type_names: BTreeSet<String>,
    inherited_attributes: Vec<AttributeDef>,
    valid_entity_type_names: BTreeSet<String>,
}

impl ClassificationDescriptor {
    pub fn new(def: ClassificationDef) -> Self {
        Self {
            def,
            direct_sub_type_names: BTreeSet::new(),
            sub_type_names: BTreeSet::new(),
            inherited_attributes: Vec::new(),
            valid_entity_type_names: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn guid(&self) -> &str {
        &self.def.guid
    }

    pub fn classification_def(&self) -> &ClassificationDef {
        &self.def
    }

    pub fn supertype_name(&self) -> Option<&str> {
        self.def.supertype.as_ref().and_then(|l| l.name())
    }

    pub fn direct_sub_type_names(&self) -> &BTreeSet<String> {
        &self.direct_sub_type_names
    }

    pub fn sub_type_names(&self) -> &BTreeSet<String> {
        &self.sub_type_names
    }

    pub fn inherited_attributes(&self) -> &[AttributeDef] {
        &self.inherited_attributes
    }

    /// Declared valid entity types plus all of their subtypes
    pub fn valid_entity_type_names(&self) -> &BTreeSet<String> {
        &self.valid_entity_type_names
    }

    pub(crate) fn add_valid_entity_type_name(&mut self, name: &str) {
        self.valid_entity_type_names.insert(name.to_string());
    }
}

impl HierarchyDescriptor for ClassificationDescriptor {
    type Def = ClassificationDef;

    fn def(&self) -> &ClassificationDef {
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
