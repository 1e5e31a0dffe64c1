use typex_core::{
    AttributeDef, ClassificationDef, EntityDef, RelationshipDef, TypeExplorer, TypeExplorerBuilder,
};

#[allow(dead_code)]
pub const SOURCE: &str = "test-cohort";

/// Create a builder labelled with the shared test source
#[allow(dead_code)]
pub fn new_builder() -> TypeExplorerBuilder {
    TypeExplorer::builder(SOURCE)
}

/// Entity type with one string attribute per given name
#[allow(dead_code)]
pub fn entity(name: &str, supertype: Option<&str>, attributes: &[&str]) -> EntityDef {
    let mut def = EntityDef::new(name, format!("guid-{}", name));
    if let Some(sup) = supertype {
        def = def.with_supertype(sup);
    }
    for attr in attributes {
        def = def.with_attribute(AttributeDef::new(*attr, "string"));
    }
    def
}

#[allow(dead_code)]
pub fn relationship(name: &str, end1: &str, end2: &str) -> RelationshipDef {
    RelationshipDef::between(name, format!("guid-{}", name), end1, end2)
}

#[allow(dead_code)]
pub fn classification(name: &str, supertype: Option<&str>, valid_for: &[&str]) -> ClassificationDef {
    let mut def = ClassificationDef::new(name, format!("guid-{}", name));
    if let Some(sup) = supertype {
        def = def.with_supertype(sup);
    }
    for entity in valid_for {
        def = def.with_valid_entity_type(*entity);
    }
    def
}

/// Attribute names in order
#[allow(dead_code)]
pub fn attribute_names(attributes: &[AttributeDef]) -> Vec<&str> {
    attributes.iter().map(|a| a.name.as_str()).collect()
}

/// A small open-metadata style model:
///
/// ```text
/// Referenceable
/// ├── Asset
/// │   ├── DataSet
/// │   │   └── Table
/// │   └── Process
/// └── Actor
///     └── Person
/// ```
///
/// AssetOwnership links Actor and Asset; Confidentiality is valid for Asset;
/// Memento is valid for Referenceable; SubjectArea specialises Memento.
#[allow(dead_code)]
pub fn setup_catalog(builder: &mut TypeExplorerBuilder) {
    builder
        .add_entity_def(entity("Referenceable", None, &["qualifiedName"]))
        .unwrap();
    builder
        .add_entity_def(entity("Asset", Some("Referenceable"), &["displayName", "owner"]))
        .unwrap();
    builder
        .add_entity_def(entity("DataSet", Some("Asset"), &["format"]))
        .unwrap();
    builder
        .add_entity_def(entity("Table", Some("DataSet"), &["columnCount"]))
        .unwrap();
    builder
        .add_entity_def(entity("Process", Some("Asset"), &[]))
        .unwrap();
    builder
        .add_entity_def(entity("Actor", Some("Referenceable"), &["contact"]))
        .unwrap();
    builder
        .add_entity_def(entity("Person", Some("Actor"), &["fullName"]))
        .unwrap();

    builder
        .add_relationship_def(relationship("AssetOwnership", "Actor", "Asset"))
        .unwrap();
    builder
        .add_relationship_def(relationship("ProcessInput", "Process", "DataSet"))
        .unwrap();

    builder
        .add_classification_def(classification("Confidentiality", None, &["Asset"]))
        .unwrap();
    builder
        .add_classification_def(classification("Memento", None, &["Referenceable"]))
        .unwrap();
    builder
        .add_classification_def(
            classification("SubjectArea", Some("Memento"), &["DataSet"])
                .with_attribute(AttributeDef::new("areaName", "string")),
        )
        .unwrap();
}

/// Resolve the catalog model
#[allow(dead_code)]
pub fn catalog() -> TypeExplorer {
    let mut builder = new_builder();
    setup_catalog(&mut builder);
    builder.resolve().unwrap()
}
