mod common;

use common::{attribute_names, catalog, entity, new_builder, SOURCE};
use std::collections::BTreeSet;

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ===== CONCRETE SCENARIO =====

#[test]
fn test_asset_inherits_referenceable_attributes() {
    let mut builder = new_builder();
    builder
        .add_entity_def(entity("Referenceable", None, &["qualifiedName"]))
        .unwrap();
    builder
        .add_entity_def(entity("Asset", Some("Referenceable"), &["displayName"]))
        .unwrap();

    let explorer = builder.resolve().unwrap();

    let asset = explorer.entity("Asset").unwrap();
    assert_eq!(
        attribute_names(asset.inherited_attributes()),
        vec!["qualifiedName", "displayName"]
    );
    let root = explorer.entity("Referenceable").unwrap();
    assert_eq!(root.sub_type_names(), &names(&["Asset"]));
}

#[test]
fn test_subtype_registered_before_supertype() {
    let mut builder = new_builder();
    builder
        .add_entity_def(entity("Asset", Some("Referenceable"), &["displayName"]))
        .unwrap();
    builder
        .add_entity_def(entity("Referenceable", None, &["qualifiedName"]))
        .unwrap();

    let explorer = builder.resolve().unwrap();

    assert_eq!(
        attribute_names(explorer.entity("Asset").unwrap().inherited_attributes()),
        vec!["qualifiedName", "displayName"]
    );
}

// ===== SUBTYPE SETS =====

#[test]
fn test_sub_type_names_are_transitive() {
    let explorer = catalog();

    let root = explorer.entity("Referenceable").unwrap();
    assert_eq!(
        root.sub_type_names(),
        &names(&["Actor", "Asset", "DataSet", "Person", "Process", "Table"])
    );
    assert_eq!(root.direct_sub_type_names(), &names(&["Actor", "Asset"]));

    let asset = explorer.entity("Asset").unwrap();
    assert_eq!(
        asset.sub_type_names(),
        &names(&["DataSet", "Process", "Table"])
    );
    assert!(explorer.entity("Table").unwrap().sub_type_names().is_empty());
}

#[test]
fn test_supertype_chain_terminates_at_root() {
    let explorer = catalog();

    assert_eq!(
        explorer.entity_supertype_chain("Table"),
        vec!["Table", "DataSet", "Asset", "Referenceable"]
    );
    assert_eq!(explorer.entity_supertype_chain("Referenceable"), vec!["Referenceable"]);
}

#[test]
fn test_is_subtype_of() {
    let explorer = catalog();

    assert!(explorer.is_subtype_of("Table", "Referenceable"));
    assert!(explorer.is_subtype_of("Person", "Actor"));
    assert!(!explorer.is_subtype_of("Person", "Asset"));
    assert!(!explorer.is_subtype_of("Referenceable", "Table"));
}

// ===== ATTRIBUTE INHERITANCE =====

#[test]
fn test_deep_attribute_order_is_root_first() {
    let explorer = catalog();

    assert_eq!(
        attribute_names(explorer.entity("Table").unwrap().inherited_attributes()),
        vec!["qualifiedName", "displayName", "owner", "format", "columnCount"]
    );
}

#[test]
fn test_type_without_own_attributes_inherits_all() {
    let explorer = catalog();

    assert_eq!(
        attribute_names(explorer.entity("Process").unwrap().inherited_attributes()),
        vec!["qualifiedName", "displayName", "owner"]
    );
}

#[test]
fn test_raw_definition_is_untouched() {
    let explorer = catalog();

    let table = explorer.entity("Table").unwrap();
    assert_eq!(attribute_names(&table.entity_def().attributes), vec!["columnCount"]);
    assert_eq!(table.guid(), "guid-Table");
}

// ===== LOOKUP =====

#[test]
fn test_name_guid_translation() {
    let explorer = catalog();

    assert_eq!(explorer.entity_guid_for_name("Asset"), Some("guid-Asset"));
    assert_eq!(explorer.entity_name_for_guid("guid-Asset"), Some("Asset"));
    assert_eq!(
        explorer.relationship_guid_for_name("AssetOwnership"),
        Some("guid-AssetOwnership")
    );
    assert_eq!(
        explorer.relationship_name_for_guid("guid-AssetOwnership"),
        Some("AssetOwnership")
    );
    assert_eq!(explorer.entity_guid_for_name("Unknown"), None);
    assert_eq!(explorer.entity_name_for_guid("guid-AssetOwnership"), None);
}

#[test]
fn test_enumeration_and_summary() {
    let explorer = catalog();

    let summary = explorer.summary();
    assert_eq!(summary.entity_types, 7);
    assert_eq!(summary.relationship_types, 2);
    assert_eq!(summary.classification_types, 3);
    assert_eq!(summary.enum_types, 0);
    assert_eq!(explorer.entities().count(), 7);
    assert_eq!(explorer.source_label(), SOURCE);
}

// ===== IDEMPOTENCE =====

#[test]
fn test_independent_resolutions_are_content_equal() {
    let first = catalog();
    let second = catalog();

    let a: Vec<_> = first.entities().cloned().collect();
    let b: Vec<_> = second.entities().cloned().collect();
    assert_eq!(a, b);

    let a: Vec<_> = first.classifications().cloned().collect();
    let b: Vec<_> = second.classifications().cloned().collect();
    assert_eq!(a, b);
}

#[test]
fn test_registration_order_does_not_matter() {
    let defs = vec![
        entity("Referenceable", None, &["qualifiedName"]),
        entity("Asset", Some("Referenceable"), &["displayName"]),
        entity("DataSet", Some("Asset"), &["format"]),
    ];

    let mut forward = new_builder();
    for d in defs.iter().cloned() {
        forward.add_entity_def(d).unwrap();
    }
    let mut backward = new_builder();
    for d in defs.into_iter().rev() {
        backward.add_entity_def(d).unwrap();
    }

    let forward = forward.resolve().unwrap();
    let backward = backward.resolve().unwrap();
    assert_eq!(
        forward.entities().collect::<Vec<_>>(),
        backward.entities().collect::<Vec<_>>()
    );
}
