mod common;

use common::{classification, entity, new_builder, relationship, SOURCE};
use typex_core::model::{EndPosition, RelationshipEndDef, TypeLink};
use typex_core::{
    ClassificationDef, ErrorMode, ExError, ExErrorKind, ReferenceKind, RelationshipDef,
    ResolverConfig, TypeCategory, TypeExplorerBuilder, TypeXError,
};

// ===== SUPERTYPE FAILURES =====

#[test]
fn test_unknown_supertype_fails_with_both_names() {
    let mut builder = new_builder();
    builder
        .add_entity_def(entity("Asset", Some("ReferenceableXYZ"), &[]))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(
        err,
        TypeXError::MissingSupertypeDef {
            type_name: "Asset".to_string(),
            supertype_name: "ReferenceableXYZ".to_string(),
            source_label: SOURCE.to_string(),
        }
    );
    assert_eq!(err.kind(), ExErrorKind::MissingSupertypeDef);
    let msg = err.to_string();
    assert!(msg.contains("Asset"));
    assert!(msg.contains("ReferenceableXYZ"));
    assert!(msg.contains(SOURCE));
}

#[test]
fn test_unnamed_supertype_link() {
    let mut builder = new_builder();
    builder
        .add_entity_def(entity("Asset", None, &[]).with_supertype_link(TypeLink {
            name: None,
            guid: Some("guid-Referenceable".to_string()),
        }))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingSupertypeName);
    assert_eq!(err.type_name(), Some("Asset"));
    assert_eq!(err.reference_kind(), Some(ReferenceKind::Supertype));
}

#[test]
fn test_broken_ancestor_reported_against_ancestor() {
    let mut builder = new_builder();
    builder
        .add_entity_def(entity("Asset", Some("Missing"), &[]))
        .unwrap();
    builder
        .add_entity_def(entity("DataSet", Some("Asset"), &[]))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(err.type_name(), Some("Asset"));
    assert_eq!(err.referenced_name(), Some("Missing"));
}

#[test]
fn test_supertype_cycle_is_detected() {
    let mut builder = new_builder();
    builder.add_entity_def(entity("A", Some("B"), &[])).unwrap();
    builder.add_entity_def(entity("B", Some("A"), &[])).unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(
        err,
        TypeXError::SupertypeCycle {
            category: TypeCategory::Entity,
            type_name: "A".to_string(),
            source_label: SOURCE.to_string(),
        }
    );
}

#[test]
fn test_classification_supertype_uses_classification_kinds() {
    let mut builder = new_builder();
    builder
        .add_classification_def(classification("Retention", Some("Governance"), &[]))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(
        err,
        TypeXError::MissingClassificationSupertypeDef {
            type_name: "Retention".to_string(),
            supertype_name: "Governance".to_string(),
            source_label: SOURCE.to_string(),
        }
    );
}

#[test]
fn test_classification_supertype_must_be_a_classification() {
    let mut builder = new_builder();
    builder.add_entity_def(entity("Asset", None, &[])).unwrap();
    builder
        .add_classification_def(classification("Retention", Some("Asset"), &[]))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingClassificationSupertypeDef);
}

// ===== RELATIONSHIP END FAILURES =====

#[test]
fn test_unknown_relationship_end() {
    let mut builder = new_builder();
    builder.add_entity_def(entity("Person", None, &[])).unwrap();
    builder
        .add_relationship_def(relationship("AssetOwnership", "Person", "NonExistentRole"))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(
        err,
        TypeXError::MissingEndDef {
            relationship_name: "AssetOwnership".to_string(),
            end: EndPosition::End2,
            entity_type_name: Some("NonExistentRole".to_string()),
            source_label: SOURCE.to_string(),
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("AssetOwnership"));
    assert!(msg.contains("NonExistentRole"));
}

#[test]
fn test_unnamed_relationship_end() {
    let mut builder = new_builder();
    builder.add_entity_def(entity("Person", None, &[])).unwrap();
    builder
        .add_relationship_def(RelationshipDef::new(
            "Orphan",
            "guid-orphan",
            RelationshipEndDef::from_link(TypeLink::default()),
            RelationshipEndDef::new("Person"),
        ))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingEndDef);
    assert_eq!(err.referenced_name(), None);
    assert_eq!(err.reference_kind(), Some(ReferenceKind::RelationshipEnd));
}

// ===== VALID ENTITY FAILURES =====

#[test]
fn test_unknown_valid_entity() {
    let mut builder = new_builder();
    builder
        .add_classification_def(classification("Confidentiality", None, &["Ghost"]))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(
        err,
        TypeXError::MissingValidEntityDef {
            classification_name: "Confidentiality".to_string(),
            entity_type_name: "Ghost".to_string(),
            source_label: SOURCE.to_string(),
        }
    );
}

#[test]
fn test_unnamed_valid_entity() {
    let mut builder = new_builder();
    builder
        .add_classification_def(
            ClassificationDef::new("Confidentiality", "guid-c")
                .with_valid_entity_link(TypeLink::default()),
        )
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingValidEntityName);
    assert_eq!(err.reference_kind(), Some(ReferenceKind::ValidEntity));
}

// ===== FAIL-FAST ORDERING =====

#[test]
fn test_fail_fast_reports_first_in_name_order() {
    let mut builder = new_builder();
    builder.add_entity_def(entity("Zeta", Some("Nope1"), &[])).unwrap();
    builder.add_entity_def(entity("Alpha", Some("Nope2"), &[])).unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(err.type_name(), Some("Alpha"));
}

#[test]
fn test_entity_errors_win_over_later_passes() {
    let mut builder = new_builder();
    builder.add_entity_def(entity("Asset", Some("Nope"), &[])).unwrap();
    builder
        .add_relationship_def(relationship("R", "Asset", "Ghost"))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingSupertypeDef);
}

// ===== COLLECT-ALL =====

fn collecting_builder() -> TypeExplorerBuilder {
    TypeExplorerBuilder::new(ResolverConfig::with_source(SOURCE).error_mode(ErrorMode::CollectAll))
}

#[test]
fn test_collect_all_reports_every_error_of_the_pass() {
    let mut builder = collecting_builder();
    builder.add_entity_def(entity("Person", None, &[])).unwrap();
    builder
        .add_relationship_def(relationship("R1", "Ghost1", "Person"))
        .unwrap();
    builder
        .add_relationship_def(relationship("R2", "Ghost2", "Ghost3"))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    let TypeXError::ResolutionFailed { source_label, errors } = &err else {
        panic!("expected ResolutionFailed, got {:?}", err);
    };
    assert_eq!(source_label, SOURCE);
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.kind() == ExErrorKind::MissingEndDef));
    assert_eq!(err.structural_errors().len(), 3);
}

#[test]
fn test_collect_all_dedupes_shared_broken_ancestor() {
    let mut builder = collecting_builder();
    builder.add_entity_def(entity("Asset", Some("Missing"), &[])).unwrap();
    builder.add_entity_def(entity("DataSet", Some("Asset"), &[])).unwrap();
    builder.add_entity_def(entity("Table", Some("DataSet"), &[])).unwrap();
    builder.add_entity_def(entity("Orphan", Some("Gone"), &[])).unwrap();

    let err = builder.resolve().unwrap_err();

    let names: Vec<_> = err
        .structural_errors()
        .iter()
        .map(|e| e.type_name().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["Asset", "Orphan"]);
}

#[test]
fn test_collect_all_stops_before_dependent_pass() {
    let mut builder = collecting_builder();
    builder.add_entity_def(entity("Asset", Some("Nope"), &[])).unwrap();
    builder
        .add_classification_def(classification("C", None, &["Ghost"]))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    let errors = err.structural_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ExErrorKind::MissingSupertypeDef);
}

#[test]
fn test_collect_all_combines_classification_sub_passes() {
    let mut builder = collecting_builder();
    builder.add_entity_def(entity("Asset", None, &[])).unwrap();
    builder
        .add_classification_def(classification("C1", None, &["Ghost"]))
        .unwrap();
    builder
        .add_classification_def(classification("C2", Some("Nope"), &["Asset"]))
        .unwrap();

    let err = builder.resolve().unwrap_err();

    let kinds: Vec<_> = err.structural_errors().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ExErrorKind::MissingValidEntityDef,
            ExErrorKind::MissingClassificationSupertypeDef
        ]
    );
}

#[test]
fn test_collect_all_succeeds_on_consistent_input() {
    let mut builder = collecting_builder();
    common::setup_catalog(&mut builder);

    assert!(builder.resolve().is_ok());
}

// ===== STRUCTURED CONVERSION =====

#[test]
fn test_structured_error_carries_source_label() {
    let mut builder = TypeExplorerBuilder::with_source("cohort-east");
    builder
        .add_classification_def(classification("Confidentiality", None, &["Ghost"]))
        .unwrap();

    let ex: ExError = builder.resolve().unwrap_err().into();

    assert_eq!(ex.code(), "ERR_MISSING_VALID_ENTITY_DEF");
    assert_eq!(ex.type_name(), Some("Confidentiality"));
    assert_eq!(ex.referenced_name(), Some("Ghost"));
    assert_eq!(ex.source_label(), Some("cohort-east"));
}
