use typex_core::errors::{ExError, ExErrorKind, ReferenceKind, TypeXError};
use typex_core::model::{EndPosition, TypeCategory};

#[test]
fn test_missing_supertype_verifiable_by_kind() {
    let err = TypeXError::MissingSupertypeDef {
        type_name: "Asset".to_string(),
        supertype_name: "ReferenceableXYZ".to_string(),
        source_label: "cohort-1".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingSupertypeDef);
    assert_eq!(ex_err.code(), "ERR_MISSING_SUPERTYPE_DEF");
    assert_eq!(ex_err.type_name(), Some("Asset"));
    assert_eq!(ex_err.referenced_name(), Some("ReferenceableXYZ"));
    assert_eq!(ex_err.reference(), Some(ReferenceKind::Supertype));
    assert_eq!(ex_err.source_label(), Some("cohort-1"));
}

#[test]
fn test_missing_end_distinct_from_missing_supertype() {
    let err = TypeXError::MissingEndDef {
        relationship_name: "AssetOwnership".to_string(),
        end: EndPosition::End2,
        entity_type_name: Some("NonExistentRole".to_string()),
        source_label: "cohort-1".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MissingEndDef);
    assert_ne!(ex_err.kind(), ExErrorKind::MissingSupertypeDef);
    assert_eq!(ex_err.reference(), Some(ReferenceKind::RelationshipEnd));
    assert!(ex_err.message().contains("end2"));
}

#[test]
fn test_classification_kinds_separate_from_entity_kinds() {
    let err = TypeXError::MissingClassificationSupertypeName {
        type_name: "Retention".to_string(),
        source_label: "cohort-1".to_string(),
    };

    assert_eq!(err.kind(), ExErrorKind::MissingClassificationSupertypeName);
    assert_ne!(err.kind(), ExErrorKind::MissingSupertypeName);
    assert_eq!(err.reference_kind(), Some(ReferenceKind::Supertype));
}

#[test]
fn test_display_carries_context() {
    let ex_err: ExError = TypeXError::MissingValidEntityDef {
        classification_name: "Confidentiality".to_string(),
        entity_type_name: "Ghost".to_string(),
        source_label: "cohort-9".to_string(),
    }
    .into();

    let rendered = ex_err.to_string();

    assert!(rendered.starts_with("[ERR_MISSING_VALID_ENTITY_DEF]"));
    assert!(rendered.contains("(type: Confidentiality)"));
    assert!(rendered.contains("Ghost"));
    assert!(rendered.contains("(source: cohort-9)"));
}

#[test]
fn test_duplicate_definition_names_category() {
    let err = TypeXError::DuplicateDefinition {
        category: TypeCategory::Classification,
        type_name: "Confidentiality".to_string(),
        source_label: "cohort-1".to_string(),
    };

    assert_eq!(err.kind().code(), "ERR_DUPLICATE_DEFINITION");
    assert!(err.to_string().contains("classification"));
    assert_eq!(err.reference_kind(), None);
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::MissingSupertypeName, "ERR_MISSING_SUPERTYPE_NAME"),
        (ExErrorKind::MissingSupertypeDef, "ERR_MISSING_SUPERTYPE_DEF"),
        (ExErrorKind::SupertypeCycle, "ERR_SUPERTYPE_CYCLE"),
        (ExErrorKind::MissingEndDef, "ERR_MISSING_END_DEF"),
        (ExErrorKind::MissingValidEntityName, "ERR_MISSING_VALID_ENTITY_NAME"),
        (ExErrorKind::MissingValidEntityDef, "ERR_MISSING_VALID_ENTITY_DEF"),
        (ExErrorKind::ResolutionFailed, "ERR_RESOLUTION_FAILED"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
