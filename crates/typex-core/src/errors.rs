use std::fmt;

use thiserror::Error;

use crate::model::{EndPosition, TypeCategory};

/// Result type alias using TypeXError
pub type Result<T> = std::result::Result<T, TypeXError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every kind maps to a stable error code that callers can match on without
/// parsing messages. All structural kinds describe an inconsistent source
/// type system; none of them is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Entity/classification hierarchy
    MissingSupertypeName,
    MissingSupertypeDef,
    MissingClassificationSupertypeName,
    MissingClassificationSupertypeDef,
    SupertypeCycle,

    // Relationship ends
    MissingEndDef,

    // Classification applicability
    MissingValidEntityName,
    MissingValidEntityDef,

    // Registration
    DuplicateDefinition,

    /// Several structural errors reported together
    ResolutionFailed,

    // Input handling
    InvalidInput,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingSupertypeName => "ERR_MISSING_SUPERTYPE_NAME",
            ExErrorKind::MissingSupertypeDef => "ERR_MISSING_SUPERTYPE_DEF",
            ExErrorKind::MissingClassificationSupertypeName => {
                "ERR_MISSING_CLASSIFICATION_SUPERTYPE_NAME"
            }
            ExErrorKind::MissingClassificationSupertypeDef => {
                "ERR_MISSING_CLASSIFICATION_SUPERTYPE_DEF"
            }
            ExErrorKind::SupertypeCycle => "ERR_SUPERTYPE_CYCLE",
            ExErrorKind::MissingEndDef => "ERR_MISSING_END_DEF",
            ExErrorKind::MissingValidEntityName => "ERR_MISSING_VALID_ENTITY_NAME",
            ExErrorKind::MissingValidEntityDef => "ERR_MISSING_VALID_ENTITY_DEF",
            ExErrorKind::DuplicateDefinition => "ERR_DUPLICATE_DEFINITION",
            ExErrorKind::ResolutionFailed => "ERR_RESOLUTION_FAILED",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// True for kinds raised by resolution against an inconsistent type system
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            ExErrorKind::DuplicateDefinition
                | ExErrorKind::InvalidInput
                | ExErrorKind::Io
                | ExErrorKind::Serialization
        )
    }
}

/// Category of the cross-reference that failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Supertype,
    RelationshipEnd,
    ValidEntity,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Supertype => write!(f, "supertype"),
            ReferenceKind::RelationshipEnd => write!(f, "relationship end"),
            ReferenceKind::ValidEntity => write!(f, "valid entity"),
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// caller-supplied source label, which is only ever used in messages.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    referenced_name: Option<String>,
    reference: Option<ReferenceKind>,
    source_label: Option<String>,
    message: String,
    related: Vec<ExError>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            referenced_name: None,
            reference: None,
            source_label: None,
            message: String::new(),
            related: Vec::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Name of the type that holds the failing reference
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// Name the failing reference points at
    pub fn with_referenced_name(mut self, name: impl Into<String>) -> Self {
        self.referenced_name = Some(name.into());
        self
    }

    pub fn with_reference(mut self, reference: ReferenceKind) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach errors reported together with this one
    pub fn with_related(mut self, related: Vec<ExError>) -> Self {
        self.related = related;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn referenced_name(&self) -> Option<&str> {
        self.referenced_name.as_deref()
    }

    pub fn reference(&self) -> Option<ReferenceKind> {
        self.reference
    }

    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[ExError] {
        &self.related
    }
}

impl fmt::Display for ExError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        if let Some(reference) = self.reference {
            write!(f, " ({}", reference)?;
            if let Some(name) = &self.referenced_name {
                write!(f, ": {}", name)?;
            }
            write!(f, ")")?;
        }
        if let Some(label) = &self.source_label {
            write!(f, " (source: {})", label)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for type registration and resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeXError {
    // ===== Entity hierarchy =====
    /// Entity type has a supertype link without a name
    #[error("Entity type {type_name} from {source_label} has a supertype link with no name")]
    MissingSupertypeName {
        type_name: String,
        source_label: String,
    },

    /// Entity type names a supertype that is not registered
    #[error("Entity type {type_name} from {source_label} declares unknown supertype {supertype_name}")]
    MissingSupertypeDef {
        type_name: String,
        supertype_name: String,
        source_label: String,
    },

    // ===== Classification hierarchy =====
    /// Classification type has a supertype link without a name
    #[error("Classification type {type_name} from {source_label} has a supertype link with no name")]
    MissingClassificationSupertypeName {
        type_name: String,
        source_label: String,
    },

    /// Classification type names a supertype that is not registered
    #[error("Classification type {type_name} from {source_label} declares unknown supertype {supertype_name}")]
    MissingClassificationSupertypeDef {
        type_name: String,
        supertype_name: String,
        source_label: String,
    },

    /// Supertype chain loops back on itself
    #[error("Supertype chain of {category} type {type_name} from {source_label} contains a cycle")]
    SupertypeCycle {
        category: TypeCategory,
        type_name: String,
        source_label: String,
    },

    // ===== Relationship ends =====
    /// Relationship end is unnamed or names an unregistered entity type
    #[error(
        "Relationship type {relationship_name} from {source_label}: {end} references unknown entity type {}",
        .entity_type_name.as_deref().unwrap_or("<unnamed>")
    )]
    MissingEndDef {
        relationship_name: String,
        end: EndPosition,
        entity_type_name: Option<String>,
        source_label: String,
    },

    // ===== Classification applicability =====
    /// Valid-entity link without a name
    #[error("Classification type {classification_name} from {source_label} has a valid entity link with no name")]
    MissingValidEntityName {
        classification_name: String,
        source_label: String,
    },

    /// Valid-entity link to an unregistered entity type
    #[error("Classification type {classification_name} from {source_label} is valid for unknown entity type {entity_type_name}")]
    MissingValidEntityDef {
        classification_name: String,
        entity_type_name: String,
        source_label: String,
    },

    // ===== Registration =====
    /// A different definition is already registered under the same name
    #[error("Conflicting {category} type definition {type_name} from {source_label}")]
    DuplicateDefinition {
        category: TypeCategory,
        type_name: String,
        source_label: String,
    },

    /// Several structural errors found in one resolution
    #[error("Resolution of types from {source_label} failed with {} structural errors", .errors.len())]
    ResolutionFailed {
        source_label: String,
        errors: Vec<TypeXError>,
    },

    // ===== Generic Errors =====
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl TypeXError {
    /// Canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            TypeXError::MissingSupertypeName { .. } => ExErrorKind::MissingSupertypeName,
            TypeXError::MissingSupertypeDef { .. } => ExErrorKind::MissingSupertypeDef,
            TypeXError::MissingClassificationSupertypeName { .. } => {
                ExErrorKind::MissingClassificationSupertypeName
            }
            TypeXError::MissingClassificationSupertypeDef { .. } => {
                ExErrorKind::MissingClassificationSupertypeDef
            }
            TypeXError::SupertypeCycle { .. } => ExErrorKind::SupertypeCycle,
            TypeXError::MissingEndDef { .. } => ExErrorKind::MissingEndDef,
            TypeXError::MissingValidEntityName { .. } => ExErrorKind::MissingValidEntityName,
            TypeXError::MissingValidEntityDef { .. } => ExErrorKind::MissingValidEntityDef,
            TypeXError::DuplicateDefinition { .. } => ExErrorKind::DuplicateDefinition,
            TypeXError::ResolutionFailed { .. } => ExErrorKind::ResolutionFailed,
            TypeXError::InvalidInput { .. } => ExErrorKind::InvalidInput,
        }
    }

    /// Name of the type whose reference failed
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TypeXError::MissingSupertypeName { type_name, .. }
            | TypeXError::MissingSupertypeDef { type_name, .. }
            | TypeXError::MissingClassificationSupertypeName { type_name, .. }
            | TypeXError::MissingClassificationSupertypeDef { type_name, .. }
            | TypeXError::SupertypeCycle { type_name, .. }
            | TypeXError::DuplicateDefinition { type_name, .. } => Some(type_name),
            TypeXError::MissingEndDef {
                relationship_name, ..
            } => Some(relationship_name),
            TypeXError::MissingValidEntityName {
                classification_name,
                ..
            }
            | TypeXError::MissingValidEntityDef {
                classification_name,
                ..
            } => Some(classification_name),
            TypeXError::ResolutionFailed { .. }
            | TypeXError::InvalidInput { .. } => None,
        }
    }

    /// Name the failing reference points at, when it has one
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            TypeXError::MissingSupertypeDef { supertype_name, .. }
            | TypeXError::MissingClassificationSupertypeDef { supertype_name, .. } => {
                Some(supertype_name)
            }
            TypeXError::MissingEndDef {
                entity_type_name, ..
            } => entity_type_name.as_deref(),
            TypeXError::MissingValidEntityDef {
                entity_type_name, ..
            } => Some(entity_type_name),
            _ => None,
        }
    }

    /// Category of the failing reference
    pub fn reference_kind(&self) -> Option<ReferenceKind> {
        match self {
            TypeXError::MissingSupertypeName { .. }
            | TypeXError::MissingSupertypeDef { .. }
            | TypeXError::MissingClassificationSupertypeName { .. }
            | TypeXError::MissingClassificationSupertypeDef { .. }
            | TypeXError::SupertypeCycle { .. } => Some(ReferenceKind::Supertype),
            TypeXError::MissingEndDef { .. } => Some(ReferenceKind::RelationshipEnd),
            TypeXError::MissingValidEntityName { .. }
            | TypeXError::MissingValidEntityDef { .. } => Some(ReferenceKind::ValidEntity),
            _ => None,
        }
    }

    /// Caller-supplied label of the source repository
    pub fn source_label(&self) -> Option<&str> {
        match self {
            TypeXError::MissingSupertypeName { source_label, .. }
            | TypeXError::MissingSupertypeDef { source_label, .. }
            | TypeXError::MissingClassificationSupertypeName { source_label, .. }
            | TypeXError::MissingClassificationSupertypeDef { source_label, .. }
            | TypeXError::SupertypeCycle { source_label, .. }
            | TypeXError::MissingEndDef { source_label, .. }
            | TypeXError::MissingValidEntityName { source_label, .. }
            | TypeXError::MissingValidEntityDef { source_label, .. }
            | TypeXError::DuplicateDefinition { source_label, .. }
            | TypeXError::ResolutionFailed { source_label, .. } => Some(source_label),
            TypeXError::InvalidInput { .. } => None,
        }
    }

    /// Every structural error carried by this one.
    ///
    /// A single error yields itself; `ResolutionFailed` yields its members.
    pub fn structural_errors(&self) -> Vec<&TypeXError> {
        match self {
            TypeXError::ResolutionFailed { errors, .. } => errors.iter().collect(),
            other => vec![other],
        }
    }
}

/// Conversion from TypeXError to ExError
impl From<TypeXError> for ExError {
    fn from(err: TypeXError) -> Self {
        let mut ex = ExError::new(err.kind()).with_message(err.to_string());
        if let Some(name) = err.type_name() {
            ex = ex.with_type_name(name);
        }
        if let Some(name) = err.referenced_name() {
            ex = ex.with_referenced_name(name);
        }
        if let Some(reference) = err.reference_kind() {
            ex = ex.with_reference(reference);
        }
        if let Some(label) = err.source_label() {
            ex = ex.with_source_label(label);
        }
        if let TypeXError::ResolutionFailed { errors, .. } = err {
            ex = ex
                .with_op("resolve")
                .with_related(errors.into_iter().map(ExError::from).collect());
        }
        ex
    }
}
