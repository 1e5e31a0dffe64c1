//! TypeX Core - resolved model of an enterprise metadata type system
//!
//! This crate takes a flat, possibly incomplete inventory of type
//! definitions and resolves it into a queryable model:
//! - Raw definitions (entity, relationship, classification, enum) and their store
//! - Descriptors carrying transitive subtypes and inherited attributes
//! - Relationship and classification applicability propagated to subtypes
//! - Bidirectional name/guid lookup for entity and relationship types
//! - A read-only explorer over the resolved model
//!
//! Any reference to an unregistered type fails resolution; no partially
//! resolved model is ever returned.

pub mod config;
pub mod descriptors;
pub mod errors;
pub mod explorer;
pub mod logging_facility;
pub mod lookup;
pub mod model;
pub mod ops;
mod resolve;

#[doc(hidden)]
pub use typex_core_types;

// Re-export commonly used types
pub use config::{DuplicatePolicy, ErrorMode, ResolverConfig};
pub use descriptors::{ClassificationDescriptor, EntityDescriptor, RelationshipDescriptor};
pub use errors::{ExError, ExErrorKind, ReferenceKind, Result, TypeXError};
pub use explorer::{ExplorerSummary, TypeExplorer};
pub use model::{
    AttributeDef, ClassificationDef, EntityDef, EnumDef, RelationshipDef, RelationshipEndDef,
    TypeCategory, TypeDef, TypeLink,
};
pub use ops::{Registration, TypeDefStore, TypeExplorerBuilder};
