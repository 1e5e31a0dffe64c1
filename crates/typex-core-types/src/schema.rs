//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SOURCE: &str = "source";

// Type identifiers
pub const FIELD_TYPE_NAME: &str = "type_name";
pub const FIELD_TYPE_CATEGORY: &str = "type_category";
pub const FIELD_REFERENCED_NAME: &str = "referenced_name";

// Collection sizes
pub const FIELD_ENTITY_COUNT: &str = "entity_count";
pub const FIELD_RELATIONSHIP_COUNT: &str = "relationship_count";
pub const FIELD_CLASSIFICATION_COUNT: &str = "classification_count";
pub const FIELD_ENUM_COUNT: &str = "enum_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
