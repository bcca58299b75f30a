//! Crate-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Documents
// =============================================================================

/// Reserved document field carrying the domain identifier
pub const ID_FIELD: &str = "id";

/// Prefix marking store-internal metadata fields
pub const META_PREFIX: char = '_';

/// Store-internal object id injected on insert
pub const META_OID: &str = "_oid";

/// Store-internal creation timestamp injected on insert
pub const META_CREATED_AT: &str = "_created_at";

/// Check if a field name denotes store-internal metadata
pub fn is_meta_field(name: &str) -> bool {
    name.starts_with(META_PREFIX)
}

// =============================================================================
// Deadlines
// =============================================================================

/// Default per-operation deadline in milliseconds
pub const DEFAULT_OP_TIMEOUT_MS: u64 = 5_000;

/// Environment variable overriding the default per-operation deadline
pub const ENV_OP_TIMEOUT_MS: &str = "DOCREPO_OP_TIMEOUT_MS";
