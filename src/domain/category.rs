//! The category entity.

use serde::{Deserialize, Serialize};

/// A category row: caller-supplied integer id plus a free-form name.
///
/// Doubles as the request body shape; deserialization rejects a payload with
/// a missing or mistyped field before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Primary key, chosen by the caller (not auto-generated).
    pub id: i64,
    /// Display name; no length or charset constraint.
    pub name: String,
}
