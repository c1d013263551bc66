//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource
///
/// Immutable once fetched; the browser replaces its whole list on every
/// successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID (unique, stable identity)
    pub id: u64,

    /// Login / display name
    pub login: String,

    /// Avatar image URL (not every organization has one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
