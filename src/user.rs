//! User projection model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read-facing shape of a user, returned across the API boundary instead of
/// the full internal entity.
///
/// A transparent carrier: every field is public and none is validated here.
/// Uniqueness of `id` is guaranteed by the upstream store that assigned it,
/// not by this type. Bind immutably for the construct-once, read-many form;
/// a `mut` binding restores setter-style mutation of individual fields.
///
/// ## Serialisation contract
/// Keys are camelCase on the wire (`displayName`); `display_name` is
/// accepted as an input alias. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserProjection {
    /// Unique user key assigned by the upstream store.
    #[schema(example = 42)]
    pub id: i64,
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    #[serde(alias = "display_name")]
    pub display_name: String,
    /// Contact address, expected to be email-shaped but not validated.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl UserProjection {
    /// Build a projection from the fields an API response carries.
    #[must_use]
    pub fn new(id: i64, display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            email: email.into(),
        }
    }
}
