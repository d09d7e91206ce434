use serde::{Deserialize, Serialize};

/// A company record as returned by the API.
///
/// `id` and `created_at` are assigned by the server; the client never
/// fabricates them. Deleting a company cascades to its data entries on the
/// server side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    /// Server-side creation timestamp, ISO 8601 text.
    pub created_at: String,
}

/// POST body for `/companies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
}
