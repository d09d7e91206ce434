use common::model::company::Company;

use crate::api::ApiError;

pub enum Msg {
    /// Fetch the company list with a fresh sequence tag.
    Load,
    Loaded {
        seq: u64,
        result: Result<Vec<Company>, ApiError>,
    },
    /// Validate the name input and POST it.
    Create,
    Created(Result<Company, ApiError>),
    /// Confirm-gated delete.
    Delete(i64),
    Deleted(Result<(), ApiError>),
    DismissStatus(u64),
}
