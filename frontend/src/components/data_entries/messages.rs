use common::model::company::Company;
use common::model::data_entry::DataEntry;

use crate::api::ApiError;

use super::upload::UploadFailure;

pub enum Msg {
    /// Joined tab load: entries (current filters) plus companies for the
    /// two dropdowns. Either fetch failing fails the whole load.
    LoadAll,
    LoadedAll {
        seq: u64,
        result: Result<(Vec<DataEntry>, Vec<Company>), ApiError>,
    },
    /// Entries-only reload with the current filters.
    Load,
    Loaded {
        seq: u64,
        result: Result<Vec<DataEntry>, ApiError>,
    },
    Create,
    Created(Result<DataEntry, ApiError>),
    Delete(i64),
    Deleted(Result<(), ApiError>),
    /// Read the filter controls and reload.
    ApplyFilters,
    /// Reset the filter controls and reload unfiltered.
    ClearFilters,
    /// Visual affordance only; no functional side effect.
    DragHover(bool),
    OpenFilePicker,
    /// A file arrived from the picker or a drop. `None` means the event
    /// carried no file.
    FileSelected(Option<web_sys::File>),
    UploadFinished(Result<String, UploadFailure>),
    DismissStatus(u64),
}
