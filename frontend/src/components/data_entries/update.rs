//! Update logic for the data-entries panel.

use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::company::Company;
use common::model::data_entry::{DataEntry, EntryFilter};

use crate::api;
use crate::components::confirmed;
use crate::seq::FetchOutcome;
use crate::status::{schedule_dismiss, StatusMessage};

use super::messages::Msg;
use super::state::{build_new_entry, DataEntriesPanel};
use super::upload::{csv_mime_ok, upload_csv, UploadFailure};

pub fn update(panel: &mut DataEntriesPanel, ctx: &Context<DataEntriesPanel>, msg: Msg) -> bool {
    match msg {
        Msg::LoadAll => {
            let seq = panel.list_gate.issue();
            panel.loading = true;
            let path = entries_path(&panel.filters);
            let link = ctx.link().clone();
            spawn_local(async move {
                let (entries, companies) = futures::join!(
                    api::get_json::<Vec<DataEntry>>(&path),
                    api::get_json::<Vec<Company>>("/companies"),
                );
                let result = entries.and_then(|entries| companies.map(|companies| (entries, companies)));
                link.send_message(Msg::LoadedAll { seq, result });
            });
            true
        }
        Msg::LoadedAll { seq, result } => {
            if let Err(err) = &result {
                error!(format!("Failed to load data entries tab: {}", err));
            }
            match panel.apply_all_result(seq, result) {
                FetchOutcome::Committed => true,
                FetchOutcome::Stale => false,
                FetchOutcome::Failed => {
                    show_status(panel, ctx, StatusMessage::error("Failed to load data entries"));
                    true
                }
            }
        }
        Msg::Load => {
            let seq = panel.list_gate.issue();
            panel.loading = true;
            let path = entries_path(&panel.filters);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::get_json::<Vec<DataEntry>>(&path).await;
                link.send_message(Msg::Loaded { seq, result });
            });
            true
        }
        Msg::Loaded { seq, result } => {
            if let Err(err) = &result {
                error!(format!("Failed to load data entries: {}", err));
            }
            match panel.apply_list_result(seq, result) {
                FetchOutcome::Committed => true,
                FetchOutcome::Stale => false,
                FetchOutcome::Failed => {
                    show_status(panel, ctx, StatusMessage::error("Failed to load data entries"));
                    true
                }
            }
        }
        Msg::Create => {
            let company_id_raw = select_value(&panel.company_select_ref);
            let uid = input_value(&panel.uid_input_ref);
            let device_type = input_value(&panel.device_type_input_ref);
            let data_type = input_value(&panel.data_type_input_ref);
            let data_set = input_value(&panel.data_set_input_ref);
            let data_going_to = input_value(&panel.data_going_to_input_ref);

            match build_new_entry(
                &company_id_raw,
                &uid,
                &device_type,
                &data_type,
                &data_set,
                &data_going_to,
            ) {
                Err(form_error) => {
                    show_status(panel, ctx, StatusMessage::error(form_error.to_string()))
                }
                Ok(body) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::post_json::<_, DataEntry>("/data-entries", &body).await;
                        link.send_message(Msg::Created(result));
                    });
                }
            }
            true
        }
        Msg::Created(result) => {
            match result {
                Ok(_) => {
                    clear_create_form(panel);
                    show_status(
                        panel,
                        ctx,
                        StatusMessage::success("Data entry created successfully"),
                    );
                    ctx.link().send_message(Msg::Load);
                }
                Err(err) => {
                    error!(format!("Failed to create data entry: {}", err));
                    show_status(panel, ctx, StatusMessage::error("Failed to create data entry"));
                }
            }
            true
        }
        Msg::Delete(id) => {
            if confirmed("Are you sure you want to delete this data entry?") {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::delete(&format!("/data-entries/{}", id)).await;
                    link.send_message(Msg::Deleted(result));
                });
            }
            false
        }
        Msg::Deleted(result) => {
            match result {
                Ok(()) => {
                    show_status(
                        panel,
                        ctx,
                        StatusMessage::success("Data entry deleted successfully"),
                    );
                    ctx.link().send_message(Msg::Load);
                }
                Err(err) => {
                    error!(format!("Failed to delete data entry: {}", err));
                    show_status(panel, ctx, StatusMessage::error("Failed to delete data entry"));
                }
            }
            true
        }
        Msg::ApplyFilters => {
            panel.filters = EntryFilter {
                company_name: select_value(&panel.filter_company_ref),
                uid: input_value(&panel.filter_uid_ref),
                data_set: input_value(&panel.filter_data_set_ref),
            };
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::ClearFilters => {
            if let Some(select) = panel.filter_company_ref.cast::<HtmlSelectElement>() {
                select.set_value("");
            }
            for node in [&panel.filter_uid_ref, &panel.filter_data_set_ref] {
                if let Some(input) = node.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
            panel.filters.clear();
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::DragHover(hover) => {
            if panel.drag_hover != hover {
                panel.drag_hover = hover;
                true
            } else {
                false
            }
        }
        Msg::OpenFilePicker => {
            if let Some(input) = panel.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(None) => false,
        Msg::FileSelected(Some(file)) => {
            if !csv_mime_ok(&file.type_()) {
                panel.upload_status = Some("Please upload a valid CSV file.".to_string());
                return true;
            }
            panel.upload_status = Some("Uploading...".to_string());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = upload_csv(&file).await;
                link.send_message(Msg::UploadFinished(result));
            });
            true
        }
        Msg::UploadFinished(result) => {
            match result {
                Ok(message) => {
                    panel.upload_status = Some(format!("Upload successful: {}", message));
                    ctx.link().send_message(Msg::Load);
                }
                Err(UploadFailure::Rejected(reason)) => {
                    panel.upload_status = Some(format!("Error: {}", reason));
                }
                Err(UploadFailure::Transport(err)) => {
                    error!(format!("CSV upload failed: {}", err));
                    panel.upload_status = Some("Upload failed. Please try again.".to_string());
                }
            }
            true
        }
        Msg::DismissStatus(seq) => {
            if seq == panel.status_seq {
                panel.status = None;
                true
            } else {
                false
            }
        }
    }
}

fn entries_path(filters: &EntryFilter) -> String {
    format!("/data-entries{}", filters.query_string())
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

fn clear_create_form(panel: &DataEntriesPanel) {
    if let Some(select) = panel.company_select_ref.cast::<HtmlSelectElement>() {
        select.set_value("");
    }
    for node in [
        &panel.uid_input_ref,
        &panel.device_type_input_ref,
        &panel.data_type_input_ref,
        &panel.data_set_input_ref,
        &panel.data_going_to_input_ref,
    ] {
        if let Some(input) = node.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

fn show_status(panel: &mut DataEntriesPanel, ctx: &Context<DataEntriesPanel>, message: StatusMessage) {
    panel.status_seq += 1;
    panel.status = Some(message);
    schedule_dismiss(ctx.link(), Msg::DismissStatus(panel.status_seq));
}
