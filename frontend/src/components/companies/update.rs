//! Update logic for the companies panel.
//!
//! Fetch effects run on `spawn_local`; every completion message carries its
//! sequence tag so only the freshest list lands in the cache. Every failure
//! path ends in a banner plus a console diagnostic.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::company::{Company, NewCompany};

use crate::api;
use crate::components::confirmed;
use crate::seq::FetchOutcome;
use crate::status::{schedule_dismiss, StatusMessage};

use super::messages::Msg;
use super::state::{validate_company_name, CompaniesPanel};

pub fn update(panel: &mut CompaniesPanel, ctx: &Context<CompaniesPanel>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let seq = panel.list_gate.issue();
            panel.loading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::get_json::<Vec<Company>>("/companies").await;
                link.send_message(Msg::Loaded { seq, result });
            });
            true
        }
        Msg::Loaded { seq, result } => {
            if let Err(err) = &result {
                error!(format!("Failed to load companies: {}", err));
            }
            match panel.apply_list_result(seq, result) {
                FetchOutcome::Committed => true,
                FetchOutcome::Stale => false,
                FetchOutcome::Failed => {
                    show_status(panel, ctx, StatusMessage::error("Failed to load companies"));
                    true
                }
            }
        }
        Msg::Create => {
            let raw = panel
                .name_input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            match validate_company_name(&raw) {
                Err(message) => show_status(panel, ctx, StatusMessage::error(message)),
                Ok(name) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result =
                            api::post_json::<_, Company>("/companies", &NewCompany { name }).await;
                        link.send_message(Msg::Created(result));
                    });
                }
            }
            true
        }
        Msg::Created(result) => {
            match result {
                Ok(_) => {
                    if let Some(input) = panel.name_input_ref.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                    show_status(
                        panel,
                        ctx,
                        StatusMessage::success("Company created successfully"),
                    );
                    ctx.link().send_message(Msg::Load);
                }
                Err(err) => {
                    error!(format!("Failed to create company: {}", err));
                    show_status(panel, ctx, StatusMessage::error("Failed to create company"));
                }
            }
            true
        }
        Msg::Delete(id) => {
            if confirmed("Are you sure you want to delete this company?") {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::delete(&format!("/companies/{}", id)).await;
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
                        StatusMessage::success("Company deleted successfully"),
                    );
                    ctx.link().send_message(Msg::Load);
                }
                Err(err) => {
                    error!(format!("Failed to delete company: {}", err));
                    show_status(panel, ctx, StatusMessage::error("Failed to delete company"));
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

fn show_status(panel: &mut CompaniesPanel, ctx: &Context<CompaniesPanel>, message: StatusMessage) {
    panel.status_seq += 1;
    panel.status = Some(message);
    schedule_dismiss(ctx.link(), Msg::DismissStatus(panel.status_seq));
}
