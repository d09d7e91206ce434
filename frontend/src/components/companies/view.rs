//! View rendering for the companies panel.

use yew::html::Scope;
use yew::prelude::*;

use crate::components::{format_timestamp, loading_indicator};
use crate::status::status_area;

use super::messages::Msg;
use super::state::CompaniesPanel;

pub fn view(panel: &CompaniesPanel, ctx: &Context<CompaniesPanel>) -> Html {
    let link = ctx.link();
    html! {
        <div class="panel" id="companies-panel">
            <h2>{ "Companies" }</h2>
            { status_area(&panel.status) }
            <div class="form-row">
                <input
                    ref={panel.name_input_ref.clone()}
                    type="text"
                    placeholder="Company name"
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        (e.key() == "Enter").then_some(Msg::Create)
                    })}
                />
                <button class="action-btn" onclick={link.callback(|_| Msg::Create)}>
                    { "Add Company" }
                </button>
            </div>
            {
                if panel.loading {
                    loading_indicator("Loading companies...")
                } else {
                    company_table(panel, link)
                }
            }
        </div>
    }
}

fn company_table(panel: &CompaniesPanel, link: &Scope<CompaniesPanel>) -> Html {
    if panel.companies.is_empty() {
        return html! { <div class="loading">{ "No companies found" }</div> };
    }

    html! {
        <div class="table-container">
            <table>
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ "Name" }</th>
                        <th>{ "Created At" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for panel.companies.iter().map(|company| {
                            let id = company.id;
                            html! {
                                <tr key={company.id.to_string()}>
                                    <td>{ company.id }</td>
                                    <td>{ &company.name }</td>
                                    <td>{ format_timestamp(&company.created_at) }</td>
                                    <td>
                                        <button
                                            class="action-btn delete-btn"
                                            onclick={link.callback(move |_| Msg::Delete(id))}
                                        >
                                            { "Delete" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}
