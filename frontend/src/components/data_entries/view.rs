//! View rendering for the data-entries panel: filter bar, create form,
//! CSV drop zone, and the entry table.

use yew::html::Scope;
use yew::prelude::*;

use common::model::data_entry::DataEntry;

use crate::components::{company_options, loading_indicator, text_or_na};
use crate::status::status_area;

use super::messages::Msg;
use super::state::DataEntriesPanel;

pub fn view(panel: &DataEntriesPanel, ctx: &Context<DataEntriesPanel>) -> Html {
    let link = ctx.link();
    html! {
        <div class="panel" id="data-entries-panel">
            <h2>{ "Data Entries" }</h2>
            { status_area(&panel.status) }
            { filter_bar(panel, link) }
            { create_form(panel, link) }
            { upload_area(panel, link) }
            {
                if panel.loading {
                    loading_indicator("Loading data entries...")
                } else {
                    entry_table(panel, link)
                }
            }
        </div>
    }
}

fn filter_bar(panel: &DataEntriesPanel, link: &Scope<DataEntriesPanel>) -> Html {
    html! {
        <div class="filter-bar">
            <select ref={panel.filter_company_ref.clone()}>
                // The backend filters by name, so the option submits the name.
                { company_options(&panel.companies, "All Companies", |company| company.name.clone()) }
            </select>
            <input
                ref={panel.filter_uid_ref.clone()}
                type="text"
                placeholder="Filter by UID"
            />
            <input
                ref={panel.filter_data_set_ref.clone()}
                type="text"
                placeholder="Filter by data set"
            />
            <button class="action-btn" onclick={link.callback(|_| Msg::ApplyFilters)}>
                { "Apply Filters" }
            </button>
            <button class="action-btn" onclick={link.callback(|_| Msg::ClearFilters)}>
                { "Clear Filters" }
            </button>
        </div>
    }
}

fn create_form(panel: &DataEntriesPanel, link: &Scope<DataEntriesPanel>) -> Html {
    html! {
        <div class="form-row">
            <select ref={panel.company_select_ref.clone()}>
                { company_options(&panel.companies, "Select a company", |company| company.id.to_string()) }
            </select>
            <input ref={panel.uid_input_ref.clone()} type="text" placeholder="UID (required)" />
            <input ref={panel.device_type_input_ref.clone()} type="text" placeholder="Device type" />
            <input ref={panel.data_type_input_ref.clone()} type="text" placeholder="Data type" />
            <input ref={panel.data_set_input_ref.clone()} type="text" placeholder="Data set" />
            <input ref={panel.data_going_to_input_ref.clone()} type="text" placeholder="Data going to" />
            <button class="action-btn" onclick={link.callback(|_| Msg::Create)}>
                { "Add Entry" }
            </button>
        </div>
    }
}

fn upload_area(panel: &DataEntriesPanel, link: &Scope<DataEntriesPanel>) -> Html {
    let class = classes!(
        "csv-upload-area",
        if panel.drag_hover { "hover" } else { "" }
    );
    html! {
        <>
            <div
                class={class}
                onclick={link.callback(|_| Msg::OpenFilePicker)}
                ondragenter={link.callback(|e: DragEvent| {
                    e.prevent_default();
                    Msg::DragHover(true)
                })}
                ondragover={link.callback(|e: DragEvent| {
                    e.prevent_default();
                    Msg::DragHover(true)
                })}
                ondragleave={link.callback(|e: DragEvent| {
                    e.prevent_default();
                    Msg::DragHover(false)
                })}
                ondrop={link.batch_callback(|e: DragEvent| {
                    e.prevent_default();
                    let file = e
                        .data_transfer()
                        .and_then(|transfer| transfer.files())
                        .and_then(|files| files.get(0));
                    vec![Msg::DragHover(false), Msg::FileSelected(file)]
                })}
            >
                { "Drop a CSV file here, or click to choose one" }
            </div>
            <input
                ref={panel.file_input_ref.clone()}
                type="file"
                accept=".csv,text/csv"
                style="display: none;"
                onchange={link.callback(|e: Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    let file = input.files().and_then(|files| files.get(0));
                    // Allow re-selecting the same file later.
                    input.set_value("");
                    Msg::FileSelected(file)
                })}
            />
            {
                match &panel.upload_status {
                    Some(text) => html! { <div class="upload-status">{ text }</div> },
                    None => html! {},
                }
            }
        </>
    }
}

fn entry_table(panel: &DataEntriesPanel, link: &Scope<DataEntriesPanel>) -> Html {
    if panel.entries.is_empty() {
        return html! { <div class="loading">{ "No data entries found" }</div> };
    }

    html! {
        <div class="table-container">
            <table>
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ "Company" }</th>
                        <th>{ "Device Type" }</th>
                        <th>{ "UID" }</th>
                        <th>{ "Data Type" }</th>
                        <th>{ "Data Set" }</th>
                        <th>{ "Data Going To" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for panel.entries.iter().map(|entry| entry_row(entry, link)) }
                </tbody>
            </table>
        </div>
    }
}

fn entry_row(entry: &DataEntry, link: &Scope<DataEntriesPanel>) -> Html {
    let id = entry.id;
    html! {
        <tr key={entry.id.to_string()}>
            <td>{ entry.id }</td>
            <td>{ text_or_na(&entry.company_name) }</td>
            <td>{ text_or_na(&entry.device_type) }</td>
            <td>{ text_or_na(&entry.uid) }</td>
            <td>{ text_or_na(&entry.data_type) }</td>
            <td>{ text_or_na(&entry.data_set) }</td>
            <td>{ text_or_na(&entry.data_going_to) }</td>
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
}
