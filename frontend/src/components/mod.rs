//! Panel components, one per tab, each split into `state` / `messages` /
//! `update` / `view` modules, plus a few view helpers shared between
//! panels.

pub mod companies;
pub mod data_entries;
pub mod statistics;

use common::model::company::Company;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Option list for a company `<select>`: a neutral placeholder first, then
/// one option per company. `value_of` picks what the option submits — the
/// id for the create form, the name for the name-matching list filter.
pub fn company_options(
    companies: &[Company],
    placeholder: &str,
    value_of: fn(&Company) -> String,
) -> Html {
    html! {
        <>
            <option value="">{ placeholder }</option>
            {
                for companies.iter().map(|company| {
                    html! { <option value={value_of(company)}>{ &company.name }</option> }
                })
            }
        </>
    }
}

/// Table-cell fallback for optional free-text fields.
pub fn text_or_na(value: &Option<String>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.clone(),
        _ => "N/A".to_string(),
    }
}

pub fn loading_indicator(text: &str) -> Html {
    html! { <div class="loading">{ text }</div> }
}

/// Formats a server timestamp with the browser locale.
pub fn format_timestamp(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}

/// Interactive gate for destructive operations. Returns false when the
/// dialog cannot be shown, so a missing window never deletes anything.
pub fn confirmed(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_fields_render_as_na() {
        assert_eq!(text_or_na(&None), "N/A");
        assert_eq!(text_or_na(&Some(String::new())), "N/A");
        assert_eq!(text_or_na(&Some("sensor".to_string())), "sensor");
    }
}
