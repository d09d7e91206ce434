//! Transient status banners shown in each panel's message area.
//!
//! A banner auto-dismisses after [`DISMISS_MS`]. Dismissal messages carry
//! the banner's sequence number so a timer started for an old banner never
//! clears a newer one.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::{html, Component, Html};

pub const DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Renders a panel's status area. The area itself stays in the tree so the
/// layout does not jump when a banner appears.
pub fn status_area(status: &Option<StatusMessage>) -> Html {
    html! {
        <div class="message-area">
            {
                match status {
                    Some(message) => html! { <div class={message.css_class()}>{ &message.text }</div> },
                    None => html! {},
                }
            }
        </div>
    }
}

/// Sends `dismiss` to the component after the banner timeout.
pub fn schedule_dismiss<C: Component>(link: &Scope<C>, dismiss: C::Message) {
    let link = link.clone();
    spawn_local(async move {
        TimeoutFuture::new(DISMISS_MS).await;
        link.send_message(dismiss);
    });
}
