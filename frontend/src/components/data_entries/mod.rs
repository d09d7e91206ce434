//! Data-entries panel: filtered list, create form, delete, and CSV bulk
//! import (file picker and drag-and-drop).
//!
//! The first render runs the tab's joined load: the entries list and the
//! company dropdown options are fetched concurrently, and either failure
//! fails the whole tab load.

use yew::prelude::*;

mod messages;
mod state;
mod update;
pub mod upload;
mod view;

pub use messages::Msg;
pub use state::DataEntriesPanel;

impl Component for DataEntriesPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DataEntriesPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::LoadAll);
        }
    }
}
