//! Statistics panel: per-company aggregate report with count/percentage
//! tables, a derived summary, and a client-side CSV export.

use yew::prelude::*;

mod export;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::StatisticsPanel;

impl Component for StatisticsPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        StatisticsPanel::new()
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
            ctx.link().send_message(Msg::LoadCompanies);
        }
    }
}
