//! Root component: the tab controller.
//!
//! Exactly one panel is mounted at a time; switching tabs remounts the
//! target panel, which runs its own load sequence on first render. Tab
//! transitions are driven by name so unknown names can be logged and
//! ignored instead of crashing.

use gloo_console::warn;
use yew::prelude::*;

use crate::components::companies::CompaniesPanel;
use crate::components::data_entries::DataEntriesPanel;
use crate::components::statistics::StatisticsPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Companies,
    DataEntries,
    Statistics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Companies, Tab::DataEntries, Tab::Statistics];

    pub fn from_name(name: &str) -> Option<Tab> {
        match name {
            "companies" => Some(Tab::Companies),
            "data-entries" => Some(Tab::DataEntries),
            "statistics" => Some(Tab::Statistics),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Companies => "companies",
            Tab::DataEntries => "data-entries",
            Tab::Statistics => "statistics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Companies => "Companies",
            Tab::DataEntries => "Data Entries",
            Tab::Statistics => "Statistics",
        }
    }
}

pub enum Msg {
    ShowTab(String),
}

pub struct App {
    active: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            active: Tab::Companies,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowTab(name) => match Tab::from_name(&name) {
                Some(tab) if tab != self.active => {
                    self.active = tab;
                    true
                }
                Some(_) => false,
                None => {
                    warn!(format!("Unknown tab: {}", name));
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app">
                <div class="tabs">
                    {
                        for Tab::ALL.iter().map(|tab| {
                            let name = tab.name();
                            let class = classes!(
                                "tab",
                                if *tab == self.active { "active" } else { "" }
                            );
                            html! {
                                <button
                                    class={class}
                                    onclick={link.callback(move |_| Msg::ShowTab(name.to_string()))}
                                >
                                    { tab.label() }
                                </button>
                            }
                        })
                    }
                </div>
                {
                    match self.active {
                        Tab::Companies => html! { <CompaniesPanel /> },
                        Tab::DataEntries => html! { <DataEntriesPanel /> },
                        Tab::Statistics => html! { <StatisticsPanel /> },
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tab_names_resolve() {
        assert_eq!(Tab::from_name("companies"), Some(Tab::Companies));
        assert_eq!(Tab::from_name("data-entries"), Some(Tab::DataEntries));
        assert_eq!(Tab::from_name("statistics"), Some(Tab::Statistics));
    }

    #[test]
    fn unknown_tab_names_are_rejected() {
        assert_eq!(Tab::from_name("settings"), None);
        assert_eq!(Tab::from_name(""), None);
    }

    #[test]
    fn names_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_name(tab.name()), Some(tab));
        }
    }
}
