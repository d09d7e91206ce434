use crate::app::App;

mod api;
mod app;
mod components;
mod seq;
mod status;

fn main() {
    yew::Renderer::<App>::new().render();
}
