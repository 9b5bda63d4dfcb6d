use crate::app::App;

mod app;
mod components;
mod resources;

fn main() {
    yew::Renderer::<App>::new().render();
}
