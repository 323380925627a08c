use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod hooks;
mod navigator;
mod viewport;
mod components {
    pub mod footer;
    pub mod icons;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod welcome;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod life;
    pub mod rules;
}

use pages::welcome::Welcome;

#[function_component]
fn App() -> Html {
    html! { <Welcome /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting welcome center page");
    yew::Renderer::<App>::new().render();
}
