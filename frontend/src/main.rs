use yew::prelude::*;
use log::info;

mod config;
mod content;
mod navigation;
mod click_delegate;

mod components {
    pub mod header;
    pub mod hero;
    pub mod explore;
    pub mod features;
    pub mod about;
    pub mod subscribe;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use pages::landing::LandingPage;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! { <LandingPage /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
