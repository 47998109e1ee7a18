use log::{error, info, Level};

mod content;
mod page;
mod reveal;
mod theme;
mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod testimonials;
}

use content::ContentDocument;
use page::{LandingPage, LandingPageProps};

const DEMO_CONTENT: &str = include_str!("../assets/content.json");

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    match ContentDocument::from_json(DEMO_CONTENT) {
        Ok(document) => {
            yew::Renderer::<LandingPage>::with_props(LandingPageProps { document }).render();
        }
        Err(err) => error!("invalid content document: {err}"),
    }
}
