mod config;
mod content;
mod dial;
mod error;
mod page;
mod primitives;
mod theme;

use dioxus::logger::tracing::{Level, info};
use dioxus::prelude::*;

use config::PageConfig;
use page::{Resume, Startup};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Resume {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    // Environment is read exactly once and injected into the page
    use_context_provider(|| {
        let startup = Startup::new(PageConfig::from_location(), theme::system_prefers_dark());
        info!(
            theme = startup.theme.name(),
            debug = startup.config.debug,
            "resume page starting"
        );
        startup
    });

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    dioxus::logger::init(level).expect("logger init");
    dioxus::launch(App);
}
