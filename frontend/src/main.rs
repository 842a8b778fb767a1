use gloo_timers::callback::Timeout;
use log::info;
use web_sys::window;
use yew::prelude::*;

mod config;
mod contact;
mod effects;
mod pages {
    pub mod home;
}

use effects::nav::Nav;
use effects::scroll_top::ScrollToTop;
use pages::home::Home;

const BODY_FADE_DELAY_MS: u32 = 100;

/// Start transparent and fade the page in once it's mounted.
fn fade_in_body() {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.style().set_property("opacity", "0");
    Timeout::new(BODY_FADE_DELAY_MS, move || {
        let style = body.style();
        let _ = style.set_property("transition", "opacity 0.5s ease-in");
        let _ = style.set_property("opacity", "1");
    })
    .forget();
}

fn greet_console() {
    gloo_console::log!("%c👋 Hey there!", "font-size: 24px; font-weight: bold; color: #3b82f6;");
    gloo_console::log!("%c🚀 Looking to automate your business?", "font-size: 16px; color: #8b5cf6;");
    gloo_console::log!(
        format!("%cLet's talk: {}", config::FALLBACK_EMAIL),
        "font-size: 14px; color: #64748b;"
    );
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            fade_in_body();
            gloo_console::log!(
                "%c✨ Yukto website loaded successfully!",
                "font-size: 14px; color: #10b981; font-weight: bold;"
            );
            || ()
        },
        (),
    );

    html! {
        <>
            <Nav />
            <Home />
            <ScrollToTop />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    greet_console();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
