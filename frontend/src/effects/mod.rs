pub mod anchor;
pub mod counter;
pub mod debounce;
pub mod nav;
pub mod parallax;
pub mod phone;
pub mod reveal;
pub mod scroll_top;
pub mod tilt;

use web_sys::{ScrollBehavior, ScrollToOptions};

/// Current vertical scroll offset, 0 when there's no window.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
