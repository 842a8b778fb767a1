use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const REVEAL_SELECTOR: &str =
    ".problem-card, .service-card, .why-card, .testimonial-card, .visual-card";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

const STATS_SELECTOR: &str = ".hero-stats";
const STATS_THRESHOLD: f64 = 0.5;
const STAT_FADE_DELAY_MS: u32 = 100;

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live observer plus the closure it calls into. Disconnects on drop.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe<F>(selector: &str, threshold: f64, root_margin: Option<&str>, mut on_entry: F) -> Option<Observation>
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let document = web_sys::window()?.document()?;

    let callback: EntryCallback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::error!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };

    let targets = document.query_selector_all(selector).ok()?;
    for i in 0..targets.length() {
        if let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }

    Some(Observation { observer, _callback: callback })
}

fn fade_in_stats() {
    let Some(stats) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(".stat-number").ok())
    else {
        return;
    };

    for i in 0..stats.length() {
        let Some(stat) = stats.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let _ = stat.style().set_property("opacity", "0");
        Timeout::new(STAT_FADE_DELAY_MS, move || {
            let style = stat.style();
            let _ = style.set_property("transition", "opacity 0.6s ease-out");
            let _ = style.set_property("opacity", "1");
        })
        .forget();
    }
}

/// Fades cards in as they scroll into view, and the hero stats the first
/// time they're half visible.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let cards = observe(REVEAL_SELECTOR, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |entry| {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("fade-in");
                }
            });

            let stats = observe(STATS_SELECTOR, STATS_THRESHOLD, None, |entry| {
                let target = entry.target();
                if entry.is_intersecting() && !target.class_list().contains("animated") {
                    let _ = target.class_list().add_1("animated");
                    fade_in_stats();
                }
            });

            move || {
                drop(cards);
                drop(stats);
            }
        },
        (),
    );
}
