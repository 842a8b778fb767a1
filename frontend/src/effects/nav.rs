use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::effects::anchor::AnchorLink;
use crate::effects::debounce::Debouncer;
use crate::effects::scroll_y;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#why-us", "Why Us"),
    ("#process", "Process"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SHADOW_AFTER_PX
}

/// Ids of the sections whose band contains `scroll_y`. Bands start 100px
/// above the section so the link lights up just before it reaches the top.
pub fn active_sections(scroll_y: f64, sections: &[SectionBounds]) -> Vec<String> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - config::SECTION_ACTIVE_OFFSET_PX;
            scroll_y > top && scroll_y <= top + s.height
        })
        .map(|s| s.id.clone())
        .collect()
}

fn measure_sections() -> Vec<SectionBounds> {
    let Some(list) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all("section[id]").ok())
    else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);
    let active = use_state_eq(Vec::<String>::new);
    let debouncer = use_mut_ref(|| Debouncer::new(config::NAV_HIGHLIGHT_DEBOUNCE_MS));

    let highlight = {
        let active = active.clone();
        Callback::from(move |_: ()| {
            active.set(active_sections(scroll_y(), &measure_sections()));
        })
    };

    {
        let scrolled = scrolled.clone();
        let debouncer = debouncer.clone();
        use_event_with_window("scroll", move |_: Event| {
            scrolled.set(is_scrolled(scroll_y()));
            highlight.emit(());
            let trailing = highlight.clone();
            debouncer.borrow_mut().call(move || trailing.emit(()));
        });
    }

    {
        use_effect_with_deps(
            move |_| {
                move || debouncer.borrow_mut().cancel()
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <AnchorLink href="#home" class="logo">
                    {"Yukto"}
                </AnchorLink>
                <div class={classes!("nav-links", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let is_active = anchor_is_active(href, &active);
                        html! {
                            <AnchorLink
                                href={*href}
                                class={classes!(is_active.then(|| "active"))}
                                on_navigate={close_menu.clone()}
                            >
                                {*label}
                            </AnchorLink>
                        }
                    }) }
                </div>
                <button
                    class={classes!("mobile-menu-btn", (*menu_open).then(|| "active"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

fn anchor_is_active(href: &str, active: &[String]) -> bool {
    href.strip_prefix('#')
        .map_or(false, |id| active.iter().any(|a| a == id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds { id: id.to_string(), top, height }
    }

    #[test]
    fn shadow_starts_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn section_band_is_shifted_up_by_offset() {
        let sections = vec![section("services", 800.0, 600.0), section("contact", 1400.0, 500.0)];

        assert!(active_sections(700.0, &sections).is_empty());
        assert_eq!(active_sections(701.0, &sections), vec!["services"]);
        assert_eq!(active_sections(1300.0, &sections), vec!["services"]);
        assert_eq!(active_sections(1301.0, &sections), vec!["contact"]);
        assert!(active_sections(1801.0, &sections).is_empty());
    }

    #[test]
    fn link_matches_active_section_id() {
        let active = vec!["contact".to_string()];
        assert!(anchor_is_active("#contact", &active));
        assert!(!anchor_is_active("#services", &active));
        assert!(!anchor_is_active("contact", &active));
    }
}
