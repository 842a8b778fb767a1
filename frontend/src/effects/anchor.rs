use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::effects::smooth_scroll_to;

/// Element id an in-page link points at. A bare `#` points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Where to scroll so the target clears the fixed navbar.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - config::NAV_FIXED_OFFSET_PX
}

pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match target {
        Some(el) => smooth_scroll_to(anchor_scroll_top(f64::from(el.offset_top()))),
        None => log::debug!("No anchor target for {}", href),
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// `<a href="#...">` that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&href);
            if let Some(cb) = &on_navigate {
                cb.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
