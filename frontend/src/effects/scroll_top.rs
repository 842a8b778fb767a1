use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::effects::{scroll_y, smooth_scroll_to};

pub fn is_visible(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TOP_AFTER_PX
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state_eq(|| is_visible(scroll_y()));

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| visible.set(is_visible(scroll_y())));
    }

    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <>
            <style>
                {r#"
                .scroll-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #3b82f6 0%, #8b5cf6 100%);
                    color: white;
                    font-size: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transition: all 0.3s ease;
                    box-shadow: 0 4px 12px rgba(59, 130, 246, 0.4);
                    z-index: 999;
                }
                .scroll-to-top.visible {
                    opacity: 1;
                    visibility: visible;
                }
                .scroll-to-top:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 20px rgba(59, 130, 246, 0.5);
                }
                @media (max-width: 768px) {
                    .scroll-to-top {
                        bottom: 1.5rem;
                        right: 1.5rem;
                        width: 40px;
                        height: 40px;
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
            <button
                class={classes!("scroll-to-top", (*visible).then(|| "visible"))}
                aria-label="Scroll to top"
                onclick={onclick}
            >
                {"↑"}
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_after_five_hundred_pixels() {
        assert!(!is_visible(0.0));
        assert!(!is_visible(500.0));
        assert!(is_visible(501.0));
    }
}
