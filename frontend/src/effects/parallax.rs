use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::scroll_y;

/// Vertical shift of orb `index`; later orbs drift a little faster.
pub fn orb_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = 0.5 + index as f64 * 0.1;
    -(scroll_y * speed)
}

pub fn orb_transform(scroll_y: f64, index: usize) -> String {
    format!("transform: translateY({}px);", orb_offset(scroll_y, index))
}

#[derive(Properties, PartialEq)]
pub struct GradientOrbsProps {
    #[prop_or(3)]
    pub count: usize,
}

#[function_component(GradientOrbs)]
pub fn gradient_orbs(props: &GradientOrbsProps) -> Html {
    let scrolled = use_state_eq(scroll_y);

    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| scrolled.set(scroll_y()));
    }

    html! {
        <div class="hero-background">
            { for (0..props.count).map(|i| html! {
                <div
                    class={classes!("gradient-orb", format!("orb-{}", i + 1))}
                    style={orb_transform(*scrolled, i)}
                ></div>
            }) }
        </div>
    }
}
