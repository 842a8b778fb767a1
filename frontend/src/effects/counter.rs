use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_DURATION_MS: u32 = 2_000;

/// Values a counter shows on its way from 0 to `target`. The last frame is
/// always exactly `target`.
pub fn counter_frames(target: u32, steps: u32) -> Vec<u32> {
    let increment = f64::from(target) / f64::from(steps.max(1));
    let mut current = 0.0;
    let mut frames = Vec::with_capacity(steps as usize + 1);
    loop {
        current += increment;
        if current >= f64::from(target) {
            frames.push(target);
            return frames;
        }
        frames.push(current.floor() as u32);
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |target| {
                let frames = counter_frames(*target, COUNTER_STEPS);
                let next = Rc::new(RefCell::new(0usize));
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let handle_inner = handle.clone();

                let interval = Interval::new(COUNTER_DURATION_MS / COUNTER_STEPS, move || {
                    let mut index = next.borrow_mut();
                    match frames.get(*index) {
                        Some(frame) => {
                            value.set(*frame);
                            *index += 1;
                        }
                        None => {
                            // Can't drop the interval from inside its own tick.
                            let handle = handle_inner.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                handle.borrow_mut().take();
                            });
                        }
                    }
                });
                *handle.borrow_mut() = Some(interval);

                move || {
                    handle.borrow_mut().take();
                }
            },
            props.target,
        );
    }

    html! {
        <span class="stat-number">{ format!("{}{}", *value, props.suffix) }</span>
    }
}
