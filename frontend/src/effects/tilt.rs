use web_sys::Element;
use yew::prelude::*;

const ENTER_TRANSITION: &str = "transform 0.1s ease-out";
const LEAVE_TRANSITION: &str = "transform 0.3s ease-out";
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// Rotation in degrees for a pointer at (`x`, `y`) inside a `width` x `height`
/// card: the card leans toward the pointer.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let rotate_x = (y - height / 2.0) / 20.0;
    let rotate_y = (width / 2.0 - x) / 20.0;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (rotate_x, rotate_y) = tilt_angles(x, y, width, height);
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
        rotate_x, rotate_y
    )
}

#[derive(Clone, PartialEq)]
struct TiltStyle {
    transition: &'static str,
    transform: Option<String>,
}

impl TiltStyle {
    fn css(&self) -> String {
        match &self.transform {
            Some(t) => format!("transition: {}; transform: {};", self.transition, t),
            None => format!("transition: {};", self.transition),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let style = use_state_eq(|| None::<TiltStyle>);

    let onmouseenter = {
        let style = style.clone();
        Callback::from(move |_: MouseEvent| {
            let transform = (*style).as_ref().and_then(|s| s.transform.clone());
            style.set(Some(TiltStyle { transition: ENTER_TRANSITION, transform }));
        })
    };

    let onmousemove = {
        let style = style.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = node.cast::<Element>() {
                let rect = card.get_bounding_client_rect();
                let x = f64::from(e.client_x()) - rect.left();
                let y = f64::from(e.client_y()) - rect.top();
                style.set(Some(TiltStyle {
                    transition: ENTER_TRANSITION,
                    transform: Some(tilt_transform(x, y, rect.width(), rect.height())),
                }));
            }
        })
    };

    let onmouseleave = {
        let style = style.clone();
        Callback::from(move |_: MouseEvent| {
            style.set(Some(TiltStyle {
                transition: LEAVE_TRANSITION,
                transform: Some(TILT_RESET.to_string()),
            }));
        })
    };

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={(*style).as_ref().map(TiltStyle::css)}
            {onmouseenter}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_card_is_flat() {
        assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_lean_toward_pointer() {
        let (rx, ry) = tilt_angles(0.0, 0.0, 200.0, 100.0);
        assert_eq!(rx, -2.5);
        assert_eq!(ry, 5.0);

        let (rx, ry) = tilt_angles(200.0, 100.0, 200.0, 100.0);
        assert_eq!(rx, 2.5);
        assert_eq!(ry, -5.0);
    }

    #[test]
    fn transform_lifts_card() {
        assert_eq!(
            tilt_transform(0.0, 0.0, 200.0, 100.0),
            "perspective(1000px) rotateX(-2.5deg) rotateY(5deg) translateY(-8px)"
        );
    }
}
