use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::contact::controller::{ContactController, ContactView};
use crate::contact::fields::{ContactFields, Field};
use crate::contact::relay::Web3FormsRelay;
use crate::contact::status::{StatusAction, StatusBoard, SubmissionStatus, SubmitControl};
use crate::effects::phone::format_us_phone;

const SUBMIT_LABEL: &str = "Send Message";

/// Yew state handles behind the contact form.
#[derive(Clone)]
struct FormView {
    control: UseStateHandle<SubmitControl>,
    board: UseReducerHandle<StatusBoard>,
    generation: Rc<RefCell<u64>>,
    expiry: Rc<RefCell<Option<Timeout>>>,
    fields: UseStateHandle<ContactFields>,
}

impl ContactView for FormView {
    fn set_submit_control(&self, control: SubmitControl) {
        self.control.set(control);
    }

    fn show_status(&self, status: SubmissionStatus) {
        let generation = {
            let mut current = self.generation.borrow_mut();
            *current += 1;
            *current
        };
        self.board.dispatch(StatusAction::Show { status, generation });

        // Replacing the handle cancels the previous message's expiry.
        let board = self.board.clone();
        *self.expiry.borrow_mut() = status.expiry_delay().map(|delay| {
            Timeout::new(delay, move || {
                board.dispatch(StatusAction::Expire(generation));
            })
        });
    }

    fn clear_fields(&self) {
        self.fields.set(ContactFields::default());
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_state(ContactFields::default);
    let focused = use_state(|| None::<Field>);
    let control = use_state(|| SubmitControl::ready(SUBMIT_LABEL));
    let board = use_reducer(StatusBoard::default);
    let generation = use_mut_ref(|| 0u64);
    let expiry = use_mut_ref(|| None::<Timeout>);
    let status_ref = use_node_ref();

    let view = FormView {
        control: control.clone(),
        board: board.clone(),
        generation,
        expiry,
        fields: fields.clone(),
    };

    // Runs after the status line has rendered its new message.
    {
        let board = board.clone();
        let status_ref = status_ref.clone();
        let deps = board.generation;
        use_effect_with_deps(
            move |_| {
                if board.should_reveal() {
                    if let Some(element) = status_ref.cast::<Element>() {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Nearest);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
                || ()
            },
            deps,
        );
    }

    let onsubmit = {
        let view = view.clone();
        let fields = fields.clone();
        let control = control.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if control.disabled {
                return;
            }
            let controller = ContactController::new(Web3FormsRelay::default(), view.clone());
            let guard = controller.begin((*control).clone());
            let snapshot = fields.to_field_set();
            spawn_local(async move {
                let _ = controller.complete(guard, snapshot).await;
            });
        })
    };

    let set_field = |field: Field| {
        let fields = fields.clone();
        move |value: String| {
            let value = if field == Field::Phone { format_us_phone(&value) } else { value };
            fields.set(fields.with(field, value));
        }
    };

    let on_focus = |field: Field| {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(Some(field)))
    };

    let on_blur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };

    let group_class = |field: Field| {
        let active = field.shows_focus() && *focused == Some(field);
        classes!("form-group", active.then(|| "focused"))
    };

    let text_input = |field: Field, kind: &'static str, label: &'static str, placeholder: &'static str, required: bool| {
        let set = set_field(field);
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        });
        html! {
            <div class={group_class(field)}>
                <label for={field.key()}>{label}</label>
                <input
                    type={kind}
                    id={field.key()}
                    name={field.key()}
                    placeholder={placeholder}
                    required={required}
                    value={fields.get(field).to_string()}
                    oninput={oninput}
                    onfocus={on_focus(field)}
                    onblur={on_blur.clone()}
                />
            </div>
        }
    };

    let on_service = {
        let set = set_field(Field::Service);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };

    let on_message = {
        let set = set_field(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            set(area.value());
        })
    };

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                { text_input(Field::Name, "text", "Full Name *", "John Smith", true) }
                { text_input(Field::Email, "email", "Email Address *", "john@company.com", true) }
            </div>
            <div class="form-row">
                { text_input(Field::Phone, "tel", "Phone Number", "(555) 123-4567", false) }
                { text_input(Field::Company, "text", "Company Name", "Your Company", false) }
            </div>
            <div class={group_class(Field::Service)}>
                <label for="service">{"What can we help with?"}</label>
                <select id="service" name="service" onchange={on_service}>
                    { for SERVICES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={fields.service == *value}>{*label}</option>
                    }) }
                </select>
            </div>
            <div class={group_class(Field::Message)}>
                <label for="message">{"Tell us about your project *"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    required={true}
                    placeholder="What processes would you like to automate?"
                    value={fields.message.clone()}
                    oninput={on_message}
                    onfocus={on_focus(Field::Message)}
                    onblur={on_blur.clone()}
                />
            </div>
            <button type="submit" class="btn btn-primary btn-submit" disabled={control.disabled}>
                <span>{ control.label.clone() }</span>
            </button>
            <div ref={status_ref} id="formMessage" class={board.status.class()}>
                { board.status.message().unwrap_or_default() }
            </div>
        </form>
    }
}

const SERVICES: [(&str, &str); 5] = [
    ("", "Select a service"),
    ("automation", "Workflow Automation"),
    ("ai-chatbots", "AI Chatbots"),
    ("web-development", "Web Development"),
    ("consulting", "Consulting"),
];
