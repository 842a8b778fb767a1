//! Contact form submission flow.
//!
//! [`ContactController::begin`] disables the submit button synchronously and
//! hands back a [`SendingGuard`]. The guard puts the original button back when
//! it drops, so every way out of [`ContactController::complete`] restores it.

use log::{error, info};

use crate::contact::error::SubmitError;
use crate::contact::fields::FormFieldSet;
use crate::contact::relay::FormRelay;
use crate::contact::status::{SubmissionStatus, SubmitControl};

/// The parts of the page the submission flow touches.
pub trait ContactView {
    fn set_submit_control(&self, control: SubmitControl);
    fn show_status(&self, status: SubmissionStatus);
    fn clear_fields(&self);
}

#[must_use = "dropping the guard re-enables the submit button immediately"]
pub struct SendingGuard<V: ContactView> {
    view: V,
    original: SubmitControl,
}

impl<V: ContactView> SendingGuard<V> {
    pub fn engage(view: V, current: SubmitControl) -> Self {
        let original = SubmitControl { disabled: false, ..current };
        view.set_submit_control(SubmitControl::sending());
        view.show_status(SubmissionStatus::Sending);
        Self { view, original }
    }
}

impl<V: ContactView> Drop for SendingGuard<V> {
    fn drop(&mut self) {
        self.view.set_submit_control(self.original.clone());
    }
}

#[derive(Clone)]
pub struct ContactController<R, V> {
    relay: R,
    view: V,
}

impl<R, V> ContactController<R, V>
where
    R: FormRelay,
    V: ContactView + Clone,
{
    pub fn new(relay: R, view: V) -> Self {
        Self { relay, view }
    }

    pub fn begin(&self, current: SubmitControl) -> SendingGuard<V> {
        SendingGuard::engage(self.view.clone(), current)
    }

    /// One attempt, no retry. Errors are reported to the visitor here and
    /// returned only so callers can log or test them.
    pub async fn complete(
        &self,
        guard: SendingGuard<V>,
        fields: FormFieldSet,
    ) -> Result<(), SubmitError> {
        let _guard = guard;

        let outcome = match self.relay.submit(&fields).await {
            Ok(reply) => reply.into_result(),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(message) => {
                info!(
                    "Form submitted successfully{}",
                    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
                );
                self.view.show_status(SubmissionStatus::Success);
                self.view.clear_fields();
            }
            Err(e) => {
                error!("Form submission error: {}", e);
                self.view.show_status(SubmissionStatus::Error);
            }
        }

        outcome.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::fields::ContactFields;
    use crate::contact::relay::{RelayBody, RelayReply};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Control(SubmitControl),
        Status(SubmissionStatus),
        Cleared,
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn enabled_count(&self) -> usize {
            self.events()
                .iter()
                .filter(|e| matches!(e, Event::Control(c) if !c.disabled))
                .count()
        }
    }

    impl ContactView for RecordingView {
        fn set_submit_control(&self, control: SubmitControl) {
            self.events.borrow_mut().push(Event::Control(control));
        }
        fn show_status(&self, status: SubmissionStatus) {
            self.events.borrow_mut().push(Event::Status(status));
        }
        fn clear_fields(&self) {
            self.events.borrow_mut().push(Event::Cleared);
        }
    }

    struct FakeRelay {
        reply: Result<(u16, serde_json::Value), SubmitError>,
        seen: RefCell<Vec<FormFieldSet>>,
    }

    impl FakeRelay {
        fn answering(body: serde_json::Value) -> Self {
            Self::answering_with(200, body)
        }

        fn answering_with(status: u16, body: serde_json::Value) -> Self {
            Self { reply: Ok((status, body)), seen: RefCell::new(Vec::new()) }
        }

        fn unreachable() -> Self {
            Self {
                reply: Err(SubmitError::Transport("connection refused".into())),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormRelay for &FakeRelay {
        async fn submit(&self, fields: &FormFieldSet) -> Result<RelayReply, SubmitError> {
            self.seen.borrow_mut().push(fields.clone());
            self.reply.clone().map(|(status, body)| {
                let body: RelayBody = serde_json::from_value(body).unwrap();
                RelayReply::interpret(status, body)
            })
        }
    }

    fn run<V: ContactView + Clone>(
        controller: &ContactController<&FakeRelay, V>,
        label: &str,
    ) -> Result<(), SubmitError> {
        let guard = controller.begin(SubmitControl::ready(label));
        block_on(controller.complete(guard, filled().to_field_set()))
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "(555) 123-4567".into(),
            company: "Engines Ltd".into(),
            service: "automation".into(),
            message: "Let's talk".into(),
        }
    }

    #[test]
    fn success_clears_fields_and_restores_button() {
        let relay = FakeRelay::answering(json!({"success": true}));
        let view = RecordingView::default();
        let controller = ContactController::new(&relay, view.clone());

        let result = run(&controller, "Send Message");

        assert_eq!(result, Ok(()));
        assert_eq!(
            view.events(),
            vec![
                Event::Control(SubmitControl::sending()),
                Event::Status(SubmissionStatus::Sending),
                Event::Status(SubmissionStatus::Success),
                Event::Cleared,
                Event::Control(SubmitControl::ready("Send Message")),
            ]
        );
        assert_eq!(relay.seen.borrow().len(), 1);
        assert_eq!(relay.seen.borrow()[0].get("email"), Some("ada@example.com"));
    }

    #[test]
    fn rejection_keeps_fields_and_restores_button() {
        let relay = FakeRelay::answering(json!({"success": false, "message": "spam"}));
        let view = RecordingView::default();
        let controller = ContactController::new(&relay, view.clone());

        let result = run(&controller, "Send");

        assert_eq!(result, Err(SubmitError::Application(Some("spam".into()))));
        let events = view.events();
        assert!(events.contains(&Event::Status(SubmissionStatus::Error)));
        assert!(!events.contains(&Event::Cleared));
        assert_eq!(events.last(), Some(&Event::Control(SubmitControl::ready("Send"))));
        assert_eq!(view.enabled_count(), 1);
    }

    #[test]
    fn unreachable_relay_shows_error_once() {
        let relay = FakeRelay::unreachable();
        let view = RecordingView::default();
        let controller = ContactController::new(&relay, view.clone());

        let result = run(&controller, "Send");

        assert!(matches!(result, Err(SubmitError::Transport(_))));
        assert_eq!(relay.seen.borrow().len(), 1);
        assert!(!view.events().contains(&Event::Cleared));
        assert!(view.events().contains(&Event::Status(SubmissionStatus::Error)));
        assert_eq!(view.enabled_count(), 1);
    }

    #[test]
    fn server_error_status_keeps_fields_despite_truthy_body() {
        let relay = FakeRelay::answering_with(503, json!({"success": true}));
        let view = RecordingView::default();
        let controller = ContactController::new(&relay, view.clone());

        let result = run(&controller, "Send");

        assert_eq!(
            result,
            Err(SubmitError::Application(Some("HTTP status 503".into())))
        );
        let events = view.events();
        assert!(events.contains(&Event::Status(SubmissionStatus::Error)));
        assert!(!events.contains(&Event::Status(SubmissionStatus::Success)));
        assert!(!events.contains(&Event::Cleared));
        assert_eq!(view.enabled_count(), 1);
    }

    #[test]
    fn button_is_disabled_before_any_request() {
        let relay = FakeRelay::answering(json!({"success": true}));
        let view = RecordingView::default();
        let controller = ContactController::new(&relay, view.clone());

        let guard = controller.begin(SubmitControl::ready("Send"));
        assert_eq!(view.events().first(), Some(&Event::Control(SubmitControl::sending())));
        assert!(relay.seen.borrow().is_empty());
        assert_eq!(view.enabled_count(), 0);

        let _ = block_on(controller.complete(guard, filled().to_field_set()));
        assert_eq!(view.enabled_count(), 1);
    }

    #[test]
    fn dropped_guard_restores_original_label() {
        let view = RecordingView::default();
        let guard = SendingGuard::engage(view.clone(), SubmitControl::ready("Get in touch"));
        drop(guard);
        assert_eq!(
            view.events().last(),
            Some(&Event::Control(SubmitControl::ready("Get in touch")))
        );
    }
}
