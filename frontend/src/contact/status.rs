use std::rc::Rc;

use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Success and Error are shown to the visitor and expire on their own.
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    /// How long the message stays up before it clears itself, if it does.
    pub fn expiry_delay(self) -> Option<u32> {
        self.is_terminal().then_some(config::STATUS_CLEAR_MS)
    }

    pub fn message(self) -> Option<String> {
        match self {
            SubmissionStatus::Success => {
                Some("Thank you! We'll get back to you within 24 hours.".to_string())
            }
            SubmissionStatus::Error => Some(format!(
                "Oops! Something went wrong. Please try again or email us directly at {}",
                config::FALLBACK_EMAIL
            )),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }

    pub fn class(self) -> Classes {
        match self {
            SubmissionStatus::Success => classes!("form-message", "success"),
            SubmissionStatus::Error => classes!("form-message", "error"),
            SubmissionStatus::Idle | SubmissionStatus::Sending => classes!("form-message"),
        }
    }
}

/// The submit button as the visitor sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn ready(label: impl Into<String>) -> Self {
        Self { label: label.into(), disabled: false }
    }

    pub fn sending() -> Self {
        Self { label: "Sending...".to_string(), disabled: true }
    }
}

pub enum StatusAction {
    Show { status: SubmissionStatus, generation: u64 },
    Expire(u64),
}

/// Status line state. Every shown message gets a generation so an expiry
/// scheduled for an older message can't clear a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusBoard {
    pub status: SubmissionStatus,
    pub generation: u64,
}

impl StatusBoard {
    /// The status line holds a message worth scrolling to.
    pub fn should_reveal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn apply(&self, action: StatusAction) -> Self {
        match action {
            StatusAction::Show { status, generation } => Self { status, generation },
            StatusAction::Expire(generation) if generation == self.generation => Self {
                status: SubmissionStatus::Idle,
                generation,
            },
            StatusAction::Expire(_) => self.clone(),
        }
    }
}

impl Reducible for StatusBoard {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_clears_current_message() {
        let board = StatusBoard::default()
            .apply(StatusAction::Show { status: SubmissionStatus::Success, generation: 1 })
            .apply(StatusAction::Expire(1));
        assert_eq!(board.status, SubmissionStatus::Idle);
    }

    #[test]
    fn newer_message_outlives_older_expiry() {
        let board = StatusBoard::default()
            .apply(StatusAction::Show { status: SubmissionStatus::Error, generation: 1 })
            .apply(StatusAction::Show { status: SubmissionStatus::Success, generation: 2 })
            .apply(StatusAction::Expire(1));
        assert_eq!(board.status, SubmissionStatus::Success);

        let board = board.apply(StatusAction::Expire(2));
        assert_eq!(board.status, SubmissionStatus::Idle);
    }

    #[test]
    fn error_message_names_fallback_email() {
        let text = SubmissionStatus::Error.message().unwrap_or_default();
        assert!(text.contains(config::FALLBACK_EMAIL));
        assert!(SubmissionStatus::Idle.message().is_none());
        assert!(SubmissionStatus::Sending.message().is_none());
    }

    #[test]
    fn only_outcomes_schedule_expiry() {
        assert_eq!(SubmissionStatus::Success.expiry_delay(), Some(5_000));
        assert_eq!(SubmissionStatus::Error.expiry_delay(), Some(5_000));
        assert_eq!(SubmissionStatus::Sending.expiry_delay(), None);
        assert_eq!(SubmissionStatus::Idle.expiry_delay(), None);
    }

    #[test]
    fn reveal_waits_for_an_applied_outcome() {
        let board = StatusBoard::default();
        assert!(!board.should_reveal());

        let board = board.apply(StatusAction::Show { status: SubmissionStatus::Sending, generation: 1 });
        assert!(!board.should_reveal());

        let board = board.apply(StatusAction::Show { status: SubmissionStatus::Error, generation: 2 });
        assert!(board.should_reveal());

        let board = board.apply(StatusAction::Expire(2));
        assert!(!board.should_reveal());
    }

    #[test]
    fn only_outcomes_are_terminal() {
        assert!(SubmissionStatus::Success.is_terminal());
        assert!(SubmissionStatus::Error.is_terminal());
        assert!(!SubmissionStatus::Sending.is_terminal());
        assert!(!SubmissionStatus::Idle.is_terminal());
    }
}
