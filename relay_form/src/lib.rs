//! State and submission lifecycle of the contact form.
//!
//! A [`ContactForm`] holds the field values, per-field errors, the submitting
//! flag and the result message of the last submission. The state is published
//! through a [`watch`] channel so that a UI can re-render while a submission is
//! in flight.

use std::time::Duration;

use relay_extern_contracts::ContactApiService;
use relay_models::contact::{ContactField, ContactRecord, FieldErrors};
use tokio::sync::watch;
use tracing::{info, warn};

pub use crate::navigator::{DeferredRedirect, Navigator};

mod navigator;

pub const SUCCESS_MESSAGE: &str = "Your message has been sent.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

pub struct ContactForm<Api, Nav> {
    api: Api,
    navigator: Nav,
    config: ContactFormConfig,
    state: watch::Sender<FormState>,
}

#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    /// Where to navigate after a successful submission.
    pub redirect_url: String,
    pub redirect_delay: Duration,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            redirect_url: "/".into(),
            redirect_delay: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: ContactRecord,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub result: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission is still in flight.
    Busy,
    /// Local validation failed, nothing was sent.
    Invalid,
    /// The relay accepted the message.
    Delivered,
    /// The relay answered with `success: false`.
    Rejected,
    /// The request did not complete or the response was unreadable.
    Failed,
}

impl<Api, Nav> ContactForm<Api, Nav>
where
    Api: ContactApiService,
    Nav: Navigator,
{
    pub fn new(api: Api, navigator: Nav, config: ContactFormConfig) -> Self {
        Self {
            api,
            navigator,
            config,
            state: watch::Sender::new(FormState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            state.values.set(field, value);
            state.errors.remove(&field);
            state.result = None;
        });
    }

    pub fn validate(&self) -> FieldErrors {
        self.state.borrow().values.validate()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let mut pending = Err(SubmitOutcome::Busy);
        self.state.send_if_modified(|state| {
            if state.submitting {
                return false;
            }

            state.errors = state.values.validate();
            pending = if state.errors.is_empty() {
                state.submitting = true;
                Ok(state.values.clone())
            } else {
                Err(SubmitOutcome::Invalid)
            };
            true
        });

        let record = match pending {
            Ok(record) => record,
            Err(outcome) => return outcome,
        };

        let _submitting = SubmittingGuard(&self.state);

        let response = match self.api.send_message(&record).await {
            Ok(response) => response,
            Err(err) => {
                warn!("Failed to submit contact form: {err}");
                self.state
                    .send_modify(|state| state.result = Some(FAILURE_MESSAGE.into()));
                return SubmitOutcome::Failed;
            }
        };

        let fallback = if response.success {
            SUCCESS_MESSAGE
        } else {
            FAILURE_MESSAGE
        };
        let message = response
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.into());

        if !response.success {
            self.state.send_modify(|state| {
                state.result = Some(message);
                state.errors.extend(response.errors);
            });
            return SubmitOutcome::Rejected;
        }

        info!("contact form submitted");
        self.state.send_modify(|state| {
            state.result = Some(message);
            state.values = ContactRecord::default();
            state.errors.clear();
        });
        self.navigator
            .redirect(&self.config.redirect_url, self.config.redirect_delay);

        SubmitOutcome::Delivered
    }
}

/// Resets the submitting flag however the submission ends, including when the
/// submit future is dropped.
struct SubmittingGuard<'a>(&'a watch::Sender<FormState>);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|state| state.submitting = false);
    }
}
