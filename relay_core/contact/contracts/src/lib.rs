use std::future::Future;

use relay_models::contact::{ContactRecord, FieldErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate the contact record and forward it to the configured recipient.
    fn send_message(
        &self,
        record: ContactRecord,
    ) -> impl Future<Output = Result<(), ContactSendMessageError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid contact message.")]
    Invalid(FieldErrors),
    #[error("Mailer Error: {0}")]
    Mailer(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_message(
        mut self,
        record: ContactRecord,
        result: Result<(), ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
