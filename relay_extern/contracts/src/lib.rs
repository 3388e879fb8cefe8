use std::future::Future;

use relay_models::contact::{ContactRecord, FieldErrors};

/// Client of the contact relay's mail endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post the record as JSON. Fails if the request could not be completed or
    /// the response could not be parsed.
    fn send_message(
        &self,
        record: &ContactRecord,
    ) -> impl Future<Output = anyhow::Result<ContactApiResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactApiResponse {
    pub success: bool,
    pub message: Option<String>,
    pub errors: FieldErrors,
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_send_message(mut self, record: ContactRecord, result: ContactApiResponse) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_message_error(mut self, record: ContactRecord) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "error sending request"
                ))))
            });
        self
    }
}
