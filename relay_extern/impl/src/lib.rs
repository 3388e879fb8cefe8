use std::sync::Arc;

use relay_extern_contracts::{ContactApiResponse, ContactApiService};
use relay_models::contact::{ContactRecord, FieldErrors};
use serde::Deserialize;
use url::Url;

use crate::http::HttpClient;

mod http;

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    pub endpoint: Arc<Url>,
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: HttpClient::new()?,
        })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn send_message(&self, record: &ContactRecord) -> anyhow::Result<ContactApiResponse> {
        self.client
            .post((*self.config.endpoint).clone())
            .json(record)
            .send()
            .await?
            .json::<SendMailResponse>()
            .await
            .map(Into::into)
            .map_err(Into::into)
    }
}

#[derive(Deserialize)]
struct SendMailResponse {
    success: bool,
    message: Option<String>,
    #[serde(default)]
    errors: FieldErrors,
}

impl From<SendMailResponse> for ContactApiResponse {
    fn from(value: SendMailResponse) -> Self {
        Self {
            success: value.success,
            message: value.message,
            errors: value.errors,
        }
    }
}
