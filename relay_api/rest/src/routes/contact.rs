use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing, Json, Router};
use relay_core_contact_contracts::{ContactSendMessageError, ContactService};
use tracing::{error, warn};

use crate::models::contact::{ApiContactMessage, ApiContactResponse};

pub const SEND_MAIL_ROUTE: &str = "/send_mail";

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(SEND_MAIL_ROUTE, routing::post(send_message))
        .with_state(service)
}

/// Every outcome is reported with status 200; clients have to inspect
/// `success`.
async fn send_message(
    service: State<Arc<impl ContactService>>,
    body: Bytes,
) -> Json<ApiContactResponse> {
    let message = serde_json::from_slice::<ApiContactMessage>(&body)
        .inspect_err(|err| warn!("Failed to parse contact message: {err}"))
        .unwrap_or_default();

    let response = match service.send_message(message.into()).await {
        Ok(()) => ApiContactResponse::success("Your form has been submitted successfully"),
        Err(ContactSendMessageError::Invalid(errors)) => ApiContactResponse::invalid(errors),
        Err(err @ (ContactSendMessageError::MissingFields | ContactSendMessageError::Mailer(_))) => {
            ApiContactResponse::failure(err.to_string())
        }
        Err(ContactSendMessageError::Other(err)) => {
            error!("Failed to send contact message: {err}");
            ApiContactResponse::failure(format!("Mailer Error: {err}"))
        }
    };

    Json(response)
}
