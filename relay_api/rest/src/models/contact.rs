use std::borrow::Cow;

use relay_models::contact::{ContactRecord, FieldErrors};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The submitted contact record. Absent and `null` fields are treated like
/// empty strings, numbers and booleans by their JSON text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactMessage {
    #[serde(default, deserialize_with = "scalar_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub note: Option<String>,
}

/// Arrays and objects count as absent.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

impl From<ApiContactMessage> for ContactRecord {
    fn from(value: ApiContactMessage) -> Self {
        Self {
            full_name: value.full_name.unwrap_or_default(),
            phone: value.phone.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            note: value.note.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactResponse {
    pub success: bool,
    pub message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ApiContactResponse {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        let message = errors
            .values()
            .next()
            .cloned()
            .unwrap_or(Cow::Borrowed("Invalid contact message."));
        Self {
            success: false,
            message,
            errors: Some(errors),
        }
    }
}
