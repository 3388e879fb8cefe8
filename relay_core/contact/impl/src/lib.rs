use std::sync::Arc;

use relay_core_contact_contracts::{ContactSendMessageError, ContactService};
use relay_email_contracts::{ContentType, Email, EmailService};
use relay_models::{
    contact::{ContactMessage, ContactRecord},
    email_address::{EmailAddress, EmailAddressWithName},
};
use relay_templates_contracts::{ContactMessageTemplate, ContactSubjectTemplate, TemplateService};
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient: Arc<EmailAddressWithName>,
}

impl<Email, Template> ContactServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, Template> ContactService for ContactServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_message(&self, record: ContactRecord) -> Result<(), ContactSendMessageError> {
        let missing = record.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "rejecting contact message with missing fields");
            return Err(ContactSendMessageError::MissingFields);
        }

        let message = ContactMessage::try_from(record).map_err(|errors| {
            debug!(invalid = ?errors.keys(), "rejecting invalid contact message");
            ContactSendMessageError::Invalid(errors)
        })?;

        let reply_to = message
            .email
            .parse::<EmailAddress>()
            .ok()
            .map(EmailAddressWithName::from);

        let subject = self.template.render(&ContactSubjectTemplate {
            full_name: (*message.full_name).clone(),
        })?;

        let body = self.template.render(&ContactMessageTemplate {
            full_name: message.full_name.into_inner(),
            phone: message.phone.into_inner(),
            email: message.email.into_inner(),
            note: message.note.into_inner(),
        })?;

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject,
            body,
            content_type: ContentType::Html,
            reply_to,
        };

        match self.email.send(email).await {
            Ok(true) => {
                info!("forwarded contact message");
                Ok(())
            }
            Ok(false) => {
                error!("smtp server rejected contact message");
                Err(ContactSendMessageError::Mailer(
                    "The smtp server rejected the message".into(),
                ))
            }
            Err(err) => {
                error!("Failed to send contact message: {err}");
                Err(ContactSendMessageError::Mailer(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use relay_email_contracts::MockEmailService;
    use relay_models::contact::{ContactField, FieldErrors};
    use relay_templates_contracts::MockTemplateService;
    use relay_utils::assert_matches;

    use super::*;

    fn config() -> ContactServiceConfig {
        ContactServiceConfig {
            recipient: Arc::new("contact@example.com".parse().unwrap()),
        }
    }

    fn record() -> ContactRecord {
        ContactRecord {
            full_name: "John Smith".into(),
            phone: "9876543210".into(),
            email: "john@example.com".into(),
            note: "Looking forward to hearing from you".into(),
        }
    }

    fn templates(record: &ContactRecord) -> MockTemplateService {
        MockTemplateService::new()
            .with_render(
                ContactSubjectTemplate {
                    full_name: record.full_name.clone(),
                },
                format!("New Contact Message from {}", record.full_name),
            )
            .with_render(
                ContactMessageTemplate {
                    full_name: record.full_name.clone(),
                    phone: record.phone.clone(),
                    email: record.email.clone(),
                    note: record.note.clone(),
                },
                "<h3>Contact Details</h3>".into(),
            )
    }

    fn email(reply_to: Option<&str>) -> Email {
        Email {
            recipient: "contact@example.com".parse().unwrap(),
            subject: "New Contact Message from John Smith".into(),
            body: "<h3>Contact Details</h3>".into(),
            content_type: ContentType::Html,
            reply_to: reply_to.map(|x| x.parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let record = record();
        let template = templates(&record);
        let email = MockEmailService::new().with_send(email(Some("john@example.com")), true);

        let sut = ContactServiceImpl::new(email, template, config());

        // Act
        let result = sut.send_message(record).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn no_reply_to_for_unusual_address() {
        // Arrange
        let record = ContactRecord {
            email: "john@@example.com".into(),
            ..record()
        };
        let template = templates(&record);
        let email = MockEmailService::new().with_send(email(None), true);

        let sut = ContactServiceImpl::new(email, template, config());

        // Act
        let result = sut.send_message(record).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange
        let sut = ContactServiceImpl::new(
            MockEmailService::new(),
            MockTemplateService::new(),
            config(),
        );

        // Act
        let result = sut
            .send_message(ContactRecord {
                full_name: "A".into(),
                phone: "".into(),
                email: "x@y.com".into(),
                note: "hi there".into(),
            })
            .await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::MissingFields));
        assert_eq!(result.unwrap_err().to_string(), "All fields are required.");
    }

    #[tokio::test]
    async fn invalid_fields() {
        // Arrange
        let sut = ContactServiceImpl::new(
            MockEmailService::new(),
            MockTemplateService::new(),
            config(),
        );

        // Act
        let result = sut
            .send_message(ContactRecord {
                full_name: "John123".into(),
                phone: "12345".into(),
                ..record()
            })
            .await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSendMessageError::Invalid(errors)) if *errors == FieldErrors::from([
                (ContactField::FullName, "Full name should contain only letters.".into()),
                (ContactField::Phone, "Phone number must be exactly 10 digits.".into()),
            ])
        );
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let record = record();
        let template = templates(&record);
        let email = MockEmailService::new()
            .with_send_error(email(Some("john@example.com")), "Connection refused");

        let sut = ContactServiceImpl::new(email, template, config());

        // Act
        let result = sut.send_message(record).await;

        // Assert
        let err = result.unwrap_err();
        assert_matches!(
            &err,
            ContactSendMessageError::Mailer(detail) if detail == "Connection refused"
        );
        assert_eq!(err.to_string(), "Mailer Error: Connection refused");
    }

    #[tokio::test]
    async fn template_error() {
        // Arrange
        let mut template = MockTemplateService::new();
        template
            .expect_render::<ContactSubjectTemplate>()
            .once()
            .return_once(|_| Err(anyhow::anyhow!("template not found")));

        let sut = ContactServiceImpl::new(MockEmailService::new(), template, config());

        // Act
        let result = sut.send_message(record()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSendMessageError::Other(err)) if err.to_string() == "template not found"
        );
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let record = record();
        let template = templates(&record);
        let email = MockEmailService::new().with_send(email(Some("john@example.com")), false);

        let sut = ContactServiceImpl::new(email, template, config());

        // Act
        let result = sut.send_message(record).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Mailer(_)));
    }
}
