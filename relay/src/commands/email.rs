use anyhow::ensure;
use clap::Subcommand;
use relay_config::Config;
use relay_email_contracts::{ContentType, Email, EmailService};
use relay_models::email_address::EmailAddressWithName;
use tracing::info;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email through the configured smtp server
    Test {
        /// Defaults to the recipient of contact messages
        recipient: Option<EmailAddressWithName>,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => {
                let recipient = recipient.unwrap_or_else(|| config.contact.recipient.clone().into());
                test(&config, recipient).await
            }
        }
    }
}

async fn test(config: &Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email)?;
    email_service.ping().await?;

    info!("Sending test email to {}", recipient.0);
    let accepted = email_service
        .send(Email {
            recipient,
            subject: "Contact relay deliverability test".into(),
            body: "If you can read this, contact messages will reach this mailbox.".into(),
            content_type: ContentType::Text,
            reply_to: None,
        })
        .await?;

    ensure!(accepted, "The smtp server rejected the test email");

    Ok(())
}
