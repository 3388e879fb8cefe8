use anyhow::Context;
use relay_config::{EmailConfig, SmtpSecurity};
use relay_email_impl::{EmailServiceImpl, SmtpConfig};
use relay_models::email_address::EmailAddress;

/// Build the SMTP transport. The sender is `email.from`, falling back to the
/// account username.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let from = match &config.from {
        Some(from) => from.clone(),
        None => config
            .username
            .parse::<EmailAddress>()
            .context("email.username is not a valid sender address, set email.from")?,
    }
    .with_name(config.from_name.clone());

    let smtp = SmtpConfig {
        host: config.host.clone(),
        port: config.port,
        security: match config.security {
            SmtpSecurity::None => relay_email_impl::SmtpSecurity::None,
            SmtpSecurity::StartTls => relay_email_impl::SmtpSecurity::StartTls,
            SmtpSecurity::Tls => relay_email_impl::SmtpSecurity::Tls,
        },
        credentials: (!config.username.is_empty())
            .then(|| (config.username.clone(), config.password.clone())),
    };

    EmailServiceImpl::new(smtp, from).context("Failed to create SMTP transport")
}

