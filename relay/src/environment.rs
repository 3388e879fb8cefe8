use std::sync::Arc;

use relay_api_rest::RestServerConfig;
use relay_config::Config;
use relay_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use relay_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use relay_email_impl::EmailServiceImpl;
use relay_templates_impl::TemplateServiceImpl;

pub type Email = EmailServiceImpl;
pub type Template = TemplateServiceImpl;

pub type ContactService = ContactServiceImpl<Email, Template>;
pub type HealthService = HealthServiceImpl<Email>;

pub type RestServer = relay_api_rest::RestServer<HealthService, ContactService>;

/// Wire the mail relay's services on top of an SMTP transport.
pub fn rest_server(config: &Config, email: Email) -> anyhow::Result<RestServer> {
    let template = TemplateServiceImpl::new()?;

    let contact = ContactServiceImpl::new(
        email.clone(),
        template,
        ContactServiceConfig {
            recipient: Arc::new(config.contact.recipient.clone().into()),
        },
    );

    let health = HealthServiceImpl::new(
        email,
        HealthServiceConfig {
            cache_ttl: *config.health.cache_ttl,
        },
    );

    Ok(relay_api_rest::RestServer::new(
        health,
        contact,
        RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        },
    ))
}
