use std::sync::Arc;

use anyhow::bail;
use clap::Args;
use relay_config::Config;
use relay_extern_impl::{ContactApiServiceConfig, ContactApiServiceImpl};
use relay_form::{ContactForm, ContactFormConfig, DeferredRedirect, SubmitOutcome};
use relay_models::contact::ContactField;
use tokio::sync::mpsc;
use url::Url;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    note: String,
    /// Mail endpoint of the relay, defaults to `form.endpoint`
    #[arg(long)]
    endpoint: Option<Url>,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let api = ContactApiServiceImpl::new(ContactApiServiceConfig {
            endpoint: Arc::new(self.endpoint.unwrap_or(config.form.endpoint)),
        })?;

        let (redirect_tx, mut redirect_rx) = mpsc::unbounded_channel();
        let navigator = DeferredRedirect::new(move |target: &str| {
            let _ = redirect_tx.send(target.to_owned());
        });

        let form = ContactForm::new(
            api,
            navigator,
            ContactFormConfig {
                redirect_url: config.form.redirect_url,
                redirect_delay: config.form.redirect_delay.into(),
            },
        );

        form.update_field(ContactField::FullName, self.full_name);
        form.update_field(ContactField::Phone, self.phone);
        form.update_field(ContactField::Email, self.email);
        form.update_field(ContactField::Note, self.note);

        let outcome = form.submit().await;
        let state = form.state();

        for (field, error) in &state.errors {
            eprintln!("{field}: {error}");
        }
        if let Some(result) = &state.result {
            println!("{result}");
        }

        match outcome {
            SubmitOutcome::Delivered => {
                if let Some(target) = redirect_rx.recv().await {
                    println!("Redirecting to {target}");
                }
                Ok(())
            }
            SubmitOutcome::Invalid => bail!("The form contains invalid fields"),
            SubmitOutcome::Rejected => bail!("The relay rejected the message"),
            SubmitOutcome::Failed => bail!("Failed to reach the relay"),
            SubmitOutcome::Busy => bail!("Another submission is in flight"),
        }
    }
}
