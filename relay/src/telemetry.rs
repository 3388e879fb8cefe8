use relay_config::SentryConfig;
use relay_utils::relay_version;
use sentry::{integrations::tracing::EventFilter, ClientInitGuard};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global tracing subscriber. Events go to stderr, filtered by
/// `RUST_LOG`; with a `[sentry]` section errors and warnings are reported too.
///
/// The returned guard flushes pending sentry events when dropped.
pub fn init(sentry_config: Option<&SentryConfig>) -> Option<ClientInitGuard> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    let sentry_guard = sentry_config.map(|config| {
        sentry::init((
            config.dsn.as_str(),
            sentry::ClientOptions {
                release: Some(relay_version().into()),
                attach_stacktrace: true,
                ..Default::default()
            },
        ))
    });

    let sentry_layer = sentry_guard.is_some().then(|| {
        sentry::integrations::tracing::layer().event_filter(|meta| match *meta.level() {
            Level::ERROR => EventFilter::Exception,
            Level::WARN => EventFilter::Event,
            Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
            Level::TRACE => EventFilter::Ignore,
        })
    });

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .with(sentry_layer)
        .init();

    sentry_guard
}
