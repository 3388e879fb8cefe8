use std::{sync::Arc, time::Duration};

pub trait Navigator: Send + Sync + 'static {
    /// Navigate to `target` once `delay` has elapsed. Must not block.
    fn redirect(&self, target: &str, delay: Duration);
}

/// Invokes a callback with the target on a tokio task after the delay.
pub struct DeferredRedirect<F> {
    navigate: Arc<F>,
}

impl<F> DeferredRedirect<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self {
            navigate: Arc::new(navigate),
        }
    }
}

impl<F> Clone for DeferredRedirect<F> {
    fn clone(&self) -> Self {
        Self {
            navigate: Arc::clone(&self.navigate),
        }
    }
}

impl<F> Navigator for DeferredRedirect<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn redirect(&self, target: &str, delay: Duration) {
        let navigate = Arc::clone(&self.navigate);
        let target = target.to_owned();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigate(&target);
        });
    }
}

#[cfg(test)]
mod tests {
    use tokio::{sync::mpsc, time::Instant};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn redirects_after_delay() {
        // Arrange
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sut = DeferredRedirect::new(move |target: &str| {
            let _ = tx.send(target.to_owned());
        });
        let start = Instant::now();

        // Act
        sut.redirect("/thank-you", Duration::from_secs(2));
        let target = rx.recv().await;

        // Assert
        assert_eq!(target.as_deref(), Some("/thank-you"));
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
