use std::future::Future;
use std::time::Duration;

use shared_types::SessionConfig;

/// Simulated network round trip before a credential check completes.
pub trait Latency {
    fn wait(&self) -> impl Future<Output = ()>;
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Latency for NoDelay {
    async fn wait(&self) {}
}

/// Sleeps for a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::from_millis(config.latency_ms)
    }
}

impl Latency for FixedDelay {
    async fn wait(&self) {
        if self.0.is_zero() {
            return;
        }
        sleep(self.0).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    use wasm_bindgen::JsValue;

    let ms = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            tracing::warn!("setTimeout unavailable, skipping simulated latency");
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_delay_completes() {
        NoDelay.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_waits_for_its_duration() {
        let start = tokio::time::Instant::now();
        FixedDelay::from_millis(1000).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn from_config_uses_latency_ms() {
        let config = SessionConfig {
            latency_ms: 250,
            ..SessionConfig::default()
        };
        assert_eq!(FixedDelay::from_config(&config), FixedDelay::from_millis(250));
    }
}
