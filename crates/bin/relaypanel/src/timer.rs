//! Tokio-backed [`Timer`].

use std::time::Duration;

use relaypanel_app::ports::Timer;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
