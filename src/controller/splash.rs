//! One-shot splash-to-login transition timer

use std::time::Duration;

use crate::model::ScreenId;
use super::AppController;

/// How long the splash screen stays up before the login screen replaces it.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2000);

impl AppController {
    /// Arm the one-shot timer that replaces the splash screen with the login
    /// screen. The join handle is retained so teardown can cancel a timer
    /// that has not fired yet.
    pub async fn start_splash_timer(&self) {
        let model = self.model.clone();
        let timer_slot = self.splash_timer.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(SPLASH_DELAY).await;

            {
                let model = model.lock().await;
                // The splash screen may already be gone; only navigate while
                // it is still the current screen.
                if model.current_screen().await == ScreenId::Splash {
                    tracing::debug!("splash delay elapsed, moving to login");
                    model.navigate_to(ScreenId::Login, true).await;
                }
            }

            *timer_slot.lock().await = None;
        });

        *self.splash_timer.lock().await = Some(handle);
    }

    /// Cancel a pending splash transition. Safe to call after the timer has
    /// fired or been cancelled already.
    pub async fn cancel_splash_timer(&self) {
        if let Some(handle) = self.splash_timer.lock().await.take() {
            handle.abort();
        }
    }
}
