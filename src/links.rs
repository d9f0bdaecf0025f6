//! External link handling
//!
//! Opening a podcast's website is delegated to the host platform's default
//! browser. Calls are fire-and-forget: the browse screen never observes the
//! outcome, failures are only logged.

pub fn open_website(url: &str) {
    tracing::info!(url, "opening website in external browser");
    if let Err(e) = webbrowser::open(url) {
        tracing::warn!(url, error = %e, "failed to open external browser");
    }
}
