/// Outbound notification hook fired after a curriculum document is
/// served. Implementations must return immediately; delivery happens in
/// the background.
pub trait CvNotifier: Send + Sync {
    fn notify_generated(&self, filename: &str);
}

/// No-op notifier for tests and setups without SMTP configured.
pub struct NullCvNotifier;

impl CvNotifier for NullCvNotifier {
    fn notify_generated(&self, _filename: &str) {}
}
