use crate::modules::contact::application::domain::entities::ContactMessage;

/// Outbound notification hook for new submissions. Implementations must
/// return immediately; delivery happens in the background.
pub trait ContactNotifier: Send + Sync {
    fn notify_submission(&self, message: &ContactMessage);
}

/// No-op notifier for tests and setups without SMTP configured.
pub struct NullContactNotifier;

impl ContactNotifier for NullContactNotifier {
    fn notify_submission(&self, _message: &ContactMessage) {}
}
