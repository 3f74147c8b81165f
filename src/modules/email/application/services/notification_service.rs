use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::ContactNotifier;
use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};
use crate::modules::resume::application::ports::outgoing::cv_notifier::CvNotifier;
use crate::shared::text::preview;

const RETRY_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);
const PREVIEW_CHARS: usize = 100;

/// Builds notification emails from hard-coded templates and queues them
/// for background delivery. Delivery failures are logged, never surfaced.
#[derive(Clone)]
pub struct NotificationService {
    sender: Arc<dyn EmailSender>,
    admin_email: String,
    site_name: String,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn EmailSender>, admin_email: &str, site_name: &str) -> Self {
        Self {
            sender,
            admin_email: admin_email.to_string(),
            site_name: site_name.to_string(),
        }
    }

    /// Acknowledgment to the submitter with a preview of their message.
    pub fn contact_acknowledgment(&self, message: &ContactMessage) -> OutgoingEmail {
        let snippet = preview(&message.message, PREVIEW_CHARS);
        OutgoingEmail {
            to: message.email.clone(),
            reply_to: None,
            subject: format!("Thanks for reaching out to {}", self.site_name),
            html_body: format!(
                "<html><body>\
                 <p>Hi {name},</p>\
                 <p>Thanks for your message. I'll get back to you as soon as I can.</p>\
                 <blockquote>{snippet}</blockquote>\
                 <p>&mdash; {site}</p>\
                 </body></html>",
                name = message.name,
                snippet = snippet,
                site = self.site_name,
            ),
            text_body: format!(
                "Hi {name},\n\n\
                 Thanks for your message. I'll get back to you as soon as I can.\n\n\
                 > {snippet}\n\n\
                 -- {site}\n",
                name = message.name,
                snippet = snippet,
                site = self.site_name,
            ),
        }
    }

    /// New-submission notification to the admin; replying goes to the
    /// submitter.
    pub fn admin_notification(&self, message: &ContactMessage) -> OutgoingEmail {
        let subject_line = if message.subject.is_empty() {
            "(no subject)"
        } else {
            &message.subject
        };
        OutgoingEmail {
            to: self.admin_email.clone(),
            reply_to: Some(message.email.clone()),
            subject: format!("New contact message: {subject_line}"),
            html_body: format!(
                "<html><body>\
                 <h3>New contact message</h3>\
                 <p><b>From:</b> {name} &lt;{email}&gt;</p>\
                 <p><b>Company:</b> {company}</p>\
                 <p><b>Subject:</b> {subject}</p>\
                 <p>{body}</p>\
                 </body></html>",
                name = message.name,
                email = message.email,
                company = message.company,
                subject = subject_line,
                body = message.message,
            ),
            text_body: format!(
                "New contact message\n\n\
                 From: {name} <{email}>\n\
                 Company: {company}\n\
                 Subject: {subject}\n\n\
                 {body}\n",
                name = message.name,
                email = message.email,
                company = message.company,
                subject = subject_line,
                body = message.message,
            ),
        }
    }

    /// Notifies the admin that a CV document was generated.
    pub fn cv_ready(&self, filename: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: self.admin_email.clone(),
            reply_to: None,
            subject: format!("CV generated: {filename}"),
            html_body: format!(
                "<html><body><p>A CV document <b>{filename}</b> was generated and \
                 downloaded.</p></body></html>"
            ),
            text_body: format!("A CV document {filename} was generated and downloaded.\n"),
        }
    }

    /// Spawns delivery in the background and returns immediately.
    pub fn queue(&self, email: OutgoingEmail) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            send_with_retry(sender, email, RETRY_BASE_DELAY).await;
        });
    }
}

impl ContactNotifier for NotificationService {
    fn notify_submission(&self, message: &ContactMessage) {
        self.queue(self.contact_acknowledgment(message));
        self.queue(self.admin_notification(message));
    }
}

impl CvNotifier for NotificationService {
    fn notify_generated(&self, filename: &str) {
        self.queue(self.cv_ready(filename));
    }
}

/// Bounded retry, doubling the delay after each failed attempt.
async fn send_with_retry(sender: Arc<dyn EmailSender>, email: OutgoingEmail, base_delay: Duration) {
    let mut delay = base_delay;
    for attempt in 1..=RETRY_ATTEMPTS {
        match sender.send_email(email.clone()).await {
            Ok(()) => {
                debug!("Email to {} delivered on attempt {}", email.to, attempt);
                return;
            }
            Err(e) if attempt < RETRY_ATTEMPTS => {
                warn!(
                    "Email to {} failed on attempt {}: {}; retrying in {:?}",
                    email.to, attempt, e, delay
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                error!(
                    "Giving up on email to {} after {} attempts: {}",
                    email.to, RETRY_ATTEMPTS, e
                );
            }
        }
    }
}
