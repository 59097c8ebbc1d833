//! Contact request flow: a small state machine around one outbound
//! email send, plus the transactional-email service client.
//!
//! The machine is deliberately UI-free so it can be driven from tests
//! the same way the form component drives it: `begin_submit` on form
//! submission, `complete` when the sender resolves, `window_elapsed`
//! when the notice timer fires.

use serde::Serialize;
use thiserror::Error;

/// How long a success/failure notice stays on screen before the flow
/// returns to idle.
pub const NOTICE_WINDOW_MS: u64 = 3000;

const RECIPIENT_NAME: &str = "Amos";
const REQUEST_MESSAGE: &str = "I need your service.";

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The payload handed to the notification sender, built at submit time
/// and discarded after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub to_name: &'static str,
    pub from_name: String,
    pub message: &'static str,
}

impl ContactRequest {
    pub fn new(sender_address: &str) -> Self {
        Self {
            to_name: RECIPIENT_NAME,
            from_name: sender_address.to_string(),
            message: REQUEST_MESSAGE,
        }
    }
}

/// Syntactic email check, matching what the browser's native `email`
/// input accepts for the common case: non-empty local part, one `@`,
/// a dotted domain, no whitespace.
pub fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("enter a valid email address")]
    InvalidAddress,
    #[error("a request is already in flight")]
    InFlight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("email service returned status {0}")]
    Service(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("email service is not configured")]
    NotConfigured,
}

/// Delivery acknowledgement from the notification sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-visible notice, shown for [`NOTICE_WINDOW_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub kind: NoticeKind,
}

/// State machine for one contact form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFlow {
    state: ContactState,
    address: String,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self {
            state: ContactState::Idle,
            address: String::new(),
        }
    }

    pub fn state(&self) -> ContactState {
        self.state
    }

    /// The last-entered address. Retained across failures so the visitor
    /// need not retype it.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Idle -> Submitting. Rejects malformed addresses without issuing a
    /// send, and ignores submissions while one is already outstanding.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitError> {
        if self.state != ContactState::Idle {
            return Err(SubmitError::InFlight);
        }
        if !is_valid_email(&self.address) {
            return Err(SubmitError::InvalidAddress);
        }
        self.state = ContactState::Submitting;
        Ok(ContactRequest::new(&self.address))
    }

    /// Submitting -> Succeeded/Failed. Completions that arrive in any
    /// other state are stale and ignored.
    pub fn complete(&mut self, result: Result<Ack, SendError>) {
        if self.state != ContactState::Submitting {
            return;
        }
        match result {
            Ok(Ack) => {
                self.state = ContactState::Succeeded;
                self.address.clear();
            }
            Err(_) => {
                self.state = ContactState::Failed;
            }
        }
    }

    /// Succeeded/Failed -> Idle once the notice window elapses.
    pub fn window_elapsed(&mut self) {
        if matches!(self.state, ContactState::Succeeded | ContactState::Failed) {
            self.state = ContactState::Idle;
        }
    }

    /// The notice to display for the current state, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self.state {
            ContactState::Succeeded => Some(Notice {
                message: "Request sent successfully!",
                kind: NoticeKind::Success,
            }),
            ContactState::Failed => Some(Notice {
                message: "Failed to send request.",
                kind: NoticeKind::Error,
            }),
            ContactState::Idle | ContactState::Submitting => None,
        }
    }
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// External notification-sender capability. The flow only ever sees
/// `send(request) -> Result<Ack, SendError>`.
pub trait NotificationSender {
    fn send(
        &self,
        request: &ContactRequest,
    ) -> impl std::future::Future<Output = Result<Ack, SendError>>;
}

/// EmailJS credentials, resolved once from compile-time configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailJsConfig {
    /// None when any credential is missing; the form then surfaces a
    /// send failure instead of posting a broken request.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            service_id: option_env!("EMAILJS_SERVICE_ID")?,
            template_id: option_env!("EMAILJS_TEMPLATE_ID")?,
            public_key: option_env!("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactRequest,
}

/// Production sender backed by the EmailJS REST API.
pub struct EmailJsSender {
    config: EmailJsConfig,
    client: reqwest::Client,
}

impl EmailJsSender {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Option<Self> {
        EmailJsConfig::from_env().map(Self::new)
    }
}

impl NotificationSender for EmailJsSender {
    async fn send(&self, request: &ContactRequest) -> Result<Ack, SendError> {
        let payload = EmailJsPayload {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: request,
        };
        let response = self
            .client
            .post(EMAILJS_ENDPOINT)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;
        if response.status().is_success() {
            Ok(Ack)
        } else {
            Err(SendError::Service(response.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_with(address: &str) -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.set_address(address);
        flow
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.co.ke"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_invalid_address_blocks_submission() {
        let mut flow = flow_with("not-an-email");
        let err = flow.begin_submit().unwrap_err();
        assert_eq!(err, SubmitError::InvalidAddress);
        assert_eq!(flow.state(), ContactState::Idle);
        assert_eq!(flow.address(), "not-an-email");
    }

    #[test]
    fn test_valid_submission_dispatches_once() {
        let mut flow = flow_with("user@example.com");
        let request = flow.begin_submit().expect("valid address should submit");
        assert_eq!(flow.state(), ContactState::Submitting);
        assert_eq!(request.from_name, "user@example.com");
        assert_eq!(request.to_name, "Amos");
        assert_eq!(request.message, "I need your service.");
    }

    #[test]
    fn test_second_submission_while_in_flight_is_ignored() {
        let mut flow = flow_with("user@example.com");
        assert!(flow.begin_submit().is_ok());
        let err = flow.begin_submit().unwrap_err();
        assert_eq!(err, SubmitError::InFlight);
        assert_eq!(flow.state(), ContactState::Submitting);
    }

    #[test]
    fn test_success_clears_address_then_idles() {
        let mut flow = flow_with("user@example.com");
        flow.begin_submit().unwrap();

        flow.complete(Ok(Ack));
        assert_eq!(flow.state(), ContactState::Succeeded);
        assert_eq!(flow.address(), "");
        let notice = flow.notice().expect("success should show a notice");
        assert_eq!(notice.kind, NoticeKind::Success);

        flow.window_elapsed();
        assert_eq!(flow.state(), ContactState::Idle);
        assert!(flow.notice().is_none());
    }

    #[test]
    fn test_failure_retains_address_then_idles() {
        let mut flow = flow_with("user@example.com");
        flow.begin_submit().unwrap();

        flow.complete(Err(SendError::Service(500)));
        assert_eq!(flow.state(), ContactState::Failed);
        assert_eq!(flow.address(), "user@example.com");
        let notice = flow.notice().expect("failure should show a notice");
        assert_eq!(notice.kind, NoticeKind::Error);

        flow.window_elapsed();
        assert_eq!(flow.state(), ContactState::Idle);
        // the visitor can retry without retyping
        assert!(flow.begin_submit().is_ok());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut flow = flow_with("user@example.com");
        flow.complete(Ok(Ack));
        assert_eq!(flow.state(), ContactState::Idle);

        flow.begin_submit().unwrap();
        flow.complete(Err(SendError::Network("offline".into())));
        flow.complete(Ok(Ack));
        // second completion arrives after the flow already settled
        assert_eq!(flow.state(), ContactState::Failed);
    }

    #[test]
    fn test_window_elapsed_is_noop_outside_notice_states() {
        let mut flow = flow_with("user@example.com");
        flow.window_elapsed();
        assert_eq!(flow.state(), ContactState::Idle);

        flow.begin_submit().unwrap();
        flow.window_elapsed();
        assert_eq!(flow.state(), ContactState::Submitting);
    }

    #[test]
    fn test_no_notice_while_submitting() {
        let mut flow = flow_with("user@example.com");
        assert!(flow.notice().is_none());
        flow.begin_submit().unwrap();
        assert!(flow.notice().is_none());
    }
}
