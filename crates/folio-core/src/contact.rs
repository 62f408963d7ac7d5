//! Simulated contact form.
//!
//! Nothing is sent by the application. A valid submission becomes a Gmail
//! compose URL that the shell opens in the system browser.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::error::ContactError;

/// Subject used when the field is left blank
pub const DEFAULT_SUBJECT: &str = "Portfolio Inquiry";

/// Delay between submit and opening the compose window
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// How long the success note stays visible
pub const NOTE_CLEAR_DELAY: Duration = Duration::from_millis(8000);

pub const OPENING_LABEL: &str = "Opening Gmail…";
pub const SENT_NOTE: &str = "Gmail opened! Please click \"Send\" in the new tab.";

const COMPOSE_BASE: &str = "https://mail.google.com/mail/";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// Raw form input as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated message ready to hand to the webmail composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeMessage {
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl ContactForm {
    pub fn new(
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Trim all fields and check the required ones.
    pub fn validate(&self) -> Result<ComposeMessage, ContactError> {
        let email = self.email.trim();
        let message = self.message.trim();
        let subject = match self.subject.trim() {
            "" => DEFAULT_SUBJECT,
            s => s,
        };

        if email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingField);
        }
        if !email_pattern().is_match(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ComposeMessage {
            from: email.to_string(),
            subject: subject.to_string(),
            body: message.to_string(),
        })
    }
}

impl ComposeMessage {
    /// Gmail compose URL addressed to `recipient`. Only the message text goes in the body.
    pub fn compose_url(&self, recipient: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            COMPOSE_BASE,
            &[
                ("view", "cm"),
                ("fs", "1"),
                ("to", recipient),
                ("su", self.subject.as_str()),
                ("body", self.body.as_str()),
            ],
        )
    }
}

/// Rewrite a `mailto:` link into a Gmail compose URL, `None` for other links.
pub fn mailto_compose_url(href: &str) -> Option<Url> {
    let rest = href.strip_prefix("mailto:")?;
    let address = rest.split('?').next().unwrap_or_default().trim();
    if address.is_empty() {
        return None;
    }
    Url::parse_with_params(COMPOSE_BASE, &[("view", "cm"), ("fs", "1"), ("to", address)]).ok()
}
