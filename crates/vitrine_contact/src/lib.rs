//! Vitrine contact form model
//!
//! The support page never talks to a mail server. Submitting the inquiry
//! form builds a `mailto:` URI with a percent-encoded subject and body and
//! hands navigation to the host environment. The only user-visible
//! outcomes are a success notice (the mail client should have opened) and
//! a fallback notice carrying the literal support address.

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Display name of the app the site promotes
pub const APP_NAME: &str = "Vitrine";

/// Address inquiries are mailed to
pub const SUPPORT_ADDRESS: &str = "support@vitrine.app";

/// Percent-encode set for mailto query components
///
/// <https://url.spec.whatwg.org/#component-percent-encode-set>
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',');

/// Errors surfaced while turning a form into a mailto link
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
}

/// Field values of the support inquiry form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    /// Device description, e.g. "iPhone 15 Pro"
    #[serde(default)]
    pub device: String,
    /// App version as shown in the app's settings screen
    #[serde(default)]
    pub app_version: String,
    pub subject: String,
    pub message: String,
}

impl InquiryForm {
    /// Check that every required field carries something besides whitespace
    pub fn validate(&self) -> Result<(), ContactError> {
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        Ok(())
    }

    /// Build the `mailto:` URI the host should navigate to
    ///
    /// Subject and body are percent-encoded; the body lists the labelled
    /// form fields, a blank line, then the message.
    pub fn mailto_uri(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;

        let subject = format!("[{APP_NAME} inquiry] {}", self.subject);
        let body = format!(
            "Name: {}\nEmail: {}\nDevice: {}\nApp version: {}\n\nInquiry:\n{}",
            self.name, self.email, self.device, self.app_version, self.message
        );

        let encoded_subject = percent_encode(subject.as_bytes(), COMPONENT);
        let encoded_body = percent_encode(body.as_bytes(), COMPONENT);
        debug!(recipient, subject = %subject, "built mailto link");
        Ok(format!(
            "mailto:{recipient}?subject={encoded_subject}&body={encoded_body}"
        ))
    }
}

/// The two user-visible results of submitting the form
///
/// There is no retry path: either the mail client opened, or the visitor
/// is pointed at the support address directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The mailto link was handed to the host environment
    MailClientOpened,
    /// Building the link failed; show the literal address instead
    Fallback { contact: String },
}

impl SubmitOutcome {
    /// Notice text shown to the visitor
    pub fn notice(&self) -> String {
        match self {
            SubmitOutcome::MailClientOpened => {
                "Your mail client should have opened. Review the draft and press send.".to_string()
            }
            SubmitOutcome::Fallback { contact } => {
                format!("Something went wrong. Please email {contact} directly.")
            }
        }
    }
}
