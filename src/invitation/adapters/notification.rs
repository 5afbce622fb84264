//! Invitation notification rendering and a log-only dispatcher.
//!
//! The real delivery transport (SMTP or otherwise) lives outside this
//! crate; what belongs here is the message itself. [`InvitationEmailRenderer`]
//! produces the subject and plain-text body from `minijinja` templates, and
//! [`LoggingNotifier`] is a transport stand-in that renders and logs the
//! message, useful in development and tests.

use async_trait::async_trait;
use log::info;
use minijinja::{Environment, context};
use thiserror::Error;

use crate::invitation::domain::Invitation;
use crate::invitation::ports::{InviteeNotifier, NotifyError};

const SUBJECT_TEMPLATE: &str = r#"You're invited to collaborate on "{{ board_title }}""#;

const BODY_TEMPLATE: &str = "\
You've been invited to collaborate on the board: {{ board_title }}

Open the link below to accept the invitation:

    {{ accept_url }}

This invitation will expire in 7 days.
If you didn't expect this invitation, you can safely ignore this message.
";

/// Error returned while rendering an invitation message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render invitation email: {0}")]
pub struct InvitationEmailError(String);

/// A rendered invitation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationEmail {
    /// Message subject line.
    pub subject: String,
    /// Plain-text message body.
    pub body: String,
}

/// Renders invitation messages from templates.
#[derive(Debug, Clone)]
pub struct InvitationEmailRenderer {
    accept_url_base: String,
}

impl InvitationEmailRenderer {
    /// Creates a renderer that builds accept links under the given base
    /// URL, e.g. `https://boards.example.com/invitations`.
    #[must_use]
    pub fn new(accept_url_base: impl Into<String>) -> Self {
        Self {
            accept_url_base: accept_url_base.into(),
        }
    }

    /// Renders the subject and body for an invitation.
    ///
    /// # Errors
    ///
    /// Returns [`InvitationEmailError`] when template rendering fails.
    pub fn render(
        &self,
        invitation: &Invitation,
        board_title: &str,
    ) -> Result<InvitationEmail, InvitationEmailError> {
        let accept_url = format!(
            "{}/{}",
            self.accept_url_base.trim_end_matches('/'),
            invitation.token().as_str()
        );
        let environment = Environment::new();
        let subject = environment
            .render_str(SUBJECT_TEMPLATE, context! { board_title })
            .map_err(|error| InvitationEmailError(error.to_string()))?;
        let body = environment
            .render_str(BODY_TEMPLATE, context! { board_title, accept_url })
            .map_err(|error| InvitationEmailError(error.to_string()))?;
        Ok(InvitationEmail { subject, body })
    }
}

/// Notifier that renders the invitation message and logs it instead of
/// dispatching it.
#[derive(Debug, Clone)]
pub struct LoggingNotifier {
    renderer: InvitationEmailRenderer,
}

impl LoggingNotifier {
    /// Creates a logging notifier around the given renderer.
    #[must_use]
    pub const fn new(renderer: InvitationEmailRenderer) -> Self {
        Self { renderer }
    }
}

#[async_trait]
impl InviteeNotifier for LoggingNotifier {
    async fn notify(&self, invitation: &Invitation, board_title: &str) -> Result<(), NotifyError> {
        let email = self
            .renderer
            .render(invitation, board_title)
            .map_err(|error| NotifyError(error.to_string()))?;
        info!(
            "invitation notification for {}: {}",
            invitation.email(),
            email.subject
        );
        Ok(())
    }
}
