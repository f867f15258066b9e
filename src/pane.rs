//! The embeddable feedback pane.
//!
//! A feedback text box, an optional contact-email field and a submit button.
//! Submitting posts one issue to the configured repository and reports the
//! outcome through [`Notifications`]. The request runs synchronously on the
//! UI thread; the flow is idle, submitting, then success or error, and back.

use crate::config::{CredentialError, FeedbackConfig};
use crate::github::issues::{CreateIssueError, CreatedIssue, GithubClient};
use crate::notifications::Notifications;
use crate::submission::{self, FeedbackSubmission};

/// Errors surfaced by [`FeedbackPane::submit`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Local validation; no network call was made.
    #[error("Feedback body cannot be empty")]
    EmptyFeedback,
    /// The API answered with something other than 201.
    #[error("{status} - {message}")]
    Api { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<CreateIssueError> for SubmitError {
    fn from(err: CreateIssueError) -> Self {
        match err {
            CreateIssueError::Api { status, message } => Self::Api { status, message },
            CreateIssueError::Transport(err) => Self::Transport(err),
            CreateIssueError::Json(err) => Self::Json(err),
        }
    }
}

/// Feedback widget bound to one repository.
#[derive(Debug)]
pub struct FeedbackPane {
    config: FeedbackConfig,
    client: GithubClient,
    feedback_input: String,
    email_input: String,
    notifications: Notifications,
    last_created: Option<CreatedIssue>,
}

impl FeedbackPane {
    /// Build the pane, resolving credentials before any UI exists.
    pub fn new(config: FeedbackConfig) -> Result<Self, CredentialError> {
        let token = config.token.resolve()?;
        let client = GithubClient::new(config.api_base.clone(), token);
        Ok(Self {
            config,
            client,
            feedback_input: String::new(),
            email_input: String::new(),
            notifications: Notifications::default(),
            last_created: None,
        })
    }

    /// Current contents of the feedback input.
    pub fn feedback_text(&self) -> &str {
        &self.feedback_input
    }

    /// Replace the feedback input, as if the user had typed it.
    pub fn set_feedback_text(&mut self, text: impl Into<String>) {
        self.feedback_input = text.into();
    }

    pub fn set_contact_email(&mut self, email: impl Into<String>) {
        self.email_input = email.into();
    }

    /// Pending notifications, newest last.
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// The most recently created issue, if the last submit succeeded.
    pub fn last_created(&self) -> Option<&CreatedIssue> {
        self.last_created.as_ref()
    }

    /// Validate, derive the issue and POST it.
    ///
    /// Empty feedback is rejected without touching the network. On 201 the
    /// feedback input is cleared and a success notification queued; on any
    /// other outcome a persistent error notification is queued.
    pub fn submit(
        &mut self,
        feedback: &str,
        contact_email: Option<&str>,
    ) -> Result<(), SubmitError> {
        self.last_created = None;
        if feedback.is_empty() {
            let err = SubmitError::EmptyFeedback;
            self.notifications.error(err.to_string());
            return Err(err);
        }

        let submission =
            FeedbackSubmission::new(feedback, contact_email.map(str::to_string));
        let request = submission::issue_request(&self.config, &submission);
        match self.client.create_issue(&request) {
            Ok(issue) => {
                tracing::info!(number = issue.number, repo = %self.config.repo, "feedback issue created");
                self.feedback_input.clear();
                self.notifications
                    .success_with_link("Feedback submitted successfully", issue.html_url.clone());
                self.last_created = Some(issue);
                Ok(())
            }
            Err(err) => {
                let err = SubmitError::from(err);
                tracing::warn!(error = %err, repo = %self.config.repo, "feedback submission failed");
                self.notifications.error(self.error_notification_text(&err));
                Err(err)
            }
        }
    }

    /// Render the input row. The submit button triggers a synchronous
    /// submission with the current field values.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut submit_clicked = false;
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.feedback_input)
                    .hint_text(
                        "Describe what went wrong or what went right\n\
                         Paste any error messages here",
                    )
                    .desired_rows(3)
                    .desired_width(320.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.email_input)
                    .hint_text("Contact email (optional)")
                    .desired_width(180.0),
            );
            if ui.button("Submit").clicked() {
                submit_clicked = true;
            }
            ui.label("ℹ").on_hover_text(self.tooltip_text());
        });

        if submit_clicked {
            let feedback = self.feedback_input.clone();
            let email = (!self.email_input.is_empty()).then(|| self.email_input.clone());
            let _ = self.submit(&feedback, email.as_deref());
        }

        self.notifications.show(ui.ctx());
    }

    fn error_notification_text(&self, err: &SubmitError) -> String {
        match &self.config.fallback_email {
            Some(email) => format!(
                "Error submitting feedback: {err}\nSubmit feedback via email here: {email}"
            ),
            None => format!("Error submitting feedback: {err}"),
        }
    }

    fn tooltip_text(&self) -> String {
        let mut text = format!("Feedback will be submitted to {}.", self.config.repo);
        if let Some(email) = &self.config.fallback_email {
            text.push_str(&format!("\nAlternatively, send an email here: {email}"));
        }
        text.push_str("\nFeel free to include your contact details.\nThank you for your feedback!");
        text
    }
}
