//! Feedback submissions and deterministic issue derivation.

use crate::config::{FeedbackConfig, TitleStyle};
use crate::github::issues::IssueRequest;

/// One user submission. Transient; dropped once the HTTP call resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub feedback: String,
    pub contact_email: Option<String>,
}

impl FeedbackSubmission {
    pub fn new(feedback: impl Into<String>, contact_email: Option<String>) -> Self {
        Self {
            feedback: feedback.into(),
            contact_email: contact_email.filter(|email| !email.is_empty()),
        }
    }

    /// Whether building an issue from this submission would violate the
    /// non-empty body invariant.
    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty()
    }
}

/// Derive the issue title for a submission.
pub fn issue_title(config: &FeedbackConfig) -> String {
    match &config.title {
        TitleStyle::Fixed(title) => title.clone(),
        TitleStyle::ProjectName => format!("Feedback: {}", config.project_name),
    }
}

/// Compose the issue body: project context lines, the feedback text, and an
/// optional contact line.
pub fn compose_body(config: &FeedbackConfig, submission: &FeedbackSubmission) -> String {
    let mut body = String::new();
    for (key, value) in config.project_info.iter() {
        body.push_str(key);
        body.push_str(": ");
        body.push_str(value);
        body.push('\n');
    }
    if !body.is_empty() {
        body.push('\n');
    }
    body.push_str(&submission.feedback);
    body.push('\n');
    if let Some(email) = &submission.contact_email {
        body.push_str("Contact email: ");
        body.push_str(email);
    }
    body
}

/// Build the request sent to GitHub. Callers reject empty feedback first.
pub fn issue_request(config: &FeedbackConfig, submission: &FeedbackSubmission) -> IssueRequest {
    IssueRequest {
        owner: config.repo.owner().to_string(),
        repo: config.repo.repo().to_string(),
        title: issue_title(config),
        body: compose_body(config, submission),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProjectInfo, RepoSlug};

    fn config() -> FeedbackConfig {
        FeedbackConfig::new("demo", RepoSlug::new("acme", "feedback"))
    }

    #[test]
    fn bare_feedback_becomes_body_with_trailing_newline() {
        let submission = FeedbackSubmission::new("X", None);
        assert_eq!(compose_body(&config(), &submission), "X\n");
    }

    #[test]
    fn contact_email_ends_the_body() {
        let submission = FeedbackSubmission::new("X", Some("a@b.com".to_string()));
        let body = compose_body(&config(), &submission);
        assert_eq!(body, "X\nContact email: a@b.com");
        assert!(body.ends_with("Contact email: a@b.com"));
    }

    #[test]
    fn project_info_prefixes_the_body_in_order() {
        let mut config = config();
        config.project_info = ProjectInfo::new()
            .with("App version", "1.2.3")
            .with("OS", "linux");
        let submission = FeedbackSubmission::new("X", None);
        assert_eq!(
            compose_body(&config, &submission),
            "App version: 1.2.3\nOS: linux\n\nX\n"
        );
    }

    #[test]
    fn title_uses_project_name_by_default() {
        assert_eq!(issue_title(&config()), "Feedback: demo");
    }

    #[test]
    fn fixed_title_overrides_project_name() {
        let mut config = config();
        config.title = TitleStyle::Fixed("User feedback".to_string());
        assert_eq!(issue_title(&config), "User feedback");
    }

    #[test]
    fn blank_email_is_dropped() {
        let submission = FeedbackSubmission::new("X", Some(String::new()));
        assert_eq!(submission.contact_email, None);
    }

    #[test]
    fn request_carries_repo_coordinates() {
        let submission = FeedbackSubmission::new("hello", None);
        let request = issue_request(&config(), &submission);
        assert_eq!(request.owner, "acme");
        assert_eq!(request.repo, "feedback");
        assert_eq!(request.title, "Feedback: demo");
        assert_eq!(request.body, "hello\n");
    }
}
