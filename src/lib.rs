//! Embeddable egui feedback widget that posts submissions as GitHub issues.
/// Constructor-injected widget configuration.
pub mod config;
/// GitHub REST API integration.
pub mod github;
mod http_client;
/// Tracing setup for the demo binary and embedding applications.
pub mod logging;
/// Transient success/error notifications.
pub mod notifications;
/// The feedback pane widget.
pub mod pane;
/// Feedback submissions and issue derivation.
pub mod submission;

pub use config::{FeedbackConfig, ProjectInfo, RepoSlug, TitleStyle, TokenSource};
pub use pane::{FeedbackPane, SubmitError};
