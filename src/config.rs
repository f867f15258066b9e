//! Constructor-injected configuration for the feedback pane.
//!
//! Everything the widget needs is passed in explicitly; there is no
//! module-level state and no implicit environment access after construction.

use std::fmt;

/// Environment variable consulted by [`TokenSource::Env`].
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, thiserror::Error)]
pub enum RepoSlugError {
    #[error("Invalid repository slug (expected OWNER/REPO): {0}")]
    Invalid(String),
}

/// Repository coordinates for the issue tracker receiving feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse an `OWNER/REPO` slug.
    pub fn parse(slug: &str) -> Result<Self, RepoSlugError> {
        let Some((owner, repo)) = slug.split_once('/') else {
            return Err(RepoSlugError::Invalid(slug.to_string()));
        };
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(RepoSlugError::Invalid(slug.to_string()));
        }
        Ok(Self::new(owner, repo))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Ordered project context rendered as `key: value` lines in the issue body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    entries: Vec<(String, String)>,
}

impl ProjectInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// How issue titles are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TitleStyle {
    /// The same title for every submission.
    Fixed(String),
    /// `Feedback: {project_name}`.
    ProjectName,
}

/// Where the GitHub access token comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenSource {
    /// Read [`TOKEN_ENV_VAR`] from the process environment at construction.
    Env,
    /// Token supplied by the embedding application.
    Explicit(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error(
        "GITHUB_TOKEN environment variable not found. \
         Ensure it is present in order to use the feedback pane"
    )]
    MissingCredential,
}

impl TokenSource {
    /// Resolve the access token. Failure is fatal to widget construction.
    pub(crate) fn resolve(&self) -> Result<String, CredentialError> {
        let token = match self {
            Self::Env => std::env::var(TOKEN_ENV_VAR).unwrap_or_default(),
            Self::Explicit(token) => token.clone(),
        };
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(CredentialError::MissingCredential);
        }
        Ok(token)
    }
}

/// Everything the pane needs, injected at construction.
#[derive(Clone, Debug)]
pub struct FeedbackConfig {
    /// Name of the project the feedback concerns.
    pub project_name: String,
    /// Context lines prepended to every issue body.
    pub project_info: ProjectInfo,
    /// Repository receiving the issues.
    pub repo: RepoSlug,
    pub title: TitleStyle,
    pub token: TokenSource,
    /// Contact channel offered when submission fails.
    pub fallback_email: Option<String>,
    /// API endpoint; tests point this at a local stub server.
    pub api_base: String,
}

impl FeedbackConfig {
    pub fn new(project_name: impl Into<String>, repo: RepoSlug) -> Self {
        Self {
            project_name: project_name.into(),
            project_info: ProjectInfo::default(),
            repo,
            title: TitleStyle::ProjectName,
            token: TokenSource::Env,
            fallback_email: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_repo_slug() {
        let slug = RepoSlug::parse("acme/feedback").unwrap();
        assert_eq!(slug.owner(), "acme");
        assert_eq!(slug.repo(), "feedback");
        assert_eq!(slug.to_string(), "acme/feedback");
    }

    #[test]
    fn rejects_malformed_slugs() {
        assert!(RepoSlug::parse("no-separator").is_err());
        assert!(RepoSlug::parse("/repo").is_err());
        assert!(RepoSlug::parse("owner/").is_err());
        assert!(RepoSlug::parse("a/b/c").is_err());
    }

    #[test]
    fn project_info_preserves_insertion_order() {
        let info = ProjectInfo::new()
            .with("App version", "1.2.3")
            .with("OS", "linux");
        let entries: Vec<_> = info.iter().collect();
        assert_eq!(
            entries,
            vec![("App version", "1.2.3"), ("OS", "linux")]
        );
    }

    #[test]
    fn explicit_blank_token_is_missing_credential() {
        let err = TokenSource::Explicit("   ".to_string()).resolve().unwrap_err();
        assert!(matches!(err, CredentialError::MissingCredential));
    }

    #[test]
    fn explicit_token_is_trimmed() {
        let token = TokenSource::Explicit(" tok_abc \n".to_string())
            .resolve()
            .unwrap();
        assert_eq!(token, "tok_abc");
    }
}
