//! Run configuration.
//!
//! The action is driven entirely by environment variables set by the CI
//! workflow. They are read once at startup into a [`LinkerConfig`] which is
//! then passed to everything that needs it.

mod error;
mod repository;

pub use error::ConfigError;
pub use repository::RepositorySlug;

use std::num::NonZeroU64;

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the `owner/repo` identifier.
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Environment variable holding the merged pull request number.
pub const PR_NUMBER_ENV: &str = "PR_NUMBER";

/// Environment variable holding the GitHub API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Configuration for a single milestone-linking run.
#[derive(Clone)]
pub struct LinkerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Repository the pull request belongs to.
    repository: RepositorySlug,
    /// Number of the merged pull request.
    pr_number: u64,
    /// Optional GitHub API base URL (GitHub Enterprise).
    api_url: Option<String>,
    /// Whether to report what would change without writing.
    dry_run: bool,
}

impl LinkerConfig {
    /// Creates a configuration from raw string values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the repository is not `owner/repo` or the
    /// pull request number is not a positive integer.
    pub fn new(token: String, repository: &str, pr_number: &str) -> Result<Self, ConfigError> {
        let repository = repository.parse()?;
        let pr_number = pr_number
            .trim()
            .parse::<NonZeroU64>()
            .map_err(|source| ConfigError::InvalidPrNumber {
                value: pr_number.to_string(),
                source,
            })?
            .get();

        Ok(Self {
            token,
            repository,
            pr_number,
            api_url: None,
            dry_run: false,
        })
    }

    /// Loads configuration from `GITHUB_TOKEN`, `GITHUB_REPOSITORY`,
    /// `PR_NUMBER` and the optional `GITHUB_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(REPOSITORY_ENV).ok(),
            std::env::var(PR_NUMBER_ENV).ok(),
            std::env::var(API_URL_ENV).ok(),
        )
    }

    /// Creates a configuration from values that may be absent, e.g. optional
    /// command-line arguments backed by environment variables. Empty values
    /// count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] naming the environment variable of
    /// the first missing value, or the errors of [`LinkerConfig::new`].
    pub fn from_values(
        token: Option<String>,
        repository: Option<String>,
        pr_number: Option<String>,
        api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let token = required(token, TOKEN_ENV)?;
        let repository = required(repository, REPOSITORY_ENV)?;
        let pr_number = required(pr_number, PR_NUMBER_ENV)?;

        let mut config = Self::new(token, &repository, &pr_number)?;
        if let Some(api_url) = non_empty(api_url) {
            config = config.with_api_url(api_url);
        }
        Ok(config)
    }

    /// Sets a custom GitHub API base URL.
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the target repository.
    pub fn repository(&self) -> &RepositorySlug {
        &self.repository
    }

    /// Returns the merged pull request number.
    pub fn pr_number(&self) -> u64 {
        self.pr_number
    }

    /// Returns the GitHub API base URL, if overridden.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl std::fmt::Debug for LinkerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkerConfig")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("pr_number", &self.pr_number)
            .field("api_url", &self.api_url)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    non_empty(value).ok_or(ConfigError::MissingVar { name })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
