//! Repository identifier parsing.

use super::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A repository identified by its owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl FromStr for RepositorySlug {
    type Err = ConfigError;

    /// Parses an `owner/repo` string, as found in `GITHUB_REPOSITORY`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository {
            value: value.to_string(),
        };

        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_name() {
        let slug: RepositorySlug = "octo-org/octo-repo".parse().unwrap();
        assert_eq!(slug.owner, "octo-org");
        assert_eq!(slug.name, "octo-repo");
        assert_eq!(slug.to_string(), "octo-org/octo-repo");
    }

    #[test]
    fn rejects_malformed_slugs() {
        for value in ["", "octo-org", "/octo-repo", "octo-org/", "a/b/c"] {
            let result = value.parse::<RepositorySlug>();
            assert!(
                matches!(result, Err(ConfigError::InvalidRepository { .. })),
                "expected '{value}' to be rejected"
            );
        }
    }
}
