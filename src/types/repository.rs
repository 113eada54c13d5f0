//! Repository response schema
//!
//! Typed replacement for the ad hoc JSON a structure request used to
//! assemble: the rebuilt tree plus independently fetched metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::{RepoTreeError, Result};
use super::node::Node;

// =============================================================================
// Repository Identifier
// =============================================================================

/// `owner/repo` pair identifying a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();
        if !is_valid_segment(&owner) || !is_valid_segment(&name) {
            return Err(RepoTreeError::InvalidRepoId {
                input: format!("{}/{}", owner, name),
            });
        }
        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl FromStr for RepoId {
    type Err = RepoTreeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RepoTreeError::InvalidRepoId {
            input: s.to_string(),
        };
        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        Self::new(owner, name).map_err(|_| invalid())
    }
}

impl TryFrom<String> for RepoId {
    type Error = RepoTreeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RepoId> for String {
    fn from(id: RepoId) -> Self {
        id.full_name()
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// =============================================================================
// Metadata
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryDetails {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    #[serde(alias = "stargazers_count")]
    pub stars: u64,
    #[serde(alias = "forks_count")]
    pub forks: u64,
    #[serde(alias = "open_issues_count")]
    pub open_issues: u64,
    pub language: Option<String>,
    pub default_branch: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitSummary {
    pub sha: String,
    pub message: String,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub html_url: Option<String>,
}

impl CommitSummary {
    /// First line of the commit message
    pub fn headline(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Everything a source knows about a repository besides its tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryMetadata {
    pub details: Option<RepositoryDetails>,
    /// Language name to byte count
    pub languages: BTreeMap<String, u64>,
    pub contributors: Vec<Contributor>,
    pub commits: Vec<CommitSummary>,
}

// =============================================================================
// Structure Response
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryStructure {
    pub repository: RepoId,
    pub tree: Vec<Node>,
    pub details: Option<RepositoryDetails>,
    pub languages: BTreeMap<String, u64>,
    pub contributors: Vec<Contributor>,
    pub commits: Vec<CommitSummary>,
    /// True when the upstream listing was cut short
    #[serde(default)]
    pub truncated: bool,
}

/// Share of a language in the repository, in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

impl RepositoryStructure {
    pub fn new(repository: RepoId, tree: Vec<Node>, metadata: RepositoryMetadata) -> Self {
        Self {
            repository,
            tree,
            details: metadata.details,
            languages: metadata.languages,
            contributors: metadata.contributors,
            commits: metadata.commits,
            truncated: false,
        }
    }

    /// Boundary checks before the structure is handed out
    pub fn validate(&self) -> Result<()> {
        if let Some(details) = &self.details
            && !details.full_name.is_empty()
            && !details
                .full_name
                .eq_ignore_ascii_case(&self.repository.full_name())
        {
            return Err(RepoTreeError::invalid_data(
                "details.full_name",
                format!(
                    "'{}' does not match requested repository '{}'",
                    details.full_name, self.repository
                ),
            ));
        }

        if let Some(name) = self.languages.keys().find(|k| k.trim().is_empty()) {
            return Err(RepoTreeError::invalid_data(
                "languages",
                format!("empty language name '{}'", name),
            ));
        }

        if let Some(c) = self.contributors.iter().find(|c| c.login.trim().is_empty()) {
            return Err(RepoTreeError::invalid_data(
                "contributors",
                format!("contributor with {} contributions has no login", c.contributions),
            ));
        }

        if self.commits.iter().any(|c| c.sha.trim().is_empty()) {
            return Err(RepoTreeError::invalid_data("commits", "commit without sha"));
        }

        Ok(())
    }

    /// Language breakdown sorted by byte count, largest first
    pub fn language_shares(&self) -> Vec<LanguageShare> {
        let total = self
            .languages
            .values()
            .fold(0u64, |acc, &bytes| acc.saturating_add(bytes));
        let mut shares: Vec<LanguageShare> = self
            .languages
            .iter()
            .map(|(language, &bytes)| LanguageShare {
                language: language.clone(),
                bytes,
                percent: if total > 0 {
                    bytes as f64 * 100.0 / total as f64
                } else {
                    0.0
                },
            })
            .collect();
        shares.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.language.cmp(&b.language)));
        shares
    }
}

// =============================================================================
// Error Response
// =============================================================================

/// Body returned to a client when a structure request fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
}

impl ErrorResponse {
    pub fn from_error(err: &RepoTreeError) -> Self {
        Self {
            status: err.http_status(),
            error: format!("Failed to fetch repository structure: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_id() {
        let id: RepoId = "rust-lang/rust".parse().unwrap();
        assert_eq!(id.owner(), "rust-lang");
        assert_eq!(id.name(), "rust");
        assert_eq!(id.to_string(), "rust-lang/rust");
    }

    #[test]
    fn test_parse_repo_id_rejects_bad_input() {
        for bad in ["", "rust", "/rust", "rust/", "a/b/c", "../etc", "a/..", "a b/c"] {
            let err = bad.parse::<RepoId>().unwrap_err();
            assert_eq!(err.http_status(), 400, "input: {:?}", bad);
        }
    }

    #[test]
    fn test_repo_id_serializes_as_string() {
        let id = RepoId::new("o", "r").unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), "o/r");
        let back: RepoId = serde_json::from_str("\"o/r\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_details_accept_api_field_names() {
        let json = r#"{
            "name": "r",
            "full_name": "o/r",
            "stargazers_count": 10,
            "forks_count": 2,
            "open_issues_count": 1,
            "language": "Rust"
        }"#;
        let details: RepositoryDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.stars, 10);
        assert_eq!(details.forks, 2);
        assert_eq!(details.open_issues, 1);
    }

    #[test]
    fn test_validate_rejects_mismatched_details() {
        let metadata = RepositoryMetadata {
            details: Some(RepositoryDetails {
                full_name: "someone/else".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let structure =
            RepositoryStructure::new(RepoId::new("o", "r").unwrap(), vec![], metadata);
        let err = structure.validate().unwrap_err();
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn test_validate_accepts_empty_metadata() {
        let structure = RepositoryStructure::new(
            RepoId::new("o", "r").unwrap(),
            vec![],
            RepositoryMetadata::default(),
        );
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn test_language_shares_sorted() {
        let mut metadata = RepositoryMetadata::default();
        metadata.languages.insert("Rust".into(), 300);
        metadata.languages.insert("Shell".into(), 100);
        let structure =
            RepositoryStructure::new(RepoId::new("o", "r").unwrap(), vec![], metadata);
        let shares = structure.language_shares();
        assert_eq!(shares[0].language, "Rust");
        assert!((shares[0].percent - 75.0).abs() < f64::EPSILON);
        assert_eq!(shares[1].language, "Shell");
    }

    #[test]
    fn test_language_shares_with_huge_counts() {
        let mut metadata = RepositoryMetadata::default();
        metadata.languages.insert("Rust".into(), u64::MAX);
        metadata.languages.insert("Shell".into(), 1);
        let structure =
            RepositoryStructure::new(RepoId::new("o", "r").unwrap(), vec![], metadata);
        let shares = structure.language_shares();
        assert_eq!(shares[0].language, "Rust");
        assert!(shares[0].percent <= 100.0);
    }

    #[test]
    fn test_commit_headline() {
        let commit = CommitSummary {
            sha: "abc".into(),
            message: "Fix parser\n\nLonger body".into(),
            ..Default::default()
        };
        assert_eq!(commit.headline(), "Fix parser");
    }

    #[test]
    fn test_error_response() {
        let response = ErrorResponse::from_error(&RepoTreeError::NotFound("o/r".into()));
        assert_eq!(response.status, 404);
        assert!(response.error.contains("o/r"));
    }
}
