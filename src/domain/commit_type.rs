use crate::error::CommitError;
use std::fmt;
use std::str::FromStr;

/// Conventional commit type accepted by git-cc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitType {
    #[default]
    Fix,
    Feat,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Ci,
    Chore,
}

impl CommitType {
    /// Every valid commit type, in listing order
    pub const ALL: [CommitType; 9] = [
        CommitType::Fix,
        CommitType::Feat,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Ci,
        CommitType::Chore,
    ];

    /// The tag written into the commit header (e.g., "feat")
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Fix => "fix",
            CommitType::Feat => "feat",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
        }
    }

    /// Human readable meaning shown by `-list-types`
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Fix => "A bug fix",
            CommitType::Feat => {
                "Adding a new feature or deprecating (not removing) an existing feature"
            }
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => {
                "Changes that do not affect the meaning of the code (white-space, formatting, missing semicolons, etc)"
            }
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing or correcting existing tests",
            CommitType::Ci => "Changes to the build process or testing infrastructure",
            CommitType::Chore => "Changes to auxiliary tools / scripts or dev-dependency upgrades",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = CommitError;

    /// Exact, case-sensitive match against the known tags
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CommitError::InvalidCommitType(s.to_string()))
    }
}

/// Check whether `value` names one of the valid commit types
pub fn commit_type_valid(value: &str) -> bool {
    value.parse::<CommitType>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_valid() {
        for tag in [
            "fix", "feat", "docs", "style", "refactor", "perf", "test", "ci", "chore",
        ] {
            assert!(commit_type_valid(tag), "{} should be valid", tag);
        }
    }

    #[test]
    fn test_unknown_types_are_rejected() {
        for tag in ["", "build", "feature", "Fix", "FEAT", " fix", "fix ", "revert"] {
            assert!(!commit_type_valid(tag), "{:?} should be rejected", tag);
        }
    }

    #[test]
    fn test_parse_round_trips_through_display() {
        for commit_type in CommitType::ALL {
            let parsed: CommitType = commit_type.to_string().parse().unwrap();
            assert_eq!(parsed, commit_type);
        }
    }

    #[test]
    fn test_parse_error_carries_value() {
        let err = "feature".parse::<CommitType>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid commit type: feature");
    }

    #[test]
    fn test_default_is_fix() {
        assert_eq!(CommitType::default(), CommitType::Fix);
    }

    #[test]
    fn test_every_type_has_description() {
        for commit_type in CommitType::ALL {
            assert!(!commit_type.description().is_empty());
        }
    }
}
