use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::NameError;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name pattern is a valid regex")
});

/// A validated plugin name.
///
/// Class-like template slots use the name as given; package-name slots use
/// [`PluginName::lowercase`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginName(String);

impl PluginName {
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if NAME_PATTERN.is_match(&name) {
            Ok(Self(name))
        } else {
            Err(NameError::Invalid(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl FromStr for PluginName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PluginName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_identifier_names() {
        for name in ["Example", "_private", "Petstore2", "my_api", "A"] {
            assert!(PluginName::new(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_rejects_non_identifier_names() {
        for name in ["3Api", "my-node", "", "has space", "Dot.Name", "ünï"] {
            assert_eq!(
                PluginName::new(name),
                Err(NameError::Invalid(name.to_string())),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_lowercase_keeps_original() {
        let name: PluginName = "GitHubIssues".parse().unwrap();
        assert_eq!(name.as_str(), "GitHubIssues");
        assert_eq!(name.lowercase(), "githubissues");
        assert_eq!(name.to_string(), "GitHubIssues");
    }
}
