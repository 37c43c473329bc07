//! Identifiers for platform entities.
//!
//! The server issues these as opaque strings, so they are kept as-is and
//! only checked for emptiness.

use serde::{Deserialize, Serialize};

/// Errors produced when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier was empty or whitespace.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Identifier of a scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScoreboardId(String);

impl ScoreboardId {
    /// Create from a server-issued identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        non_empty(id.into(), "scoreboard id").map(Self)
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScoreboardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for ScoreboardId {
    type Error = IdError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ScoreboardId> for String {
    fn from(id: ScoreboardId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ScoreboardId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of a group (classroom)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupId(String);

impl GroupId {
    /// Create from a server-issued identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        non_empty(id.into(), "group id").map(Self)
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for GroupId {
    type Error = IdError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<GroupId> for String {
    fn from(id: GroupId) -> Self {
        id.0
    }
}

impl std::str::FromStr for GroupId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn non_empty(id: String, what: &'static str) -> Result<String, IdError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(IdError::Empty(what));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_trim_whitespace() {
        let id: ScoreboardId = " 5c1f0a ".parse().unwrap();
        assert_eq!(id.as_str(), "5c1f0a");
        assert_eq!(id.to_string(), "5c1f0a");
    }

    #[test]
    fn test_empty_ids_rejected() {
        assert_eq!(GroupId::new("  "), Err(IdError::Empty("group id")));
        assert_eq!(
            "".parse::<ScoreboardId>(),
            Err(IdError::Empty("scoreboard id"))
        );
    }

    #[test]
    fn test_deserialize_checks_emptiness() {
        let id: ScoreboardId = serde_json::from_str("\" sb1 \"").unwrap();
        assert_eq!(id.as_str(), "sb1");

        assert!(serde_json::from_str::<ScoreboardId>("\"\"").is_err());
        assert!(serde_json::from_str::<GroupId>("\"   \"").is_err());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = GroupId::new("g1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"g1\"");
    }
}
