//! Section definitions - one activity rule each.

use serde::{Deserialize, Serialize};
use swap_world::Identifier;

use crate::error::LoadError;

/// Configuration key holding a section's activation identifiers.
pub const ACTIVE_ON_FIELD: &str = "activeOn";

/// Configuration key holding a section's tool priority list.
pub const PRIORITY_LIST_FIELD: &str = "priorityList";

/// A named rule pairing an activation set with a priority list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Label and configuration grouping key, matched case-sensitively.
    pub name: String,

    /// The section is live when any of these is observed.
    pub activation_set: Vec<Identifier>,

    /// Tool preference, highest priority first.
    pub priority_list: Vec<Identifier>,
}

impl Section {
    /// Create a section from identifier tokens.
    pub fn new<A, P>(name: impl Into<String>, activation_set: A, priority_list: P) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Identifier>,
        P: IntoIterator,
        P::Item: Into<Identifier>,
    {
        Self {
            name: name.into(),
            activation_set: activation_set.into_iter().map(Into::into).collect(),
            priority_list: priority_list.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a section from raw comma-separated field values.
    ///
    /// An absent field is an error. A present field that parses to nothing
    /// yields an empty list.
    pub fn from_fields(
        name: impl Into<String>,
        active_on: Option<&str>,
        priority_list: Option<&str>,
    ) -> Result<Self, LoadError> {
        let name = name.into();

        let Some(active_on) = active_on else {
            return Err(LoadError::MissingField {
                section: name,
                field: ACTIVE_ON_FIELD,
            });
        };
        let Some(priority_list) = priority_list else {
            return Err(LoadError::MissingField {
                section: name,
                field: PRIORITY_LIST_FIELD,
            });
        };

        Ok(Self {
            name,
            activation_set: parse_identifier_list(active_on),
            priority_list: parse_identifier_list(priority_list),
        })
    }

    /// Check whether an observed identifier activates this section.
    pub fn is_activated_by(&self, observed: &Identifier) -> bool {
        self.activation_set.contains(observed)
    }
}

/// Split a comma-separated value into identifiers.
///
/// Tokens are trimmed and lowercased; empty tokens are dropped.
pub fn parse_identifier_list(text: &str) -> Vec<Identifier> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Identifier::new)
        .collect()
}

/// Render tokens the way configuration files store them.
pub fn to_comma_separated<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier_list() {
        let ids = parse_identifier_list(" Ore ,wall,, ,WateredGround,");
        let tokens: Vec<_> = ids.iter().map(Identifier::as_str).collect();
        assert_eq!(tokens, vec!["ore", "wall", "wateredground"]);
    }

    #[test]
    fn test_parse_empty_value() {
        assert!(parse_identifier_list("").is_empty());
        assert!(parse_identifier_list(" , ,").is_empty());
    }

    #[test]
    fn test_from_fields_missing_active_on() {
        let err = Section::from_fields("Mining", None, Some("WoodMiningPick")).unwrap_err();
        assert_eq!(
            err,
            LoadError::MissingField {
                section: "Mining".to_string(),
                field: ACTIVE_ON_FIELD,
            }
        );
    }

    #[test]
    fn test_from_fields_missing_priority_list() {
        let err = Section::from_fields("Mining", Some("ore"), None).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField { field: PRIORITY_LIST_FIELD, .. }
        ));
    }

    #[test]
    fn test_from_fields_empty_is_not_missing() {
        let section = Section::from_fields("Empty", Some(" , "), Some("")).unwrap();
        assert!(section.activation_set.is_empty());
        assert!(section.priority_list.is_empty());
    }

    #[test]
    fn test_is_activated_by() {
        let section = Section::new("Fishing", ["Water"], ["WoodFishingRod"]);
        assert!(section.is_activated_by(&Identifier::new("WATER")));
        assert!(!section.is_activated_by(&Identifier::new("lava")));
    }

    #[test]
    fn test_to_comma_separated() {
        assert_eq!(to_comma_separated(["ore", "wall"]), "ore, wall");
        assert_eq!(to_comma_separated(Vec::<String>::new()), "");
    }
}
