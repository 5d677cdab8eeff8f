//! Identifier and position types shared by tiles, entities and items.

mod inventory;

pub use inventory::*;

use serde::{Deserialize, Serialize};

/// Case-insensitive token naming a tile kind, an entity kind or an item kind.
///
/// The token is lowercased on construction, so two identifiers compare equal
/// whenever their lowercased text is equal. No other normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from any string-like token.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(token.as_ref().to_lowercase())
    }

    /// The lowercased token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Identifier {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer tile coordinates in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl TilePosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a continuous world position to the tile containing it.
    ///
    /// Halfway values round to the even neighbour.
    pub fn round(position: (f32, f32)) -> Self {
        Self {
            x: position.0.round_ties_even() as i32,
            y: position.1.round_ties_even() as i32,
        }
    }

    /// The tile an actor at `position` looking along `direction` is facing.
    pub fn facing(position: (f32, f32), direction: (f32, f32)) -> Self {
        Self::round((position.0 + direction.0, position.1 + direction.1))
    }
}

impl std::fmt::Display for TilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_is_case_insensitive() {
        assert_eq!(Identifier::new("IronMiningPick"), Identifier::new("ironminingpick"));
        assert_eq!(Identifier::new("Ore").as_str(), "ore");
        assert_eq!(Identifier::from("WATEREDGROUND"), Identifier::from(String::from("wateredGround")));
    }

    #[test]
    fn test_identifier_keeps_whitespace() {
        // Trimming is the config parser's job, not the identifier's.
        assert_ne!(Identifier::new(" ore"), Identifier::new("ore"));
    }

    #[test]
    fn test_identifier_deserialize_lowercases() {
        #[derive(Deserialize)]
        struct Wrapper {
            id: Identifier,
        }

        let wrapper: Wrapper = toml::from_str(r#"id = "BugNet""#).unwrap();
        assert_eq!(wrapper.id.as_str(), "bugnet");
    }

    #[test]
    fn test_facing_position() {
        let pos = TilePosition::facing((10.2, 4.9), (1.0, 0.0));
        assert_eq!(pos, TilePosition::new(11, 5));

        let pos = TilePosition::facing((0.0, 0.0), (0.0, -1.0));
        assert_eq!(pos, TilePosition::new(0, -1));
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(TilePosition::round((2.5, 3.5)), TilePosition::new(2, 4));
    }
}
