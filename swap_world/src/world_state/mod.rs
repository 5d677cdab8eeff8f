//! World observation - what sits on a tile the actor is facing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::{Identifier, TilePosition};

/// Read access to the world around the actor.
pub trait WorldObserver {
    /// The tile the actor is currently targeting.
    fn facing_position(&self) -> TilePosition;

    /// Kinds of every tile layer at `position`.
    fn tiles_at(&self, position: TilePosition) -> Vec<Identifier>;

    /// Kinds of entities standing at `position`, excluding the actor's own
    /// ghost/preview representation.
    fn entities_at(&self, position: TilePosition) -> Vec<Identifier>;
}

/// Where the actor stands and which way it looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorPose {
    pub position: (f32, f32),
    pub direction: (f32, f32),
}

/// An object placed in the world at a continuous position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub kind: Identifier,
    pub position: (f32, f32),
    /// Preview of the actor itself; never reported by observation.
    pub is_actor_ghost: bool,
}

/// In-memory tile grid with free-standing entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridWorld {
    /// Tile layers per position, bottom first.
    tiles: HashMap<TilePosition, Vec<Identifier>>,

    entities: Vec<PlacedEntity>,

    actor: ActorPose,
}

impl GridWorld {
    /// Create an empty world with the actor at the origin facing nowhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile layer at a position.
    pub fn place_tile(&mut self, position: TilePosition, kind: impl Into<Identifier>) {
        self.tiles.entry(position).or_default().push(kind.into());
    }

    /// Place an entity at a continuous position.
    pub fn spawn_entity(&mut self, kind: impl Into<Identifier>, position: (f32, f32)) {
        self.entities.push(PlacedEntity {
            kind: kind.into(),
            position,
            is_actor_ghost: false,
        });
    }

    /// Place the actor's ghost/preview.
    pub fn spawn_actor_ghost(&mut self, kind: impl Into<Identifier>, position: (f32, f32)) {
        self.entities.push(PlacedEntity {
            kind: kind.into(),
            position,
            is_actor_ghost: true,
        });
    }

    /// Move and turn the actor.
    pub fn set_actor(&mut self, position: (f32, f32), direction: (f32, f32)) {
        self.actor = ActorPose {
            position,
            direction,
        };
    }
}

impl WorldObserver for GridWorld {
    fn facing_position(&self) -> TilePosition {
        TilePosition::facing(self.actor.position, self.actor.direction)
    }

    fn tiles_at(&self, position: TilePosition) -> Vec<Identifier> {
        self.tiles.get(&position).cloned().unwrap_or_default()
    }

    fn entities_at(&self, position: TilePosition) -> Vec<Identifier> {
        self.entities
            .iter()
            .filter(|e| !e.is_actor_ghost)
            .filter(|e| TilePosition::round(e.position) == position)
            .map(|e| e.kind.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_at_keeps_layer_order() {
        let mut world = GridWorld::new();
        let pos = TilePosition::new(3, 4);
        world.place_tile(pos, "ground");
        world.place_tile(pos, "wall");

        let tiles = world.tiles_at(pos);
        assert_eq!(tiles, vec![Identifier::new("ground"), Identifier::new("wall")]);
        assert!(world.tiles_at(TilePosition::new(0, 0)).is_empty());
    }

    #[test]
    fn test_entities_at_rounds_position() {
        let mut world = GridWorld::new();
        world.spawn_entity("CritterBeetle", (2.3, 0.8));
        world.spawn_entity("DiggingSpot", (5.0, 5.0));

        let found = world.entities_at(TilePosition::new(2, 1));
        assert_eq!(found, vec![Identifier::new("critterbeetle")]);
    }

    #[test]
    fn test_entities_at_skips_actor_ghost() {
        let mut world = GridWorld::new();
        world.spawn_actor_ghost("Player", (1.0, 0.0));
        world.spawn_entity("CritterWorm", (1.0, 0.0));

        let found = world.entities_at(TilePosition::new(1, 0));
        assert_eq!(found, vec![Identifier::new("critterworm")]);
    }

    #[test]
    fn test_facing_position_follows_actor() {
        let mut world = GridWorld::new();
        world.set_actor((4.0, 4.0), (0.0, 1.0));
        assert_eq!(world.facing_position(), TilePosition::new(4, 5));
    }
}
