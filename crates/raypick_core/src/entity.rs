//! Entity record
//!
//! An Entity is something living in the block world that can be picked: a mob,
//! an item frame, a dropped item.

use raypick_math::Point3;
use serde::{Serialize, Deserialize};

use crate::WorldEntity;

/// An entity in the world
///
/// Each entity has:
/// - An identifier naming its kind (e.g. `"minecraft:cow"`)
/// - A position in block space
/// - An optional custom name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity kind identifier
    pub id: String,
    /// Position in block space
    pub position: Point3,
    /// Optional custom name
    #[serde(default)]
    pub name: Option<String>,
}

impl Entity {
    /// Create a new entity at `position`
    pub fn new(id: impl Into<String>, position: Point3) -> Self {
        Self {
            id: id.into(),
            position,
            name: None,
        }
    }

    /// Set the custom name of this entity
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl WorldEntity for Entity {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Point3 {
        self.position
    }
}
