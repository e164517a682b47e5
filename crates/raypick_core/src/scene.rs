//! Scene serialization
//!
//! Provides Scene struct for loading/saving entity layouts from RON files.
//! A scene is instantiated into a [`ChunkedWorld`] that can be picked against.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use crate::{ChunkedWorld, Entity};

/// Serializable description of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTemplate {
    /// Entity kind identifier
    pub id: String,
    /// Position [x, y, z] in block space
    pub position: [f64; 3],
    /// Optional custom name
    #[serde(default)]
    pub name: Option<String>,
}

impl EntityTemplate {
    pub fn new(id: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            id: id.into(),
            position,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the runtime entity
    pub fn to_entity(&self) -> Entity {
        Entity {
            id: self.id.clone(),
            position: self.position.into(),
            name: self.name.clone(),
        }
    }
}

/// A serializable scene containing entity templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Entity templates in this scene
    pub entities: Vec<EntityTemplate>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add an entity template to this scene
    pub fn add_entity(&mut self, entity: EntityTemplate) {
        self.entities.push(entity);
    }

    /// Populate a fresh world with this scene's entities
    pub fn instantiate(&self) -> ChunkedWorld {
        let mut world = ChunkedWorld::with_capacity(self.entities.len());
        for template in &self.entities {
            world.add_entity(template.to_entity());
        }
        log::debug!(
            "instantiated scene '{}': {} entities in {} chunks",
            self.name,
            world.entity_count(),
            world.chunk_count()
        );
        world
    }
}

/// Error loading a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Parse error (invalid RON syntax)
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Error saving a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChunkCoord;

    #[test]
    fn test_scene_new() {
        let scene = Scene::new("Empty");
        assert_eq!(scene.name, "Empty");
        assert!(scene.entities.is_empty());
    }

    #[test]
    fn test_parse_ron() {
        let ron = r#"
            Scene(
                name: "Pasture",
                entities: [
                    EntityTemplate(id: "minecraft:cow", position: (4.0, 64.0, 4.0)),
                    EntityTemplate(id: "minecraft:pig", position: (-20.5, 64.0, 3.0), name: Some("Wilbur")),
                ],
            )
        "#;
        let scene: Scene = ron::from_str(ron).unwrap();
        assert_eq!(scene.name, "Pasture");
        assert_eq!(scene.entities.len(), 2);
        assert_eq!(scene.entities[1].name.as_deref(), Some("Wilbur"));
        assert_eq!(scene.entities[0].name, None);
    }

    #[test]
    fn test_instantiate() {
        let mut scene = Scene::new("Pasture");
        scene.add_entity(EntityTemplate::new("minecraft:cow", [4.0, 64.0, 4.0]));
        scene.add_entity(EntityTemplate::new("minecraft:pig", [-20.5, 64.0, 3.0]).with_name("Wilbur"));

        let world = scene.instantiate();
        assert_eq!(world.entity_count(), 2);
        assert_eq!(world.chunk_count(), 2);

        let pig = world.entities_in_chunk(ChunkCoord::new(-2, 0)).next().unwrap();
        assert_eq!(pig.id, "minecraft:pig");
        assert_eq!(pig.name.as_deref(), Some("Wilbur"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scene::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, SceneLoadError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_parse_error() {
        let err: SceneLoadError = ron::from_str::<Scene>("Scene(name: ").unwrap_err().into();
        assert!(matches!(err, SceneLoadError::Parse(_)));
    }
}
