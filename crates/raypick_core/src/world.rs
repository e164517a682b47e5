//! In-memory chunked entity store
//!
//! [`ChunkedWorld`] keeps entities in a slot map and indexes them by the chunk
//! column they stand in, so a ray query only touches the columns it crosses.

use std::collections::{HashMap, HashSet};
use std::convert::Infallible;

use raypick_math::Point3;
use slotmap::{new_key_type, SlotMap};

use crate::{ChunkCoord, Dimension, Entity, EntitySelector};

new_key_type! {
    /// Key to an entity in the world
    ///
    /// Uses generational indexing so a key to a removed entity never
    /// resolves to an entity added later in the same slot.
    pub struct EntityKey;
}

/// Entities of one dimension, indexed by chunk column
pub struct ChunkedWorld {
    /// All entities (using generational keys)
    entities: SlotMap<EntityKey, Entity>,
    /// Entity keys per chunk, in insertion order
    columns: HashMap<ChunkCoord, Vec<EntityKey>>,
}

impl Default for ChunkedWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkedWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            columns: HashMap::new(),
        }
    }

    /// Create a world with pre-allocated capacity for entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(capacity),
            columns: HashMap::new(),
        }
    }

    /// Add an entity to the world, returning its key
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        let chunk = ChunkCoord::containing(entity.position);
        let key = self.entities.insert(entity);
        self.columns.entry(chunk).or_default().push(key);
        key
    }

    /// Remove an entity from the world and return it
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<Entity> {
        let entity = self.entities.remove(key)?;
        self.unindex(key, ChunkCoord::containing(entity.position));
        Some(entity)
    }

    /// Get a reference to an entity by key
    pub fn get_entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Move an entity, updating the chunk index if it changes column
    ///
    /// Returns false if the key is stale.
    pub fn move_entity(&mut self, key: EntityKey, position: Point3) -> bool {
        let Some(entity) = self.entities.get_mut(key) else {
            return false;
        };
        let from = ChunkCoord::containing(entity.position);
        let to = ChunkCoord::containing(position);
        entity.position = position;

        if from != to {
            self.unindex(key, from);
            self.columns.entry(to).or_default().push(key);
            log::trace!("entity moved from chunk {:?} to {:?}", from, to);
        }
        true
    }

    /// Entities standing in `chunk`, in insertion order
    pub fn entities_in_chunk(&self, chunk: ChunkCoord) -> impl Iterator<Item = &Entity> {
        self.columns
            .get(&chunk)
            .into_iter()
            .flatten()
            .filter_map(|key| self.entities.get(*key))
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of chunk columns holding at least one entity
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities from the world
    pub fn clear(&mut self) {
        self.entities.clear();
        self.columns.clear();
    }

    /// Iterate over keys and entities
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    fn unindex(&mut self, key: EntityKey, chunk: ChunkCoord) {
        if let Some(keys) = self.columns.get_mut(&chunk) {
            keys.retain(|k| *k != key);
            if keys.is_empty() {
                self.columns.remove(&chunk);
            }
        }
    }
}

impl Dimension for ChunkedWorld {
    type Entity = Entity;
    type Error = Infallible;

    /// Scans the selector's chunks in order, each at most once
    fn get_entities(&self, selector: &dyn EntitySelector) -> Result<Vec<&Entity>, Infallible> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for &chunk in selector.chunk_positions() {
            if !seen.insert(chunk) {
                continue;
            }
            found.extend(
                self.entities_in_chunk(chunk)
                    .filter(|e| selector.contains(e.position)),
            );
        }
        Ok(found)
    }
}
