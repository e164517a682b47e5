//! Entity inspector
//!
//! Tracks which entities the last selection ray hit and which one is being
//! inspected. Entities are copied out of the dimension, since the dimension
//! only lends them for the duration of a query.

use raypick_core::{
    entities_on_ray_with, Dimension, Point3, Ray, RayQueryConfig, RayQueryError, WorldEntity,
};

/// Snapshot of an entity hit by a selection ray
#[derive(Clone, Debug, PartialEq)]
pub struct PickedEntity {
    pub id: String,
    pub position: Point3,
}

impl PickedEntity {
    fn from_entity<E: WorldEntity>(entity: &E) -> Self {
        Self {
            id: entity.id().to_string(),
            position: entity.position(),
        }
    }

    /// Position formatted as `x.xx, y.yy, z.zz`
    pub fn position_label(&self) -> String {
        format!("{:.2}, {:.2}, {:.2}", self.position.x, self.position.y, self.position.z)
    }
}

/// Current selection state of the inspect tool
#[derive(Debug, Default)]
pub struct EntityInspector {
    config: RayQueryConfig,
    selection_ray: Option<Ray>,
    selected: Vec<PickedEntity>,
    current: Option<usize>,
}

impl EntityInspector {
    pub fn new(config: RayQueryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Pick along `ray` and replace the selection with the result
    ///
    /// The first hit becomes the current entity. On error the previous
    /// selection is kept.
    pub fn set_selection_ray<D: Dimension>(
        &mut self,
        dimension: &D,
        ray: Ray,
    ) -> Result<usize, RayQueryError> {
        let hits = entities_on_ray_with(dimension, &ray, &self.config)?;

        self.selection_ray = Some(ray);
        self.selected = hits.into_iter().map(PickedEntity::from_entity).collect();
        self.current = None;
        self.select_row(0);

        log::info!("Selection ray hit {} entities", self.selected.len());
        Ok(self.selected.len())
    }

    /// Make `row` the current entity. Out-of-range rows clear it.
    pub fn select_row(&mut self, row: usize) -> Option<&PickedEntity> {
        self.current = (row < self.selected.len()).then_some(row);
        self.current()
    }

    pub fn current(&self) -> Option<&PickedEntity> {
        self.current.and_then(|row| self.selected.get(row))
    }

    pub fn selection_ray(&self) -> Option<&Ray> {
        self.selection_ray.as_ref()
    }

    pub fn selected(&self) -> &[PickedEntity] {
        &self.selected
    }

    /// `(id, position)` display rows, in hit order
    pub fn rows(&self) -> impl Iterator<Item = (&str, String)> {
        self.selected.iter().map(|e| (e.id.as_str(), e.position_label()))
    }
}
