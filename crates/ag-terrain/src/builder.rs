//! Fluent builder for constructing a [`Terrain`].

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use ag_core::Coordinate;

use crate::plant::Plant;
use crate::plant_type::plant_type;
use crate::soil::Soil;
use crate::{Terrain, TerrainError, TerrainResult};

/// Fluent builder for [`Terrain`].
///
/// | Method              | Default                         |
/// |---------------------|---------------------------------|
/// | `.default_soil(s)`  | `Soil::default()`               |
/// | `.soil(c, s)`       | cell keeps the default soil     |
/// | `.plant(c, name)`   | no initial plants               |
///
/// ```rust
/// use ag_core::Coordinate;
/// use ag_terrain::{Soil, TerrainBuilder};
///
/// let terrain = TerrainBuilder::new(4, 3)
///     .default_soil(Soil::new(15.0, 40.0))
///     .plant(Coordinate::new(1, 1), "Bean")
///     .build()
///     .unwrap();
/// assert_eq!(terrain.plant_count(), 1);
/// ```
pub struct TerrainBuilder {
    width:        u32,
    height:       u32,
    default_soil: Soil,
    soils:        Vec<(Coordinate, Soil)>,
    plants:       Vec<(Coordinate, String)>,
}

impl TerrainBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            default_soil: Soil::default(),
            soils:        Vec::new(),
            plants:       Vec::new(),
        }
    }

    /// Soil every cell starts with unless overridden by [`soil`](Self::soil).
    pub fn default_soil(mut self, soil: Soil) -> Self {
        self.default_soil = soil;
        self
    }

    /// Override the soil of one cell.  Later calls for the same cell win.
    pub fn soil(mut self, c: Coordinate, soil: Soil) -> Self {
        self.soils.push((c, soil));
        self
    }

    /// Start the terrain with a plant of type `type_name` at `c`.
    pub fn plant(mut self, c: Coordinate, type_name: impl Into<String>) -> Self {
        self.plants.push((c, type_name.into()));
        self
    }

    /// Validate coordinates and plant type names and build the terrain.
    pub fn build(self) -> TerrainResult<Terrain> {
        let out_of_bounds = |coordinate: Coordinate| TerrainError::OutOfBounds {
            coordinate,
            width:  self.width,
            height: self.height,
        };

        let mut soils = FxHashMap::default();
        for x in 0..self.width {
            for y in 0..self.height {
                soils.insert(Coordinate::new(x, y), self.default_soil);
            }
        }
        for (c, soil) in &self.soils {
            let cell = soils.get_mut(c).ok_or_else(|| out_of_bounds(*c))?;
            *cell = *soil;
        }

        let mut plants = BTreeMap::new();
        for (c, name) in &self.plants {
            if !soils.contains_key(c) {
                return Err(out_of_bounds(*c));
            }
            let kind = plant_type(name).ok_or_else(|| TerrainError::UnknownPlantType(name.clone()))?;
            plants.insert(*c, Plant::new(kind, *c));
        }

        Ok(Terrain::from_parts(self.width, self.height, soils, plants))
    }
}
