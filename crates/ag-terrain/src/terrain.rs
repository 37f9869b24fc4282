//! The `Terrain`: soil grid, live plants, and the harvest store.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;

use ag_core::{Coordinate, SunSample};

use crate::plant::Plant;
use crate::plant_type::PlantType;
use crate::produce::HarvestedProduce;
use crate::soil::Soil;

// ── Effect seam ───────────────────────────────────────────────────────────────

/// Anything that can be applied to a terrain as one atomic mutation.
///
/// Implemented by `ag_action::Action`.  Implementations must not panic for
/// well-formed inputs: a target that no longer exists (a plant removed by
/// an earlier action, a cell outside the grid) is a deterministic no-op.
pub trait TerrainEffect {
    fn apply(&self, terrain: &mut Terrain);
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of [`Terrain::add_plant`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new plant now occupies the cell.
    Planted,
    /// The cell already held a plant; it was left untouched.
    Occupied,
    /// The coordinate has no soil (outside the grid).
    NoSoil,
}

/// Result of [`Terrain::harvest`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct HarvestOutcome {
    /// Ripe produce moved to the harvest store.
    pub harvested: usize,
    /// Over-mature produce dropped.
    pub discarded: usize,
}

// ── Terrain ───────────────────────────────────────────────────────────────────

/// Grid of soil cells plus the plants growing on them.
///
/// Plants live in a `BTreeMap` keyed by coordinate so every per-step pass
/// visits them in the same order.  Soil cells are looked up by coordinate
/// only, so a hash map is enough.
#[derive(Clone, Debug)]
pub struct Terrain {
    width:     u32,
    height:    u32,
    soils:     FxHashMap<Coordinate, Soil>,
    plants:    BTreeMap<Coordinate, Plant>,
    harvested: Vec<HarvestedProduce>,
}

impl Terrain {
    /// A `width × height` grid where every cell starts as a copy of `soil`.
    pub fn new(width: u32, height: u32, soil: Soil) -> Self {
        let mut soils = FxHashMap::default();
        for x in 0..width {
            for y in 0..height {
                soils.insert(Coordinate::new(x, y), soil);
            }
        }
        Self::from_parts(width, height, soils, BTreeMap::new())
    }

    pub(crate) fn from_parts(
        width:  u32,
        height: u32,
        soils:  FxHashMap<Coordinate, Soil>,
        plants: BTreeMap<Coordinate, Plant>,
    ) -> Self {
        Self { width, height, soils, plants, harvested: Vec::new() }
    }

    // ── Grid ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x < self.width && c.y < self.height
    }

    pub fn soil(&self, c: Coordinate) -> Option<&Soil> {
        self.soils.get(&c)
    }

    pub fn soil_mut(&mut self, c: Coordinate) -> Option<&mut Soil> {
        self.soils.get_mut(&c)
    }

    /// Sum of water content over every cell, mm.
    pub fn total_water(&self) -> f64 {
        self.soils.values().map(|s| s.water_content).sum()
    }

    // ── Plants ────────────────────────────────────────────────────────────

    pub fn plant(&self, c: Coordinate) -> Option<&Plant> {
        self.plants.get(&c)
    }

    #[cfg(test)]
    pub(crate) fn plant_mut(&mut self, c: Coordinate) -> Option<&mut Plant> {
        self.plants.get_mut(&c)
    }

    /// Live plants in coordinate order.
    pub fn plants(&self) -> impl Iterator<Item = &Plant> + '_ {
        self.plants.values()
    }

    #[inline]
    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }

    /// Plant a new `plant_type` at `c`.
    ///
    /// An occupied cell keeps its existing plant.
    pub fn add_plant(&mut self, c: Coordinate, plant_type: &'static PlantType) -> AddOutcome {
        if !self.soils.contains_key(&c) {
            return AddOutcome::NoSoil;
        }
        if self.plants.contains_key(&c) {
            return AddOutcome::Occupied;
        }
        self.plants.insert(c, Plant::new(plant_type, c));
        AddOutcome::Planted
    }

    /// Remove and return the plant at `c`, if any.
    pub fn remove_plant(&mut self, c: Coordinate) -> Option<Plant> {
        self.plants.remove(&c)
    }

    /// Detach ripe produce from the plant at `c` into the harvest store and
    /// drop over-mature produce.  The plant itself stays.
    pub fn harvest(&mut self, c: Coordinate) -> HarvestOutcome {
        let Some(plant) = self.plants.get_mut(&c) else {
            return HarvestOutcome::default();
        };
        let type_name = plant.type_name();
        let (ripe, discarded) = plant.detach_produce();
        let harvested = ripe.len();
        self.harvested.extend(ripe.into_iter().map(|p| HarvestedProduce {
            coordinate: c,
            type_name,
            weight_g: p.weight_g,
        }));
        HarvestOutcome { harvested, discarded }
    }

    /// Add `mm` of water to the cell at `c`.  Returns `false` if the
    /// coordinate has no soil.
    pub fn water(&mut self, c: Coordinate, mm: f64) -> bool {
        match self.soils.get_mut(&c) {
            Some(soil) => {
                soil.add_water(mm);
                true
            }
            None => false,
        }
    }

    // ── Harvest store ─────────────────────────────────────────────────────

    pub fn harvested(&self) -> &[HarvestedProduce] {
        &self.harvested
    }

    /// Hand the harvest store over to the caller, leaving it empty.
    pub fn take_harvested(&mut self) -> Vec<HarvestedProduce> {
        std::mem::take(&mut self.harvested)
    }

    // ── Simulation hooks ──────────────────────────────────────────────────

    /// Apply one action's effect.
    pub fn execute_action<E: TerrainEffect + ?Sized>(&mut self, effect: &E) {
        effect.apply(self);
    }

    /// Recompute absorbed radiation for every live plant.
    ///
    /// With the `parallel` feature this runs on Rayon's thread pool; each
    /// plant only reads the shared `sun` sample, so the result is identical.
    pub fn update_radiation(&mut self, sun: &SunSample) {
        #[cfg(not(feature = "parallel"))]
        {
            for plant in self.plants.values_mut() {
                plant.update_radiation(sun);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.plants
                .par_iter_mut()
                .for_each(|(_, plant)| plant.update_radiation(sun));
        }
    }

    /// Visit every live plant in coordinate order together with the soil
    /// cell it grows in.
    pub fn for_each_plant_with_soil<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Plant, Option<&mut Soil>),
    {
        for (c, plant) in self.plants.iter_mut() {
            f(plant, self.soils.get_mut(c));
        }
    }
}

impl fmt::Display for Terrain {
    /// One text row per grid row; `.` marks an empty cell, otherwise the
    /// plant type's display symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = self
                    .plants
                    .get(&Coordinate::new(x, y))
                    .map_or('.', |p| p.plant_type().display_symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
