//! `ag-terrain` — the soil grid and the plants that live on it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`soil`]        | `Soil`, `WaterBalanceInput`                               |
//! | [`plant_type`]  | `PlantType`, `ProduceSpec`, global registry lookups       |
//! | [`plant`]       | `Plant`, `Maturity`, `PlantRadiation`, `GrowthInput`      |
//! | [`produce`]     | `Produce`, `ProduceMaturity`, `HarvestedProduce`          |
//! | [`terrain`]     | `Terrain`, `TerrainEffect`, outcome enums                 |
//! | [`builder`]     | `TerrainBuilder`                                          |
//! | [`loader`]      | `load_terrain_csv`, `load_terrain_reader`                 |
//! | [`error`]       | `TerrainError`, `TerrainResult<T>`                        |
//!
//! # Ownership model
//!
//! `Terrain` owns every plant exclusively, keyed by the plant's grid
//! coordinate.  Nothing outside this crate ever holds a reference to a plant
//! across a mutation: callers name plants by coordinate (plus, if they care,
//! the type name), so removing a plant can never leave a dangling handle.

pub mod builder;
pub mod error;
pub mod loader;
pub mod plant;
pub mod plant_type;
pub mod produce;
pub mod soil;
pub mod terrain;

#[cfg(test)]
mod tests;

pub use builder::TerrainBuilder;
pub use error::{TerrainError, TerrainResult};
pub use loader::{load_terrain_csv, load_terrain_reader};
pub use plant::{GrowthInput, Maturity, Plant, PlantRadiation};
pub use plant_type::{PlantType, ProduceSpec, plant_type, plant_type_names, plant_types};
pub use produce::{HarvestedProduce, Produce, ProduceMaturity};
pub use soil::{Soil, WaterBalanceInput};
pub use terrain::{AddOutcome, HarvestOutcome, Terrain, TerrainEffect};
