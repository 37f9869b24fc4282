//! CSV terrain loader.
//!
//! # CSV format
//!
//! One row per soil cell.  The grid is sized to the largest `x`/`y` seen;
//! cells missing from the file get `Soil::default()`.
//!
//! ```csv
//! x,y,water_content,field_capacity,plant
//! 0,0,20.0,40.0,Bean
//! 1,0,18.5,40.0,
//! 0,1,22.0,35.0,Squash
//! ```
//!
//! The `plant` column is optional per row: an empty field means the cell
//! starts bare.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use ag_core::Coordinate;

use crate::builder::TerrainBuilder;
use crate::soil::Soil;
use crate::{Terrain, TerrainError, TerrainResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TerrainRecord {
    x:              u32,
    y:              u32,
    water_content:  f64,
    field_capacity: f64,
    #[serde(default)]
    plant:          Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a terrain from a CSV file.
pub fn load_terrain_csv(path: &Path) -> TerrainResult<Terrain> {
    let file = std::fs::File::open(path).map_err(TerrainError::Io)?;
    load_terrain_reader(file)
}

/// Like [`load_terrain_csv`] but accepts any `Read` source.
pub fn load_terrain_reader<R: Read>(reader: R) -> TerrainResult<Terrain> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<TerrainRecord>() {
        let row = result.map_err(|e| TerrainError::Parse(e.to_string()))?;
        if row.field_capacity < 0.0 || row.water_content < 0.0 {
            return Err(TerrainError::Parse(format!(
                "negative water at ({}, {}): water_content={} field_capacity={}",
                row.x, row.y, row.water_content, row.field_capacity
            )));
        }
        rows.push(row);
    }
    let cells = rows.len();

    if rows.is_empty() {
        return Err(TerrainError::Parse("terrain CSV has no rows".into()));
    }

    let width = rows.iter().map(|r| r.x).max().unwrap_or(0) + 1;
    let height = rows.iter().map(|r| r.y).max().unwrap_or(0) + 1;

    let mut builder = TerrainBuilder::new(width, height);
    for row in rows {
        let c = Coordinate::new(row.x, row.y);
        builder = builder.soil(c, Soil::new(row.water_content, row.field_capacity));
        if let Some(name) = row.plant.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            builder = builder.plant(c, name);
        }
    }
    let terrain = builder.build()?;
    debug!(width, height, cells, plants = terrain.plant_count(), "terrain loaded");
    Ok(terrain)
}
