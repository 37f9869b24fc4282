//! Plant species descriptors and the process-wide registry.
//!
//! The registry is a read-only table built on first access and never mutated
//! afterwards, so lookups need no synchronisation beyond the one-time
//! initialisation `LazyLock` already provides.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use ag_core::MinMax;

/// How a mature plant sets and ripens produce.
///
/// All thresholds are growing-degree-days (°C·day above the type's base
/// temperature).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProduceSpec {
    /// GDD between two produce sets on a mature plant.
    pub set_interval_gdd: f64,
    /// GDD a produce needs after setting before it is ripe.
    pub ripen_gdd: f64,
    /// GDD after setting at which a produce is over-mature.
    pub old_gdd: f64,
    /// Fresh weight of one produce, grams.
    pub weight_g: f64,
}

/// Immutable description of one species or cultivar.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantType {
    pub type_name:      &'static str,
    /// Single character used by the terrain's text rendering.
    pub display_symbol: char,
    /// `true` for a named cultivar, `false` for a wild species.
    pub cultivar:       bool,
    /// Base temperature for GDD accumulation, °C.
    pub base_temperature: f64,
    pub optimal_temperature:      MinMax<f64>,
    pub absolute_temperature:     MinMax<f64>,
    pub optimal_annual_rainfall:  MinMax<f64>,
    pub absolute_annual_rainfall: MinMax<f64>,
    /// Cumulative GDD to reach seedling, juvenile, mature and old.
    pub gdd_thresholds: [f64; 4],
    /// Leaf area index of a fully grown canopy.
    pub max_leaf_area_index: f64,
    pub produce: ProduceSpec,
}

static PLANT_TYPES: LazyLock<BTreeMap<&'static str, PlantType>> = LazyLock::new(|| {
    [bean(), corn(), squash()]
        .into_iter()
        .map(|t| (t.type_name, t))
        .collect()
});

/// Every registered plant type, keyed by type name.
pub fn plant_types() -> &'static BTreeMap<&'static str, PlantType> {
    &PLANT_TYPES
}

/// Look up a plant type by name.
pub fn plant_type(name: &str) -> Option<&'static PlantType> {
    PLANT_TYPES.get(name)
}

/// Names of every registered plant type, in ascending order.
pub fn plant_type_names() -> impl Iterator<Item = &'static str> {
    PLANT_TYPES.keys().copied()
}

// ── Species table ─────────────────────────────────────────────────────────────

fn bean() -> PlantType {
    PlantType {
        type_name:                "Bean",
        display_symbol:           'o',
        cultivar:                 true,
        base_temperature:         10.0,
        optimal_temperature:      MinMax::new(18.0, 30.0),
        absolute_temperature:     MinMax::new(5.0, 38.0),
        optimal_annual_rainfall:  MinMax::new(500.0, 1_500.0),
        absolute_annual_rainfall: MinMax::new(300.0, 4_300.0),
        gdd_thresholds:           [60.0, 250.0, 600.0, 1_200.0],
        max_leaf_area_index:      3.0,
        produce: ProduceSpec {
            set_interval_gdd: 40.0,
            ripen_gdd:        120.0,
            old_gdd:          300.0,
            weight_g:         8.0,
        },
    }
}

fn corn() -> PlantType {
    PlantType {
        type_name:                "Corn",
        display_symbol:           'l',
        cultivar:                 true,
        base_temperature:         10.0,
        optimal_temperature:      MinMax::new(20.0, 32.0),
        absolute_temperature:     MinMax::new(8.0, 40.0),
        optimal_annual_rainfall:  MinMax::new(600.0, 1_200.0),
        absolute_annual_rainfall: MinMax::new(400.0, 1_800.0),
        gdd_thresholds:           [100.0, 450.0, 1_400.0, 2_700.0],
        max_leaf_area_index:      5.0,
        produce: ProduceSpec {
            set_interval_gdd: 300.0,
            ripen_gdd:        600.0,
            old_gdd:          1_000.0,
            weight_g:         250.0,
        },
    }
}

fn squash() -> PlantType {
    PlantType {
        type_name:                "Squash",
        display_symbol:           'w',
        cultivar:                 false,
        base_temperature:         8.0,
        optimal_temperature:      MinMax::new(18.0, 30.0),
        absolute_temperature:     MinMax::new(10.0, 35.0),
        optimal_annual_rainfall:  MinMax::new(600.0, 1_000.0),
        absolute_annual_rainfall: MinMax::new(400.0, 1_500.0),
        gdd_thresholds:           [80.0, 300.0, 800.0, 1_600.0],
        max_leaf_area_index:      2.5,
        produce: ProduceSpec {
            set_interval_gdd: 100.0,
            ripen_gdd:        250.0,
            old_gdd:          500.0,
            weight_g:         900.0,
        },
    }
}
