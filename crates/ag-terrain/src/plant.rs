//! Live plants: radiation interception and the one-step growth update.

use std::fmt;

use ag_core::{Coordinate, SunSample};

use crate::plant_type::PlantType;
use crate::produce::{Produce, ProduceMaturity};

/// Health a plant starts with and never exceeds.
pub const INITIAL_HEALTH: u32 = 10;

/// Leaf absorptivity for shortwave radiation.
const LEAF_ABSORPTIVITY: f64 = 0.8;

/// Extinction coefficient for diffuse radiation.
const DIFFUSE_EXTINCTION: f64 = 0.8;

/// Smallest sine of solar elevation used for the beam extinction
/// coefficient; keeps it finite near sunrise and sunset.
const MIN_SIN_ELEVATION: f64 = 0.05;

/// Relative soil water below which growth slows linearly.
const WATER_STRESS_THRESHOLD: f64 = 0.5;

const SECS_PER_DAY: f64 = 86_400.0;

// ── Maturity ──────────────────────────────────────────────────────────────────

/// Developmental stage of a plant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maturity {
    #[default]
    Seed,
    Seedling,
    Juvenile,
    Mature,
    Old,
}

impl Maturity {
    /// The following stage; `Old` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::Seed     => Self::Seedling,
            Self::Seedling => Self::Juvenile,
            Self::Juvenile => Self::Mature,
            Self::Mature   => Self::Old,
            Self::Old      => Self::Old,
        }
    }

    /// Share of the type's full leaf area present at this stage.
    fn canopy_fraction(self) -> f64 {
        match self {
            Self::Seed     => 0.0,
            Self::Seedling => 0.1,
            Self::Juvenile => 0.5,
            Self::Mature   => 1.0,
            Self::Old      => 0.7,
        }
    }

    /// Index into `PlantType::gdd_thresholds` of the threshold that leads
    /// out of this stage.
    fn threshold_index(self) -> Option<usize> {
        match self {
            Self::Seed     => Some(0),
            Self::Seedling => Some(1),
            Self::Juvenile => Some(2),
            Self::Mature   => Some(3),
            Self::Old      => None,
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Seed     => "seed",
            Self::Seedling => "seedling",
            Self::Juvenile => "juvenile",
            Self::Mature   => "mature",
            Self::Old      => "old",
        };
        f.write_str(s)
    }
}

// ── PlantRadiation ────────────────────────────────────────────────────────────

/// Radiation absorbed by a plant's canopy during the current step, split
/// into the sunlit and shaded leaf classes.  Fluxes are W/m² of ground.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PlantRadiation {
    pub total_flux_density_sunlit: f64,
    pub total_flux_density_shaded: f64,
    pub sunlit_leaf_area: f64,
    pub shaded_leaf_area: f64,
}

// ── GrowthInput ───────────────────────────────────────────────────────────────

/// Everything one growth step reads besides the plant itself.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct GrowthInput {
    /// Air temperature during the step, °C.
    pub air_temperature: f64,
    /// Soil water at the plant's cell as a fraction of field capacity.
    pub relative_water: f64,
    /// Step length, seconds.
    pub step_secs: u32,
}

// ── Plant ─────────────────────────────────────────────────────────────────────

/// A live plant.  Owned by [`Terrain`][crate::Terrain], keyed by `position`.
#[derive(Clone, Debug)]
pub struct Plant {
    plant_type:         &'static PlantType,
    position:           Coordinate,
    health:             u32,
    maturity:           Maturity,
    accumulated_gdd:    f64,
    gdd_since_last_set: f64,
    produce:            Vec<Produce>,
    radiation:          PlantRadiation,
}

impl Plant {
    pub fn new(plant_type: &'static PlantType, position: Coordinate) -> Self {
        Self {
            plant_type,
            position,
            health:             INITIAL_HEALTH,
            maturity:           Maturity::Seed,
            accumulated_gdd:    0.0,
            gdd_since_last_set: 0.0,
            produce:            Vec::new(),
            radiation:          PlantRadiation::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.plant_type.type_name
    }

    #[inline]
    pub fn plant_type(&self) -> &'static PlantType {
        self.plant_type
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    #[inline]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[inline]
    pub fn maturity(&self) -> Maturity {
        self.maturity
    }

    #[inline]
    pub fn accumulated_gdd(&self) -> f64 {
        self.accumulated_gdd
    }

    #[inline]
    pub fn produce(&self) -> &[Produce] {
        &self.produce
    }

    #[inline]
    pub fn radiation(&self) -> &PlantRadiation {
        &self.radiation
    }

    /// Current leaf area index.
    pub fn leaf_area_index(&self) -> f64 {
        self.plant_type.max_leaf_area_index * self.maturity.canopy_fraction()
    }

    pub fn has_ripe_produce(&self) -> bool {
        self.produce.iter().any(|p| p.maturity == ProduceMaturity::Ripe)
    }

    // ── Per-step updates ──────────────────────────────────────────────────

    /// Recompute absorbed radiation from the sun at the current instant.
    ///
    /// Sunlit/shaded partitioning follows the usual two-leaf-class canopy
    /// model: the beam is intercepted by the sunlit leaf area only, diffuse
    /// light is shared by all leaves.
    pub fn update_radiation(&mut self, sun: &SunSample) {
        let lai = self.leaf_area_index();
        if !sun.is_daytime() || lai <= 0.0 {
            self.radiation = PlantRadiation::default();
            return;
        }

        let kb = 0.5 / sun.elevation.sin().max(MIN_SIN_ELEVATION);
        let sunlit_leaf_area = (1.0 - (-kb * lai).exp()) / kb;
        let shaded_leaf_area = (lai - sunlit_leaf_area).max(0.0);

        let beam_absorbed = LEAF_ABSORPTIVITY * sun.direct_irradiance * (1.0 - (-kb * lai).exp());
        let diffuse_absorbed =
            LEAF_ABSORPTIVITY * sun.diffuse_irradiance * (1.0 - (-DIFFUSE_EXTINCTION * lai).exp());
        let diffuse_per_leaf = diffuse_absorbed / lai;

        self.radiation = PlantRadiation {
            total_flux_density_sunlit: beam_absorbed + diffuse_per_leaf * sunlit_leaf_area,
            total_flux_density_shaded: diffuse_per_leaf * shaded_leaf_area,
            sunlit_leaf_area,
            shaded_leaf_area,
        };
    }

    /// Advance the plant by one step.
    ///
    /// Growing-degree-days accumulate above the type's base temperature,
    /// scaled down under water stress.  Crossing a GDD threshold advances
    /// the maturity stage.  Attached produce ripens on the same GDD clock,
    /// and a mature plant sets new produce every `set_interval_gdd`.
    pub fn grow_step(&mut self, input: &GrowthInput) {
        let kind = self.plant_type;
        let days = input.step_secs as f64 / SECS_PER_DAY;
        let water_factor = (input.relative_water / WATER_STRESS_THRESHOLD).clamp(0.0, 1.0);
        let gdd = (input.air_temperature - kind.base_temperature).max(0.0) * days * water_factor;

        if kind.absolute_temperature.contains(input.air_temperature) {
            if kind.optimal_temperature.contains(input.air_temperature) {
                self.health = (self.health + 1).min(INITIAL_HEALTH);
            }
        } else {
            self.health = self.health.saturating_sub(1);
        }

        self.accumulated_gdd += gdd;
        while let Some(i) = self.maturity.threshold_index() {
            if self.accumulated_gdd < kind.gdd_thresholds[i] {
                break;
            }
            self.maturity = self.maturity.next();
        }

        for p in &mut self.produce {
            p.accumulated_gdd += gdd;
            p.maturity = if p.accumulated_gdd >= kind.produce.old_gdd {
                ProduceMaturity::Old
            } else if p.accumulated_gdd >= kind.produce.ripen_gdd {
                ProduceMaturity::Ripe
            } else {
                ProduceMaturity::Unripe
            };
        }

        if self.maturity == Maturity::Mature && kind.produce.set_interval_gdd > 0.0 {
            self.gdd_since_last_set += gdd;
            while self.gdd_since_last_set >= kind.produce.set_interval_gdd {
                self.gdd_since_last_set -= kind.produce.set_interval_gdd;
                self.produce.push(Produce::new(kind.produce.weight_g));
            }
        }
    }

    /// Split attached produce: ripe ones are returned, old ones are dropped,
    /// unripe ones stay on the plant.  Returns `(ripe, discarded_count)`.
    pub(crate) fn detach_produce(&mut self) -> (Vec<Produce>, usize) {
        let mut ripe = Vec::new();
        let mut discarded = 0;
        self.produce.retain(|p| match p.maturity {
            ProduceMaturity::Unripe => true,
            ProduceMaturity::Ripe => {
                ripe.push(*p);
                false
            }
            ProduceMaturity::Old => {
                discarded += 1;
                false
            }
        });
        (ripe, discarded)
    }

    #[cfg(test)]
    pub(crate) fn push_produce(&mut self, produce: Produce) {
        self.produce.push(produce);
    }
}
