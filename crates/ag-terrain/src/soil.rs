//! Soil cells and their single-bucket water balance.

/// Latent heat of vaporisation of water, J/kg.  One kg of water over one m²
/// is one mm of depth, so `energy / LATENT_HEAT` is evaporated depth in mm.
const LATENT_HEAT: f64 = 2.45e6;

/// Share of absorbed radiant energy spent on evapotranspiration.
const EVAPORATIVE_FRACTION: f64 = 0.5;

/// One soil cell.
///
/// Water is tracked as a depth in mm.  `field_capacity` is the depth the
/// cell can hold against gravity; anything above it drains during the next
/// water-balance update.  Direct additions (irrigation) are never clamped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Soil {
    pub water_content:  f64,
    pub field_capacity: f64,
}

impl Default for Soil {
    fn default() -> Self {
        Self { water_content: 20.0, field_capacity: 40.0 }
    }
}

/// Inputs to one step of [`Soil::update_water_content`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct WaterBalanceInput {
    /// Rain falling during the step, mm.
    pub rainfall_mm: f64,
    /// Radiant flux absorbed by the sunlit canopy, W/m² of ground.
    pub sunlit_flux: f64,
    /// Radiant flux absorbed by the shaded canopy, W/m² of ground.
    pub shaded_flux: f64,
    /// Step length, seconds.
    pub step_secs: u32,
}

impl Soil {
    pub fn new(water_content: f64, field_capacity: f64) -> Self {
        Self { water_content, field_capacity }
    }

    /// Add `mm` of water.  No drainage happens here.
    #[inline]
    pub fn add_water(&mut self, mm: f64) {
        self.water_content += mm;
    }

    /// Water content as a fraction of field capacity, clamped to `[0, 1]`.
    pub fn relative_water(&self) -> f64 {
        if self.field_capacity <= 0.0 {
            return 0.0;
        }
        (self.water_content / self.field_capacity).clamp(0.0, 1.0)
    }

    /// Advance the water balance by one step: rain in, evapotranspiration
    /// out (driven by absorbed radiation), excess above field capacity
    /// drained.
    ///
    /// Returns the evaporated depth in mm.
    pub fn update_water_content(&mut self, input: &WaterBalanceInput) -> f64 {
        self.water_content += input.rainfall_mm.max(0.0);

        let absorbed = (input.sunlit_flux + input.shaded_flux).max(0.0);
        let demand = EVAPORATIVE_FRACTION * absorbed * input.step_secs as f64 / LATENT_HEAT;
        let evaporated = demand.min(self.water_content.max(0.0));
        self.water_content -= evaporated;

        if self.water_content > self.field_capacity {
            self.water_content = self.field_capacity;
        }
        evaporated
    }
}
