//! Fluent builder for constructing an [`Environment`].

use tracing::info;

use ag_core::EnvConfig;
use ag_schedule::ActionScheduler;
use ag_terrain::{Soil, Terrain};

use crate::{ClimateMeteorology, EnvResult, Environment, Meteorology};

/// Fluent builder for [`Environment`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                         |
/// |---------------------|-------------------------------------------------|
/// | `.terrain(t)`       | `DEFAULT_GRID` × `DEFAULT_GRID`, default soil   |
/// | `.grid(w, h)`       | as above, with the given size                   |
/// | `.meteorology(m)`   | `ClimateMeteorology::from_config(&config)`      |
///
/// # Example
///
/// ```rust,ignore
/// let env = EnvironmentBuilder::new(config)
///     .terrain(load_terrain_csv(path)?)
///     .build()?;
/// ```
pub struct EnvironmentBuilder {
    config:      EnvConfig,
    terrain:     Option<Terrain>,
    meteorology: Option<Box<dyn Meteorology>>,
}

impl EnvironmentBuilder {
    /// Side length of the default square grid.
    pub const DEFAULT_GRID: u32 = 10;

    pub fn new(config: EnvConfig) -> Self {
        Self { config, terrain: None, meteorology: None }
    }

    pub fn terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// An empty `width` × `height` grid of default soil.
    pub fn grid(self, width: u32, height: u32) -> Self {
        self.terrain(Terrain::new(width, height, Soil::default()))
    }

    pub fn meteorology(mut self, meteorology: impl Meteorology + 'static) -> Self {
        self.meteorology = Some(Box::new(meteorology));
        self
    }

    /// Validate the configuration and return an environment at step 0.
    pub fn build(self) -> EnvResult<Environment> {
        self.config.validate()?;

        let terrain = self.terrain.unwrap_or_else(|| {
            Terrain::new(Self::DEFAULT_GRID, Self::DEFAULT_GRID, Soil::default())
        });
        let meteorology = self
            .meteorology
            .unwrap_or_else(|| Box::new(ClimateMeteorology::from_config(&self.config)));
        let clock = self.config.make_clock();

        info!(
            env = %self.config.name,
            width = terrain.width(),
            height = terrain.height(),
            plants = terrain.plant_count(),
            start = %clock,
            step_secs = clock.step_length_secs,
            "environment created"
        );

        Ok(Environment {
            clock,
            config: self.config,
            terrain,
            scheduler: ActionScheduler::new(),
            meteorology,
        })
    }
}
