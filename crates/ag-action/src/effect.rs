//! What each action kind does to a terrain.

use tracing::debug;

use ag_terrain::{AddOutcome, Terrain, TerrainEffect};

use crate::{Action, ActionKind};

impl TerrainEffect for Action {
    fn apply(&self, terrain: &mut Terrain) {
        match *self.kind() {
            ActionKind::Add { plant_type } => {
                for &c in self.applied_range() {
                    match terrain.add_plant(c, plant_type) {
                        AddOutcome::Planted => {}
                        AddOutcome::Occupied => {
                            debug!(cell = %c, plant = plant_type.type_name, "add skipped: cell occupied");
                        }
                        AddOutcome::NoSoil => {
                            debug!(cell = %c, plant = plant_type.type_name, "add skipped: no soil");
                        }
                    }
                }
            }

            ActionKind::Remove => {
                for &c in self.applied_range() {
                    if terrain.remove_plant(c).is_none() {
                        debug!(cell = %c, "remove skipped: no plant");
                    }
                }
            }

            ActionKind::Harvest => {
                for &c in self.applied_range() {
                    let outcome = terrain.harvest(c);
                    if outcome.harvested == 0 {
                        debug!(cell = %c, discarded = outcome.discarded, "harvest found nothing ripe");
                    }
                }
            }

            ActionKind::Water { water_amount } => {
                for &c in self.applied_range() {
                    if !terrain.water(c, water_amount) {
                        debug!(cell = %c, "water skipped: no soil");
                    }
                }
            }
        }
    }
}
