//! Unit tests for ag-terrain.

use ag_core::{Coordinate, SunSample};

use crate::{GrowthInput, Maturity, Plant, Soil, Terrain, plant_type};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bean() -> &'static crate::PlantType {
    plant_type("Bean").expect("Bean is registered")
}

/// A warm, well-watered day-long step.
fn warm_day() -> GrowthInput {
    GrowthInput { air_temperature: 25.0, relative_water: 1.0, step_secs: 86_400 }
}

fn noon_sun() -> SunSample {
    SunSample {
        elevation:          1.0,
        azimuth:            3.1,
        total_irradiance:   800.0,
        diffuse_irradiance: 150.0,
        direct_irradiance:  650.0,
    }
}

#[cfg(test)]
mod registry {
    use super::*;
    use crate::{plant_type_names, plant_types};

    #[test]
    fn bean_descriptor() {
        let bean = bean();
        assert_eq!(bean.type_name, "Bean");
        assert_eq!(bean.display_symbol, 'o');
        assert!(bean.cultivar);
        assert!(bean.optimal_temperature.min >= bean.absolute_temperature.min);
    }

    #[test]
    fn names_are_sorted_and_unique() {
        let names: Vec<_> = plant_type_names().collect();
        assert_eq!(names, ["Bean", "Corn", "Squash"]);
        assert_eq!(plant_types().len(), 3);
    }

    #[test]
    fn unknown_type_is_none() {
        assert!(plant_type("Kudzu").is_none());
    }

    #[test]
    fn thresholds_increase() {
        for kind in plant_types().values() {
            let t = kind.gdd_thresholds;
            assert!(t.windows(2).all(|w| w[0] < w[1]), "{}: {t:?}", kind.type_name);
            assert!(kind.produce.ripen_gdd < kind.produce.old_gdd);
        }
    }
}

#[cfg(test)]
mod soil {
    use super::*;
    use crate::WaterBalanceInput;

    #[test]
    fn add_water_is_exact_and_unclamped() {
        let mut soil = Soil::new(39.0, 40.0);
        soil.add_water(5.0);
        assert_eq!(soil.water_content, 44.0);
    }

    #[test]
    fn rain_without_sun_fills_then_drains_to_capacity() {
        let mut soil = Soil::new(30.0, 40.0);
        let evaporated = soil.update_water_content(&WaterBalanceInput {
            rainfall_mm: 25.0,
            step_secs:   3_600,
            ..Default::default()
        });
        assert_eq!(evaporated, 0.0);
        assert_eq!(soil.water_content, 40.0);
    }

    #[test]
    fn radiation_evaporates_water() {
        let mut soil = Soil::new(20.0, 40.0);
        let evaporated = soil.update_water_content(&WaterBalanceInput {
            rainfall_mm: 0.0,
            sunlit_flux: 400.0,
            shaded_flux: 90.0,
            step_secs:   3_600,
        });
        // 0.5 * 490 W/m² * 3600 s / 2.45e6 J/kg = 0.36 mm
        assert!((evaporated - 0.36).abs() < 1e-9, "got {evaporated}");
        assert!((soil.water_content - 19.64).abs() < 1e-9);
    }

    #[test]
    fn evaporation_never_goes_negative() {
        let mut soil = Soil::new(0.01, 40.0);
        soil.update_water_content(&WaterBalanceInput {
            sunlit_flux: 1_000.0,
            step_secs:   86_400,
            ..Default::default()
        });
        assert_eq!(soil.water_content, 0.0);
    }

    #[test]
    fn relative_water_clamps() {
        assert_eq!(Soil::new(60.0, 40.0).relative_water(), 1.0);
        assert_eq!(Soil::new(10.0, 40.0).relative_water(), 0.25);
        assert_eq!(Soil::new(10.0, 0.0).relative_water(), 0.0);
    }
}

#[cfg(test)]
mod plant {
    use super::*;
    use crate::{Produce, ProduceMaturity};

    #[test]
    fn new_plant_is_a_seed() {
        let p = Plant::new(bean(), Coordinate::new(2, 3));
        assert_eq!(p.type_name(), "Bean");
        assert_eq!(p.position(), Coordinate::new(2, 3));
        assert_eq!(p.maturity(), Maturity::Seed);
        assert_eq!(p.leaf_area_index(), 0.0);
    }

    #[test]
    fn seeds_absorb_nothing() {
        let mut p = Plant::new(bean(), Coordinate::new(0, 0));
        p.update_radiation(&noon_sun());
        assert_eq!(p.radiation().total_flux_density_sunlit, 0.0);
    }

    #[test]
    fn growth_advances_maturity() {
        let mut p = Plant::new(bean(), Coordinate::new(0, 0));
        // 15 GDD/day at 25 °C over a 10 °C base.
        for _ in 0..5 {
            p.grow_step(&warm_day());
        }
        assert_eq!(p.accumulated_gdd(), 75.0);
        assert_eq!(p.maturity(), Maturity::Seedling);
    }

    #[test]
    fn cold_steps_add_no_gdd() {
        let mut p = Plant::new(bean(), Coordinate::new(0, 0));
        p.grow_step(&GrowthInput { air_temperature: 4.0, relative_water: 1.0, step_secs: 86_400 });
        assert_eq!(p.accumulated_gdd(), 0.0);
        assert!(p.health() < crate::plant::INITIAL_HEALTH, "frost should hurt");
    }

    #[test]
    fn water_stress_slows_growth() {
        let mut wet = Plant::new(bean(), Coordinate::new(0, 0));
        let mut dry = Plant::new(bean(), Coordinate::new(0, 0));
        wet.grow_step(&warm_day());
        dry.grow_step(&GrowthInput { relative_water: 0.25, ..warm_day() });
        assert_eq!(dry.accumulated_gdd() * 2.0, wet.accumulated_gdd());
    }

    #[test]
    fn mature_plants_set_and_ripen_produce() {
        let mut p = Plant::new(bean(), Coordinate::new(0, 0));
        // 600 GDD to maturity at 15 GDD/day → day 40.
        for _ in 0..40 {
            p.grow_step(&warm_day());
        }
        assert_eq!(p.maturity(), Maturity::Mature);
        for _ in 0..12 {
            p.grow_step(&warm_day());
        }
        assert!(p.has_ripe_produce(), "produce set early should be ripe: {:?}", p.produce());
    }

    #[test]
    fn sunlit_leaves_take_the_beam() {
        let mut p = Plant::new(bean(), Coordinate::new(0, 0));
        for _ in 0..20 {
            p.grow_step(&warm_day());
        }
        assert_eq!(p.maturity(), Maturity::Juvenile);
        p.update_radiation(&noon_sun());
        let r = p.radiation();
        assert!(r.total_flux_density_sunlit > r.total_flux_density_shaded);
        assert!((r.sunlit_leaf_area + r.shaded_leaf_area - p.leaf_area_index()).abs() < 1e-9);

        let night = SunSample { elevation: -0.2, ..noon_sun() };
        p.update_radiation(&night);
        assert_eq!(*p.radiation(), crate::PlantRadiation::default());
    }

    #[test]
    fn detach_splits_by_ripeness() {
        let mut p = Plant::new(bean(), Coordinate::new(0, 0));
        let with = |maturity| Produce { maturity, ..Produce::new(8.0) };
        p.push_produce(with(ProduceMaturity::Unripe));
        p.push_produce(with(ProduceMaturity::Ripe));
        p.push_produce(with(ProduceMaturity::Old));
        p.push_produce(with(ProduceMaturity::Ripe));

        let (ripe, discarded) = p.detach_produce();
        assert_eq!(ripe.len(), 2);
        assert_eq!(discarded, 1);
        assert_eq!(p.produce().len(), 1);
        assert_eq!(p.produce()[0].maturity, ProduceMaturity::Unripe);
    }
}

#[cfg(test)]
mod terrain {
    use super::*;
    use crate::{AddOutcome, Produce, ProduceMaturity, TerrainEffect};

    fn grid() -> Terrain {
        Terrain::new(3, 2, Soil::new(10.0, 40.0))
    }

    #[test]
    fn every_cell_has_soil() {
        let t = grid();
        assert!(t.soil(Coordinate::new(2, 1)).is_some());
        assert!(t.soil(Coordinate::new(3, 0)).is_none());
        assert_eq!(t.total_water(), 60.0);
    }

    #[test]
    fn add_into_occupied_cell_keeps_existing_plant() {
        let mut t = grid();
        let c = Coordinate::new(1, 1);
        assert_eq!(t.add_plant(c, bean()), AddOutcome::Planted);
        let squash = plant_type("Squash").unwrap();
        assert_eq!(t.add_plant(c, squash), AddOutcome::Occupied);
        assert_eq!(t.plant(c).unwrap().type_name(), "Bean");
        assert_eq!(t.plant_count(), 1);
    }

    #[test]
    fn add_outside_grid_is_refused() {
        let mut t = grid();
        assert_eq!(t.add_plant(Coordinate::new(9, 9), bean()), AddOutcome::NoSoil);
        assert_eq!(t.plant_count(), 0);
    }

    #[test]
    fn remove_absent_plant_is_none() {
        let mut t = grid();
        assert!(t.remove_plant(Coordinate::new(0, 0)).is_none());
        t.add_plant(Coordinate::new(0, 0), bean());
        assert!(t.remove_plant(Coordinate::new(0, 0)).is_some());
        assert!(t.plant(Coordinate::new(0, 0)).is_none());
    }

    #[test]
    fn water_touches_only_its_cell() {
        let mut t = grid();
        let before = t.total_water();
        assert!(t.water(Coordinate::new(2, 0), 5.0));
        assert_eq!(t.soil(Coordinate::new(2, 0)).unwrap().water_content, 15.0);
        assert_eq!(t.total_water(), before + 5.0);
        assert!(!t.water(Coordinate::new(5, 5), 5.0));
    }

    #[test]
    fn harvest_detaches_ripe_and_keeps_plant() {
        let mut t = grid();
        let c = Coordinate::new(0, 1);
        t.add_plant(c, bean());
        t.plant_mut(c).unwrap().push_produce(Produce {
            maturity: ProduceMaturity::Ripe,
            ..Produce::new(8.0)
        });
        t.plant_mut(c).unwrap().push_produce(Produce {
            maturity: ProduceMaturity::Old,
            ..Produce::new(8.0)
        });

        let outcome = t.harvest(c);
        assert_eq!(outcome.harvested, 1);
        assert_eq!(outcome.discarded, 1);
        assert!(t.plant(c).is_some());
        assert_eq!(t.harvested().len(), 1);
        assert_eq!(t.harvested()[0].type_name, "Bean");

        let taken = t.take_harvested();
        assert_eq!(taken.len(), 1);
        assert!(t.harvested().is_empty());
    }

    #[test]
    fn harvest_without_plant_is_empty() {
        let mut t = grid();
        assert_eq!(t.harvest(Coordinate::new(0, 0)), Default::default());
    }

    #[test]
    fn execute_action_dispatches_to_effect() {
        struct Flood(f64);
        impl TerrainEffect for Flood {
            fn apply(&self, terrain: &mut Terrain) {
                for x in 0..terrain.width() {
                    terrain.water(Coordinate::new(x, 0), self.0);
                }
            }
        }

        let mut t = grid();
        t.execute_action(&Flood(1.0));
        assert_eq!(t.total_water(), 63.0);
    }

    #[test]
    fn for_each_plant_pairs_plant_with_its_soil() {
        let mut t = grid();
        t.add_plant(Coordinate::new(2, 1), bean());
        t.add_plant(Coordinate::new(0, 0), bean());
        let mut visited = Vec::new();
        t.for_each_plant_with_soil(|plant, soil| {
            visited.push(plant.position());
            soil.expect("planted cells have soil").add_water(1.0);
        });
        assert_eq!(visited, [Coordinate::new(0, 0), Coordinate::new(2, 1)]);
        assert_eq!(t.soil(Coordinate::new(2, 1)).unwrap().water_content, 11.0);
    }

    #[test]
    fn display_renders_symbols() {
        let mut t = grid();
        t.add_plant(Coordinate::new(1, 0), bean());
        t.add_plant(Coordinate::new(2, 1), plant_type("Squash").unwrap());
        assert_eq!(t.to_string(), ".o.\n..w\n");
    }
}

#[cfg(test)]
mod builder_and_loader {
    use std::io::Cursor;

    use super::*;
    use crate::{TerrainBuilder, TerrainError, load_terrain_reader};

    #[test]
    fn builder_overrides_soil_and_seeds_plants() {
        let t = TerrainBuilder::new(2, 2)
            .default_soil(Soil::new(5.0, 30.0))
            .soil(Coordinate::new(1, 1), Soil::new(25.0, 30.0))
            .plant(Coordinate::new(0, 1), "Corn")
            .build()
            .unwrap();
        assert_eq!(t.soil(Coordinate::new(0, 0)).unwrap().water_content, 5.0);
        assert_eq!(t.soil(Coordinate::new(1, 1)).unwrap().water_content, 25.0);
        assert_eq!(t.plant(Coordinate::new(0, 1)).unwrap().type_name(), "Corn");
    }

    #[test]
    fn builder_rejects_unknown_type() {
        let err = TerrainBuilder::new(1, 1)
            .plant(Coordinate::new(0, 0), "Kudzu")
            .build()
            .unwrap_err();
        assert!(matches!(err, TerrainError::UnknownPlantType(name) if name == "Kudzu"));
    }

    #[test]
    fn builder_rejects_out_of_bounds() {
        let err = TerrainBuilder::new(1, 1)
            .soil(Coordinate::new(1, 0), Soil::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, TerrainError::OutOfBounds { .. }));
    }

    #[test]
    fn loader_sizes_grid_from_rows() {
        let csv = "\
x,y,water_content,field_capacity,plant
0,0,20.0,40.0,Bean
2,0,18.5,40.0,
1,1,22.0,35.0,Squash
";
        let t = load_terrain_reader(Cursor::new(csv)).unwrap();
        assert_eq!((t.width(), t.height()), (3, 2));
        assert_eq!(t.plant_count(), 2);
        assert_eq!(t.soil(Coordinate::new(2, 0)).unwrap().water_content, 18.5);
        // Not listed → default soil.
        assert_eq!(*t.soil(Coordinate::new(0, 1)).unwrap(), Soil::default());
    }

    #[test]
    fn loader_rejects_garbage() {
        let csv = "x,y,water_content,field_capacity\n0,zero,1.0,2.0\n";
        assert!(matches!(load_terrain_reader(Cursor::new(csv)), Err(TerrainError::Parse(_))));
    }

    #[test]
    fn loader_rejects_empty_file() {
        let csv = "x,y,water_content,field_capacity\n";
        assert!(load_terrain_reader(Cursor::new(csv)).is_err());
    }
}
