//! Which registered plant types suit a climate.

use ag_core::{Climate, MinMax};
use ag_terrain::{PlantType, plant_types};

/// Plant types whose *absolute* temperature and rainfall tolerances cover
/// the climate's yearly ranges, in name order.
pub fn qualified_plants(climate: &Climate) -> Vec<&'static str> {
    select(climate, |t| (t.absolute_temperature, t.absolute_annual_rainfall))
}

/// Plant types whose *optimal* ranges cover the climate's yearly ranges.
/// Always a subset of [`qualified_plants`].
pub fn optimal_plants(climate: &Climate) -> Vec<&'static str> {
    select(climate, |t| (t.optimal_temperature, t.optimal_annual_rainfall))
}

fn select(climate: &Climate, ranges: fn(&PlantType) -> (MinMax<f64>, MinMax<f64>)) -> Vec<&'static str> {
    plant_types()
        .values()
        .filter(|t| {
            let (temperature, rainfall) = ranges(t);
            temperature.covers(&climate.yearly_temperature) && rainfall.covers(&climate.yearly_rainfall)
        })
        .map(|t| t.type_name)
        .collect()
}
