//! Fruit / pods / ears a mature plant sets, and what leaves the field on
//! harvest.

use ag_core::Coordinate;

/// Ripeness of one produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProduceMaturity {
    Unripe,
    Ripe,
    Old,
}

/// One produce still attached to its plant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Produce {
    /// GDD accumulated since the produce set.
    pub accumulated_gdd: f64,
    pub weight_g:        f64,
    pub maturity:        ProduceMaturity,
}

impl Produce {
    pub fn new(weight_g: f64) -> Self {
        Self { accumulated_gdd: 0.0, weight_g, maturity: ProduceMaturity::Unripe }
    }
}

/// Produce detached from the field by a harvest.  Owned by the terrain's
/// harvest store until a caller takes it.
#[derive(Clone, Debug, PartialEq)]
pub struct HarvestedProduce {
    pub coordinate: Coordinate,
    pub type_name:  &'static str,
    pub weight_g:   f64,
}
