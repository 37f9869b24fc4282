//! Resource kinds and the cost / inventory map type.

use std::collections::BTreeMap;
use std::fmt;

/// A kind of resource an agent can own and spend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceKind {
    Money,
    Labor,
    Water,
    Seed,
    Fertilizer,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Money      => "money",
            Self::Labor      => "labor",
            Self::Water      => "water",
            Self::Seed       => "seed",
            Self::Fertilizer => "fertilizer",
        };
        f.write_str(s)
    }
}

/// Resource kind → quantity.  Used both for action costs and agent
/// inventories.  Ordered so iteration (and therefore logging) is stable.
pub type ResourceList = BTreeMap<ResourceKind, u64>;
