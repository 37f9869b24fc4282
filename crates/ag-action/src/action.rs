//! The `Action` record and its kinds.

use std::fmt;

use ag_core::{Coordinate, ResourceList, SimClock, TimeStep};
use ag_terrain::{PlantType, plant_type};

use crate::{ActionError, ActionResult};

// ── ActionKind ────────────────────────────────────────────────────────────────

/// What an action does when its effect lands.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionKind {
    /// Plant a crop of the given type in every target cell.
    Add { plant_type: &'static PlantType },
    /// Remove the plant from every target cell.
    Remove,
    /// Harvest ripe produce from every target cell.
    Harvest,
    /// Irrigate every target cell with `water_amount` mm.
    Water { water_amount: f64 },
}

impl ActionKind {
    /// Resolve a plant type name into an `Add` kind.
    pub fn add(crop_type_name: &str) -> ActionResult<Self> {
        plant_type(crop_type_name)
            .map(|plant_type| Self::Add { plant_type })
            .ok_or_else(|| ActionError::UnknownPlantType(crop_type_name.to_owned()))
    }

    /// Validate a water amount into a `Water` kind.
    pub fn water(water_amount: f64) -> ActionResult<Self> {
        if !water_amount.is_finite() || water_amount < 0.0 {
            return Err(ActionError::InvalidWaterAmount(water_amount));
        }
        Ok(Self::Water { water_amount })
    }

    /// Short lowercase name, used in logs and output files.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add { .. }   => "add",
            Self::Remove       => "remove",
            Self::Harvest      => "harvest",
            Self::Water { .. } => "water",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { plant_type }   => write!(f, "add({})", plant_type.type_name),
            Self::Water { water_amount } => write!(f, "water({water_amount} mm)"),
            other                      => f.write_str(other.label()),
        }
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

/// An immutable, validated, time-stamped action.
///
/// Invariants established by every constructor:
///
/// - `applied_range` is non-empty;
/// - `end_time_step >= start_time_step`;
/// - `Water` amounts are finite and non-negative and `Add` names a
///   registered plant type.
///
/// ```rust
/// use ag_action::Action;
/// use ag_core::{Coordinate, ResourceKind, ResourceList, TimeStep};
///
/// let plant = Action::add([Coordinate::new(0, 0)], TimeStep(0), 2, "Bean")
///     .unwrap()
///     .with_cost(ResourceList::from([(ResourceKind::Seed, 1)]));
/// assert_eq!(plant.end_time_step(), TimeStep(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    kind:            ActionKind,
    applied_range:   Vec<Coordinate>,
    start_time_step: TimeStep,
    end_time_step:   TimeStep,
    cost:            ResourceList,
}

impl Action {
    /// Build an action of any kind.  `duration` is in steps.
    pub fn new(
        kind:          ActionKind,
        applied_range: impl IntoIterator<Item = Coordinate>,
        start:         TimeStep,
        duration:      i64,
    ) -> ActionResult<Self> {
        let duration = u64::try_from(duration).map_err(|_| ActionError::NegativeDuration(duration))?;
        let applied_range: Vec<Coordinate> = applied_range.into_iter().collect();
        if applied_range.is_empty() {
            return Err(ActionError::EmptyRange);
        }
        let end = start
            .0
            .checked_add(duration)
            .map(TimeStep)
            .ok_or(ActionError::EndStepOverflow { start, duration })?;
        Ok(Self {
            kind,
            applied_range,
            start_time_step: start,
            end_time_step:   end,
            cost:            ResourceList::new(),
        })
    }

    /// Plant `crop_type_name` in every cell of `applied_range`.
    pub fn add(
        applied_range:  impl IntoIterator<Item = Coordinate>,
        start:          TimeStep,
        duration:       i64,
        crop_type_name: &str,
    ) -> ActionResult<Self> {
        Self::new(ActionKind::add(crop_type_name)?, applied_range, start, duration)
    }

    pub fn remove(
        applied_range: impl IntoIterator<Item = Coordinate>,
        start:         TimeStep,
        duration:      i64,
    ) -> ActionResult<Self> {
        Self::new(ActionKind::Remove, applied_range, start, duration)
    }

    pub fn harvest(
        applied_range: impl IntoIterator<Item = Coordinate>,
        start:         TimeStep,
        duration:      i64,
    ) -> ActionResult<Self> {
        Self::new(ActionKind::Harvest, applied_range, start, duration)
    }

    pub fn water(
        applied_range: impl IntoIterator<Item = Coordinate>,
        start:         TimeStep,
        duration:      i64,
        water_amount:  f64,
    ) -> ActionResult<Self> {
        Self::new(ActionKind::water(water_amount)?, applied_range, start, duration)
    }

    /// Build an action from wall-clock times.
    ///
    /// The start is rounded *up* to the next step boundary and the duration
    /// is rounded up to whole steps, so an action never begins or finishes
    /// earlier than requested.
    pub fn at_time(
        clock:         &SimClock,
        kind:          ActionKind,
        applied_range: impl IntoIterator<Item = Coordinate>,
        start_unix:    i64,
        duration_secs: u64,
    ) -> ActionResult<Self> {
        let since_start = start_unix
            .checked_sub(clock.start_unix_secs)
            .and_then(|secs| u64::try_from(secs).ok())
            .ok_or(ActionError::BeforeStart { unix_secs: start_unix })?;
        let start = TimeStep(clock.steps_for_secs(since_start));
        let steps = clock.steps_for_secs(duration_secs);
        let duration = i64::try_from(steps).map_err(|_| ActionError::DurationOverflow(steps))?;
        Self::new(kind, applied_range, start, duration)
    }

    /// Attach a resource cost.  Replaces any previously attached cost.
    pub fn with_cost(mut self, cost: ResourceList) -> Self {
        self.cost = cost;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    #[inline]
    pub fn applied_range(&self) -> &[Coordinate] {
        &self.applied_range
    }

    #[inline]
    pub fn start_time_step(&self) -> TimeStep {
        self.start_time_step
    }

    #[inline]
    pub fn end_time_step(&self) -> TimeStep {
        self.end_time_step
    }

    /// Steps between activation and effect.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end_time_step - self.start_time_step
    }

    #[inline]
    pub fn cost(&self) -> &ResourceList {
        &self.cost
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} cell(s) {}..{}",
            self.kind,
            self.applied_range.len(),
            self.start_time_step,
            self.end_time_step
        )
    }
}
