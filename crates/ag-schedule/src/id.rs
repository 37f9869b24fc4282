//! Scheduler-assigned action handles.

use std::fmt;

/// Handle returned by [`ActionScheduler::submit`](crate::ActionScheduler::submit).
///
/// The inner value is the submission sequence number, so ids are unique per
/// scheduler and compare in submission order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ActionId(pub u64);

impl ActionId {
    #[inline(always)]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionId({})", self.0)
    }
}
