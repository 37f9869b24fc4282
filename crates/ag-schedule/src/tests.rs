//! Unit and property tests for ag-schedule.

use std::sync::Arc;

use ag_action::Action;
use ag_core::{Coordinate, TimeStep};

use crate::{ActionId, ActionScheduler, ActionState, ScheduleError, SchedulerEvent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn remove(start: u64, duration: i64) -> Action {
    Action::remove([Coordinate::new(0, 0)], TimeStep(start), duration).unwrap()
}

/// Drain everything due at or before `target` into a list of
/// `(is_effect, id, time_step)` triples.
fn drain(s: &mut ActionScheduler, target: u64) -> Vec<(bool, ActionId, TimeStep)> {
    let mut out = Vec::new();
    while let Some(ev) = s.pop_due(TimeStep(target)) {
        out.push((matches!(ev, SchedulerEvent::Effect { .. }), ev.id(), ev.time_step()));
    }
    out
}

fn effects(events: &[(bool, ActionId, TimeStep)]) -> Vec<ActionId> {
    events.iter().filter(|e| e.0).map(|e| e.1).collect()
}

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn ids_follow_submission_order() {
        let mut s = ActionScheduler::new();
        assert_eq!(s.submit(remove(5, 0)), ActionId(0));
        assert_eq!(s.submit(remove(0, 0)), ActionId(1));
        assert_eq!(s.submitted_count(), 2);
    }

    #[test]
    fn zero_duration_activates_then_effects_at_same_step() {
        let mut s = ActionScheduler::new();
        let id = s.submit(remove(0, 0));
        let ev = drain(&mut s, 0);
        assert_eq!(ev, vec![(false, id, TimeStep(0)), (true, id, TimeStep(0))]);
        assert_eq!(s.state(id), Some(ActionState::Effected));
        assert!(s.is_empty());
    }

    #[test]
    fn nothing_due_before_start() {
        let mut s = ActionScheduler::new();
        let id = s.submit(remove(3, 2));
        assert!(s.pop_due(TimeStep(2)).is_none());
        assert_eq!(s.state(id), Some(ActionState::Submitted));

        let ev = drain(&mut s, 4);
        assert_eq!(ev, vec![(false, id, TimeStep(3))]);
        assert_eq!(s.state(id), Some(ActionState::Activated));

        let ev = drain(&mut s, 5);
        assert_eq!(ev, vec![(true, id, TimeStep(5))]);
    }

    #[test]
    fn effect_precedes_activation_at_same_step() {
        let mut s = ActionScheduler::new();
        let early = s.submit(remove(0, 4));
        let late = s.submit(remove(4, 1));
        let ev = drain(&mut s, 4);
        assert_eq!(
            ev,
            vec![
                (false, early, TimeStep(0)),
                (true, early, TimeStep(4)),
                (false, late, TimeStep(4)),
            ]
        );
    }

    #[test]
    fn equal_end_steps_run_in_submission_order() {
        let mut s = ActionScheduler::new();
        let x = s.submit(remove(0, 10));
        let y = s.submit(remove(2, 8));
        assert_eq!(effects(&drain(&mut s, 10)), vec![x, y]);
    }

    #[test]
    fn shorter_action_submitted_later_effects_first() {
        let mut s = ActionScheduler::new();
        let add_like = s.submit(remove(0, 5));
        let remove_like = s.submit(remove(3, 0));
        assert_eq!(effects(&drain(&mut s, 5)), vec![remove_like, add_like]);
    }

    #[test]
    fn next_event_step_tracks_heads() {
        let mut s = ActionScheduler::new();
        assert_eq!(s.next_event_step(), None);
        s.submit(remove(6, 4));
        s.submit(remove(2, 1));
        assert_eq!(s.next_event_step(), Some(TimeStep(2)));
        drain(&mut s, 2);
        assert_eq!(s.next_event_step(), Some(TimeStep(3)));
    }

    #[test]
    fn shared_submission_keeps_the_same_allocation() {
        let mut s = ActionScheduler::new();
        let shared = Arc::new(remove(0, 0));
        s.submit_shared(Arc::clone(&shared));
        let ev = s.pop_due(TimeStep(0)).unwrap();
        assert!(Arc::ptr_eq(ev.action(), &shared));
    }
}

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn cancelled_before_activation_never_surfaces() {
        let mut s = ActionScheduler::new();
        let a = s.submit(remove(1, 1));
        let b = s.submit(remove(1, 1));
        s.cancel(a).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(effects(&drain(&mut s, 5)), vec![b]);
        assert_eq!(s.state(a), Some(ActionState::Cancelled));
    }

    #[test]
    fn cancelled_after_activation_never_effects() {
        let mut s = ActionScheduler::new();
        let a = s.submit(remove(0, 3));
        drain(&mut s, 1);
        s.cancel(a).unwrap();
        assert!(drain(&mut s, 10).is_empty());
        assert!(s.is_empty());
        assert_eq!(s.next_event_step(), None);
    }

    #[test]
    fn effected_and_unknown_cannot_be_cancelled() {
        let mut s = ActionScheduler::new();
        let a = s.submit(remove(0, 0));
        drain(&mut s, 0);
        assert_eq!(
            s.cancel(a),
            Err(ScheduleError::NotCancellable { id: a, state: ActionState::Effected })
        );
        assert_eq!(s.cancel(ActionId(99)), Err(ScheduleError::UnknownAction(ActionId(99))));
    }

    #[test]
    fn double_cancel_is_rejected() {
        let mut s = ActionScheduler::new();
        let a = s.submit(remove(0, 0));
        s.cancel(a).unwrap();
        assert!(matches!(s.cancel(a), Err(ScheduleError::NotCancellable { .. })));
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn forget_finished_keeps_live_actions() {
        let mut s = ActionScheduler::new();
        let done = s.submit(remove(0, 0));
        let dropped = s.submit(remove(5, 5));
        let waiting = s.submit(remove(2, 4));
        let queued = s.submit(remove(8, 0));
        drain(&mut s, 3);
        s.cancel(dropped).unwrap();

        assert_eq!(s.forget_finished(), 2);
        assert_eq!(s.state(done), None);
        assert_eq!(s.state(dropped), None);
        assert_eq!(s.state(waiting), Some(ActionState::Activated));
        assert_eq!(s.cancel(done), Err(ScheduleError::UnknownAction(done)));

        // The forgotten cancelled entry is still skipped when it surfaces.
        assert_eq!(effects(&drain(&mut s, 20)), vec![waiting, queued]);
        assert!(s.is_empty());
        assert_eq!(s.forget_finished(), 2);
    }
}

#[cfg(test)]
mod properties {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every action with `end <= target` is effected exactly once, the
        /// merged stream never goes back in time, and an action is always
        /// activated before it is effected.
        #[test]
        fn drain_is_time_ordered_and_complete(
            specs in prop::collection::vec((0u64..20, 0i64..10), 0..40),
            target in 0u64..30,
        ) {
            let mut s = ActionScheduler::new();
            let mut ends = BTreeMap::new();
            for &(start, duration) in &specs {
                let id = s.submit(remove(start, duration));
                ends.insert(id, start + duration as u64);
            }

            let events = drain(&mut s, target);

            prop_assert!(events.windows(2).all(|w| w[0].2 <= w[1].2));
            prop_assert!(events.iter().all(|e| e.2 <= TimeStep(target)));

            let mut activated = BTreeMap::new();
            let mut effected = BTreeMap::new();
            for (i, &(is_effect, id, _)) in events.iter().enumerate() {
                let seen = if is_effect { &mut effected } else { &mut activated };
                prop_assert!(seen.insert(id, i).is_none(), "{id} reported twice");
            }
            for (id, &i) in &effected {
                prop_assert!(activated[id] < i);
            }

            let expected: Vec<_> = ends.iter().filter(|(_, e)| **e <= target).map(|(id, _)| *id).collect();
            let got: Vec<_> = effected.keys().copied().collect();
            prop_assert_eq!(got, expected);
            prop_assert_eq!(s.len(), specs.len() - effected.len());
        }

        /// Draining in several increments yields the same stream as one jump.
        #[test]
        fn incremental_drain_matches_single_drain(
            specs in prop::collection::vec((0u64..15, 0i64..6), 1..25),
            cuts in prop::collection::vec(0u64..25, 0..5),
        ) {
            let mut whole = ActionScheduler::new();
            let mut pieces = ActionScheduler::new();
            for &(start, duration) in &specs {
                whole.submit(remove(start, duration));
                pieces.submit(remove(start, duration));
            }

            let expected = drain(&mut whole, 25);

            let mut cuts = cuts;
            cuts.sort_unstable();
            cuts.push(25);
            let mut got = Vec::new();
            for cut in cuts {
                got.extend(drain(&mut pieces, cut));
            }
            prop_assert_eq!(got, expected);
        }
    }
}
