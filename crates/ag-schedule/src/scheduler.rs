//! `ActionScheduler` — merges the pending-start and pending-effect queues
//! into one time-ordered event stream.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use ag_action::Action;
use ag_core::TimeStep;

use crate::queue::QueueEntry;
use crate::{ActionId, ScheduleError, ScheduleResult, TimedQueue};

// ── ActionState ───────────────────────────────────────────────────────────────

/// Lifecycle of a submitted action.
///
/// `Submitted → Activated → Effected`; `Cancelled` is reachable from the two
/// queued states and is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionState {
    Submitted,
    Activated,
    Effected,
    Cancelled,
}

impl ActionState {
    /// `true` while the action still sits in one of the two queues.
    #[inline]
    pub fn is_queued(self) -> bool {
        matches!(self, Self::Submitted | Self::Activated)
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Submitted => "submitted",
            Self::Activated => "activated",
            Self::Effected  => "effected",
            Self::Cancelled => "cancelled",
        })
    }
}

// ── SchedulerEvent ────────────────────────────────────────────────────────────

/// One step of the merged stream produced by [`ActionScheduler::pop_due`].
#[derive(Clone, Debug)]
pub enum SchedulerEvent {
    /// The action reached its start step and now waits for its end step.
    Activated { id: ActionId, action: Arc<Action> },
    /// The action reached its end step; the caller must apply its effect.
    Effect { id: ActionId, action: Arc<Action> },
}

impl SchedulerEvent {
    pub fn id(&self) -> ActionId {
        match self {
            Self::Activated { id, .. } | Self::Effect { id, .. } => *id,
        }
    }

    pub fn action(&self) -> &Arc<Action> {
        match self {
            Self::Activated { action, .. } | Self::Effect { action, .. } => action,
        }
    }

    /// The step this event belongs to: start for activations, end for effects.
    pub fn time_step(&self) -> TimeStep {
        match self {
            Self::Activated { action, .. } => action.start_time_step(),
            Self::Effect { action, .. }    => action.end_time_step(),
        }
    }
}

// ── ActionScheduler ───────────────────────────────────────────────────────────

/// Two-queue scheduler.
///
/// Cancellation is lazy: a cancelled entry stays in its heap and is dropped
/// when it reaches the head, so `cancel` is O(1).
///
/// States of effected and cancelled actions are kept until
/// [`forget_finished`](Self::forget_finished) drops them.
#[derive(Debug, Default)]
pub struct ActionScheduler {
    pending_start:  TimedQueue,
    pending_effect: TimedQueue,
    states:         FxHashMap<ActionId, ActionState>,
    /// Monotonic submission counter; doubles as the tie-break key.
    next_sequence:  u64,
    /// Number of actions in `Submitted` or `Activated`.
    live:           usize,
}

impl ActionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` for activation at its start step.
    pub fn submit(&mut self, action: Action) -> ActionId {
        self.submit_shared(Arc::new(action))
    }

    /// Queue an action that is already shared.
    pub fn submit_shared(&mut self, action: Arc<Action>) -> ActionId {
        let id = ActionId(self.next_sequence);
        self.next_sequence += 1;
        trace!(%id, start = %action.start_time_step(), end = %action.end_time_step(), "submitted");
        self.pending_start.push(action.start_time_step(), id, action);
        self.states.insert(id, ActionState::Submitted);
        self.live += 1;
        id
    }

    /// Cancel a queued action.  It will never be activated or effected.
    pub fn cancel(&mut self, id: ActionId) -> ScheduleResult<()> {
        let state = self
            .states
            .get_mut(&id)
            .ok_or(ScheduleError::UnknownAction(id))?;
        if !state.is_queued() {
            return Err(ScheduleError::NotCancellable { id, state: *state });
        }
        *state = ActionState::Cancelled;
        self.live -= 1;
        trace!(%id, "cancelled");
        Ok(())
    }

    /// Produce the next due event at or before `target`, or `None` when
    /// neither queue head is due.
    pub fn pop_due(&mut self, target: TimeStep) -> Option<SchedulerEvent> {
        self.purge_cancelled();

        let start_due = self.pending_start.due_time(target);
        let effect_due = self.pending_effect.due_time(target);

        let take_effect = match (start_due, effect_due) {
            (None, None)        => return None,
            (None, Some(_))     => true,
            (Some(_), None)     => false,
            (Some(s), Some(e))  => e <= s,
        };

        if take_effect {
            let entry = self.pending_effect.pop()?;
            Some(self.effect(entry))
        } else {
            let entry = self.pending_start.pop()?;
            Some(self.activate(entry))
        }
    }

    fn activate(&mut self, entry: QueueEntry) -> SchedulerEvent {
        let QueueEntry { time, id, action } = entry;
        debug_assert_eq!(time, action.start_time_step());
        self.transition(id, ActionState::Submitted, ActionState::Activated);
        self.pending_effect.push(action.end_time_step(), id, Arc::clone(&action));
        SchedulerEvent::Activated { id, action }
    }

    fn effect(&mut self, entry: QueueEntry) -> SchedulerEvent {
        let QueueEntry { time, id, action } = entry;
        debug_assert_eq!(time, action.end_time_step());
        self.transition(id, ActionState::Activated, ActionState::Effected);
        self.live -= 1;
        SchedulerEvent::Effect { id, action }
    }

    fn transition(&mut self, id: ActionId, from: ActionState, to: ActionState) {
        match self.states.get_mut(&id) {
            Some(state) => {
                debug_assert_eq!(*state, from, "{id} popped in an unexpected state");
                *state = to;
            }
            None => unreachable!("{id} queued without a state entry"),
        }
    }

    /// Drop cancelled entries sitting at either queue head.  An entry whose
    /// state was forgotten can only have been cancelled.
    fn purge_cancelled(&mut self) {
        let states = &self.states;
        let cancelled = |e: &QueueEntry| !states.get(&e.id).is_some_and(|s| s.is_queued());
        self.pending_start.pop_while(cancelled);
        self.pending_effect.pop_while(cancelled);
    }

    /// Drop the recorded state of every effected or cancelled action and
    /// return how many were dropped.  Afterwards [`state`](Self::state)
    /// returns `None` for them and `cancel` reports them as unknown.
    pub fn forget_finished(&mut self) -> usize {
        let before = self.states.len();
        self.states.retain(|_, state| state.is_queued());
        let forgotten = before - self.states.len();
        trace!(forgotten, "finished actions forgotten");
        forgotten
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn state(&self, id: ActionId) -> Option<ActionState> {
        self.states.get(&id).copied()
    }

    /// Earliest step at which some live action activates or takes effect.
    pub fn next_event_step(&mut self) -> Option<TimeStep> {
        self.purge_cancelled();
        let start = self.pending_start.peek().map(|e| e.time);
        let effect = self.pending_effect.peek().map(|e| e.time);
        match (start, effect) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Live (not yet effected, not cancelled) actions.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total number of actions ever submitted.
    pub fn submitted_count(&self) -> u64 {
        self.next_sequence
    }
}
