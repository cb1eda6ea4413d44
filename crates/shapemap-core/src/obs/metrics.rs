use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for mapping operations.
///

#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) types: BTreeMap<String, TypeCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Entry points
    pub generic_passes: u64,
    pub entity_passes: u64,
    pub bind_passes: u64,
    pub row_passes: u64,

    // Per-property outcomes
    pub properties_assigned: u64,
    pub properties_converted: u64,
    pub properties_skipped: u64,
    pub properties_failed: u64,

    // Tabular input
    pub rows_converted: u64,
}

///
/// TypeCounters
/// Counters keyed by destination type path.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TypeCounters {
    pub passes: u64,
    pub properties_assigned: u64,
    pub properties_failed: u64,
    pub rows_converted: u64,
}

///
/// EventReport
/// Point-in-time snapshot of the counters.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub types: BTreeMap<String, TypeCounters>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        types: m.types.clone(),
    })
}

/// Increment a counter without overflow.
pub(crate) const fn bump(counter: &mut u64, by: u64) {
    *counter = counter.saturating_add(by);
}
