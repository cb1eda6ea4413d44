//! Metrics sink boundary.
//!
//! This module is the only bridge between mapping logic and the global
//! counter state. Per-property conversion failures surface here instead of
//! being printed.

use crate::{
    error::ConversionError,
    obs::metrics::{self, EventReport, bump},
};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MapSink>> = RefCell::new(None);
}

///
/// PassKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PassKind {
    Generic,
    Entity,
    Bind,
    Row,
}

///
/// MapEvent
///

#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent<'a> {
    PassStart {
        kind: PassKind,
        source_path: &'static str,
        dest_path: &'static str,
    },
    PropertyAssigned {
        dest_path: &'static str,
        property: &'static str,
        converted: bool,
    },
    PropertySkipped {
        dest_path: &'static str,
        property: &'static str,
    },
    PropertyFailed {
        dest_path: &'static str,
        property: &'static str,
        error: &'a ConversionError,
    },
    PassFinish {
        kind: PassKind,
        dest_path: &'static str,
        assigned: u64,
        failed: u64,
    },
    RowsConverted {
        dest_path: &'static str,
        rows: u64,
    },
}

///
/// MapSink
///

pub trait MapSink {
    fn record(&self, event: &MapEvent<'_>);
}

/// GlobalMapSink
/// Default sink that writes into the thread-local counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMapSink;

impl MapSink for GlobalMapSink {
    fn record(&self, event: &MapEvent<'_>) {
        match *event {
            MapEvent::PassStart {
                kind, dest_path, ..
            } => {
                metrics::with_state_mut(|m| {
                    match kind {
                        PassKind::Generic => bump(&mut m.ops.generic_passes, 1),
                        PassKind::Entity => bump(&mut m.ops.entity_passes, 1),
                        PassKind::Bind => bump(&mut m.ops.bind_passes, 1),
                        PassKind::Row => bump(&mut m.ops.row_passes, 1),
                    }

                    let entry = m.types.entry(dest_path.to_string()).or_default();
                    bump(&mut entry.passes, 1);
                });
            }

            MapEvent::PropertyAssigned {
                dest_path,
                converted,
                ..
            } => {
                metrics::with_state_mut(|m| {
                    bump(&mut m.ops.properties_assigned, 1);
                    if converted {
                        bump(&mut m.ops.properties_converted, 1);
                    }

                    let entry = m.types.entry(dest_path.to_string()).or_default();
                    bump(&mut entry.properties_assigned, 1);
                });
            }

            MapEvent::PropertySkipped { .. } => {
                metrics::with_state_mut(|m| bump(&mut m.ops.properties_skipped, 1));
            }

            MapEvent::PropertyFailed { dest_path, .. } => {
                metrics::with_state_mut(|m| {
                    bump(&mut m.ops.properties_failed, 1);

                    let entry = m.types.entry(dest_path.to_string()).or_default();
                    bump(&mut entry.properties_failed, 1);
                });
            }

            MapEvent::PassFinish { .. } => {}

            MapEvent::RowsConverted { dest_path, rows } => {
                metrics::with_state_mut(|m| {
                    bump(&mut m.ops.rows_converted, rows);

                    let entry = m.types.entry(dest_path.to_string()).or_default();
                    bump(&mut entry.rows_converted, rows);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_MAP_SINK: GlobalMapSink = GlobalMapSink;

pub(crate) fn record(event: &MapEvent<'_>) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` came from a live `&dyn MapSink` installed by `with_map_sink`.
        // - `with_map_sink` restores the previous slot on every exit,
        //   including unwinding, so `ptr` never outlives the borrow.
        // - `record` is synchronous and never stores `ptr`.
        unsafe { (*ptr).record(event) };
    } else {
        GLOBAL_MAP_SINK.record(event);
    }
}

/// Snapshot the counters for this thread.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset all counters for this thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary sink override on this thread.
pub fn with_map_sink<T>(sink: &dyn MapSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MapSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The erased pointer is installed only for this dynamic scope and the
    //   guard restores the previous slot on all exits.
    // - Only shared access is ever materialized from it.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MapSink, *const dyn MapSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
