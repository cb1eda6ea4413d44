//! Observability: runtime counters and the sink boundary.
//!
//! Mapping logic never touches `metrics` directly; every signal flows
//! through `MapEvent` and `MapSink`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, TypeCounters};
pub use sink::{MapEvent, MapSink, PassKind, metrics_report, metrics_reset_all, with_map_sink};
