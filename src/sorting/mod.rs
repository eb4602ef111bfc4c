// Sorting module
// Tracing quicksort engine and the event trace it records

pub mod engine;
pub mod pivot;
pub mod types;
pub mod validate;

pub use engine::{SortOutcome, TracingSorter};
pub use pivot::PivotPolicy;
pub use types::{EventKind, Trace, TraceEvent};
pub use validate::TraceError;
