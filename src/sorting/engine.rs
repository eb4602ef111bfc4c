// Tracing sort engine
// Recursive in-place quicksort that records every partition and merge step

use serde::Serialize;

use super::pivot::PivotPolicy;
use super::types::{EventKind, Trace, TraceEvent};
use crate::sequence::Sequence;

/// Final array and recorded trace of one sort run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome {
    pub sorted: Sequence,
    pub trace: Trace,
}

/// Quicksort engine that emits a replayable trace
///
/// Events are recorded in execution order: a `Partition` event before the
/// two recursive calls of a subrange, the matching `Merge` event after both
/// return. No early exit is taken for already-sorted input, so every
/// subrange of two or more elements yields exactly one pair of events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSorter {
    policy: PivotPolicy,
}

impl TracingSorter {
    pub fn new(policy: PivotPolicy) -> Self {
        TracingSorter { policy }
    }

    pub fn policy(&self) -> PivotPolicy {
        self.policy
    }

    /// Sort a working copy of `input` and return the trace of the run.
    /// `input` itself is left untouched.
    pub fn trace(&self, input: &Sequence) -> Trace {
        self.run(input).trace
    }

    /// Sort a working copy of `input`, returning the sorted array with its trace
    pub fn run(&self, input: &Sequence) -> SortOutcome {
        let mut values = input.as_slice().to_vec();
        let mut events = Vec::new();

        if values.len() > 1 {
            let high = values.len() - 1;
            self.sort_range(&mut values, 0, high, 0, &mut events);
        }

        log::debug!(
            "Traced {} events sorting {} values ({:?} pivot)",
            events.len(),
            values.len(),
            self.policy
        );

        SortOutcome {
            sorted: Sequence::new(values),
            trace: Trace::from_events(events),
        }
    }

    fn sort_range(
        &self,
        values: &mut [i32],
        low: usize,
        high: usize,
        depth: usize,
        events: &mut Vec<TraceEvent>,
    ) {
        if low >= high {
            return;
        }

        let pivot_index = self.policy.partition(values, low, high);
        let pivot_value = values[pivot_index];

        events.push(TraceEvent {
            snapshot: values.to_vec(),
            pivot_value,
            pivot_index,
            range_low: low,
            range_high: high,
            depth,
            kind: EventKind::Partition,
        });

        if pivot_index > low {
            self.sort_range(values, low, pivot_index - 1, depth + 1, events);
        }
        self.sort_range(values, pivot_index + 1, high, depth + 1, events);

        events.push(TraceEvent {
            snapshot: values.to_vec(),
            pivot_value,
            pivot_index,
            range_low: low,
            range_high: high,
            depth,
            kind: EventKind::Merge,
        });
    }
}
