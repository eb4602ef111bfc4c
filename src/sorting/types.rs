// Trace types
// Immutable records of partition and merge steps

use serde::{Deserialize, Serialize};

/// Kind of step recorded in a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Emitted right after a subrange is partitioned, before recursing into its halves
    Partition,

    /// Emitted after both halves of a subrange are sorted
    Merge,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Partition => "partition",
            EventKind::Merge => "merge",
        }
    }
}

/// One recorded step of a sort run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Copy of the whole working array at the moment of recording
    pub snapshot: Vec<i32>,

    /// Value of the pivot chosen for this subrange
    pub pivot_value: i32,

    /// Final resting index of the pivot
    pub pivot_index: usize,

    /// Inclusive lower bound of the subrange
    pub range_low: usize,

    /// Inclusive upper bound of the subrange
    pub range_high: usize,

    /// Recursion depth, root = 0
    pub depth: usize,

    pub kind: EventKind,
}

impl TraceEvent {
    /// The part of the snapshot this event concerns
    pub fn range_values(&self) -> &[i32] {
        &self.snapshot[self.range_low..=self.range_high]
    }

    /// Whether `other`'s range lies within this event's range
    pub fn encloses(&self, other: &TraceEvent) -> bool {
        self.range_low <= other.range_low && other.range_high <= self.range_high
    }

    /// Whether `other` describes the same recursive call
    pub fn same_call(&self, other: &TraceEvent) -> bool {
        self.range_low == other.range_low
            && self.range_high == other.range_high
            && self.depth == other.depth
            && self.pivot_value == other.pivot_value
    }
}

/// Ordered, append-only list of events produced by one sort run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn from_events(events: Vec<TraceEvent>) -> Self {
        Trace { events }
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TraceEvent> {
        self.events.get(index)
    }

    pub fn last(&self) -> Option<&TraceEvent> {
        self.events.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    /// Events with index <= `cursor`; empty for an empty trace
    pub fn up_to(&self, cursor: usize) -> &[TraceEvent] {
        if self.events.is_empty() {
            return &[];
        }
        let end = cursor.min(self.events.len() - 1) + 1;
        &self.events[..end]
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
