// Trace validation
// Checks that partition/merge events nest like the recursion that produced them

use thiserror::Error;

use super::types::{EventKind, Trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("event {index}: snapshot has {found} values, expected {expected}")]
    SnapshotLength {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("event {index}: range [{low}, {high}] is out of bounds")]
    RangeOutOfBounds { index: usize, low: usize, high: usize },

    #[error("event {index}: pivot does not sit at index {pivot_index} of its snapshot")]
    PivotMismatch { index: usize, pivot_index: usize },

    #[error("event {index}: merge without an open partition")]
    UnmatchedMerge { index: usize },

    #[error("event {index}: merge does not match partition at event {partition}")]
    MismatchedMerge { index: usize, partition: usize },

    #[error("event {index}: range escapes enclosing partition at event {parent}")]
    EscapedRange { index: usize, parent: usize },

    #[error("event {index}: depth is not deeper than enclosing partition at event {parent}")]
    ShallowDepth { index: usize, parent: usize },

    #[error("partition at event {index} is never merged")]
    UnclosedPartition { index: usize },
}

impl Trace {
    /// Verify the trace is well-nested.
    ///
    /// Every `Partition` must be closed by exactly one later `Merge` for the
    /// same call, and every event in between must lie inside the partition's
    /// range at a greater depth.
    pub fn validate(&self) -> Result<(), TraceError> {
        let events = self.events();
        let width = match events.first() {
            Some(first) => first.snapshot.len(),
            None => return Ok(()),
        };

        // indices of partitions still waiting for their merge
        let mut open: Vec<usize> = Vec::new();

        for (index, event) in events.iter().enumerate() {
            if event.snapshot.len() != width {
                return Err(TraceError::SnapshotLength {
                    index,
                    expected: width,
                    found: event.snapshot.len(),
                });
            }
            if event.range_low > event.range_high || event.range_high >= width {
                return Err(TraceError::RangeOutOfBounds {
                    index,
                    low: event.range_low,
                    high: event.range_high,
                });
            }
            if event.pivot_index < event.range_low
                || event.pivot_index > event.range_high
                || event.snapshot[event.pivot_index] != event.pivot_value
            {
                return Err(TraceError::PivotMismatch {
                    index,
                    pivot_index: event.pivot_index,
                });
            }

            match event.kind {
                EventKind::Partition => {
                    if let Some(&parent) = open.last() {
                        let enclosing = &events[parent];
                        if !enclosing.encloses(event) {
                            return Err(TraceError::EscapedRange { index, parent });
                        }
                        if event.depth <= enclosing.depth {
                            return Err(TraceError::ShallowDepth { index, parent });
                        }
                    }
                    open.push(index);
                }
                EventKind::Merge => {
                    let partition = open.pop().ok_or(TraceError::UnmatchedMerge { index })?;
                    if !events[partition].same_call(event) {
                        return Err(TraceError::MismatchedMerge { index, partition });
                    }
                }
            }
        }

        match open.last() {
            Some(&index) => Err(TraceError::UnclosedPartition { index }),
            None => Ok(()),
        }
    }
}
