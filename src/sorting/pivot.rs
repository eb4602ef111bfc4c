// Pivot policies
// In-place partition schemes for the tracing engine

use serde::{Deserialize, Serialize};

/// Which element of a subrange becomes the pivot
///
/// The choice changes every recorded step, so a run always uses one policy
/// from start to finish. `Low` is the default contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotPolicy {
    /// Leftmost element of the subrange
    #[default]
    Low,

    /// Rightmost element of the subrange
    High,
}

impl PivotPolicy {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" | "left" | "leftmost" => Some(PivotPolicy::Low),
            "high" | "right" | "rightmost" => Some(PivotPolicy::High),
            _ => None,
        }
    }

    /// Partition `values[low..=high]` in place and return the pivot's final index.
    ///
    /// Requires `low < high < values.len()`.
    pub fn partition(&self, values: &mut [i32], low: usize, high: usize) -> usize {
        match self {
            PivotPolicy::Low => partition_low(values, low, high),
            PivotPolicy::High => partition_high(values, low, high),
        }
    }
}

/// Left-to-right scan with the pivot parked at `low`.
///
/// `store` is the last filled "smaller" slot; each smaller element found is
/// swapped into `store + 1`. The pivot then swaps into `store`.
fn partition_low(values: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = values[low];
    let mut store = low;

    for j in (low + 1)..=high {
        if values[j] < pivot {
            store += 1;
            values.swap(store, j);
        }
    }

    values.swap(low, store);
    store
}

/// Lomuto scan with the pivot parked at `high`.
fn partition_high(values: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = values[high];
    let mut store = low;

    for j in low..high {
        if values[j] < pivot {
            values.swap(store, j);
            store += 1;
        }
    }

    values.swap(store, high);
    store
}
