//! Property-based tests for the tracing sort engine and the session
//!
//! These cover the observable contract of a run: sortedness, trace nesting,
//! cursor clamping and reproducibility of seeded sessions.

use proptest::prelude::*;
use quicktrace_lib::sequence::SequenceConfig;
use quicktrace_lib::{
    EventKind, PivotPolicy, Sequence, Trace, TracingSorter, Visualizer, VisualizerConfig,
};

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

fn policies() -> impl Strategy<Value = PivotPolicy> {
    prop_oneof![Just(PivotPolicy::Low), Just(PivotPolicy::High)]
}

/// Brute-force nesting check, independent of `Trace::validate`
fn assert_well_nested(trace: &Trace) {
    let events = trace.events();
    for (i, open) in events.iter().enumerate() {
        if open.kind != EventKind::Partition {
            continue;
        }

        let matches: Vec<usize> = events
            .iter()
            .enumerate()
            .skip(i + 1)
            .filter(|(_, e)| e.kind == EventKind::Merge && open.same_call(e))
            .map(|(j, _)| j)
            .collect();
        assert_eq!(matches.len(), 1, "partition {} must have one merge", i);

        let close = matches[0];
        for inner in &events[i + 1..close] {
            assert!(open.encloses(inner), "event escapes partition {}", i);
            assert!(inner.depth > open.depth, "event not deeper than partition {}", i);
        }
    }
}

// =============================================================================
// Engine properties
// =============================================================================

proptest! {
    #[test]
    fn final_array_is_sorted(values in prop::collection::vec(0i32..100, 0..40), policy in policies()) {
        let input = Sequence::from(values.clone());
        let outcome = TracingSorter::new(policy).run(&input);

        prop_assert_eq!(outcome.sorted.into_inner(), sorted_copy(&values));
        prop_assert_eq!(input.as_slice(), values.as_slice());
    }

    #[test]
    fn last_snapshot_is_sorted(values in prop::collection::vec(-50i32..50, 0..40), policy in policies()) {
        let trace = TracingSorter::new(policy).trace(&Sequence::from(values.clone()));

        match trace.last() {
            Some(last) => {
                prop_assert_eq!(last.kind, EventKind::Merge);
                prop_assert_eq!(last.snapshot.clone(), sorted_copy(&values));
                prop_assert_eq!((last.range_low, last.range_high, last.depth), (0, values.len() - 1, 0));
            }
            None => prop_assert!(values.len() < 2),
        }
    }

    #[test]
    fn trace_is_well_nested(values in prop::collection::vec(0i32..20, 0..30), policy in policies()) {
        let trace = TracingSorter::new(policy).trace(&Sequence::from(values));

        prop_assert_eq!(trace.validate(), Ok(()));
        assert_well_nested(&trace);
        prop_assert_eq!(trace.count(EventKind::Partition), trace.count(EventKind::Merge));
    }

    #[test]
    fn snapshots_are_permutations(values in prop::collection::vec(0i32..100, 2..25)) {
        let trace = TracingSorter::default().trace(&Sequence::from(values.clone()));
        let expected = sorted_copy(&values);

        for event in &trace {
            prop_assert_eq!(sorted_copy(&event.snapshot), expected.clone());
            prop_assert_eq!(event.snapshot[event.pivot_index], event.pivot_value);
        }
    }

    #[test]
    fn partition_places_pivot(values in prop::collection::vec(0i32..100, 2..25)) {
        let trace = TracingSorter::default().trace(&Sequence::from(values));

        for event in trace.iter().filter(|e| e.kind == EventKind::Partition) {
            let p = event.pivot_index;
            prop_assert!(event.snapshot[event.range_low..p].iter().all(|&v| v < event.pivot_value));
            prop_assert!(event.snapshot[p + 1..=event.range_high].iter().all(|&v| v >= event.pivot_value));
        }
    }

    #[test]
    fn merge_range_is_sorted(values in prop::collection::vec(0i32..100, 2..25), policy in policies()) {
        let trace = TracingSorter::new(policy).trace(&Sequence::from(values));

        for event in trace.iter().filter(|e| e.kind == EventKind::Merge) {
            prop_assert!(event.range_values().windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

// =============================================================================
// Session properties
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Command {
    Forward,
    Backward,
}

fn commands() -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(
        prop_oneof![Just(Command::Forward), Just(Command::Backward)],
        0..60,
    )
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(seed in any::<u64>(), length in 0usize..12, script in commands()) {
        let config = VisualizerConfig {
            sequence: SequenceConfig::new(length, 100),
            seed: Some(seed),
            ..Default::default()
        };
        let mut visualizer = Visualizer::new(config).unwrap();
        let len = visualizer.trace().len();
        let mut model: usize = 0;

        for command in script {
            match command {
                Command::Forward => {
                    visualizer.step_forward();
                    if model + 1 < len {
                        model += 1;
                    }
                }
                Command::Backward => {
                    visualizer.step_backward();
                    model = model.saturating_sub(1);
                }
            }
            prop_assert_eq!(visualizer.cursor(), model);
            prop_assert!(visualizer.cursor() < len.max(1));
        }
    }

    #[test]
    fn seeded_reset_replays(seed in any::<u64>(), resets in 0usize..4) {
        let mut a = Visualizer::new(VisualizerConfig::seeded(seed)).unwrap();
        let mut b = Visualizer::new(VisualizerConfig::seeded(seed)).unwrap();

        for _ in 0..resets {
            a.reset();
            b.reset();
        }

        prop_assert_eq!(a.sequence(), b.sequence());
        prop_assert_eq!(a.trace(), b.trace());
        prop_assert_eq!(&TracingSorter::default().trace(a.sequence()), a.trace());
        prop_assert_eq!(a.cursor(), 0);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn stepping_past_either_end_is_idempotent() {
    let mut visualizer = Visualizer::new(VisualizerConfig::seeded(5)).unwrap();
    visualizer.load(Sequence::from(vec![5, 2, 8, 2, 9, 1]));

    for _ in 0..20 {
        visualizer.step_forward();
    }
    assert_eq!(visualizer.cursor(), 7);
    assert!(!visualizer.view().can_step_forward);

    for _ in 0..20 {
        visualizer.step_backward();
    }
    assert_eq!(visualizer.cursor(), 0);
    assert!(!visualizer.view().can_step_backward);
}

#[test]
fn single_value_run() {
    let outcome = TracingSorter::default().run(&Sequence::from(vec![42]));
    assert!(outcome.trace.is_empty());
    assert_eq!(outcome.sorted.as_slice(), &[42]);
}

#[test]
fn sorted_input_traces_every_call() {
    let trace = TracingSorter::default().trace(&Sequence::from(vec![1, 2, 3, 4, 5]));
    assert_eq!(trace.len(), 8);
    assert_eq!(trace.count(EventKind::Partition), 4);
}

#[test]
fn reference_input_first_partition() {
    let trace = TracingSorter::default().trace(&Sequence::from(vec![5, 2, 8, 2, 9, 1]));
    let first = trace.get(0).unwrap();

    assert_eq!(first.pivot_value, 5);
    assert_eq!((first.range_low, first.range_high), (0, 5));
    assert_eq!(first.snapshot, vec![1, 2, 2, 5, 9, 8]);
}
