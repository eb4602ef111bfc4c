// Visualizer session
// One run (sequence + trace) at a time, plus the step cursor over it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::cursor::Cursor;
use crate::sequence::{ConfigError, Sequence, SequenceConfig, SequenceGenerator};
use crate::sorting::{PivotPolicy, Trace, TraceEvent, TracingSorter};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Run {expected} is no longer current (current run is {current})")]
    StaleRun { expected: Uuid, current: Uuid },
}

/// Settings for a visualizer session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Length and value range of generated sequences
    #[serde(flatten)]
    pub sequence: SequenceConfig,

    pub pivot_policy: PivotPolicy,

    /// Fixed seed for reproducible sequences; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl VisualizerConfig {
    pub fn seeded(seed: u64) -> Self {
        VisualizerConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

/// A sequence together with the trace of sorting it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub sequence: Sequence,
    pub trace: Trace,
}

impl Run {
    fn record(sorter: &TracingSorter, sequence: Sequence) -> Self {
        let trace = sorter.trace(&sequence);

        if let Err(e) = trace.validate() {
            log::warn!("Recorded trace failed validation: {}", e);
        }

        Run {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            sequence,
            trace,
        }
    }
}

/// Snapshot of the session handed to presentation layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizerView {
    pub run_id: Uuid,
    pub created_at: DateTime<Utc>,

    /// The unsorted input of the current run
    pub initial: Sequence,

    /// Events with index <= cursor
    pub steps: Vec<TraceEvent>,

    pub cursor: usize,
    pub total_steps: usize,
    pub can_step_backward: bool,
    pub can_step_forward: bool,
}

impl VisualizerView {
    /// 1-based number of the current step, 0 when the trace is empty
    pub fn step_number(&self) -> usize {
        if self.total_steps == 0 {
            0
        } else {
            self.cursor + 1
        }
    }
}

/// Interactive quicksort visualizer state
///
/// Regeneration builds the next run completely before swapping it in
/// together with a fresh cursor, so readers never see a mix of two runs.
pub struct Visualizer {
    generator: SequenceGenerator,
    sorter: TracingSorter,
    run: Run,
    cursor: Cursor,
}

impl Visualizer {
    /// Create a session and record its first run
    pub fn new(config: VisualizerConfig) -> Result<Self, SessionError> {
        let mut generator = match config.seed {
            Some(seed) => SequenceGenerator::seeded(config.sequence, seed)?,
            None => SequenceGenerator::new(config.sequence)?,
        };
        let sorter = TracingSorter::new(config.pivot_policy);

        let run = Run::record(&sorter, generator.generate());
        let cursor = Cursor::new(run.trace.len());

        log::info!(
            "Visualizer started: run {} with {} steps",
            run.id,
            run.trace.len()
        );

        Ok(Visualizer {
            generator,
            sorter,
            run,
            cursor,
        })
    }

    /// Replace the current run with a freshly generated sequence
    pub fn reset(&mut self) -> &Run {
        let sequence = self.generator.generate();
        self.load(sequence)
    }

    /// Replace the current run with a trace of `sequence`
    pub fn load(&mut self, sequence: Sequence) -> &Run {
        let run = Run::record(&self.sorter, sequence);
        let cursor = Cursor::new(run.trace.len());

        log::info!(
            "New run {}: [{}] -> {} steps",
            run.id,
            run.sequence,
            run.trace.len()
        );

        self.run = run;
        self.cursor = cursor;
        &self.run
    }

    pub fn step_forward(&mut self) -> bool {
        let moved = self.cursor.step_forward();
        log::debug!("Step forward: {} (moved: {})", self.cursor.index(), moved);
        moved
    }

    pub fn step_backward(&mut self) -> bool {
        let moved = self.cursor.step_backward();
        log::debug!("Step backward: {} (moved: {})", self.cursor.index(), moved);
        moved
    }

    /// Fail if `run_id` names a run other than the current one
    pub fn ensure_current(&self, run_id: Option<Uuid>) -> Result<(), SessionError> {
        match run_id {
            Some(expected) if expected != self.run.id => Err(SessionError::StaleRun {
                expected,
                current: self.run.id,
            }),
            _ => Ok(()),
        }
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn sequence(&self) -> &Sequence {
        &self.run.sequence
    }

    pub fn trace(&self) -> &Trace {
        &self.run.trace
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn policy(&self) -> PivotPolicy {
        self.sorter.policy()
    }

    pub fn sequence_config(&self) -> &SequenceConfig {
        self.generator.config()
    }

    /// Events up to and including the cursor
    pub fn visible_events(&self) -> &[TraceEvent] {
        self.run.trace.up_to(self.cursor.index())
    }

    pub fn view(&self) -> VisualizerView {
        VisualizerView {
            run_id: self.run.id,
            created_at: self.run.created_at,
            initial: self.run.sequence.clone(),
            steps: self.visible_events().to_vec(),
            cursor: self.cursor.index(),
            total_steps: self.run.trace.len(),
            can_step_backward: self.cursor.can_step_backward(),
            can_step_forward: self.cursor.can_step_forward(),
        }
    }
}
