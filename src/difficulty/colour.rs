//! Colour strain: how hard the local centre/rim alternation is to play.
//!
//! Runs of same-coloured hits ("mono runs") are tracked as they complete.
//! A colour change scores once at least two runs are known, is suppressed
//! when the two latest runs add up to an even note count, and is scaled
//! down when the latest run lengths repeat an earlier stretch of history.

use crate::constants::{
    MAX_PATTERN_GAP_MS, MAX_REPETITION_WINDOW, MIN_REPETITION_WINDOW, MIN_RUNS_FOR_STRAIN,
    REPETITION_PENALTY_CAP, REPETITION_PENALTY_PER_NOTE, SAME_PARITY_PENALTY,
};
use crate::difficulty::history::RunHistory;
use crate::difficulty::types::{DifficultyEvent, HitType};

/// Per-stream colour evaluator. Build one per analysed stream and feed it
/// every event in order.
#[derive(Debug, Clone)]
pub struct ColourEvaluator {
    previous_hit_type: Option<HitType>,
    current_run_length: u32,
    history: RunHistory,
}

impl Default for ColourEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColourEvaluator {
    pub fn new() -> Self {
        Self {
            previous_hit_type: None,
            current_run_length: 1,
            history: RunHistory::new(),
        }
    }

    #[cfg(test)]
    fn with_run_length(current_run_length: u32) -> Self {
        Self {
            current_run_length,
            ..Self::new()
        }
    }

    pub fn previous_hit_type(&self) -> Option<HitType> {
        self.previous_hit_type
    }

    pub fn current_run_length(&self) -> u32 {
        self.current_run_length
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    pub fn evaluate(&mut self, event: &DifficultyEvent) -> f64 {
        if !(event.follows_hit() && event.delta_time < MAX_PATTERN_GAP_MS) {
            self.previous_hit_type = None;
            return 0.0;
        }

        let mut strain = 0.0;

        match (event.hit_type, self.previous_hit_type) {
            (Some(current), Some(previous)) if current != previous => {
                strain = 1.0;

                if self.history.len() < MIN_RUNS_FOR_STRAIN {
                    strain = 0.0;
                } else if let Some(last_run) = self.history.last() {
                    // The last finished run is the other colour, so an even
                    // total means both runs share parity.
                    if (u64::from(last_run) + u64::from(self.current_run_length)) % 2 == 0 {
                        strain *= SAME_PARITY_PENALTY;
                    }
                }

                strain *= self.repetition_penalties();
                tracing::trace!(
                    run_length = self.current_run_length,
                    strain,
                    "colour change"
                );
                self.current_run_length = 1;
            }
            _ => {
                self.current_run_length = self.current_run_length.saturating_add(1);
            }
        }

        self.previous_hit_type = event.hit_type;
        strain
    }

    /// Evaluates a whole ordered stream, one strain per event.
    pub fn evaluate_all<'a, I>(&mut self, events: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a DifficultyEvent>,
    {
        events.into_iter().map(|event| self.evaluate(event)).collect()
    }

    /// Records the run that just ended and returns the penalty for
    /// repeating earlier run lengths.
    fn repetition_penalties(&mut self) -> f64 {
        let mut penalty = 1.0;

        self.history.push(self.current_run_length);

        for window in MIN_REPETITION_WINDOW..=MAX_REPETITION_WINDOW {
            if let Some(start) = self.history.repeated_window_start(window) {
                let notes_since = self.history.sum_from(start);
                tracing::trace!(window, start, notes_since, "run lengths repeated");
                penalty *= repetition_penalty(notes_since);
            }
        }

        penalty
    }
}

fn repetition_penalty(notes_since: u64) -> f64 {
    (REPETITION_PENALTY_PER_NOTE * notes_since as f64).min(REPETITION_PENALTY_CAP)
}
