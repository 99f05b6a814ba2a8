//! Replays a captured difficulty stream through a fresh colour evaluator.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::difficulty::{ColourEvaluator, DifficultyEvent};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid event: index={index}, reason={reason}")]
    InvalidEvent { index: usize, reason: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub event_count: usize,
    /// Events that produced a non-zero strain.
    pub scored_count: usize,
    pub peak_strain: f64,
    pub total_strain: f64,
    pub strains: Vec<f64>,
}

pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<DifficultyEvent>, ReplayError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let events: Vec<DifficultyEvent> = serde_json::from_str(&raw)?;
    validate_events(&events)?;
    Ok(events)
}

pub fn validate_events(events: &[DifficultyEvent]) -> Result<(), ReplayError> {
    for (index, event) in events.iter().enumerate() {
        if !event.delta_time.is_finite() {
            return Err(ReplayError::InvalidEvent {
                index,
                reason: "delta_time must be finite".to_string(),
            });
        }
        if event.delta_time < 0.0 {
            return Err(ReplayError::InvalidEvent {
                index,
                reason: "delta_time must be >= 0".to_string(),
            });
        }
    }
    Ok(())
}

pub fn replay(events: &[DifficultyEvent]) -> ReplayReport {
    let mut evaluator = ColourEvaluator::new();
    let strains = evaluator.evaluate_all(events);

    let scored_count = strains.iter().filter(|s| **s > 0.0).count();
    let peak_strain = strains.iter().copied().fold(0.0_f64, f64::max);
    let total_strain: f64 = strains.iter().sum();

    tracing::debug!(
        events = events.len(),
        scored = scored_count,
        peak = peak_strain,
        "Replay finished"
    );

    ReplayReport {
        event_count: events.len(),
        scored_count,
        peak_strain,
        total_strain,
        strains,
    }
}

pub fn replay_file(path: impl AsRef<Path>) -> Result<ReplayReport, ReplayError> {
    let events = load_events(path)?;
    Ok(replay(&events))
}
