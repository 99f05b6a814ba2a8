/// Number of completed runs kept in the run-length history
pub const MONO_HISTORY_CAPACITY: usize = 5;

/// Longest run-length window compared when searching for repetitions.
/// Tied to the history capacity: a larger history enables longer windows.
pub const MAX_REPETITION_WINDOW: usize = MONO_HISTORY_CAPACITY / 2;

/// Shortest run-length window compared when searching for repetitions
pub const MIN_REPETITION_WINDOW: usize = 2;

/// Gap (milliseconds) at or above which an event breaks the pattern context
pub const MAX_PATTERN_GAP_MS: f64 = 1000.0;

/// Completed runs needed before a colour change can score
pub const MIN_RUNS_FOR_STRAIN: usize = 2;

/// Strain multiplier when the two most recent runs sum to an even note count
pub const SAME_PARITY_PENALTY: f64 = 0.0;

/// Per-note coefficient of the repetition penalty
pub const REPETITION_PENALTY_PER_NOTE: f64 = 0.032;

/// Upper bound of the repetition penalty
pub const REPETITION_PENALTY_CAP: f64 = 1.0;

/// Strain scaling published to the downstream aggregator
pub const COLOUR_SKILL_MULTIPLIER: f64 = 1.0;

/// Per-second strain decay base published to the downstream aggregator
pub const COLOUR_STRAIN_DECAY_BASE: f64 = 0.4;
