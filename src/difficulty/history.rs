//! Bounded history of completed run lengths.
//!
//! Stored as a ring buffer over a fixed array, so the capacity bound holds
//! by construction: pushing onto a full history overwrites the oldest run.

use crate::constants::MONO_HISTORY_CAPACITY;

#[derive(Debug, Clone)]
pub struct RunHistory {
    runs: [u32; MONO_HISTORY_CAPACITY],
    head: usize,
    len: usize,
}

impl Default for RunHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Equal when the held runs match, wherever the ring buffer currently starts.
impl PartialEq for RunHistory {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for RunHistory {}

impl RunHistory {
    pub const fn new() -> Self {
        Self {
            runs: [0; MONO_HISTORY_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends the most recent run, dropping the oldest one when full.
    pub fn push(&mut self, run_length: u32) {
        if self.len < MONO_HISTORY_CAPACITY {
            self.runs[(self.head + self.len) % MONO_HISTORY_CAPACITY] = run_length;
            self.len += 1;
        } else {
            self.runs[self.head] = run_length;
            self.head = (self.head + 1) % MONO_HISTORY_CAPACITY;
        }
    }

    /// Run at `index`, counted from the oldest entry.
    pub fn get(&self, index: usize) -> Option<u32> {
        if index < self.len {
            Some(self.runs[(self.head + index) % MONO_HISTORY_CAPACITY])
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<u32> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).map(move |i| self.runs[(self.head + i) % MONO_HISTORY_CAPACITY])
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// Total notes in the runs from `start` through the most recent one.
    pub fn sum_from(&self, start: usize) -> u64 {
        self.iter().skip(start).map(u64::from).sum()
    }

    /// Finds the most recent earlier position whose `window` runs equal the
    /// last `window` runs. Candidates are scanned from newest to oldest and
    /// may overlap the tail.
    pub fn repeated_window_start(&self, window: usize) -> Option<usize> {
        if window == 0 || self.len <= window {
            return None;
        }
        let tail = self.len - window;
        (0..tail)
            .rev()
            .find(|&start| (0..window).all(|i| self.get(start + i) == self.get(tail + i)))
    }
}
