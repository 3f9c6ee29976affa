use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::filter::Selection;
use crate::models::Entry;

/// Why a pick was refused. All variants are surfaced to the user as a
/// blocking message; none of them consume a random draw or touch the
/// previously displayed result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickError {
    #[error("Select at least one status!")]
    NoStatuses,

    #[error("Select at least one region!")]
    NoRegions,

    #[error("No games to randomize from.")]
    EmptyPool,

    #[error("A pick is already in progress.")]
    Busy,
}

/// Timing of the slot-machine reveal.
#[derive(Debug, Clone, Copy)]
pub struct SpinSchedule {
    pub duration: Duration,
    pub interval: Duration,
}

impl Default for SpinSchedule {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            interval: Duration::from_millis(100),
        }
    }
}

impl SpinSchedule {
    /// No interim frames; the pick commits immediately.
    pub fn none() -> Self {
        Self {
            duration: Duration::ZERO,
            interval: Duration::from_millis(100),
        }
    }

    /// Number of interim reveal frames.
    pub fn steps(&self) -> u32 {
        let interval = self.interval.as_millis();
        if interval == 0 {
            return 0;
        }
        (self.duration.as_millis() / interval) as u32
    }
}

/// Where the picker is in its lifecycle. A pick requested while another
/// is still animating or resolving is rejected instead of overlapping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    /// Interim frames are being revealed.
    Animating,
    /// A pick is committed but its icon/links are still resolving.
    Resolving,
}

/// Drives the animated random pick.
#[derive(Debug)]
pub struct Picker {
    state: PickerState,
}

impl Picker {
    pub fn new() -> Self {
        Self {
            state: PickerState::Idle,
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    /// Run the reveal animation and commit one uniformly random entry
    /// from the filtered pool.
    ///
    /// Preconditions are checked before any random draw, so a refused
    /// pick leaves the RNG untouched. Each interim frame draws
    /// independently, reports the drawn entry to `on_frame`, then sleeps
    /// for the schedule's interval; the committed draw is independent of
    /// the interim ones, so repeats are possible.
    ///
    /// The picker stays in `Resolving` after a successful pick until
    /// [`Picker::finish`] is called, rejecting overlapping picks.
    pub async fn pick<'a, R, F>(
        &mut self,
        entries: &'a [Entry],
        selection: &Selection,
        schedule: &SpinSchedule,
        rng: &mut R,
        mut on_frame: F,
    ) -> Result<&'a Entry, PickError>
    where
        R: Rng,
        F: FnMut(&Entry),
    {
        if self.state != PickerState::Idle {
            return Err(PickError::Busy);
        }
        if selection.statuses.is_empty() {
            return Err(PickError::NoStatuses);
        }
        if selection.regions.is_empty() {
            return Err(PickError::NoRegions);
        }
        let pool = selection.pool(entries);
        if pool.is_empty() {
            return Err(PickError::EmptyPool);
        }

        self.state = PickerState::Animating;
        for _ in 0..schedule.steps() {
            let interim = pool[rng.gen_range(0..pool.len())];
            on_frame(interim);
            tokio::time::sleep(schedule.interval).await;
        }

        let chosen = pool[rng.gen_range(0..pool.len())];
        debug!(id = %chosen.id, pool = pool.len(), "committed pick");
        self.state = PickerState::Resolving;
        Ok(chosen)
    }

    /// Mark result resolution as settled, allowing the next pick.
    pub fn finish(&mut self) {
        self.state = PickerState::Idle;
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}
