//! Column scan timing
//!
//! [`ScanState`] decides, for every poll of the host loop, whether the
//! active anode keeps its slot or hands over to the next one. It never
//! touches pins; [`LedMatrix`](crate::LedMatrix) applies the returned
//! [`ScanStep`].
//!
//! ```
//! use led_matrix::scan::{ScanState, ScanStep};
//!
//! let mut scan = ScanState::new(2_000);
//! assert_eq!(scan.poll(0, 3), ScanStep::Hold { anode: 0 });
//! assert_eq!(scan.poll(1_999, 3), ScanStep::Hold { anode: 0 });
//! assert_eq!(scan.poll(2_000, 3), ScanStep::Advance { from: 0, to: 1 });
//! ```

/// Default time each anode stays energized, in microseconds
pub const DEFAULT_DWELL_US: u32 = 2_000;

/// What the pins should do on this poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStep {
    /// Keep `anode` energized and refresh its cathodes
    Hold {
        /// Active anode index
        anode: usize,
    },
    /// De-energize `from`, then drive the cathodes for `to` and energize it
    Advance {
        /// Anode that was active
        from: usize,
        /// Anode that becomes active
        to: usize,
    },
}

/// Scan cursor and dwell timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanState {
    cursor: usize,
    last_switch_us: Option<u32>,
    dwell_us: u32,
}

impl ScanState {
    /// Start at anode 0 with the given dwell interval
    pub const fn new(dwell_us: u32) -> Self {
        Self {
            cursor: 0,
            last_switch_us: None,
            dwell_us,
        }
    }

    /// Anode currently being driven
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Dwell interval in microseconds
    pub fn dwell_us(&self) -> u32 {
        self.dwell_us
    }

    /// Change the dwell interval; applies from the next poll
    pub fn set_dwell_us(&mut self, dwell_us: u32) {
        self.dwell_us = dwell_us;
    }

    /// Decide what `now_us` calls for, without changing any state
    ///
    /// The first poll only starts the timer. Afterwards the cursor moves
    /// once every time at least `dwell_us` has elapsed since the last move,
    /// wrapping after `anode_count` moves. Extra polls inside a dwell
    /// window return [`ScanStep::Hold`].
    pub fn next_step(&self, now_us: u32, anode_count: usize) -> ScanStep {
        let hold = ScanStep::Hold {
            anode: self.cursor,
        };
        let Some(last) = self.last_switch_us else {
            return hold;
        };
        if now_us.wrapping_sub(last) < self.dwell_us {
            return hold;
        }

        let from = self.cursor;
        let to = match from.checked_add(1) {
            Some(next) if next < anode_count => next,
            _ => 0,
        };
        ScanStep::Advance { from, to }
    }

    /// Record that `step` has taken effect at `now_us`
    ///
    /// Commit an [`ScanStep::Advance`] only once the old anode is off, so
    /// a failed switch is retried from the same cursor.
    pub fn commit(&mut self, step: ScanStep, now_us: u32) {
        match step {
            ScanStep::Hold { .. } => {
                if self.last_switch_us.is_none() {
                    self.last_switch_us = Some(now_us);
                }
            }
            ScanStep::Advance { to, .. } => {
                self.cursor = to;
                self.last_switch_us = Some(now_us);
            }
        }
    }

    /// Decide and commit in one go
    pub fn poll(&mut self, now_us: u32, anode_count: usize) -> ScanStep {
        let step = self.next_step(now_us, anode_count);
        self.commit(step, now_us);
        step
    }
}
