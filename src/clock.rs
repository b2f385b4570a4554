//! Time source abstraction
//!
//! The scan only needs a free-running microsecond counter. It may wrap:
//! elapsed time is always computed with wrapping subtraction.
//!
//! Any `Fn() -> u32` is a clock, which keeps hosts and tests simple:
//!
//! ```
//! use core::cell::Cell;
//! use led_matrix::MicrosClock;
//!
//! let now = Cell::new(1_500u32);
//! let clock = || now.get();
//! assert_eq!(clock.now_us(), 1_500);
//! ```

/// Monotonic microsecond counter used to time the scan
pub trait MicrosClock {
    /// Current counter value in microseconds, wrapping at `u32::MAX`
    fn now_us(&self) -> u32;
}

impl<F> MicrosClock for F
where
    F: Fn() -> u32,
{
    fn now_us(&self) -> u32 {
        self()
    }
}
