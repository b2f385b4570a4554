//! Hardware interface abstraction
//!
//! This module provides the [`MatrixInterface`] trait and the [`Interface`] struct
//! for driving the anode and cathode lines of an LED matrix from GPIO pins.
//!
//! ## Hardware Requirements
//!
//! - One output pin per anode line (physical column)
//! - One output pin per cathode line (physical row)
//!
//! An LED lights when its anode is energized and its cathode conducts. With
//! LEDs wired straight to the MCU that means anode high and cathode low, which
//! is the default. Panels behind transistor drivers often invert one side; see
//! [`Interface::set_anode_active_high`] and [`Interface::set_cathode_active_low`].
//!
//! ## Example
//!
//! ```rust
//! use led_matrix::{Interface, MatrixInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! // 4 anodes and 3 cathodes; the interface owns the pins from here on
//! let mut interface = Interface::new(
//!     [MockPin, MockPin, MockPin, MockPin],
//!     [MockPin, MockPin, MockPin],
//! );
//! assert_eq!(interface.anode_count(), 4);
//! assert_eq!(interface.cathode_count(), 3);
//!
//! // Light the LED at anode 1, cathode 2
//! let _ = interface.set_cathode(2, true);
//! let _ = interface.set_anode(1, true);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::{OutputPin, PinState};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the pin side of an LED matrix
///
/// This trait abstracts over how lines are wired, allowing
/// [`LedMatrix`](crate::LedMatrix) to work with GPIO pins, shift registers,
/// port expanders, or a test double.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implementations
/// take care of polarity: callers only say "energized" or "conducting".
pub trait MatrixInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Number of anode lines
    fn anode_count(&self) -> usize;

    /// Number of cathode lines
    fn cathode_count(&self) -> usize;

    /// Energize or de-energize one anode line
    ///
    /// # Errors
    ///
    /// Returns an error if the index does not exist or the pin write fails.
    fn set_anode(&mut self, index: usize, energized: bool) -> InterfaceResult<(), Self::Error>;

    /// Let one cathode line conduct (pixel on) or block (pixel off)
    ///
    /// # Errors
    ///
    /// Returns an error if the index does not exist or the pin write fails.
    fn set_cathode(&mut self, index: usize, conducting: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the GPIO error type.
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
    /// Line index beyond the configured pins
    NoSuchLine {
        /// Requested index
        index: usize,
    },
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::NoSuchLine { index } => write!(f, "No line at index {index}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// GPIO interface implementation for an LED matrix
///
/// Implements [`MatrixInterface`] for embedded-hal v1.0 [`OutputPin`]s.
/// The pin arrays are moved in, so the matrix has exclusive control of every
/// line for as long as it lives.
///
/// ## Type Parameters
///
/// * `AP` - Anode pin type implementing [`OutputPin`]
/// * `CP` - Cathode pin type implementing [`OutputPin`] with the same error type
/// * `ANODES` - Number of anode pins
/// * `CATHODES` - Number of cathode pins
pub struct Interface<AP, CP, const ANODES: usize, const CATHODES: usize> {
    /// Anode pins, index = physical column
    anodes: [AP; ANODES],
    /// Cathode pins, index = physical row
    cathodes: [CP; CATHODES],
    /// Anode polarity (true = driven high when energized)
    anode_active_high: bool,
    /// Cathode polarity (true = driven low when conducting)
    cathode_active_low: bool,
}

impl<AP, CP, const ANODES: usize, const CATHODES: usize> Interface<AP, CP, ANODES, CATHODES>
where
    AP: OutputPin,
    CP: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `anodes` - Anode pins, in physical column order
    /// * `cathodes` - Cathode pins, in physical row order
    ///
    /// Pin levels are not touched here; [`LedMatrix::new`](crate::LedMatrix::new)
    /// blanks every line.
    pub fn new(anodes: [AP; ANODES], cathodes: [CP; CATHODES]) -> Self {
        Self {
            anodes,
            cathodes,
            anode_active_high: true,
            cathode_active_low: true,
        }
    }

    /// Set anode polarity
    ///
    /// Default is active-high. Set to false when anodes are switched through
    /// PNP transistors or P-channel MOSFETs.
    pub fn set_anode_active_high(&mut self, active_high: bool) -> &mut Self {
        self.anode_active_high = active_high;
        self
    }

    /// Get anode polarity (true = active high)
    pub fn anode_active_high(&self) -> bool {
        self.anode_active_high
    }

    /// Set cathode polarity
    ///
    /// Default is active-low. Set to false when cathodes sink through
    /// NPN transistors or a low-side driver that inverts.
    pub fn set_cathode_active_low(&mut self, active_low: bool) -> &mut Self {
        self.cathode_active_low = active_low;
        self
    }

    /// Get cathode polarity (true = active low)
    pub fn cathode_active_low(&self) -> bool {
        self.cathode_active_low
    }

    /// Give the pins back
    pub fn release(self) -> ([AP; ANODES], [CP; CATHODES]) {
        (self.anodes, self.cathodes)
    }
}

impl<AP, CP, PinErr, const ANODES: usize, const CATHODES: usize> MatrixInterface
    for Interface<AP, CP, ANODES, CATHODES>
where
    AP: OutputPin<Error = PinErr>,
    CP: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn anode_count(&self) -> usize {
        ANODES
    }

    fn cathode_count(&self) -> usize {
        CATHODES
    }

    fn set_anode(&mut self, index: usize, energized: bool) -> InterfaceResult<(), Self::Error> {
        let level = PinState::from(energized == self.anode_active_high);
        self.anodes
            .get_mut(index)
            .ok_or(InterfaceError::NoSuchLine { index })?
            .set_state(level)
            .map_err(InterfaceError::Pin)
    }

    fn set_cathode(&mut self, index: usize, conducting: bool) -> InterfaceResult<(), Self::Error> {
        let level = PinState::from(conducting != self.cathode_active_low);
        self.cathodes
            .get_mut(index)
            .ok_or(InterfaceError::NoSuchLine { index })?
            .set_state(level)
            .map_err(InterfaceError::Pin)
    }
}
