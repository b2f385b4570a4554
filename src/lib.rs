//! Multiplexed LED Dot-Matrix Driver
//!
//! A scanning driver for LED matrices wired as an anode/cathode grid, with
//! up to 32 lines on each axis.
//!
//! Only one anode (column) is lit at a time. [`LedMatrix::tick`] walks the
//! columns fast enough that persistence of vision shows the whole picture.
//! The driver never blocks: the host loop calls `tick` as often as it can
//! and each call either refreshes the active column or, once the dwell
//! interval has elapsed, moves on to the next one.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Rotation support, applied on the fly without touching the pixel buffer
//! - Clipped drawing for partially visible (scrolling) content
//! - Built-in 5x8 ASCII font
//!
//! ## Usage
//!
//! ```rust
//! use core::cell::Cell;
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use led_matrix::{Builder, Interface, LedMatrix, Rotation};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let now = Cell::new(0u32);
//! # let micros = || now.get();
//! // An 8x8 matrix: 8 anode pins, 8 cathode pins
//! let anodes = [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin];
//! let cathodes = [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin];
//! let interface = Interface::new(anodes, cathodes);
//!
//! let config = Builder::new().rotation(Rotation::Rotate0).dwell_us(2_000).build();
//! let mut matrix = match LedMatrix::new(interface, config) {
//!     Ok(matrix) => matrix,
//!     Err(_) => return,
//! };
//!
//! matrix.set_pixel(2, 2, true);
//! matrix.draw_char('T', 0, 0);
//!
//! // In the main loop, with a free-running microsecond counter
//! let _ = matrix.tick(&micros);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Fixed-capacity pixel storage
pub mod buffer;
/// Time source abstraction
pub mod clock;
/// Matrix configuration types and builder
pub mod config;
/// Error types for the driver
pub mod error;
/// Built-in 5x8 ASCII font
pub mod font;
/// Pin interface abstraction
pub mod interface;
/// Matrix driver: drawing and scanning
pub mod matrix;
/// Coordinate rotation utilities
pub mod rotation;
/// Column scan timing
pub mod scan;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use clock::MicrosClock;
pub use config::{Builder, Config, Dimensions, MAX_ANODES, MAX_CATHODES, Rotation};
pub use error::{BuilderError, Error};
pub use interface::{Interface, InterfaceError, MatrixInterface};
pub use matrix::{CHAR_ADVANCE, LedMatrix};
pub use scan::DEFAULT_DWELL_US;
