//! Matrix configuration types and builder

pub use crate::error::{BuilderError, MAX_ANODES, MAX_CATHODES};
use crate::scan::DEFAULT_DWELL_US;

/// Physical matrix dimensions
///
/// Counted in wired lines, independent of rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of anode lines (physical columns, scanned one at a time)
    pub anodes: u16,
    /// Number of cathode lines (physical rows, driven in parallel)
    pub cathodes: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - anodes == 0 or anodes > MAX_ANODES
    /// - cathodes == 0 or cathodes > MAX_CATHODES
    pub fn new(anodes: u16, cathodes: u16) -> Result<Self, BuilderError> {
        if anodes == 0 || anodes > MAX_ANODES {
            return Err(BuilderError::InvalidDimensions { anodes, cathodes });
        }
        if cathodes == 0 || cathodes > MAX_CATHODES {
            return Err(BuilderError::InvalidDimensions { anodes, cathodes });
        }
        Ok(Self { anodes, cathodes })
    }

    /// Logical `(width, height)` seen by drawing code under `rotation`
    pub fn logical_size(&self, rotation: Rotation) -> (u16, u16) {
        match rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => (self.anodes, self.cathodes),
            Rotation::Rotate90 | Rotation::Rotate270 => (self.cathodes, self.anodes),
        }
    }
}

/// Matrix rotation relative to the wiring
///
/// At `Rotate0` logical x selects the anode and logical y the cathode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Matrix configuration
///
/// Use `Builder` to create a Config. Both fields can also be changed at
/// runtime through [`LedMatrix`](crate::LedMatrix).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Matrix rotation
    pub rotation: Rotation,
    /// Microseconds each anode stays energized before the scan moves on
    pub dwell_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing matrix configuration
///
/// # Example
///
/// ```
/// use led_matrix::{Builder, Rotation};
///
/// let config = Builder::new()
///     .rotation(Rotation::Rotate180)
///     .dwell_us(1_000)
///     .build();
/// assert_eq!(config.rotation, Rotation::Rotate180);
/// assert_eq!(config.dwell_us, 1_000);
/// ```
#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    rotation: Rotation,
    dwell_us: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            rotation: Rotation::Rotate0,
            dwell_us: DEFAULT_DWELL_US,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set matrix rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the per-anode dwell interval in microseconds
    ///
    /// Longer dwell means brighter columns but more visible flicker. Zero
    /// advances the scan on every call.
    pub fn dwell_us(mut self, micros: u32) -> Self {
        self.dwell_us = micros;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            rotation: self.rotation,
            dwell_us: self.dwell_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_accepts_full_capacity() {
        let dims = Dimensions::new(MAX_ANODES, MAX_CATHODES).unwrap();
        assert_eq!(dims.anodes, 32);
        assert_eq!(dims.cathodes, 32);
    }

    #[test]
    fn test_dimensions_rejects_zero() {
        assert_eq!(
            Dimensions::new(0, 8),
            Err(BuilderError::InvalidDimensions {
                anodes: 0,
                cathodes: 8
            })
        );
        assert!(Dimensions::new(8, 0).is_err());
    }

    #[test]
    fn test_dimensions_rejects_over_capacity() {
        assert!(Dimensions::new(33, 8).is_err());
        assert!(Dimensions::new(8, 33).is_err());
    }

    #[test]
    fn test_logical_size_swaps_axes_for_quarter_turns() {
        let dims = Dimensions::new(12, 8).unwrap();
        assert_eq!(dims.logical_size(Rotation::Rotate0), (12, 8));
        assert_eq!(dims.logical_size(Rotation::Rotate90), (8, 12));
        assert_eq!(dims.logical_size(Rotation::Rotate180), (12, 8));
        assert_eq!(dims.logical_size(Rotation::Rotate270), (8, 12));
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build();
        assert_eq!(config.rotation, Rotation::Rotate0);
        assert_eq!(config.dwell_us, 2_000);
        assert_eq!(Config::default(), config);
    }
}
