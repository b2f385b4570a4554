//! Coordinate rotation utilities
//!
//! This module maps logical pixel coordinates (what drawing code sees) to
//! physical `(anode, cathode)` line indices (what the scan drives), and back.
//!
//! The pixel buffer is always stored in logical coordinates, so changing the
//! rotation at runtime only changes which lines light up, never the picture.
//!
//! ## Rotation Modes
//!
//! | mode | anode | cathode |
//! |---|---|---|
//! | **Rotate0** | x | y |
//! | **Rotate90** | y | cathodes - 1 - x |
//! | **Rotate180** | anodes - 1 - x | cathodes - 1 - y |
//! | **Rotate270** | anodes - 1 - y | x |
//!
//! ## Example
//!
//! ```
//! use led_matrix::{rotation::to_physical, Dimensions, Rotation};
//!
//! let Ok(dims) = Dimensions::new(8, 8) else { return };
//!
//! // Native orientation: logical x drives the anode
//! assert_eq!(to_physical(2, 5, dims, Rotation::Rotate0), Some((2, 5)));
//!
//! // Upside down: the origin moves to the far corner
//! assert_eq!(to_physical(0, 0, dims, Rotation::Rotate180), Some((7, 7)));
//!
//! // Off-screen pixels have no physical line
//! assert_eq!(to_physical(-1, 0, dims, Rotation::Rotate0), None);
//! ```

use crate::config::{Dimensions, Rotation};

/// Map a logical pixel to its physical `(anode, cathode)` pair
///
/// Returns `None` when `(x, y)` lies outside the logical size of `dims`
/// under `rotation`.
pub fn to_physical(x: i32, y: i32, dims: Dimensions, rotation: Rotation) -> Option<(usize, usize)> {
    let (width, height) = dims.logical_size(rotation);
    let x = usize::try_from(x).ok().filter(|x| *x < width as usize)?;
    let y = usize::try_from(y).ok().filter(|y| *y < height as usize)?;

    let anodes = dims.anodes as usize;
    let cathodes = dims.cathodes as usize;

    let physical = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (y, cathodes - 1 - x),
        Rotation::Rotate180 => (anodes - 1 - x, cathodes - 1 - y),
        Rotation::Rotate270 => (anodes - 1 - y, x),
    };
    Some(physical)
}

/// Map a physical `(anode, cathode)` pair back to its logical pixel
///
/// Inverse of [`to_physical`]. Callers pass `anode < dims.anodes` and
/// `cathode < dims.cathodes`.
pub fn to_logical(anode: usize, cathode: usize, dims: Dimensions, rotation: Rotation) -> (usize, usize) {
    let anodes = dims.anodes as usize;
    let cathodes = dims.cathodes as usize;

    match rotation {
        Rotation::Rotate0 => (anode, cathode),
        Rotation::Rotate90 => (cathodes - 1 - cathode, anode),
        Rotation::Rotate180 => (anodes - 1 - anode, cathodes - 1 - cathode),
        Rotation::Rotate270 => (cathode, anodes - 1 - anode),
    }
}
