//! Graphics support via embedded-graphics
//!
//! [`LedMatrix`] implements [`DrawTarget`] with [`BinaryColor`], so any
//! embedded-graphics primitive, image or font can be drawn on it. Coordinates
//! are logical (rotation applied) and anything off-screen is clipped, exactly
//! like the matrix's own drawing methods.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
//! use led_matrix::{Builder, Interface, LedMatrix};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let anodes = [MockPin, MockPin, MockPin, MockPin];
//! # let cathodes = [MockPin, MockPin, MockPin, MockPin];
//! let interface = Interface::new(anodes, cathodes);
//! let Ok(mut matrix) = LedMatrix::new(interface, Builder::new().build()) else {
//!     return;
//! };
//!
//! // Diagonal across a 4x4 panel
//! let _ = Line::new(Point::new(0, 0), Point::new(3, 3))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut matrix);
//! assert!(matrix.pixel(2, 2));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::interface::MatrixInterface;
use crate::matrix::LedMatrix;

impl<I> DrawTarget for LedMatrix<I>
where
    I: MatrixInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }
}

impl<I> OriginDimensions for LedMatrix<I>
where
    I: MatrixInterface,
{
    fn size(&self) -> Size {
        let (width, height) = LedMatrix::size(self);
        Size::new(width as u32, height as u32)
    }
}
