//! Pixel buffer, drawing primitives and the column scan

use log::{debug, trace};

use crate::buffer::FrameBuffer;
use crate::clock::MicrosClock;
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::interface::MatrixInterface;
use crate::rotation::{to_logical, to_physical};
use crate::scan::{ScanState, ScanStep};

type MatrixResult<I> = core::result::Result<(), Error<I>>;

/// Horizontal advance of one character drawn by [`LedMatrix::draw_text`]
pub const CHAR_ADVANCE: i32 = GLYPH_WIDTH as i32 + 1;

/// Multiplexed LED matrix driver
///
/// Owns the pin interface and a logical pixel buffer. Drawing methods only
/// touch the buffer; [`tick`](Self::tick) (or [`scan_at`](Self::scan_at))
/// must be called from the host loop, much more often than
/// `dwell_us * anode_count`, to actually light the LEDs one anode at a time.
///
/// Nothing here blocks or locks. Drawing and scanning from different
/// execution contexts needs external synchronization, such as a mutex
/// around the whole matrix.
pub struct LedMatrix<I>
where
    I: MatrixInterface,
{
    /// Pin interface
    interface: I,
    /// Physical line counts
    dimensions: Dimensions,
    /// Current rotation
    rotation: Rotation,
    /// Desired pixel state, logical coordinates
    buffer: FrameBuffer,
    /// Scan cursor and dwell timer
    scan: ScanState,
}

impl<I> LedMatrix<I>
where
    I: MatrixInterface,
{
    /// Create a new matrix and blank every line
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` if the interface has no anodes, no
    /// cathodes, or more lines than the pixel buffer can address, and
    /// `Error::Interface` if blanking a pin fails.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        let anodes = interface.anode_count();
        let cathodes = interface.cathode_count();
        let invalid = || Error::InvalidDimensions { anodes, cathodes };
        let dimensions = Dimensions::new(
            u16::try_from(anodes).map_err(|_| invalid())?,
            u16::try_from(cathodes).map_err(|_| invalid())?,
        )
        .map_err(|_| invalid())?;

        let mut matrix = Self {
            interface,
            dimensions,
            rotation: config.rotation,
            buffer: FrameBuffer::new(),
            scan: ScanState::new(config.dwell_us),
        };
        matrix.blank()?;

        debug!(
            "led matrix: {} anodes x {} cathodes, {:?}, dwell {}us",
            anodes, cathodes, config.rotation, config.dwell_us
        );
        Ok(matrix)
    }

    /// Physical line counts
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Logical `(width, height)` under the current rotation
    pub fn size(&self) -> (u16, u16) {
        self.dimensions.logical_size(self.rotation)
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Change the rotation
    ///
    /// The buffer is not touched; the next scan step lights the same logical
    /// picture through the new mapping.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        debug!("led matrix rotation {:?} -> {:?}", self.rotation, rotation);
        self.rotation = rotation;
    }

    /// Per-anode dwell interval in microseconds
    pub fn dwell_us(&self) -> u32 {
        self.scan.dwell_us()
    }

    /// Change the per-anode dwell interval
    pub fn set_dwell_us(&mut self, micros: u32) {
        debug!("led matrix dwell {}us -> {}us", self.scan.dwell_us(), micros);
        self.scan.set_dwell_us(micros);
    }

    /// Current settings as a [`Config`]
    pub fn config(&self) -> Config {
        Config {
            rotation: self.rotation,
            dwell_us: self.scan.dwell_us(),
        }
    }

    /// Anode currently being driven by the scan
    pub fn active_anode(&self) -> usize {
        self.scan.cursor()
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Turn a pixel on or off
    ///
    /// Pixels outside the logical size are ignored, so images and text can be
    /// drawn partially off-screen.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if to_physical(x, y, self.dimensions, self.rotation).is_none() {
            return;
        }
        // In bounds implies both are non-negative
        self.buffer.set(x as usize, y as usize, on);
    }

    /// Read back a pixel; off-screen pixels read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if to_physical(x, y, self.dimensions, self.rotation).is_none() {
            return false;
        }
        self.buffer.get(x as usize, y as usize)
    }

    /// Whether the LED at a physical `(anode, cathode)` position should be lit
    ///
    /// This is exactly what the scan writes to the cathode pins.
    pub fn physical_pixel(&self, anode: usize, cathode: usize) -> bool {
        if anode >= self.dimensions.anodes as usize || cathode >= self.dimensions.cathodes as usize
        {
            return false;
        }
        let (x, y) = to_logical(anode, cathode, self.dimensions, self.rotation);
        self.buffer.get(x, y)
    }

    /// Draw a boolean image with its top-left corner at `(x, y)`
    ///
    /// `data` is row-major, `width` cells per row, `height` rows. Cells that
    /// fall outside the matrix are dropped one by one; a short `data` slice
    /// just draws fewer rows.
    pub fn draw(&mut self, data: &[bool], x: i32, y: i32, width: usize, height: usize) {
        if width == 0 {
            return;
        }
        for (row, cells) in (0..).zip(data.chunks(width).take(height)) {
            for (col, on) in (0..).zip(cells) {
                self.set_pixel(x.saturating_add(col), y.saturating_add(row), *on);
            }
        }
    }

    /// Draw the eight bits of `data`, most significant bit first
    ///
    /// Bits run along the x axis from `(x, y)` when `horizontal`, otherwise
    /// down the y axis. Set bits turn pixels on, clear bits turn them off.
    pub fn draw_byte(&mut self, data: u8, x: i32, y: i32, horizontal: bool) {
        for bit in 0..8i32 {
            let on = data & (0x80 >> bit) != 0;
            if horizontal {
                self.set_pixel(x.saturating_add(bit), y, on);
            } else {
                self.set_pixel(x, y.saturating_add(bit), on);
            }
        }
    }

    /// Draw consecutive bytes with [`draw_byte`](Self::draw_byte)
    ///
    /// With `horizontal` each byte is a row and rows stack downwards;
    /// otherwise each byte is a column and columns stack to the right, which
    /// is the layout of [`font::ASCII_5X8`](crate::font::ASCII_5X8).
    pub fn draw_bytes(&mut self, data: &[u8], x: i32, y: i32, horizontal: bool) {
        for (offset, byte) in (0..).zip(data) {
            if horizontal {
                self.draw_byte(*byte, x, y.saturating_add(offset), true);
            } else {
                self.draw_byte(*byte, x.saturating_add(offset), y, false);
            }
        }
    }

    /// Draw one character from the built-in font at `(x, y)`
    ///
    /// Returns `false`, drawing nothing, if the font has no glyph for `c`.
    pub fn draw_char(&mut self, c: char, x: i32, y: i32) -> bool {
        match glyph(c) {
            Some(columns) => {
                self.draw_bytes(columns, x, y, false);
                true
            }
            None => false,
        }
    }

    /// Draw a line of text starting at `(x, y)` and return its width
    ///
    /// Every character takes [`CHAR_ADVANCE`] columns: the glyph plus one
    /// blank column. Characters without a glyph are drawn as spaces. Move `x`
    /// left each frame to scroll; the text is gone once `x <= -width`.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32) -> i32 {
        let mut cursor = x;
        for c in text.chars() {
            if !self.draw_char(c, cursor, y) {
                self.draw_char(' ', cursor, y);
            }
            let spacing = cursor.saturating_add(GLYPH_WIDTH as i32);
            for row in 0..GLYPH_HEIGHT as i32 {
                self.set_pixel(spacing, y.saturating_add(row), false);
            }
            cursor = cursor.saturating_add(CHAR_ADVANCE);
        }
        cursor.saturating_sub(x)
    }

    /// Run one scan step, reading the time from `clock`
    ///
    /// Call this from the host loop as often as possible. Between column
    /// changes it re-asserts the active column, so calling it too often is
    /// harmless; calling it too rarely shows up as flicker.
    pub fn tick<C: MicrosClock>(&mut self, clock: &C) -> MatrixResult<I> {
        self.scan_at(clock.now_us())
    }

    /// Run one scan step for the given microsecond timestamp
    ///
    /// At most one anode is energized at any time: on a column change the old
    /// anode is switched off before the new column's cathodes are written.
    pub fn scan_at(&mut self, now_us: u32) -> MatrixResult<I> {
        let anodes = self.dimensions.anodes as usize;
        let step = self.scan.next_step(now_us, anodes);
        match step {
            ScanStep::Hold { anode } => {
                self.scan.commit(step, now_us);
                self.drive_cathodes(anode)?;
                self.set_anode(anode, true)
            }
            ScanStep::Advance { from, to } => {
                trace!("led matrix scan: anode {} -> {}", from, to);
                // Cursor stays on `from` until it is off
                self.set_anode(from, false)?;
                self.scan.commit(step, now_us);
                self.drive_cathodes(to)?;
                self.set_anode(to, true)
            }
        }
    }

    /// Switch every anode off and every cathode to non-conducting
    ///
    /// The buffer and scan position are kept; the next scan step lights the
    /// active column again. Useful before the host stops calling
    /// [`tick`](Self::tick), since pins stay latched at their last level.
    pub fn blank(&mut self) -> MatrixResult<I> {
        for anode in 0..self.dimensions.anodes as usize {
            self.set_anode(anode, false)?;
        }
        for cathode in 0..self.dimensions.cathodes as usize {
            self.interface
                .set_cathode(cathode, false)
                .map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Hand back the pin interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Write every cathode for `anode` from the buffer
    fn drive_cathodes(&mut self, anode: usize) -> MatrixResult<I> {
        for cathode in 0..self.dimensions.cathodes as usize {
            let on = self.physical_pixel(anode, cathode);
            self.interface
                .set_cathode(cathode, on)
                .map_err(Error::Interface)?;
        }
        Ok(())
    }

    fn set_anode(&mut self, anode: usize, energized: bool) -> MatrixResult<I> {
        self.interface
            .set_anode(anode, energized)
            .map_err(Error::Interface)
    }
}
