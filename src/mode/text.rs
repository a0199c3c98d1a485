//! Character cell mode
//!
//! The panel is split into a grid of 8x8 pixel cells: one row per page, and 16 columns
//! of 8 pixels each on the 128 pixel wide SSD1308. Nothing is buffered. Writing a
//! character sends its glyph straight to the controller, whose column pointer then sits
//! on the next cell. Running past the last column wraps wherever the controller's
//! addressing mode takes it.
//!
//! ```rust,no_run
//! use oled96::prelude::*;
//!
//! # fn example<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), oled96::Error> {
//! let mut disp: TextMode<_, _> = Builder::new(Ssd1308_128_64 {}).connect_i2c(i2c).into();
//!
//! disp.init()?;
//! disp.set_cursor(0, 0)?;
//! disp.write_string("Temp:")?;
//! disp.set_cursor(1, 0)?;
//! disp.clear_range(16)?;
//! disp.write_custom_char(&[0x00, 0x06, 0x09, 0x09, 0x06, 0x00, 0x00, 0x00])?;
//! # Ok(())
//! # }
//! ```

#[cfg(not(feature = "blocking"))]
use display_interface::AsyncWriteOnlyDataCommand;
#[cfg(feature = "blocking")]
use display_interface::WriteOnlyDataCommand;

use crate::{
    display::DisplayVariant, error::Error, font, mode::displaymode::DisplayModeTrait,
    properties::DisplayProperties,
};

/// Width of a character cell in pixels
pub const CELL_WIDTH: u8 = 8;

/// Text mode handler
pub struct TextMode<DV, DI> {
    properties: DisplayProperties<DV, DI>,
}

impl<DV, DI> DisplayModeTrait<DV, DI> for TextMode<DV, DI> {
    /// Create new TextMode instance
    fn new(properties: DisplayProperties<DV, DI>) -> Self {
        TextMode { properties }
    }

    /// Release all resources used by TextMode
    fn release(self) -> DisplayProperties<DV, DI> {
        self.properties
    }
}

impl<DV, DI> From<DisplayProperties<DV, DI>> for TextMode<DV, DI> {
    fn from(properties: DisplayProperties<DV, DI>) -> Self {
        TextMode::new(properties)
    }
}

impl<DV, DI> TextMode<DV, DI>
where
    DV: DisplayVariant,
{
    /// Number of character rows (one per page)
    pub fn rows(&self) -> u8 {
        DV::pages()
    }

    /// Number of character columns
    pub fn columns(&self) -> u8 {
        DV::WIDTH / CELL_WIDTH
    }

    /// Whether the next [`flip`](Self::flip) selects the reversed segment remap
    pub fn is_flipped(&self) -> bool {
        self.properties.is_flipped()
    }
}

#[maybe_async_cfg::maybe(
    sync(
        feature = "blocking",
        keep_self,
        idents(AsyncWriteOnlyDataCommand(sync = "WriteOnlyDataCommand"),)
    ),
    async(not(feature = "blocking"), keep_self)
)]
impl<DV, DI> TextMode<DV, DI>
where
    DI: AsyncWriteOnlyDataCommand,
    DV: DisplayVariant,
{
    /// Configure the controller and blank the screen. Call once before anything else;
    /// the driver does not guard against other calls coming first.
    pub async fn init(&mut self) -> Result<(), Error> {
        self.properties.init_text_mode().await?;
        self.clear().await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("oled96: initialised {}x{} text mode", self.columns(), self.rows());

        Ok(())
    }

    /// Blank every cell and move the cursor home.
    ///
    /// The display is switched off while the cells are overwritten so the wipe is not
    /// visible, and switched back on before the cursor is reset.
    pub async fn clear(&mut self) -> Result<(), Error> {
        self.properties.display_on(false).await?;
        for row in 0..self.rows() {
            self.set_cursor(row.into(), 0).await?;
            self.clear_range(self.columns().into()).await?;
        }
        self.properties.display_on(true).await?;
        self.set_cursor(0, 0).await
    }

    /// Write `count` blank cells from the current cursor position.
    ///
    /// There is no upper bound; the controller decides where the pointer goes after
    /// the last cell of the screen.
    pub async fn clear_range(&mut self, count: usize) -> Result<(), Error> {
        for _ in 0..count {
            self.put_char(' ').await?;
        }

        Ok(())
    }

    /// Move the cursor to character cell (`row`, `column`). Both are clamped to the
    /// grid, so negative values select the first row/column and values past the end
    /// select the last.
    pub async fn set_cursor(&mut self, row: i32, column: i32) -> Result<(), Error> {
        let row = row.clamp(0, i32::from(self.rows()) - 1) as u8;
        let column = column.clamp(0, i32::from(self.columns()) - 1) as u8;

        self.properties
            .set_position(row, column * CELL_WIDTH)
            .await?;

        Ok(())
    }

    /// Write `s` from the current cursor position, one cell per `char`. Characters
    /// outside printable ASCII are drawn blank. No line wrapping is done here.
    pub async fn write_string(&mut self, s: &str) -> Result<(), Error> {
        for c in s.chars() {
            self.put_char(c).await?;
        }

        Ok(())
    }

    /// Draw a caller supplied glyph in the cell under the cursor.
    ///
    /// `glyph` holds one byte per pixel column, least significant bit at the top, and
    /// must be exactly 8 bytes long. Anything else is rejected with
    /// [`Error::InvalidArgument`] before touching the bus.
    pub async fn write_custom_char(&mut self, glyph: &[u8]) -> Result<(), Error> {
        let glyph: &[u8; 8] = match glyph.try_into() {
            Ok(glyph) => glyph,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("oled96: custom glyph of {} bytes rejected", glyph.len());

                return Err(Error::InvalidArgument);
            }
        };
        self.properties.draw(glyph).await?;

        Ok(())
    }

    /// White on black
    pub async fn normal_display(&mut self) -> Result<(), Error> {
        self.properties.set_inverted(false).await?;

        Ok(())
    }

    /// Black on white
    pub async fn invert_display(&mut self) -> Result<(), Error> {
        self.properties.set_inverted(true).await?;

        Ok(())
    }

    /// Turn the picture upside down.
    ///
    /// Sends display off, COM scan incrementing, a segment remap picked by the
    /// orientation flag (reversed when set, normal when clear) and display on, then
    /// toggles the flag. Consecutive calls therefore alternate the segment remap while
    /// the scan direction stays incrementing.
    pub async fn flip(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("oled96: flip, reversed remap = {}", self.properties.is_flipped());

        self.properties.flip().await?;

        Ok(())
    }

    /// Set the contrast, clamping `level` to 0..=255
    pub async fn set_brightness(&mut self, level: i32) -> Result<(), Error> {
        let level = level.clamp(0, u8::MAX.into()) as u8;
        self.properties.set_contrast(level).await?;

        Ok(())
    }

    /// Switch the panel on. Display memory is kept while off.
    pub async fn turn_on(&mut self) -> Result<(), Error> {
        self.properties.display_on(true).await?;

        Ok(())
    }

    /// Switch the panel off
    pub async fn turn_off(&mut self) -> Result<(), Error> {
        self.properties.display_on(false).await?;

        Ok(())
    }

    /// Send a raw command byte. Nothing is validated; see the SSD1308 datasheet for the
    /// command set.
    pub async fn send_command(&mut self, cmd: u8) -> Result<(), Error> {
        self.properties.send_command(cmd).await?;

        Ok(())
    }

    /// Send a raw pixel data byte at the current position, clamped to 0..=255. The
    /// column pointer advances by one pixel.
    pub async fn send_data(&mut self, data: i32) -> Result<(), Error> {
        let data = data.clamp(0, u8::MAX.into()) as u8;
        self.properties.send_data(data).await?;

        Ok(())
    }

    async fn put_char(&mut self, c: char) -> Result<(), Error> {
        self.properties.draw(font::glyph(c)).await?;

        Ok(())
    }
}

/// Lets `write!` target the display
#[cfg(feature = "blocking")]
impl<DV, DI> core::fmt::Write for TextMode<DV, DI>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_string(s).map_err(|_| core::fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::displays::ssd1308::Ssd1308_128_64;
    use crate::font::{BASIC_FONT, FALLBACK_GLYPH};
    use crate::test_support::{run, MockInterface, Write};
    use display_interface::DisplayError;
    use std::vec::Vec;

    type Disp = TextMode<Ssd1308_128_64, MockInterface>;

    fn display() -> Disp {
        Builder::new(Ssd1308_128_64 {})
            .connect(MockInterface::new())
            .into()
    }

    fn writes(disp: Disp) -> Vec<Write> {
        disp.release().release().writes
    }

    fn cursor(row: u8, column: u8) -> [Write; 3] {
        let col = column * 8;
        [
            Write::Command(0xB0 + row),
            Write::Command(col & 0x0F),
            Write::Command(0x10 + ((col >> 4) & 0x0F)),
        ]
    }

    fn blanks(count: usize) -> Vec<Write> {
        core::iter::repeat(FALLBACK_GLYPH.map(Write::Data))
            .take(count)
            .flatten()
            .collect()
    }

    fn expected_clear() -> Vec<Write> {
        let mut expected = Vec::new();
        expected.push(Write::Command(0xAE));
        for row in 0..8 {
            expected.extend(cursor(row, 0));
            expected.extend(blanks(16));
        }
        expected.push(Write::Command(0xAF));
        expected.extend(cursor(0, 0));
        expected
    }

    #[test]
    fn grid_size() {
        let disp = display();
        assert_eq!(disp.rows(), 8);
        assert_eq!(disp.columns(), 16);
    }

    #[test]
    fn init_configures_then_clears() {
        let mut disp = display();
        run!(disp.init()).unwrap();

        let mut expected: Vec<Write> = [0xAE, 0x20, 0x00, 0xC8, 0xA1, 0xAF, 0xA6]
            .into_iter()
            .map(Write::Command)
            .collect();
        expected.extend(expected_clear());

        assert_eq!(writes(disp), expected);
    }

    #[test]
    fn clear_blanks_every_cell() {
        let mut disp = display();
        run!(disp.clear()).unwrap();

        let writes = writes(disp);
        assert_eq!(writes, expected_clear());
        assert_eq!(
            writes.iter().filter(|w| matches!(w, Write::Data(_))).count(),
            8 * 16 * 8
        );
    }

    #[test]
    fn clear_is_repeatable() {
        let mut disp = display();
        run!(disp.clear()).unwrap();
        run!(disp.clear()).unwrap();

        let mut expected = expected_clear();
        expected.extend(expected_clear());
        assert_eq!(writes(disp), expected);
    }

    #[test]
    fn clear_range_writes_blanks_only() {
        let mut disp = display();
        run!(disp.clear_range(0)).unwrap();
        run!(disp.clear_range(20)).unwrap();

        assert_eq!(writes(disp), blanks(20));
    }

    #[test]
    fn set_cursor_addresses_cell() {
        let mut disp = display();
        run!(disp.set_cursor(3, 5)).unwrap();

        assert_eq!(
            writes(disp),
            [Write::Command(0xB3), Write::Command(0x08), Write::Command(0x12)]
        );
    }

    #[test]
    fn set_cursor_clamps_both_ends() {
        let mut disp = display();
        run!(disp.set_cursor(8, 16)).unwrap();
        run!(disp.set_cursor(100, 1000)).unwrap();
        run!(disp.set_cursor(-1, -5)).unwrap();
        run!(disp.set_cursor(i32::MIN, i32::MAX)).unwrap();

        let mut expected = Vec::new();
        expected.extend(cursor(7, 15));
        expected.extend(cursor(7, 15));
        expected.extend(cursor(0, 0));
        expected.extend(cursor(0, 15));
        assert_eq!(writes(disp), expected);
    }

    #[test]
    fn every_printable_char_uses_its_glyph() {
        for code in 32u32..=127 {
            let c = char::from_u32(code).unwrap();
            let mut disp = display();
            run!(disp.write_string(c.encode_utf8(&mut [0; 4]))).unwrap();

            let expected: Vec<Write> = BASIC_FONT[(code - 32) as usize]
                .into_iter()
                .map(Write::Data)
                .collect();
            assert_eq!(writes(disp), expected, "glyph for {:?}", c);
        }
    }

    #[test]
    fn unprintable_chars_are_blank() {
        let mut disp = display();
        run!(disp.write_string("\u{0}\t\u{1f}\u{80}é😀")).unwrap();

        assert_eq!(writes(disp), blanks(6));
    }

    #[test]
    fn write_string_sends_glyphs_in_order() {
        let mut disp = display();
        run!(disp.write_string("")).unwrap();
        run!(disp.write_string("AB")).unwrap();

        let expected: Vec<Write> = BASIC_FONT[33]
            .into_iter()
            .chain(BASIC_FONT[34])
            .map(Write::Data)
            .collect();
        assert_eq!(writes(disp), expected);
    }

    #[test]
    fn custom_char_is_sent_verbatim() {
        let glyph = [0x00, 0xFF, 0x81, 0x81, 0x81, 0xFF, 0x00, 0x00];
        let mut disp = display();
        run!(disp.write_custom_char(&glyph)).unwrap();

        assert_eq!(writes(disp), glyph.map(Write::Data));
    }

    #[test]
    fn custom_char_must_be_eight_bytes() {
        let mut disp = display();

        assert!(matches!(
            run!(disp.write_custom_char(&[0xFF; 7])),
            Err(Error::InvalidArgument)
        ));
        assert!(matches!(
            run!(disp.write_custom_char(&[0xFF; 9])),
            Err(Error::InvalidArgument)
        ));
        assert!(matches!(
            run!(disp.write_custom_char(&[])),
            Err(Error::InvalidArgument)
        ));
        assert!(writes(disp).is_empty());
    }

    #[test]
    fn invert_and_normal() {
        let mut disp = display();
        run!(disp.invert_display()).unwrap();
        run!(disp.normal_display()).unwrap();

        assert_eq!(writes(disp), [Write::Command(0xA7), Write::Command(0xA6)]);
    }

    #[test]
    fn power() {
        let mut disp = display();
        run!(disp.turn_off()).unwrap();
        run!(disp.turn_on()).unwrap();

        assert_eq!(writes(disp), [Write::Command(0xAE), Write::Command(0xAF)]);
    }

    #[test]
    fn flip_alternates() {
        let mut disp = display();
        run!(disp.flip()).unwrap();
        assert!(disp.is_flipped());
        run!(disp.flip()).unwrap();
        assert!(!disp.is_flipped());

        let expected: Vec<Write> = [0xAE, 0xC0, 0xA0, 0xAF, 0xAE, 0xC0, 0xA1, 0xAF]
            .into_iter()
            .map(Write::Command)
            .collect();
        assert_eq!(writes(disp), expected);
    }

    #[test]
    fn brightness_is_clamped() {
        let mut disp = display();
        run!(disp.set_brightness(-20)).unwrap();
        run!(disp.set_brightness(0)).unwrap();
        run!(disp.set_brightness(128)).unwrap();
        run!(disp.set_brightness(255)).unwrap();
        run!(disp.set_brightness(256)).unwrap();

        let expected: Vec<Write> = [0x81, 0, 0x81, 0, 0x81, 128, 0x81, 255, 0x81, 255]
            .into_iter()
            .map(Write::Command)
            .collect();
        assert_eq!(writes(disp), expected);
    }

    #[test]
    fn raw_passthrough() {
        let mut disp = display();
        run!(disp.send_command(0x2E)).unwrap();
        run!(disp.send_data(0x5A)).unwrap();
        run!(disp.send_data(-1)).unwrap();
        run!(disp.send_data(300)).unwrap();

        assert_eq!(
            writes(disp),
            [
                Write::Command(0x2E),
                Write::Data(0x5A),
                Write::Data(0x00),
                Write::Data(0xFF),
            ]
        );
    }

    #[test]
    fn bus_errors_propagate() {
        let mut disp: Disp = Builder::new(Ssd1308_128_64 {})
            .connect(MockInterface::failing_after(10))
            .into();

        let result = run!(disp.write_string("AB"));
        assert!(matches!(
            result,
            Err(Error::Display(DisplayError::BusWriteError))
        ));
        // 'A' and the first two columns of 'B' went out
        assert_eq!(writes(disp).len(), 10);
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn fmt_write() {
        use core::fmt::Write as _;

        let mut disp = display();
        write!(disp, "{}", 7).unwrap();

        let expected: Vec<Write> = BASIC_FONT[usize::from(b'7' - 32)]
            .into_iter()
            .map(Write::Data)
            .collect();
        assert_eq!(writes(disp), expected);
    }
}
