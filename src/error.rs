//! Error types for the text-mode driver.

use display_interface::DisplayError;

/// Errors returned by [`TextMode`](crate::mode::text::TextMode) operations.
///
/// Out-of-range rows, columns, brightness and data values are clamped rather than
/// reported, and unprintable characters are drawn with the fallback glyph, so the only
/// failures are a broken bus and a malformed custom glyph.
#[derive(Debug)]
pub enum Error {
    /// Display interface error (wraps I2C and other bus-level failures).
    Display(DisplayError),
    /// A custom glyph was not exactly 8 bytes long.
    InvalidArgument,
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Display(_e) => defmt::write!(f, "Display interface error"),
            Error::InvalidArgument => defmt::write!(f, "Invalid argument"),
        }
    }
}
