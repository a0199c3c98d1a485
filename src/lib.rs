//! Text-mode driver for the 0.96" 128x64 OLED sold as the Grove OLED, built around the
//! SSD1308 controller and talked to over I2C.
//!
//! The screen is treated as a grid of 8 rows by 16 columns of 8x8 character cells. Every
//! operation is translated directly into device commands and data writes; nothing is
//! buffered in RAM, so the controller's own column pointer is the cursor.
//!
//! ```rust,no_run
//! use oled96::prelude::*;
//!
//! fn run<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), oled96::Error> {
//!     let mut disp: TextMode<_, _> = Builder::new(Ssd1308_128_64 {})
//!         .connect_i2c(i2c)
//!         .into();
//!
//!     disp.init()?;
//!     disp.set_cursor(3, 2)?;
//!     disp.write_string("Hello world!")?;
//!     disp.set_brightness(128)?;
//!     Ok(())
//! }
//! ```
//!
//! # Crate features
//!
//! - **`blocking`** *(default)*: synchronous API on top of
//!   [`display_interface::WriteOnlyDataCommand`]. Without it the same API is `async` and
//!   drives a [`display_interface::AsyncWriteOnlyDataCommand`].
//! - **`defmt`**: log through [`defmt`].

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

extern crate embedded_hal as hal;

#[cfg(test)]
extern crate std;

pub mod builder;
pub mod command;
pub mod display;
pub mod displays;
pub mod error;
pub mod font;
pub mod interface;
pub mod mode;
pub mod properties;

#[cfg(test)]
mod test_support;

pub use error::Error;

/// Everything needed to bring up a display
pub mod prelude {
    pub use crate::builder::Builder;
    pub use crate::displays::ssd1308::Ssd1308_128_64;
    pub use crate::error::Error;
    pub use crate::interface::I2CDisplayInterface;
    pub use crate::mode::{displaymode::DisplayModeTrait, text::TextMode};
}
