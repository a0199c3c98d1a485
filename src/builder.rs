//! Interface factory
//!
//! ```rust,no_run
//! use oled96::prelude::*;
//!
//! # fn example<I2C: embedded_hal::i2c::I2c>(i2c: I2C) {
//! // Default address 0x3C
//! let disp: TextMode<_, _> = Builder::new(Ssd1308_128_64 {}).connect_i2c(i2c).into();
//! # }
//! ```
//!
//! Any [`display_interface`] transport can be used instead through
//! [`Builder::connect`].

use display_interface_i2c::I2CInterface;

use crate::{interface::I2CDisplayInterface, properties::DisplayProperties};

/// Builder struct. Driver options and interface are set using its methods.
#[derive(Clone, Copy)]
pub struct Builder<DV> {
    variant: DV,
}

impl<DV> Builder<DV> {
    /// Create new builder for the given display variant
    pub fn new(variant: DV) -> Self {
        Self { variant }
    }

    /// Finish the builder and use the given transport to communicate with the display
    pub fn connect<DI>(self, iface: DI) -> DisplayProperties<DV, DI> {
        DisplayProperties::new(self.variant, iface)
    }

    /// Finish the builder with an I2C bus, talking to the display at address `0x3C`
    #[cfg(feature = "blocking")]
    pub fn connect_i2c<I2C>(self, i2c: I2C) -> DisplayProperties<DV, I2CInterface<I2C>>
    where
        I2C: hal::i2c::I2c,
    {
        self.connect(I2CDisplayInterface::new(i2c))
    }

    /// Finish the builder with an I2C bus, talking to the display at address `0x3C`
    #[cfg(not(feature = "blocking"))]
    pub fn connect_i2c<I2C>(self, i2c: I2C) -> DisplayProperties<DV, I2CInterface<I2C>> {
        self.connect(I2CDisplayInterface::new(i2c))
    }
}
