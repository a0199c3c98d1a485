//! I2C transport setup

use display_interface_i2c::I2CInterface;

/// Default 7-bit address of the Grove OLED
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte prefixed to every data write; commands use 0x00
pub const DATA_CONTROL_BYTE: u8 = 0x40;

/// Helper to build an [`I2CInterface`] with the framing the SSD1308 expects
#[derive(Debug, Copy, Clone)]
pub struct I2CDisplayInterface(());

#[cfg(feature = "blocking")]
impl I2CDisplayInterface {
    /// Create an interface at the default address `0x3C`.
    #[allow(clippy::new_ret_no_self)]
    pub fn new<I>(i2c: I) -> I2CInterface<I>
    where
        I: hal::i2c::I2c,
    {
        Self::new_custom_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create an interface at a custom 7-bit address.
    pub fn new_custom_address<I>(i2c: I, address: u8) -> I2CInterface<I>
    where
        I: hal::i2c::I2c,
    {
        I2CInterface::new(i2c, address, DATA_CONTROL_BYTE)
    }
}

// The async bus trait lives in `embedded-hal-async`; `I2CInterface` carries the bound.
#[cfg(not(feature = "blocking"))]
impl I2CDisplayInterface {
    /// Create an interface at the default address `0x3C`.
    #[allow(clippy::new_ret_no_self)]
    pub fn new<I>(i2c: I) -> I2CInterface<I> {
        Self::new_custom_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create an interface at a custom 7-bit address.
    pub fn new_custom_address<I>(i2c: I, address: u8) -> I2CInterface<I> {
        I2CInterface::new(i2c, address, DATA_CONTROL_BYTE)
    }
}
