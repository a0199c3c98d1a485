//! Display commands

#[cfg(not(feature = "blocking"))]
use display_interface::AsyncWriteOnlyDataCommand;
#[cfg(feature = "blocking")]
use display_interface::WriteOnlyDataCommand;

use display_interface::{DataFormat, DisplayError};

/// Raw command bytes understood by the SSD1308
#[allow(missing_docs)]
pub mod opcode {
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SEG_REMAP_NORMAL: u8 = 0xA0;
    pub const SEG_REMAP_REVERSE: u8 = 0xA1;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
}

/// Memory addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    /// Column pointer wraps into the next page at the end of a page
    Horizontal = 0x00,
    /// Page pointer advances first
    Vertical = 0x01,
    /// Column pointer wraps within the current page
    Page = 0x02,
}

/// SSD1308 commands used by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set contrast. Higher number is higher contrast. Default = 0x7F
    Contrast(u8),
    /// Invert display (black on white)
    Invert(bool),
    /// Turn display on or off
    DisplayOn(bool),
    /// Set the memory addressing mode
    AddressMode(AddrMode),
    /// Lower nibble of the column start address. Range 0-15
    ColumnAddressLow(u8),
    /// Upper nibble of the column start address. Range 0-15
    ColumnAddressHigh(u8),
    /// Select the page the next data byte lands in. Range 0-7
    PageAddress(u8),
    /// Reverse columns from 127-0
    SegmentRemap(bool),
    /// Scan from COM[n-1] to COM0 (where N is mux ratio)
    ReverseComDir(bool),
}

#[maybe_async_cfg::maybe(
    sync(
        feature = "blocking",
        keep_self,
        idents(AsyncWriteOnlyDataCommand(sync = "WriteOnlyDataCommand"),)
    ),
    async(not(feature = "blocking"), keep_self)
)]
impl Command {
    /// Send command to display.
    ///
    /// Parameter bytes go out as separate command writes, one transaction per byte.
    pub async fn send<DI>(self, iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: AsyncWriteOnlyDataCommand,
    {
        let (data, len) = self.encode();

        for byte in &data[..len] {
            iface
                .send_commands(DataFormat::U8(core::slice::from_ref(byte)))
                .await?;
        }

        Ok(())
    }
}

impl Command {
    fn encode(self) -> ([u8; 2], usize) {
        use opcode::*;

        match self {
            Command::Contrast(val) => ([SET_CONTRAST, val], 2),
            Command::Invert(inv) => ([if inv { INVERT_DISPLAY } else { NORMAL_DISPLAY }, 0], 1),
            Command::DisplayOn(on) => ([if on { DISPLAY_ON } else { DISPLAY_OFF }, 0], 1),
            Command::AddressMode(mode) => ([MEMORY_MODE, mode as u8], 2),
            Command::ColumnAddressLow(addr) => ([SET_LOW_COLUMN | (0xF & addr), 0], 1),
            Command::ColumnAddressHigh(addr) => ([SET_HIGH_COLUMN | (0xF & addr), 0], 1),
            Command::PageAddress(page) => ([SET_PAGE_ADDR | (0x7 & page), 0], 1),
            Command::SegmentRemap(remap) => (
                [if remap { SEG_REMAP_REVERSE } else { SEG_REMAP_NORMAL }, 0],
                1,
            ),
            Command::ReverseComDir(rev) => ([if rev { COM_SCAN_DEC } else { COM_SCAN_INC }, 0], 1),
        }
    }
}
