//! Container to store and set display properties

#[cfg(not(feature = "blocking"))]
use display_interface::AsyncWriteOnlyDataCommand;
#[cfg(feature = "blocking")]
use display_interface::WriteOnlyDataCommand;

use display_interface::{DataFormat, DisplayError};

use crate::{command::Command, display::DisplayVariant};

/// Display properties struct
pub struct DisplayProperties<DV, DI> {
    _variant: DV,
    iface: DI,
    flipped: bool,
}

impl<DV, DI> DisplayProperties<DV, DI> {
    /// Create new DisplayProperties instance
    pub fn new(variant: DV, iface: DI) -> DisplayProperties<DV, DI> {
        DisplayProperties {
            _variant: variant,
            iface,
            flipped: false,
        }
    }

    /// Whether the next [`flip`](Self::flip) selects the reversed segment remap
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Release the transport
    pub fn release(self) -> DI {
        self.iface
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
impl<DV, DI> DisplayProperties<DV, DI>
where
    DI: AsyncWriteOnlyDataCommand,
    DV: DisplayVariant,
{
    /// Send the variant's power-on configuration. Display memory is left untouched.
    pub async fn init_text_mode(&mut self) -> Result<(), DisplayError> {
        DV::init_text_mode(&mut self.iface).await
    }

    /// Point the controller at `page` and pixel column `col`. The next data byte lands
    /// there and the column pointer advances by one per byte.
    ///
    /// `col` is in screen space; the variant's column offset is added here.
    pub async fn set_position(&mut self, page: u8, col: u8) -> Result<(), DisplayError> {
        let col = col + DV::COLUMN_OFFSET;
        for cmd in [
            Command::PageAddress(page),
            Command::ColumnAddressLow(0xF & col),
            Command::ColumnAddressHigh(0xF & (col >> 4)),
        ] {
            cmd.send(&mut self.iface).await?;
        }

        Ok(())
    }

    /// Send pixel data at the current position, one transaction per byte
    pub async fn draw(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        for byte in buffer {
            self.send_data(*byte).await?;
        }

        Ok(())
    }

    /// Send a single command byte, unvalidated
    pub async fn send_command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.iface
            .send_commands(DataFormat::U8(core::slice::from_ref(&cmd)))
            .await
    }

    /// Send a single pixel data byte at the current position
    pub async fn send_data(&mut self, data: u8) -> Result<(), DisplayError> {
        self.iface
            .send_data(DataFormat::U8(core::slice::from_ref(&data)))
            .await
    }

    /// Turn the display on or off. The display can be drawn to and retains all
    /// of its memory even while off.
    pub async fn display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        Command::DisplayOn(on).send(&mut self.iface).await
    }

    /// Set the display contrast
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        Command::Contrast(contrast).send(&mut self.iface).await
    }

    /// Draw black on white (`true`) or white on black (`false`)
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        Command::Invert(inverted).send(&mut self.iface).await
    }

    /// Turn the picture upside down.
    ///
    /// The COM scan direction is always set to incrementing. The segment remap is
    /// reversed when the orientation flag is set and normal otherwise, and the flag is
    /// toggled once the commands went out, so successive calls alternate the remap.
    pub async fn flip(&mut self) -> Result<(), DisplayError> {
        for cmd in [
            Command::DisplayOn(false),
            Command::ReverseComDir(false),
            Command::SegmentRemap(self.flipped),
            Command::DisplayOn(true),
        ] {
            cmd.send(&mut self.iface).await?;
        }
        self.flipped = !self.flipped;

        Ok(())
    }
}
