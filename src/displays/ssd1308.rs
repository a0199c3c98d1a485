//! SSD1308 display variant

#[cfg(not(feature = "blocking"))]
use display_interface::AsyncWriteOnlyDataCommand;
#[cfg(feature = "blocking")]
use display_interface::WriteOnlyDataCommand;

use crate::{
    command::{AddrMode, Command},
    display::DisplayVariant,
};
use display_interface::DisplayError;

/// Grove 0.96" 128x64 with SSD1308 controller
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Ssd1308_128_64 {}

#[maybe_async_cfg::maybe(
    sync(
        feature = "blocking",
        keep_self,
        idents(AsyncWriteOnlyDataCommand(sync = "WriteOnlyDataCommand"),)
    ),
    async(not(feature = "blocking"), keep_self)
)]
impl DisplayVariant for Ssd1308_128_64 {
    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 64;

    async fn init_text_mode<DI>(iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: AsyncWriteOnlyDataCommand,
    {
        for cmd in [
            Command::DisplayOn(false),
            Command::AddressMode(AddrMode::Horizontal),
            Command::ReverseComDir(true),
            Command::SegmentRemap(true),
            Command::DisplayOn(true),
            Command::Invert(false),
        ] {
            cmd.send(iface).await?;
        }

        Ok(())
    }
}
