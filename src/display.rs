//! Display variant trait

#[cfg(not(feature = "blocking"))]
use display_interface::AsyncWriteOnlyDataCommand;
#[cfg(feature = "blocking")]
use display_interface::WriteOnlyDataCommand;

use display_interface::DisplayError;

/// Geometry and bring-up sequence of one controller/panel combination
#[maybe_async_cfg::maybe(
    sync(
        feature = "blocking",
        keep_self,
        idents(AsyncWriteOnlyDataCommand(sync = "WriteOnlyDataCommand"),)
    ),
    async(not(feature = "blocking"), keep_self)
)]
#[allow(async_fn_in_trait)]
pub trait DisplayVariant {
    /// Width of the panel in pixels
    const WIDTH: u8;
    /// Height of the panel in pixels
    const HEIGHT: u8;
    /// Controller column the first visible panel column is wired to
    const COLUMN_OFFSET: u8 = 0;

    /// Panel dimensions as (width, height)
    fn dimensions() -> (u8, u8) {
        (Self::WIDTH, Self::HEIGHT)
    }

    /// Number of 8 pixel tall pages
    fn pages() -> u8 {
        Self::HEIGHT / 8
    }

    /// Send the power-on configuration. Leaves the display on, non-inverted.
    async fn init_text_mode<DI>(iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: AsyncWriteOnlyDataCommand;
}
