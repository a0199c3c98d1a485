//! Abstraction of different operating modes for the display

use crate::properties::DisplayProperties;

/// Display mode abstraction
pub trait DisplayModeTrait<DV, DI> {
    /// Allocate all required data and initialise display for mode
    fn new(properties: DisplayProperties<DV, DI>) -> Self;

    /// Release resources for reuse with different mode
    fn release(self) -> DisplayProperties<DV, DI>;
}
