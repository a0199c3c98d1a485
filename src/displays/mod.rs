//! Supported display variants

pub mod ssd1308;
