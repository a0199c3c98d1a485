//! Display modes

pub mod displaymode;
pub mod text;
