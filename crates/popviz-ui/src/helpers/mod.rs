pub mod format;
pub mod palette;
