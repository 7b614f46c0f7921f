pub mod palette;

pub use palette::{CellStyle, Palette};
