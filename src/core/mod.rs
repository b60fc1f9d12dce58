pub mod color;
pub mod error;
pub mod grid;

pub use color::{Color, Palette, PaletteEntry};
pub use error::{GameError, Result};
pub use grid::{Grid, GridCoord};
