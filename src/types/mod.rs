pub mod constants;
pub mod error;
pub mod geometry;
pub mod params;

pub use constants::*;
pub use error::TileGridError;
pub use geometry::{CellPlacement, PixelRect};
pub use params::{GridParameters, GridType, PartialParameters, isometric_tile_height};
