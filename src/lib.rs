pub mod export;
pub mod grid;
pub mod iterators;
pub mod loaders;
pub mod raster;
pub mod session;
pub mod share;
pub mod store;
pub mod types;

pub use export::{DescriptorOptions, encode_png, save_png, tileset_descriptor};
pub use grid::{GridLayout, compute_layout};
pub use loaders::yaml::load_parameters;
pub use raster::{CanvasSurface, Palette, draw_grid, paint_cell};
pub use session::Session;
pub use types::{CellPlacement, GridParameters, GridType, PixelRect, TileGridError};
