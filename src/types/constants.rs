use image::Rgba;

/// Fill for margins and spacing between drawing rectangles.
pub const BACKGROUND: Rgba<u8> = Rgba([0xb0, 0xb0, 0xb0, 0xff]);
/// Each drawing rectangle is cleared to fully transparent before its tile is painted.
pub const CELL_CLEAR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0x00]);
pub const EVEN_FILL: Rgba<u8> = Rgba([0xe3, 0xea, 0xfc, 0xff]);
pub const ODD_FILL: Rgba<u8> = Rgba([0xb6, 0xc8, 0xe6, 0xff]);

pub const DEFAULT_TILE_SIZE: i32 = 32;
pub const DEFAULT_TILES_PER_AXIS: i32 = 8;

pub const GRID_TYPE_KEY: &str = "gridType";
pub const STATE_KEY_PREFIX: &str = "tilesetGridState_";

pub const DEFAULT_TILESET_NAME: &str = "tileset";
pub const DEFAULT_IMAGE_SOURCE: &str = "tileset.png";
pub const DEFAULT_PNG_FILE: &str = "tileset-grid.png";
pub const DEFAULT_TSX_FILE: &str = "tileset.tsx";
