use image::Rgba;

use super::{CanvasSurface, Palette};
use crate::iterators::DiamondSpans;
use crate::types::{CellPlacement, GridParameters, GridType};

/// Fill colour for a cell: even `(row + col)` parity gets the first colour.
#[inline]
pub fn checker_color(row: u32, col: u32, palette: &Palette) -> Rgba<u8> {
    if (row + col) % 2 == 0 {
        palette.even
    } else {
        palette.odd
    }
}

/// Clear the cell's drawing rectangle, then paint its tile shape.
///
/// Only this cell's outer rectangle is touched, so a single cell can be
/// redrawn without repainting the whole surface. The exception is an
/// odd-height diamond (see [`DiamondSpans`]): its top span lands one row above
/// the rectangle. With zero spacing and no padding or extra height, that row
/// belongs to the cell above, and its bottom tip takes this cell's colour.
pub fn paint_cell(
    surface: &mut CanvasSurface,
    cell: &CellPlacement,
    params: &GridParameters,
    fill: Rgba<u8>,
    clear: Rgba<u8>,
) {
    let outer = cell.outer_rect;
    surface.fill_rect(outer.origin.as_ivec2(), outer.width(), outer.height(), clear);

    let tile_width = params.tile_width.max(0) as u32;
    let tile_height = params.effective_tile_height().max(0) as u32;

    match params.grid_type {
        GridType::Orthogonal => {
            surface.fill_rect(cell.inner_origin.as_ivec2(), tile_width, tile_height, fill);
        }
        GridType::Isometric => {
            for span in DiamondSpans::new(cell.inner_origin, tile_width, tile_height) {
                surface.fill_rect(span.start, span.width, 1, fill);
            }
        }
    }
}
