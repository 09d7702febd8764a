//! Painting a laid-out grid onto a pixel surface.

use image::Rgba;

pub mod cell;
pub mod surface;

pub use cell::{checker_color, paint_cell};
pub use surface::CanvasSurface;

use crate::grid::{GridLayout, compute_layout};
use crate::types::{BACKGROUND, CELL_CLEAR, EVEN_FILL, GridParameters, ODD_FILL, TileGridError};

/// Colours used for one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-surface fill: shows through margins and spacing.
    pub background: Rgba<u8>,
    /// Colour each drawing rectangle is reset to before its tile is painted.
    pub clear: Rgba<u8>,
    pub even: Rgba<u8>,
    pub odd: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            clear: CELL_CLEAR,
            even: EVEN_FILL,
            odd: ODD_FILL,
        }
    }
}

/// Full stateless draw: lay out the grid, fill a new surface with the
/// background, then clear and paint every cell in row-major order.
pub fn draw_grid(
    params: &GridParameters,
    palette: &Palette,
) -> Result<(CanvasSurface, GridLayout), TileGridError> {
    let layout = compute_layout(params)?;
    let surface = render_layout(&layout, palette);
    Ok((surface, layout))
}

/// Paint an already computed layout onto a new surface.
pub fn render_layout(layout: &GridLayout, palette: &Palette) -> CanvasSurface {
    let mut surface = CanvasSurface::new(
        layout.canvas_width(),
        layout.canvas_height(),
        palette.background,
    );

    for cell in layout.cells() {
        let fill = checker_color(cell.row, cell.col, palette);
        paint_cell(&mut surface, cell, layout.params(), fill, palette.clear);
    }

    log::debug!(
        "painted {} cells onto {}x{} surface",
        layout.tile_count(),
        surface.width(),
        surface.height()
    );

    surface
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridType;

    #[test]
    fn draw_two_orthogonal_cells() {
        let palette = Palette::default();
        let params = GridParameters::orthogonal(32, 32, 2, 1);
        let (surface, layout) = draw_grid(&params, &palette).unwrap();

        assert_eq!((surface.width(), surface.height()), (64, 32));
        assert_eq!(layout.tile_count(), 2);
        assert_eq!(surface.pixel(0, 0), Some(palette.even));
        assert_eq!(surface.pixel(31, 31), Some(palette.even));
        assert_eq!(surface.pixel(32, 0), Some(palette.odd));
        assert_eq!(surface.pixel(63, 31), Some(palette.odd));
    }

    #[test]
    fn margins_and_spacing_keep_background() {
        let palette = Palette::default();
        let params = GridParameters {
            margin: 2,
            spacing: 3,
            ..GridParameters::orthogonal(4, 4, 2, 2)
        };
        let (surface, _) = draw_grid(&params, &palette).unwrap();

        assert_eq!(surface.width(), 2 * 2 + 2 * 4 + 3);
        assert_eq!(surface.pixel(0, 0), Some(palette.background));
        assert_eq!(surface.pixel(2, 2), Some(palette.even));
        // Gap between the two columns.
        assert_eq!(surface.pixel(6, 2), Some(palette.background));
        assert_eq!(surface.pixel(9, 2), Some(palette.odd));
        assert_eq!(surface.pixel(9, 9), Some(palette.even));
    }

    #[test]
    fn isometric_padding_and_extra_height_are_cleared() {
        let palette = Palette::default();
        let params = GridParameters {
            grid_type: GridType::Isometric,
            tile_width: 16,
            draw_padding: 1,
            extra_height: 4,
            tiles_per_row: 1,
            tiles_per_col: 1,
            ..Default::default()
        };
        let (surface, layout) = draw_grid(&params, &palette).unwrap();
        assert_eq!(layout.draw_rect_width(), 18);
        assert_eq!(layout.draw_rect_height(), 8 + 2 + 4);

        // Header area above the tile is transparent.
        assert_eq!(surface.pixel(9, 2), Some(palette.clear));
        // Midline of the diamond: inner origin (1, 5), half height 4.
        assert_eq!(surface.pixel(1, 8), Some(palette.even));
        assert_eq!(surface.pixel(16, 9), Some(palette.even));
    }

    #[test]
    fn odd_height_diamond_tips_into_cell_above() {
        let palette = Palette::default();
        // Width 30 gives height 15: cells at y 0..15 and 15..30.
        let params = GridParameters::isometric(30, 1, 2);
        let (surface, layout) = draw_grid(&params, &palette).unwrap();
        assert_eq!((surface.width(), surface.height()), (30, 30));
        assert_eq!(layout.cell(1, 0).unwrap().outer_rect.y(), 15);

        // Row 0's bottom tip (y 14, x 14..16) is painted over by row 1's top span.
        assert_eq!(surface.pixel(14, 14), Some(palette.odd));
        assert_eq!(surface.pixel(15, 14), Some(palette.odd));
        assert_eq!(surface.pixel(13, 14), Some(palette.clear));
        assert_eq!(surface.pixel(16, 14), Some(palette.clear));
        // The rest of row 0's diamond keeps its own colour.
        assert_eq!(surface.pixel(12, 13), Some(palette.even));
        assert_eq!(surface.pixel(0, 6), Some(palette.even));
        // Row 1's first row inside its own rectangle is the 6 px span below the tip.
        assert_eq!(surface.pixel(12, 15), Some(palette.odd));
        assert_eq!(surface.pixel(11, 15), Some(palette.clear));
    }

    #[test]
    fn draw_rejects_invalid_parameters() {
        let params = GridParameters::orthogonal(-4, 4, 1, 1);
        assert!(draw_grid(&params, &Palette::default()).is_err());
    }
}
