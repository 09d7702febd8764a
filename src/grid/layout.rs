//! Grid geometry: canvas size and per-cell placement.

use glam::UVec2;

use crate::types::{CellPlacement, GridParameters, PixelRect, TileGridError};

/// Result of laying out a grid. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Normalized parameters the layout was computed from.
    params: GridParameters,
    draw_rect: UVec2,
    canvas: UVec2,
    cells: Vec<CellPlacement>,
}

impl GridLayout {
    pub fn params(&self) -> &GridParameters {
        &self.params
    }

    /// Width of a drawing rectangle: tile plus padding on both sides.
    #[inline]
    pub fn draw_rect_width(&self) -> u32 {
        self.draw_rect.x
    }

    /// Height of a drawing rectangle: tile plus padding plus extra height.
    #[inline]
    pub fn draw_rect_height(&self) -> u32 {
        self.draw_rect.y
    }

    #[inline]
    pub fn canvas_width(&self) -> u32 {
        self.canvas.x
    }

    #[inline]
    pub fn canvas_height(&self) -> u32 {
        self.canvas.y
    }

    pub fn canvas_size(&self) -> UVec2 {
        self.canvas
    }

    pub fn columns(&self) -> u32 {
        self.params.tiles_per_row as u32
    }

    pub fn rows(&self) -> u32 {
        self.params.tiles_per_col as u32
    }

    pub fn tile_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[CellPlacement] {
        &self.cells
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&CellPlacement> {
        if row >= self.rows() || col >= self.columns() {
            return None;
        }
        let idx = (row as usize) * (self.columns() as usize) + (col as usize);
        self.cells.get(idx)
    }
}

/// Lay out every cell of the grid described by `params`.
///
/// Isometric heights are derived before anything else, so the returned layout
/// always describes the normalized parameter set.
pub fn compute_layout(params: &GridParameters) -> Result<GridLayout, TileGridError> {
    let params = params.normalized();
    params.validate()?;

    let draw_w = params.tile_width as i64 + 2 * params.draw_padding as i64;
    let draw_h =
        params.tile_height as i64 + 2 * params.draw_padding as i64 + params.extra_height as i64;
    let canvas_w = canvas_extent(params.margin, params.tiles_per_row, draw_w, params.spacing);
    let canvas_h = canvas_extent(params.margin, params.tiles_per_col, draw_h, params.spacing);

    let draw_rect = UVec2::new(
        to_pixels("drawRectWidth", Some(draw_w))?,
        to_pixels("drawRectHeight", Some(draw_h))?,
    );
    let canvas = UVec2::new(
        to_pixels("canvasWidth", canvas_w)?,
        to_pixels("canvasHeight", canvas_h)?,
    );

    let margin = UVec2::splat(params.margin as u32);
    let spacing = UVec2::splat(params.spacing as u32);
    let padding = params.draw_padding as u32;
    let inner_offset = UVec2::new(padding, padding + params.extra_height as u32);

    let rows = params.tiles_per_col as u32;
    let cols = params.tiles_per_row as u32;
    let mut cells = Vec::with_capacity((rows as usize) * (cols as usize));
    for row in 0..rows {
        for col in 0..cols {
            // Each term is bounded by the canvas extent checked above. A combined
            // stride is not: with a single row or column the spacing never
            // reaches the canvas.
            let index = UVec2::new(col, row);
            let origin = margin + index * draw_rect + index * spacing;
            cells.push(CellPlacement {
                row,
                col,
                outer_rect: PixelRect {
                    origin,
                    size: draw_rect,
                },
                inner_origin: origin + inner_offset,
            });
        }
    }

    log::debug!(
        "{} layout: {}x{} cells, canvas {}x{}",
        params.grid_type,
        cols,
        rows,
        canvas.x,
        canvas.y
    );

    Ok(GridLayout {
        params,
        draw_rect,
        canvas,
        cells,
    })
}

/// `2*margin + count*rect + (count-1)*spacing`, or `None` if it overflows `i64`.
fn canvas_extent(margin: i32, count: i32, rect: i64, spacing: i32) -> Option<i64> {
    let count = count as i64;
    count
        .checked_mul(rect)?
        .checked_add(2 * margin as i64)?
        .checked_add((count - 1) * spacing as i64)
}

fn to_pixels(name: &str, value: Option<i64>) -> Result<u32, TileGridError> {
    value
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| TileGridError::InvalidParameter(format!("{name} is out of range")))
}
