//! Pixel-space geometry shared by the layout and the rasterizer.

use glam::UVec2;

/// Axis-aligned rectangle in canvas pixels.
/// Convention: [origin.x, origin.x + size.x) x [origin.y, origin.y + size.y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub origin: UVec2,
    pub size: UVec2,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            origin: UVec2::new(x, y),
            size: UVec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Exclusive bottom-right corner.
    #[inline]
    pub fn max(&self) -> UVec2 {
        self.origin + self.size
    }

    /// True if the two rectangles share at least one pixel.
    pub fn overlaps(&self, other: &PixelRect) -> bool {
        self.origin.x < other.max().x
            && other.origin.x < self.max().x
            && self.origin.y < other.max().y
            && other.origin.y < self.max().y
    }
}

/// Placement of one grid cell on the canvas. Derived from the parameters, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPlacement {
    pub row: u32,
    pub col: u32,
    /// Drawing rectangle: tile plus padding and extra height.
    pub outer_rect: PixelRect,
    /// Top-left corner of the tile shape itself.
    pub inner_origin: UVec2,
}
