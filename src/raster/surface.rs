use glam::IVec2;
use image::{Rgba, RgbaImage};

/// RGBA pixel target for one draw. Created fresh for every draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSurface {
    image: RgbaImage,
}

impl CanvasSurface {
    /// New surface with every pixel set to `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(*self.image.get_pixel(x, y))
    }

    /// Overwrite (not blend) a rectangle of pixels. Anything outside the surface is clipped.
    pub fn fill_rect(&mut self, origin: IVec2, width: u32, height: u32, color: Rgba<u8>) {
        let x0 = (origin.x as i64).max(0);
        let y0 = (origin.y as i64).max(0);
        let x1 = (origin.x as i64 + width as i64).min(self.width() as i64);
        let y1 = (origin.y as i64 + height as i64).min(self.height() as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA bytes, row-major from the top-left pixel.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }
}
