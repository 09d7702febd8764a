//! PNG export of a painted surface.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::raster::CanvasSurface;
use crate::types::TileGridError;

/// Encode the surface as PNG bytes.
pub fn encode_png(surface: &CanvasSurface) -> Result<Vec<u8>, TileGridError> {
    let mut bytes = Cursor::new(Vec::new());
    surface
        .as_image()
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|err| TileGridError::SerializationFailure(format!("png encoding failed: {err}")))?;
    Ok(bytes.into_inner())
}

/// Encode and write the surface to `path`.
///
/// Encoding happens in memory first so a failed encode never leaves a partial file.
pub fn save_png(surface: &CanvasSurface, path: impl AsRef<Path>) -> Result<(), TileGridError> {
    let path = path.as_ref();
    let bytes = encode_png(surface)?;
    std::fs::write(path, bytes).map_err(|err| {
        TileGridError::SerializationFailure(format!("cannot write {}: {err}", path.display()))
    })?;
    log::info!(
        "wrote {}x{} png to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(())
}
