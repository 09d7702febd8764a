//! Tiled tileset descriptor (`.tsx`) export.
//!
//! The document is produced from a fixed template rather than an XML writer:
//! downstream tile editors and existing projects compare these files byte for
//! byte, so attribute order, quoting and line breaks must never drift.

use std::path::Path;

use crate::grid::{GridLayout, compute_layout};
use crate::types::{DEFAULT_IMAGE_SOURCE, DEFAULT_TILESET_NAME, GridParameters, TileGridError};

/// Names written into the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorOptions {
    /// Value of the `name` attribute on `<tileset>`.
    pub name: String,
    /// Path of the tileset image, relative to the `.tsx` file.
    pub image_source: String,
}

impl Default for DescriptorOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_TILESET_NAME.to_string(),
            image_source: DEFAULT_IMAGE_SOURCE.to_string(),
        }
    }
}

/// Descriptor with the default tileset name and image source.
pub fn tileset_descriptor(params: &GridParameters) -> Result<String, TileGridError> {
    tileset_descriptor_with(params, &DescriptorOptions::default())
}

pub fn tileset_descriptor_with(
    params: &GridParameters,
    options: &DescriptorOptions,
) -> Result<String, TileGridError> {
    let layout = compute_layout(params)?;
    Ok(render_descriptor(&layout, options))
}

/// Fill the template from a computed layout.
///
/// Tile size in the descriptor is the drawing rectangle, so padding and extra
/// height become part of every tile. A padded grid gets a `<tileoffset>` that
/// shifts tiles back onto the map grid.
pub fn render_descriptor(layout: &GridLayout, options: &DescriptorOptions) -> String {
    let params = layout.params();
    let mut tsx = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    tsx.push_str(&format!(
        "<tileset version=\"1.10\" tiledversion=\"1.10.2\" name=\"{}\" tilewidth=\"{}\" tileheight=\"{}\" tilecount=\"{}\" columns=\"{}\" spacing=\"{}\" margin=\"{}\">\n",
        escape_attr(&options.name),
        layout.draw_rect_width(),
        layout.draw_rect_height(),
        layout.tile_count(),
        layout.columns(),
        params.spacing,
        params.margin,
    ));
    if params.draw_padding != 0 {
        tsx.push_str(&format!(
            "<tileoffset x=\"-{}\" y=\"{}\"/>\n",
            params.draw_padding, params.draw_padding
        ));
    }
    tsx.push_str(&format!(
        "<image source=\"{}\" width=\"{}\" height=\"{}\"/>\n",
        escape_attr(&options.image_source),
        layout.canvas_width(),
        layout.canvas_height(),
    ));
    tsx.push_str("</tileset>");
    tsx
}

/// Validate, render and write the descriptor to `path`.
pub fn write_descriptor(
    params: &GridParameters,
    options: &DescriptorOptions,
    path: impl AsRef<Path>,
) -> Result<(), TileGridError> {
    let path = path.as_ref();
    let tsx = tileset_descriptor_with(params, options)?;
    std::fs::write(path, tsx).map_err(|err| {
        TileGridError::SerializationFailure(format!("cannot write {}: {err}", path.display()))
    })?;
    log::info!("wrote tileset descriptor to {}", path.display());
    Ok(())
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
