//! Grid parameters: the single input every other part of the crate consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_TILE_SIZE, DEFAULT_TILES_PER_AXIS, TileGridError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    #[default]
    Orthogonal,
    Isometric,
}

impl GridType {
    pub const ALL: [GridType; 2] = [GridType::Orthogonal, GridType::Isometric];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orthogonal => "orthogonal",
            Self::Isometric => "isometric",
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridType {
    type Err = TileGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "orthogonal" => Ok(Self::Orthogonal),
            "isometric" => Ok(Self::Isometric),
            other => Err(TileGridError::invalid(format!("unknown grid type {other:?}"))),
        }
    }
}

/// Height of an isometric tile: half the width, halves rounded up.
#[inline]
pub fn isometric_tile_height(tile_width: i32) -> i32 {
    (tile_width as f64 / 2.0).round() as i32
}

/// Full parameter set for one grid.
///
/// Fields are signed so that bad input survives parsing and is rejected by
/// [`GridParameters::validate`] with a useful message instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridParameters {
    pub grid_type: GridType,
    pub tile_width: i32,
    /// Ignored for isometric grids, see [`GridParameters::normalized`].
    pub tile_height: i32,
    pub margin: i32,
    pub spacing: i32,
    pub tiles_per_row: i32,
    pub tiles_per_col: i32,
    pub draw_padding: i32,
    pub extra_height: i32,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            grid_type: GridType::Orthogonal,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            margin: 0,
            spacing: 0,
            tiles_per_row: DEFAULT_TILES_PER_AXIS,
            tiles_per_col: DEFAULT_TILES_PER_AXIS,
            draw_padding: 0,
            extra_height: 0,
        }
    }
}

impl GridParameters {
    pub fn orthogonal(tile_width: i32, tile_height: i32, tiles_per_row: i32, tiles_per_col: i32) -> Self {
        Self {
            grid_type: GridType::Orthogonal,
            tile_width,
            tile_height,
            tiles_per_row,
            tiles_per_col,
            ..Default::default()
        }
    }

    pub fn isometric(tile_width: i32, tiles_per_row: i32, tiles_per_col: i32) -> Self {
        Self {
            grid_type: GridType::Isometric,
            tile_width,
            tile_height: isometric_tile_height(tile_width),
            tiles_per_row,
            tiles_per_col,
            ..Default::default()
        }
    }

    /// Tile height actually used for layout and painting.
    #[inline]
    pub fn effective_tile_height(&self) -> i32 {
        match self.grid_type {
            GridType::Orthogonal => self.tile_height,
            GridType::Isometric => isometric_tile_height(self.tile_width),
        }
    }

    /// Copy with the isometric height rule applied.
    pub fn normalized(&self) -> Self {
        Self {
            tile_height: self.effective_tile_height(),
            ..*self
        }
    }

    pub fn tile_count(&self) -> i64 {
        self.tiles_per_row as i64 * self.tiles_per_col as i64
    }

    /// Reject sizes and counts that would produce an empty or negative canvas.
    pub fn validate(&self) -> Result<(), TileGridError> {
        let positive = [
            ("tileWidth", self.tile_width),
            ("tileHeight", self.effective_tile_height()),
            ("tilesPerRow", self.tiles_per_row),
            ("tilesPerCol", self.tiles_per_col),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(TileGridError::invalid(format!(
                    "{name} must be greater than 0, got {value}"
                )));
            }
        }

        let non_negative = [
            ("margin", self.margin),
            ("spacing", self.spacing),
            ("drawPadding", self.draw_padding),
            ("extraHeight", self.extra_height),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(TileGridError::invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// A parameter set where every field may be absent.
///
/// Used wherever parameters arrive piecemeal (query strings, stored state,
/// config files) and must be laid over an existing set.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialParameters {
    pub grid_type: Option<GridType>,
    pub tile_width: Option<i32>,
    pub tile_height: Option<i32>,
    pub margin: Option<i32>,
    pub spacing: Option<i32>,
    pub tiles_per_row: Option<i32>,
    pub tiles_per_col: Option<i32>,
    pub draw_padding: Option<i32>,
    pub extra_height: Option<i32>,
}

impl PartialParameters {
    /// Treat a zero size or count as "not provided".
    ///
    /// Form-style sources cannot distinguish an empty field from 0 for these,
    /// so a zero never overwrites an existing dimension.
    pub fn without_zero_dimensions(self) -> Self {
        let nonzero = |v: Option<i32>| v.filter(|v| *v != 0);
        Self {
            tile_width: nonzero(self.tile_width),
            tile_height: nonzero(self.tile_height),
            tiles_per_row: nonzero(self.tiles_per_row),
            tiles_per_col: nonzero(self.tiles_per_col),
            ..self
        }
    }

    pub fn apply_to(&self, base: &GridParameters) -> GridParameters {
        GridParameters {
            grid_type: self.grid_type.unwrap_or(base.grid_type),
            tile_width: self.tile_width.unwrap_or(base.tile_width),
            tile_height: self.tile_height.unwrap_or(base.tile_height),
            margin: self.margin.unwrap_or(base.margin),
            spacing: self.spacing.unwrap_or(base.spacing),
            tiles_per_row: self.tiles_per_row.unwrap_or(base.tiles_per_row),
            tiles_per_col: self.tiles_per_col.unwrap_or(base.tiles_per_col),
            draw_padding: self.draw_padding.unwrap_or(base.draw_padding),
            extra_height: self.extra_height.unwrap_or(base.extra_height),
        }
    }
}

impl From<GridParameters> for PartialParameters {
    fn from(p: GridParameters) -> Self {
        Self {
            grid_type: Some(p.grid_type),
            tile_width: Some(p.tile_width),
            tile_height: Some(p.tile_height),
            margin: Some(p.margin),
            spacing: Some(p.spacing),
            tiles_per_row: Some(p.tiles_per_row),
            tiles_per_col: Some(p.tiles_per_col),
            draw_padding: Some(p.draw_padding),
            extra_height: Some(p.extra_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isometric_height_rounds_half_up() {
        assert_eq!(isometric_tile_height(32), 16);
        assert_eq!(isometric_tile_height(33), 17);
        assert_eq!(isometric_tile_height(1), 1);
        assert_eq!(isometric_tile_height(2), 1);
    }

    #[test]
    fn isometric_ignores_supplied_height() {
        for width in 1..=64 {
            let params = GridParameters {
                grid_type: GridType::Isometric,
                tile_width: width,
                tile_height: 999,
                ..Default::default()
            };
            assert_eq!(params.normalized().tile_height, isometric_tile_height(width));
        }
    }

    #[test]
    fn orthogonal_keeps_supplied_height() {
        let params = GridParameters::orthogonal(32, 48, 2, 2);
        assert_eq!(params.normalized().tile_height, 48);
    }

    #[test]
    fn validate_rejects_non_positive_dimensions() {
        let cases = [
            GridParameters { tile_width: 0, ..Default::default() },
            GridParameters { tile_height: -1, ..Default::default() },
            GridParameters { tiles_per_row: 0, ..Default::default() },
            GridParameters { tiles_per_col: -3, ..Default::default() },
            GridParameters { margin: -1, ..Default::default() },
            GridParameters { spacing: -1, ..Default::default() },
            GridParameters { draw_padding: -1, ..Default::default() },
            GridParameters { extra_height: -1, ..Default::default() },
        ];
        for params in cases {
            assert!(matches!(
                params.validate(),
                Err(TileGridError::InvalidParameter(_))
            ));
        }
        assert!(GridParameters::default().validate().is_ok());
    }

    #[test]
    fn isometric_validation_uses_derived_height() {
        // A bogus supplied height does not matter for isometric grids.
        let params = GridParameters {
            grid_type: GridType::Isometric,
            tile_height: 0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn grid_type_parses_and_displays() {
        for grid_type in GridType::ALL {
            assert_eq!(grid_type.to_string().parse::<GridType>().unwrap(), grid_type);
        }
        assert!("hexagonal".parse::<GridType>().is_err());
    }

    #[test]
    fn partial_overlay_keeps_missing_fields() {
        let base = GridParameters::orthogonal(16, 24, 4, 5);
        let partial = PartialParameters {
            margin: Some(3),
            tile_width: Some(0),
            ..Default::default()
        }
        .without_zero_dimensions();

        let merged = partial.apply_to(&base);
        assert_eq!(merged.margin, 3);
        assert_eq!(merged.tile_width, 16);
        assert_eq!(merged.tile_height, 24);
        assert_eq!(merged.tiles_per_col, 5);
    }

    #[test]
    fn zero_spacing_still_overwrites() {
        let base = GridParameters {
            spacing: 4,
            ..Default::default()
        };
        let partial = PartialParameters {
            spacing: Some(0),
            ..Default::default()
        }
        .without_zero_dimensions();
        assert_eq!(partial.apply_to(&base).spacing, 0);
    }
}
