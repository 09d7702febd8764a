//! Share strings: a parameter set as a flat `key=value&...` query string.

use crate::types::{GRID_TYPE_KEY, GridParameters, GridType, PartialParameters, TileGridError};

/// Query keys in the order they are written.
pub const SHARE_KEYS: [&str; 9] = [
    GRID_TYPE_KEY,
    "tileWidth",
    "tileHeight",
    "margin",
    "spacing",
    "tilesPerRow",
    "tilesPerCol",
    "drawPadding",
    "extraHeight",
];

/// Encode the (normalized) parameters as a query string, without a leading `?`.
pub fn to_query_string(params: &GridParameters) -> String {
    let p = params.normalized();
    let values = [
        p.grid_type.to_string(),
        p.tile_width.to_string(),
        p.tile_height.to_string(),
        p.margin.to_string(),
        p.spacing.to_string(),
        p.tiles_per_row.to_string(),
        p.tiles_per_col.to_string(),
        p.draw_padding.to_string(),
        p.extra_height.to_string(),
    ];

    SHARE_KEYS
        .iter()
        .zip(values.iter())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse the known keys of a query string.
///
/// Unknown keys are ignored and, for repeated keys, the first occurrence wins.
/// Empty values count as absent. Zero sizes and counts are dropped the same
/// way the form inputs drop them. Anything that is not an integer (or a known
/// grid type) is an error.
pub fn parse_query_string(query: &str) -> Result<PartialParameters, TileGridError> {
    let query = query.trim().trim_start_matches('?');
    let mut partial = PartialParameters::default();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(raw_key)?;
        let value = decode(raw_value)?;
        if value.trim().is_empty() {
            continue;
        }

        let slot = match key.as_str() {
            GRID_TYPE_KEY => {
                if partial.grid_type.is_none() {
                    partial.grid_type = Some(value.parse::<GridType>()?);
                }
                continue;
            }
            "tileWidth" => &mut partial.tile_width,
            "tileHeight" => &mut partial.tile_height,
            "margin" => &mut partial.margin,
            "spacing" => &mut partial.spacing,
            "tilesPerRow" => &mut partial.tiles_per_row,
            "tilesPerCol" => &mut partial.tiles_per_col,
            "drawPadding" => &mut partial.draw_padding,
            "extraHeight" => &mut partial.extra_height,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(parse_int(&key, &value)?);
        }
    }

    Ok(partial.without_zero_dimensions())
}

/// Lay the query's values over `base`; missing keys keep `base` values.
///
/// The result is normalized but not validated.
pub fn apply_query_string(
    base: &GridParameters,
    query: &str,
) -> Result<GridParameters, TileGridError> {
    let partial = parse_query_string(query)?;
    Ok(partial.apply_to(base).normalized())
}

/// Restore from a shared query string, only when it names a grid type.
///
/// Queries without `gridType` are not share links and yield `None`.
pub fn from_query_string(
    base: &GridParameters,
    query: &str,
) -> Result<Option<GridParameters>, TileGridError> {
    let partial = parse_query_string(query)?;
    if partial.grid_type.is_none() {
        return Ok(None);
    }
    Ok(Some(partial.apply_to(base).normalized()))
}

fn decode(raw: &str) -> Result<String, TileGridError> {
    let plus_as_space = raw.replace('+', " ");
    urlencoding::decode(&plus_as_space)
        .map(|s| s.into_owned())
        .map_err(|err| TileGridError::InvalidParameter(format!("bad percent-encoding in {raw:?}: {err}")))
}

fn parse_int(key: &str, value: &str) -> Result<i32, TileGridError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| TileGridError::InvalidParameter(format!("{key} must be an integer, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_has_fixed_key_order() {
        let params = GridParameters::orthogonal(32, 24, 4, 2);
        assert_eq!(
            to_query_string(&params),
            "gridType=orthogonal&tileWidth=32&tileHeight=24&margin=0&spacing=0&tilesPerRow=4&tilesPerCol=2&drawPadding=0&extraHeight=0"
        );
    }

    #[test]
    fn round_trip_is_identity() {
        let samples = [
            GridParameters::default(),
            GridParameters::orthogonal(7, 13, 5, 9),
            GridParameters {
                margin: 3,
                spacing: 2,
                draw_padding: 1,
                extra_height: 12,
                ..GridParameters::isometric(33, 4, 4)
            },
        ];
        for params in samples {
            let query = to_query_string(&params);
            let restored = apply_query_string(&GridParameters::default(), &query).unwrap();
            assert_eq!(restored, params.normalized());

            let other_base = GridParameters::orthogonal(1, 1, 1, 1);
            assert_eq!(apply_query_string(&other_base, &query).unwrap(), params.normalized());
        }
    }

    #[test]
    fn unknown_keys_ignored_and_missing_keys_kept() {
        let base = GridParameters::orthogonal(16, 16, 3, 3);
        let restored = apply_query_string(&base, "?utm_source=x&margin=5&theme=dark").unwrap();
        assert_eq!(restored.margin, 5);
        assert_eq!(restored.tile_width, 16);
        assert_eq!(restored.tiles_per_row, 3);
    }

    #[test]
    fn isometric_query_rederives_height() {
        let restored =
            apply_query_string(&GridParameters::default(), "gridType=isometric&tileWidth=40&tileHeight=7")
                .unwrap();
        assert_eq!(restored.grid_type, GridType::Isometric);
        assert_eq!(restored.tile_height, 20);
    }

    #[test]
    fn zero_dimension_keeps_base() {
        let base = GridParameters::orthogonal(16, 16, 3, 3);
        let restored = apply_query_string(&base, "tileWidth=0&tilesPerRow=0&spacing=0").unwrap();
        assert_eq!(restored.tile_width, 16);
        assert_eq!(restored.tiles_per_row, 3);
        assert_eq!(restored.spacing, 0);
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err = apply_query_string(&GridParameters::default(), "tileWidth=big").unwrap_err();
        assert!(matches!(err, TileGridError::InvalidParameter(_)));

        let err = apply_query_string(&GridParameters::default(), "gridType=hex").unwrap_err();
        assert!(matches!(err, TileGridError::InvalidParameter(_)));
    }

    #[test]
    fn encoded_values_are_decoded() {
        let restored =
            apply_query_string(&GridParameters::default(), "gridType=%20isometric+&margin=%34").unwrap();
        assert_eq!(restored.grid_type, GridType::Isometric);
        assert_eq!(restored.margin, 4);
    }

    #[test]
    fn first_occurrence_wins() {
        let restored = apply_query_string(&GridParameters::default(), "margin=1&margin=9").unwrap();
        assert_eq!(restored.margin, 1);
    }

    #[test]
    fn restore_requires_grid_type() {
        let base = GridParameters::default();
        assert_eq!(from_query_string(&base, "margin=3").unwrap(), None);
        let restored = from_query_string(&base, "gridType=orthogonal&margin=3")
            .unwrap()
            .unwrap();
        assert_eq!(restored.margin, 3);
    }
}
