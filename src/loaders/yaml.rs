//! Grid parameters from a YAML file.
//!
//! Keys use the same camelCase names as share strings; every key is optional
//! and falls back to [`GridParameters::default`]:
//!
//! ```yaml
//! gridType: isometric
//! tileWidth: 64
//! margin: 2
//! spacing: 1
//! tilesPerRow: 8
//! tilesPerCol: 4
//! drawPadding: 0
//! extraHeight: 16
//! ```

use std::path::Path;

use crate::types::{GridParameters, PartialParameters, TileGridError};

pub fn load_parameters_str(yaml: &str) -> Result<GridParameters, TileGridError> {
    let partial: Option<PartialParameters> = serde_yaml::from_str(yaml)?;
    let params = partial
        .unwrap_or_default()
        .apply_to(&GridParameters::default())
        .normalized();
    params.validate()?;
    Ok(params)
}

pub fn load_parameters(yaml_path: impl AsRef<Path>) -> Result<GridParameters, TileGridError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let params = load_parameters_str(&yaml_str)?;
    log::debug!("loaded {} parameters from {}", params.grid_type, yaml_path.display());
    Ok(params)
}
