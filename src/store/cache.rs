use super::ParamStore;
use crate::types::{
    GRID_TYPE_KEY, GridParameters, GridType, PartialParameters, STATE_KEY_PREFIX, TileGridError,
};

/// Remembers one parameter set per grid type, plus the last grid type used.
///
/// Layout in the store:
/// - `gridType` holds the last saved grid type name;
/// - `tilesetGridState_<type>` holds that type's parameters as JSON.
#[derive(Debug)]
pub struct ParameterCache<S> {
    store: S,
}

impl<S: ParamStore> ParameterCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn state_key(grid_type: GridType) -> String {
        format!("{STATE_KEY_PREFIX}{grid_type}")
    }

    /// Record `params` as the latest set for its grid type.
    ///
    /// The per-type state is written before `gridType`. If the second write
    /// fails the state is put back, so the store is left as it was.
    pub fn save(&mut self, params: &GridParameters) -> Result<(), TileGridError> {
        let params = params.normalized();
        let json = serde_json::to_string(&params)?;
        let state_key = Self::state_key(params.grid_type);

        let previous = self.store.get(&state_key)?;
        self.store.set(&state_key, &json)?;
        if let Err(err) = self.store.set(GRID_TYPE_KEY, params.grid_type.as_str()) {
            let rollback = match previous {
                Some(old) => self.store.set(&state_key, &old),
                None => self.store.remove(&state_key),
            };
            if let Err(rollback_err) = rollback {
                log::warn!("could not restore {state_key} after failed save: {rollback_err}");
            }
            return Err(err);
        }

        log::debug!("saved {} parameters", params.grid_type);
        Ok(())
    }

    /// Grid type of the last save, if any. An unrecognised stored value is ignored.
    pub fn last_grid_type(&self) -> Result<Option<GridType>, TileGridError> {
        let Some(raw) = self.store.get(GRID_TYPE_KEY)? else {
            return Ok(None);
        };
        match raw.parse::<GridType>() {
            Ok(grid_type) => Ok(Some(grid_type)),
            Err(err) => {
                log::warn!("ignoring stored grid type: {err}");
                Ok(None)
            }
        }
    }

    /// Parameters for `grid_type` (or the last saved type), laid over `current`.
    ///
    /// Fields missing from the stored set keep `current` values. A stored set
    /// that does not parse is skipped with a warning.
    pub fn restore(
        &self,
        grid_type: Option<GridType>,
        current: &GridParameters,
    ) -> Result<GridParameters, TileGridError> {
        let grid_type = match grid_type {
            Some(grid_type) => grid_type,
            None => self.last_grid_type()?.unwrap_or(current.grid_type),
        };
        let base = GridParameters {
            grid_type,
            ..*current
        };

        let Some(json) = self.store.get(&Self::state_key(grid_type))? else {
            return Ok(base.normalized());
        };

        match serde_json::from_str::<PartialParameters>(&json) {
            Ok(stored) => {
                let stored = PartialParameters {
                    grid_type: None,
                    ..stored.without_zero_dimensions()
                };
                Ok(stored.apply_to(&base).normalized())
            }
            Err(err) => {
                log::warn!("ignoring unreadable {grid_type} state: {err}");
                Ok(base.normalized())
            }
        }
    }
}
