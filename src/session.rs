//! Editing session: current parameters plus the store they persist to.
//!
//! Every change goes through validation first and is saved before it becomes
//! current, so a rejected or failed change leaves both the session and the
//! store as they were.

use std::path::Path;

use crate::export::{self, DescriptorOptions};
use crate::grid::GridLayout;
use crate::raster::{CanvasSurface, Palette, draw_grid};
use crate::share;
use crate::store::{ParamStore, ParameterCache};
use crate::types::{GridParameters, GridType, TileGridError};

#[derive(Debug)]
pub struct Session<S> {
    params: GridParameters,
    cache: ParameterCache<S>,
    palette: Palette,
}

impl<S: ParamStore> Session<S> {
    /// Resume from the last saved grid type, or start from defaults.
    pub fn open(store: S) -> Result<Self, TileGridError> {
        let cache = ParameterCache::new(store);
        let restored = cache.restore(None, &GridParameters::default())?;
        let params = match restored.validate() {
            Ok(()) => restored,
            Err(err) => {
                log::warn!("stored parameters rejected, using defaults: {err}");
                GridParameters::default()
            }
        };

        Ok(Self {
            params,
            cache,
            palette: Palette::default(),
        })
    }

    /// Like [`Session::open`], but a share string naming a grid type wins over
    /// stored state and is saved straight away.
    pub fn open_with_query(store: S, query: &str) -> Result<Self, TileGridError> {
        let mut session = Self::open(store)?;
        if let Some(shared) = share::from_query_string(&GridParameters::default(), query)? {
            session.update(shared)?;
        }
        Ok(session)
    }

    pub fn params(&self) -> &GridParameters {
        &self.params
    }

    pub fn store(&self) -> &S {
        self.cache.store()
    }

    pub fn into_store(self) -> S {
        self.cache.into_inner()
    }

    /// Replace the current parameters.
    pub fn update(&mut self, params: GridParameters) -> Result<(), TileGridError> {
        let params = params.normalized();
        params.validate()?;
        self.cache.save(&params)?;
        self.params = params;
        Ok(())
    }

    /// Lay a share string over the current parameters.
    pub fn apply_query(&mut self, query: &str) -> Result<(), TileGridError> {
        let params = share::apply_query_string(&self.params, query)?;
        self.update(params)
    }

    /// Change grid type, bringing back whatever was last saved for that type.
    pub fn switch_grid_type(&mut self, grid_type: GridType) -> Result<(), TileGridError> {
        let params = self.cache.restore(Some(grid_type), &self.params)?;
        self.update(params)
    }

    pub fn layout(&self) -> Result<GridLayout, TileGridError> {
        crate::grid::compute_layout(&self.params)
    }

    pub fn render(&self) -> Result<(CanvasSurface, GridLayout), TileGridError> {
        draw_grid(&self.params, &self.palette)
    }

    pub fn descriptor(&self, options: &DescriptorOptions) -> Result<String, TileGridError> {
        export::tileset_descriptor_with(&self.params, options)
    }

    pub fn share_query(&self) -> String {
        share::to_query_string(&self.params)
    }

    pub fn export_png(&self, path: impl AsRef<Path>) -> Result<(), TileGridError> {
        let (surface, _) = self.render()?;
        export::save_png(&surface, path)
    }

    pub fn export_descriptor(
        &self,
        options: &DescriptorOptions,
        path: impl AsRef<Path>,
    ) -> Result<(), TileGridError> {
        export::write_descriptor(&self.params, options, path)
    }
}
