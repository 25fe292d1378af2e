//! Visual asset loading seam
//!
//! Decoding images is someone else's job. The demo asks a provider for a
//! named asset and gets back a frame handle and its bounds.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::IVec2;
use thiserror::Error;

use crate::sim::{AssetId, Rect, Visual};

/// Which colour, if any, is treated as transparent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorKey {
    #[default]
    None,
    /// Use whatever colour the top-left pixel has
    TopLeftPixel,
    Rgb(u8, u8, u8),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {name}")]
    NotFound { name: String },
    #[error("asset {name} could not be loaded: {reason}")]
    Invalid { name: String, reason: String },
}

/// Resolve an asset name under the data directory
pub fn asset_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(name)
}

/// Loads drawable frames by name
pub trait AssetProvider {
    /// Load `name`, applying `color_key` transparency and an integer scale.
    ///
    /// The returned rect sits at the origin with the scaled size.
    fn load_visual(
        &mut self,
        name: &str,
        color_key: ColorKey,
        scale: u32,
    ) -> Result<(Visual, Rect), AssetError>;
}

/// In-memory provider that knows asset sizes by path under `data_dir`
#[derive(Debug)]
pub struct ManifestAssets {
    data_dir: PathBuf,
    sizes: HashMap<PathBuf, IVec2>,
    loaded: Vec<PathBuf>,
}

impl ManifestAssets {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            sizes: HashMap::new(),
            loaded: Vec::new(),
        }
    }

    /// Register an asset and its unscaled pixel size
    pub fn with_asset(mut self, name: &str, size: IVec2) -> Self {
        self.sizes.insert(asset_path(&self.data_dir, name), size);
        self
    }

    /// Resolved paths in load order; index is the `AssetId`
    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }
}

impl AssetProvider for ManifestAssets {
    fn load_visual(
        &mut self,
        name: &str,
        _color_key: ColorKey,
        scale: u32,
    ) -> Result<(Visual, Rect), AssetError> {
        let path = asset_path(&self.data_dir, name);
        let size = *self.sizes.get(&path).ok_or_else(|| AssetError::NotFound {
            name: name.to_string(),
        })?;
        if scale == 0 || size.x <= 0 || size.y <= 0 {
            return Err(AssetError::Invalid {
                name: name.to_string(),
                reason: format!("degenerate size {}x{} at scale {}", size.x, size.y, scale),
            });
        }

        let scaled = size * scale as i32;
        let id = AssetId(self.loaded.len() as u32);
        log::debug!("Loaded {} as {:?}", path.display(), id);
        self.loaded.push(path);
        Ok((
            Visual::new(id, scaled),
            Rect::from_topleft(IVec2::ZERO, scaled),
        ))
    }
}
