//! Run configuration with defaults matching the historical scripts.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Rgba8;
use crate::error::{BrandgenError, BrandgenResult};
use crate::fonts::FontResolver;

/// Brand blue used by every preset background.
pub const BRAND_BLUE: Rgba8 = Rgba8::rgb(0x2D, 0x8C, 0xFF);

/// Generator configuration. Every field has a default, so the tool runs
/// with no config file at all; a JSON file can override any subset.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    /// Source logo path.
    pub logo: PathBuf,
    /// Output directory for generated PNGs.
    pub out_dir: PathBuf,
    /// Background color, `#RRGGBB[AA]`.
    pub background: Rgba8,
    /// OG caption text.
    pub og_title: String,
    /// OG caption size in pixels.
    pub og_title_size_px: f32,
    /// Ordered font candidate paths for the OG caption.
    pub font_candidates: Vec<PathBuf>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            logo: PathBuf::from("public/logo.png"),
            out_dir: PathBuf::from("public"),
            background: BRAND_BLUE,
            og_title: "Proforma Calculator".to_string(),
            og_title_size_px: 60.0,
            font_candidates: FontResolver::default_candidates(),
        }
    }
}

impl BrandConfig {
    /// Load configuration JSON from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> BrandgenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BrandgenError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            BrandgenError::validation(format!("parse config JSON '{}': {e}", path.display()))
        })?;
        Ok(cfg)
    }

    pub fn font_resolver(&self) -> FontResolver {
        FontResolver::new(self.font_candidates.clone())
    }
}
