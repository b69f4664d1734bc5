//! Best-effort font resolution over an ordered candidate list.
//!
//! The candidate paths are configuration, not hardcoded probes, so runs are
//! deterministic for a given config. Resolution failure is non-fatal for
//! callers: the OG preset emits a logo-only image with a warning.

use std::path::PathBuf;

use crate::error::{BrandgenError, BrandgenResult};

/// Ordered candidate font paths; the first readable file wins.
#[derive(Clone, Debug)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Platform system-font locations the historical scripts probed, in
    /// priority order.
    pub fn default_candidates() -> Vec<PathBuf> {
        [
            "/System/Library/Fonts/Helvetica.ttc",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .into_iter()
        .map(PathBuf::from)
        .collect()
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the bytes of the first candidate that can be read.
    pub fn resolve(&self) -> BrandgenResult<Vec<u8>> {
        for path in &self.candidates {
            match std::fs::read(path) {
                Ok(bytes) => {
                    tracing::debug!(path = %path.display(), "resolved font candidate");
                    return Ok(bytes);
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "font candidate unavailable");
                }
            }
        }
        Err(BrandgenError::font_resolution(format!(
            "no candidate font could be read (tried {})",
            self.candidates
                .iter()
                .map(|p| format!("'{}'", p.display()))
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(Self::default_candidates())
    }
}

/// Probe used by tests to skip font-dependent assertions on hosts with no
/// usable system font.
pub fn any_candidate_on_disk(candidates: &[PathBuf]) -> bool {
    candidates.iter().any(|p| p.is_file())
}
