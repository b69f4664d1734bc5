//! Generation pipeline: decode the logo once, run a preset list, persist
//! each canvas as PNG.
//!
//! Writes go through a temp-file + rename so an interrupted run never
//! leaves a truncated PNG at the final path.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::{SourceImage, load_source_image};
use crate::compose::{Canvas, TextOverlay, compose};
use crate::config::BrandConfig;
use crate::error::{BrandgenError, BrandgenResult};
use crate::presets::{self, Preset};

/// Paths written by one entry-point run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
}

/// Legacy generator (`pwa-*.png`). A missing logo aborts the whole run:
/// this entry point keeps the historical script-level check.
pub fn run_legacy_icons(cfg: &BrandConfig) -> BrandgenResult<RunSummary> {
    let source = load_source_image(&cfg.logo)?;
    let mut summary = RunSummary::default();
    for preset in presets::legacy_icon_presets(cfg) {
        summary
            .written
            .extend(generate_preset(&source, &preset, &cfg.out_dir, None)?);
    }
    Ok(summary)
}

/// v2 generator: app icons, maskable aliases, and the captioned OG image.
/// A missing logo skips each asset with a diagnostic (the per-asset check)
/// and the run still fails at the end since nothing was produced.
pub fn run_asset_suite(cfg: &BrandConfig) -> BrandgenResult<RunSummary> {
    let mut all = presets::app_icon_presets(cfg);
    all.push(presets::og_preset_v2(cfg));
    run_skipping_missing(cfg, &all)
}

/// v1 OG generator: logo-only `og-image.png`, per-asset missing check.
pub fn run_og_v1(cfg: &BrandConfig) -> BrandgenResult<RunSummary> {
    run_skipping_missing(cfg, &[presets::og_preset_v1(cfg)])
}

fn run_skipping_missing(cfg: &BrandConfig, presets: &[Preset]) -> BrandgenResult<RunSummary> {
    let source = match load_source_image(&cfg.logo) {
        Ok(s) => Some(s),
        Err(BrandgenError::MissingInput(path)) => {
            tracing::error!(path = %path.display(), "logo not found");
            None
        }
        Err(e) => return Err(e),
    };

    let needs_caption = presets.iter().any(|p| p.caption.is_some());
    let font_bytes = if needs_caption && source.is_some() {
        match cfg.font_resolver().resolve() {
            Ok(bytes) => Some(bytes),
            Err(BrandgenError::FontResolution(msg)) => {
                tracing::warn!(%msg, "emitting OG image without caption");
                None
            }
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    let mut summary = RunSummary::default();
    for preset in presets {
        match &source {
            Some(src) => {
                summary.written.extend(generate_preset(
                    src,
                    preset,
                    &cfg.out_dir,
                    font_bytes.as_deref(),
                )?);
            }
            None => {
                tracing::warn!(file = %preset.file_name, "skipping asset: no logo");
            }
        }
    }

    match source {
        Some(_) => Ok(summary),
        None => Err(BrandgenError::missing_input(&cfg.logo)),
    }
}

/// Compose one preset and write it under its file name and every alias.
pub fn generate_preset(
    source: &SourceImage,
    preset: &Preset,
    out_dir: &Path,
    font_bytes: Option<&[u8]>,
) -> BrandgenResult<Vec<PathBuf>> {
    let overlay = match (&preset.caption, font_bytes) {
        (Some(caption), Some(bytes)) => Some(TextOverlay {
            text: caption.text.clone(),
            size_px: caption.size_px,
            color: caption.color,
            gap_px: caption.gap_px,
            font_bytes: bytes.to_vec(),
        }),
        (Some(_), None) => None,
        (None, _) => None,
    };

    let canvas = compose(
        source,
        preset.canvas_w,
        preset.canvas_h,
        preset.background,
        preset.scale,
        preset.anchor,
        overlay.as_ref(),
    )?;

    let mut written = Vec::with_capacity(1 + preset.aliases.len());
    for name in std::iter::once(&preset.file_name).chain(preset.aliases.iter()) {
        let path = out_dir.join(name);
        write_png_atomic(&path, &canvas)?;
        tracing::info!(path = %path.display(), width = canvas.width, height = canvas.height, "wrote asset");
        written.push(path);
    }
    Ok(written)
}

/// Encode `canvas` as PNG at `path` via a sibling temp file and rename.
pub fn write_png_atomic(path: &Path, canvas: &Canvas) -> BrandgenResult<()> {
    ensure_parent_dir(path)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| BrandgenError::validation("output path has no file name"))?
        .to_string_lossy()
        .into_owned();
    let tmp = path.with_file_name(format!("{file_name}.tmp"));

    image::save_buffer_with_format(
        &tmp,
        &canvas.data,
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", tmp.display()))?;

    std::fs::rename(&tmp, path)
        .with_context(|| format!("rename '{}' into place", path.display()))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> BrandgenResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
