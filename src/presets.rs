//! Preset definitions: parameterization over the one compositor, not
//! separate logic. Three historical entry points, each a list of presets.

use crate::color::Rgba8;
use crate::config::BrandConfig;
use crate::geometry::{Dim, ScaleSpec, VAnchor};

/// Caption parameters for a preset (OG only).
#[derive(Clone, Debug)]
pub struct CaptionSpec {
    pub text: String,
    pub size_px: f32,
    pub color: Rgba8,
    pub gap_px: u32,
}

/// One output asset: a canvas size, a scale/placement policy, and the file
/// name(s) it is written under. `aliases` covers the maskable variants,
/// which are byte-identical duplicates with no distinct safe-zone
/// treatment.
#[derive(Clone, Debug)]
pub struct Preset {
    pub file_name: String,
    pub aliases: Vec<String>,
    pub canvas_w: u32,
    pub canvas_h: u32,
    pub background: Rgba8,
    pub scale: ScaleSpec,
    pub anchor: VAnchor,
    pub caption: Option<CaptionSpec>,
}

/// Square icon sizes shared by the legacy and v2 generators.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// OG/social preview canvas.
pub const OG_CANVAS: (u32, u32) = (1200, 630);

/// White at 85% opacity, the OG caption fill.
pub const OG_CAPTION_COLOR: Rgba8 = Rgba8::rgba(255, 255, 255, 217);

/// Legacy generator: `pwa-{size}x{size}.png`, logo fitted inside a 60%
/// bounding box, downscale-only, exact center.
pub fn legacy_icon_presets(cfg: &BrandConfig) -> Vec<Preset> {
    ICON_SIZES
        .iter()
        .map(|&size| Preset {
            file_name: format!("pwa-{size}x{size}.png"),
            aliases: vec![],
            canvas_w: size,
            canvas_h: size,
            background: cfg.background,
            scale: ScaleSpec::FitWithin { fraction: 0.6 },
            anchor: VAnchor::Center,
            caption: None,
        })
        .collect()
}

/// v2 generator icons: `icon-{size}x{size}.png` plus the maskable alias,
/// logo at exactly 82% of canvas width (may upscale), exact center.
pub fn app_icon_presets(cfg: &BrandConfig) -> Vec<Preset> {
    ICON_SIZES
        .iter()
        .map(|&size| Preset {
            file_name: format!("icon-{size}x{size}.png"),
            aliases: vec![format!("icon-maskable-{size}x{size}.png")],
            canvas_w: size,
            canvas_h: size,
            background: cfg.background,
            scale: ScaleSpec::ExactWidth(Dim::CanvasFraction(0.82)),
            anchor: VAnchor::Center,
            caption: None,
        })
        .collect()
}

/// v2 OG image: logo at exactly 55% of canvas width, midpoint anchored at
/// 45% of canvas height to leave room for the caption below.
pub fn og_preset_v2(cfg: &BrandConfig) -> Preset {
    Preset {
        file_name: "og-image.png".to_string(),
        aliases: vec![],
        canvas_w: OG_CANVAS.0,
        canvas_h: OG_CANVAS.1,
        background: cfg.background,
        scale: ScaleSpec::ExactWidth(Dim::CanvasFraction(0.55)),
        anchor: VAnchor::Fraction(0.45),
        caption: Some(CaptionSpec {
            text: cfg.og_title.clone(),
            size_px: cfg.og_title_size_px,
            color: OG_CAPTION_COLOR,
            gap_px: 40,
        }),
    }
}

/// v1 OG image: logo at exactly 50% of canvas height, exact center, no
/// caption.
pub fn og_preset_v1(cfg: &BrandConfig) -> Preset {
    Preset {
        file_name: "og-image.png".to_string(),
        aliases: vec![],
        canvas_w: OG_CANVAS.0,
        canvas_h: OG_CANVAS.1,
        background: cfg.background,
        scale: ScaleSpec::ExactHeight(Dim::CanvasFraction(0.5)),
        anchor: VAnchor::Center,
        caption: None,
    }
}
