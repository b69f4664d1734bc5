//! The Asset Compositor: one parameterized operation behind every preset.
//!
//! `compose` fills a canvas with an opaque background, resizes the source
//! logo per the scale spec (Lanczos3), pastes it centered with the source
//! alpha as the mask, and optionally draws a centered caption below it.

use crate::assets::SourceImage;
use crate::color::Rgba8;
use crate::composite;
use crate::error::{BrandgenError, BrandgenResult};
use crate::geometry::{Placement, ScaleSpec, VAnchor, place};
use crate::text::{self, TextLayoutEngine};

/// Output raster under construction. Pixels are premultiplied RGBA8; with
/// an opaque background the premultiplied and straight forms coincide, so
/// the buffer encodes to PNG as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas fully initialized to `background`.
    pub fn new_filled(width: u32, height: u32, background: Rgba8) -> BrandgenResult<Self> {
        if width == 0 || height == 0 {
            return Err(BrandgenError::validation("canvas dimensions must be > 0"));
        }
        let px = background.to_premul();
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for chunk in data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Blend a premultiplied tile over this canvas at `(x, y)`, clipped.
    pub fn blit_over(
        &mut self,
        src: &[u8],
        src_w: u32,
        src_h: u32,
        x: i64,
        y: i64,
    ) -> BrandgenResult<()> {
        composite::blit_over(
            &mut self.data,
            self.width,
            self.height,
            src,
            src_w,
            src_h,
            x,
            y,
        )
    }
}

/// Caption drawn below the logo on the OG preset.
#[derive(Clone, Debug)]
pub struct TextOverlay {
    pub text: String,
    pub size_px: f32,
    pub color: Rgba8,
    /// Vertical gap between the logo's bottom edge and the text block.
    pub gap_px: u32,
    /// Resolved font file bytes.
    pub font_bytes: Vec<u8>,
}

/// Composite one asset: background fill, aspect-preserving resize, centered
/// paste, optional caption. Pure in-memory; persistence is the pipeline's
/// job.
pub fn compose(
    source: &SourceImage,
    canvas_w: u32,
    canvas_h: u32,
    background: Rgba8,
    scale: ScaleSpec,
    anchor: VAnchor,
    overlay: Option<&TextOverlay>,
) -> BrandgenResult<Canvas> {
    let mut canvas = Canvas::new_filled(canvas_w, canvas_h, background)?;

    let (elem_w, elem_h) = scale.resolve(canvas_w, canvas_h, source.width, source.height)?;
    let resized = resize_premul(source, elem_w, elem_h)?;
    let placement = place(canvas_w, canvas_h, elem_w, elem_h, anchor);
    canvas.blit_over(&resized, elem_w, elem_h, placement.x, placement.y)?;

    if let Some(overlay) = overlay {
        draw_caption(&mut canvas, overlay, placement, elem_h)?;
    }
    Ok(canvas)
}

/// Resize to exact target dimensions with Lanczos3. A same-size request
/// returns a copy without resampling, so the legacy downscale-only fit
/// leaves small logos pixel-identical.
fn resize_premul(source: &SourceImage, w: u32, h: u32) -> BrandgenResult<Vec<u8>> {
    if w == source.width && h == source.height {
        return Ok(source.rgba8_premul.clone());
    }
    let img = image::RgbaImage::from_raw(
        source.width,
        source.height,
        source.rgba8_premul.clone(),
    )
    .ok_or_else(|| BrandgenError::validation("source buffer length mismatch"))?;
    let resized = image::imageops::resize(&img, w, h, image::imageops::FilterType::Lanczos3);
    Ok(resized.into_raw())
}

fn draw_caption(
    canvas: &mut Canvas,
    overlay: &TextOverlay,
    logo_placement: Placement,
    logo_h: u32,
) -> BrandgenResult<()> {
    let mut engine = TextLayoutEngine::new();
    let layout = engine.layout_plain(
        &overlay.text,
        &overlay.font_bytes,
        overlay.size_px,
        overlay.color.into(),
    )?;

    let (text_w, _text_h) = text::measure(&layout);
    let x = ((i64::from(canvas.width) - text_w.trunc() as i64) / 2) as f64;
    let y = (logo_placement.y + i64::from(logo_h) + i64::from(overlay.gap_px)) as f64;

    let layer = text::rasterize_layer(
        canvas.width,
        canvas.height,
        &layout,
        &overlay.font_bytes,
        x,
        y,
    )?;
    composite::over_in_place(&mut canvas.data, &layer)
}
