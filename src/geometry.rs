//! Integer geometry for scaling and placing an element inside a canvas.
//!
//! All derived dimensions use integer truncation, matching the historical
//! generator scripts: `h = trunc(w * src_h / src_w)` and symmetrically.
//! Truncation can leave a 1-pixel centering bias when the remainder is odd;
//! that bias is accepted.

use crate::error::{BrandgenError, BrandgenResult};

/// A target dimension, absolute or relative to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dim {
    Px(u32),
    CanvasFraction(f32),
}

impl Dim {
    fn resolve(self, canvas_dim: u32) -> BrandgenResult<u32> {
        match self {
            Dim::Px(px) => Ok(px),
            Dim::CanvasFraction(f) => {
                if !f.is_finite() || f <= 0.0 {
                    return Err(BrandgenError::validation(
                        "canvas fraction must be finite and > 0",
                    ));
                }
                Ok((f64::from(canvas_dim) * f64::from(f)).trunc() as u32)
            }
        }
    }
}

/// How the source is scaled onto the canvas.
///
/// `FitWithin` is downscale-only (a source already inside the box keeps its
/// size); the exact variants may upscale. In every case the scaled aspect
/// ratio matches the source aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleSpec {
    /// Fit inside a `trunc(cw*f) x trunc(ch*f)` bounding box, never enlarging.
    FitWithin { fraction: f32 },
    /// Scale to an exact target width.
    ExactWidth(Dim),
    /// Scale to an exact target height.
    ExactHeight(Dim),
}

impl ScaleSpec {
    /// Resolve to concrete element dimensions for `src` on `canvas`.
    pub fn resolve(
        self,
        canvas_w: u32,
        canvas_h: u32,
        src_w: u32,
        src_h: u32,
    ) -> BrandgenResult<(u32, u32)> {
        if canvas_w == 0 || canvas_h == 0 {
            return Err(BrandgenError::validation("canvas dimensions must be > 0"));
        }
        if src_w == 0 || src_h == 0 {
            return Err(BrandgenError::validation("source dimensions must be > 0"));
        }

        let (w, h) = match self {
            ScaleSpec::FitWithin { fraction } => {
                let box_w = Dim::CanvasFraction(fraction).resolve(canvas_w)?;
                let box_h = Dim::CanvasFraction(fraction).resolve(canvas_h)?;
                if src_w <= box_w && src_h <= box_h {
                    (src_w, src_h)
                } else {
                    let h_for_full_width = height_for_width(box_w, src_w, src_h);
                    if h_for_full_width <= box_h {
                        (box_w, h_for_full_width)
                    } else {
                        (width_for_height(box_h, src_w, src_h), box_h)
                    }
                }
            }
            ScaleSpec::ExactWidth(dim) => {
                let w = dim.resolve(canvas_w)?;
                (w, height_for_width(w, src_w, src_h))
            }
            ScaleSpec::ExactHeight(dim) => {
                let h = dim.resolve(canvas_h)?;
                (width_for_height(h, src_w, src_h), h)
            }
        };
        Ok((w.max(1), h.max(1)))
    }
}

fn height_for_width(w: u32, src_w: u32, src_h: u32) -> u32 {
    ((u64::from(w) * u64::from(src_h)) / u64::from(src_w)) as u32
}

fn width_for_height(h: u32, src_w: u32, src_h: u32) -> u32 {
    ((u64::from(h) * u64::from(src_w)) / u64::from(src_h)) as u32
}

/// Vertical anchor for the pasted element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VAnchor {
    /// Exact vertical center.
    Center,
    /// Element midpoint at `trunc(canvas_h * fraction)`.
    Fraction(f32),
}

/// Top-left paste position. May be negative for oversized elements; the
/// blit clips against canvas bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

/// Center horizontally, anchor vertically.
pub fn place(canvas_w: u32, canvas_h: u32, elem_w: u32, elem_h: u32, anchor: VAnchor) -> Placement {
    let x = (i64::from(canvas_w) - i64::from(elem_w)) / 2;
    let y = match anchor {
        VAnchor::Center => (i64::from(canvas_h) - i64::from(elem_h)) / 2,
        VAnchor::Fraction(f) => {
            let mid = (f64::from(canvas_h) * f64::from(f)).trunc() as i64;
            mid - i64::from(elem_h) / 2
        }
    };
    Placement { x, y }
}
