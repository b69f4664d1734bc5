//! brandgen renders the Proforma Calculator brand assets by compositing
//! the product logo onto solid-color canvases.
//!
//! One parameterized compositor ([`compose::compose`]) sits behind every
//! output: PWA icons, app icons with maskable aliases, and the OG/social
//! preview image. Presets are data ([`presets`]), not duplicated logic;
//! the three historical generator scripts survive as CLI subcommands over
//! the same pipeline.
//!
//! The pixel pipeline is premultiplied RGBA8 end-to-end: decode
//! premultiplies, the paste is a premultiplied source-over blend (the
//! source alpha is the mask), and captions rasterize through Parley +
//! `vello_cpu` into a layer blended the same way.
#![forbid(unsafe_code)]

pub mod assets;
pub mod color;
pub mod compose;
pub mod composite;
pub mod config;
pub mod error;
pub mod fonts;
pub mod geometry;
pub mod pipeline;
pub mod presets;
pub mod text;

pub use assets::{SourceImage, decode_image, load_source_image};
pub use color::Rgba8;
pub use compose::{Canvas, TextOverlay, compose as compose_asset};
pub use config::{BRAND_BLUE, BrandConfig};
pub use error::{BrandgenError, BrandgenResult};
pub use fonts::FontResolver;
pub use geometry::{Dim, Placement, ScaleSpec, VAnchor, place};
pub use pipeline::{RunSummary, run_asset_suite, run_legacy_icons, run_og_v1};
pub use presets::{CaptionSpec, Preset};
