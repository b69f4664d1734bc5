use std::path::{Path, PathBuf};

use brandgen::{BrandConfig, BrandgenError, FontResolver, fonts};

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("pipeline_tests").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_logo_png(path: &Path, w: u32, h: u32, px: [u8; 4]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    img.save(path).unwrap();
}

fn config_for(dir: &Path) -> BrandConfig {
    BrandConfig {
        logo: dir.join("public").join("logo.png"),
        out_dir: dir.join("out"),
        // No caption font: keeps OG output deterministic across hosts.
        font_candidates: vec![],
        ..BrandConfig::default()
    }
}

fn listed_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|rd| {
            rd.filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[test]
fn asset_suite_writes_icons_maskable_aliases_and_og() {
    let dir = fixture_dir("suite");
    let cfg = config_for(&dir);
    write_logo_png(&cfg.logo, 800, 400, [255, 0, 0, 255]);

    let summary = brandgen::run_asset_suite(&cfg).unwrap();
    assert_eq!(summary.written.len(), 5);
    assert_eq!(
        listed_files(&cfg.out_dir),
        [
            "icon-192x192.png",
            "icon-512x512.png",
            "icon-maskable-192x192.png",
            "icon-maskable-512x512.png",
            "og-image.png",
        ]
    );

    let og = image::open(cfg.out_dir.join("og-image.png")).unwrap().to_rgba8();
    assert_eq!(og.dimensions(), (1200, 630));
    // Corner is untouched brand blue; logo interior is the source red.
    assert_eq!(og.get_pixel(0, 0).0, [45, 140, 255, 255]);
    assert_eq!(og.get_pixel(600, 280).0, [255, 0, 0, 255]);

    let icon = image::open(cfg.out_dir.join("icon-512x512.png")).unwrap().to_rgba8();
    assert_eq!(icon.dimensions(), (512, 512));
}

#[test]
fn maskable_alias_is_byte_identical() {
    let dir = fixture_dir("maskable");
    let cfg = config_for(&dir);
    write_logo_png(&cfg.logo, 640, 320, [0, 128, 64, 255]);

    brandgen::run_asset_suite(&cfg).unwrap();
    let a = std::fs::read(cfg.out_dir.join("icon-512x512.png")).unwrap();
    let b = std::fs::read(cfg.out_dir.join("icon-maskable-512x512.png")).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn legacy_icons_fit_without_upscaling() {
    let dir = fixture_dir("legacy");
    let cfg = config_for(&dir);
    write_logo_png(&cfg.logo, 100, 50, [10, 200, 30, 255]);

    let summary = brandgen::run_legacy_icons(&cfg).unwrap();
    assert_eq!(summary.written.len(), 2);

    let pwa = image::open(cfg.out_dir.join("pwa-512x512.png")).unwrap().to_rgba8();
    assert_eq!(pwa.dimensions(), (512, 512));
    // 100x50 source stays its own size inside the 60% box: left edge at
    // (512-100)/2 = 206.
    assert_eq!(pwa.get_pixel(206, 256).0, [10, 200, 30, 255]);
    assert_eq!(pwa.get_pixel(205, 256).0, [45, 140, 255, 255]);
}

#[test]
fn reruns_are_byte_identical() {
    let dir = fixture_dir("idempotent");
    let cfg = config_for(&dir);
    write_logo_png(&cfg.logo, 300, 200, [200, 100, 50, 255]);

    brandgen::run_asset_suite(&cfg).unwrap();
    let first = std::fs::read(cfg.out_dir.join("icon-512x512.png")).unwrap();
    let first_og = std::fs::read(cfg.out_dir.join("og-image.png")).unwrap();

    brandgen::run_asset_suite(&cfg).unwrap();
    let second = std::fs::read(cfg.out_dir.join("icon-512x512.png")).unwrap();
    let second_og = std::fs::read(cfg.out_dir.join("og-image.png")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_og, second_og);
}

#[test]
fn missing_logo_aborts_legacy_run_with_no_output() {
    let dir = fixture_dir("legacy_missing");
    let cfg = config_for(&dir);

    let err = brandgen::run_legacy_icons(&cfg).unwrap_err();
    assert!(matches!(err, BrandgenError::MissingInput(_)));
    assert!(listed_files(&cfg.out_dir).is_empty());
}

#[test]
fn missing_logo_skips_suite_assets_and_still_fails() {
    let dir = fixture_dir("suite_missing");
    let cfg = config_for(&dir);

    let err = brandgen::run_asset_suite(&cfg).unwrap_err();
    assert!(matches!(err, BrandgenError::MissingInput(_)));
    // Never a partially-written or zero-byte PNG.
    assert!(listed_files(&cfg.out_dir).is_empty());
}

#[test]
fn no_temp_files_survive_a_run() {
    let dir = fixture_dir("tmp_clean");
    let cfg = config_for(&dir);
    write_logo_png(&cfg.logo, 256, 256, [1, 2, 3, 255]);

    brandgen::run_asset_suite(&cfg).unwrap();
    assert!(
        listed_files(&cfg.out_dir)
            .iter()
            .all(|name| name.ends_with(".png"))
    );
}

#[test]
fn og_caption_is_drawn_when_a_system_font_exists() {
    let candidates = FontResolver::default_candidates();
    if !fonts::any_candidate_on_disk(&candidates) {
        // Host has none of the known system fonts; resolution fallback is
        // covered by the deterministic no-font tests above.
        return;
    }

    let dir = fixture_dir("captioned");
    let cfg = BrandConfig {
        logo: dir.join("public").join("logo.png"),
        out_dir: dir.join("out"),
        ..BrandConfig::default()
    };
    write_logo_png(&cfg.logo, 800, 400, [255, 0, 0, 255]);

    brandgen::run_asset_suite(&cfg).unwrap();
    let og = image::open(cfg.out_dir.join("og-image.png")).unwrap().to_rgba8();

    // Logo occupies rows 118..448; the caption sits 40px below it, so some
    // pixel down there must differ from the plain background.
    let caption_rows = 448u32..630;
    let has_ink = caption_rows
        .flat_map(|y| (0..1200u32).map(move |x| (x, y)))
        .any(|(x, y)| og.get_pixel(x, y).0 != [45, 140, 255, 255]);
    assert!(has_ink, "expected caption pixels below the logo");
}
