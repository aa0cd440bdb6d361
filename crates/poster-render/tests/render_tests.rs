mod common;

use common::*;
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use poster_render::constants::{BACKGROUND_COLOR, TEXT_COLOR};
use poster_render::layout::{CropPolicy, PixelRect, StampSide};
use poster_render::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn pixels_in(poster: &Poster, rect: &PixelRect) -> Vec<Rgba<u8>> {
    let Some(clipped) = rect.clip_to(poster.canvas.width(), poster.canvas.height()) else {
        return Vec::new();
    };
    let mut pixels = Vec::new();
    for y in clipped.y..clipped.bottom() {
        for x in clipped.x..clipped.right() {
            pixels.push(*poster.canvas.get_pixel(x as u32, y as u32));
        }
    }
    pixels
}

fn contains(rect: &PixelRect, x: i64, y: i64) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

#[test]
fn test_canvas_matches_page_geometry() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let record = record(write_photo(dir.path(), "a.png", 400, 300), Classification::None);
    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();

    assert_eq!(poster.canvas.dimensions(), (595, 842));
    assert_eq!(poster.geometry.margin, 18);
}

#[test]
fn test_layout_order_top_to_bottom() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let record = record(
        write_photo(dir.path(), "a.png", 640, 480),
        Classification::Labeled("Cold Case".to_string()),
    );
    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();
    let layout = &poster.layout;

    assert_eq!(layout.header.y, 18);
    assert!(layout.header_rule_y > layout.header.y);
    assert!(layout.photo.y > layout.header_rule_y);
    assert!(layout.name.y > layout.photo.bottom());
    assert!(layout.number.y > layout.name.bottom());
    assert!(layout.top_rule_y > layout.number.bottom());
    assert!(layout.bottom_rule_y > layout.top_rule_y);
    assert!(layout.footer.y > layout.bottom_rule_y);
    assert!(layout.footer.bottom() <= 842 - 18);

    // Square photo, centered in the usable width
    assert_eq!(layout.photo.width, layout.photo.height);
    assert_eq!(layout.photo.width, 505);
    assert_eq!(layout.photo.x, 18 + (559 - 505) / 2);

    // Blocks sit inside the band, in record order
    assert_eq!(layout.blocks.len(), 3);
    assert_eq!(layout.blocks[0].label, "Height");
    for window in layout.band.offsets.windows(2) {
        assert!(window[0] < window[1]);
    }
    assert!(!layout.band.overflows());
    assert!(layout.band.offsets[0] > layout.top_rule_y);
}

#[test]
fn test_photo_is_grayscale() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let record = record(write_photo(dir.path(), "a.png", 300, 300), Classification::None);
    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();

    for pixel in pixels_in(&poster, &poster.layout.photo) {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
        assert_eq!(pixel[3], 255);
    }
}

#[test]
fn test_photo_uses_601_luma_weights() {
    let red = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 0, 0])));
    let (picture, _) = render::prepare_photo(&red, 10);
    assert_eq!(*picture.get_pixel(5, 5), Rgba([76, 76, 76, 255]));

    let mixed = DynamicImage::ImageRgb8(RgbImage::from_fn(3, 1, |x, _| match x {
        0 => Rgb([0, 255, 0]),
        1 => Rgb([0, 0, 255]),
        _ => Rgb([200, 120, 40]),
    }));
    let gray = render::desaturate(&mixed);
    assert_eq!(gray.get_pixel(0, 0), &Rgb([149, 149, 149]));
    assert_eq!(gray.get_pixel(1, 0), &Rgb([29, 29, 29]));
    // (299 * 200 + 587 * 120 + 114 * 40) / 1000 = 134
    assert_eq!(gray.get_pixel(2, 0), &Rgb([134, 134, 134]));
}

#[test]
fn test_record_without_attributes_still_renders() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let mut record = record(write_photo(dir.path(), "a.png", 300, 300), Classification::None);
    record.attributes.clear();

    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();
    let layout = &poster.layout;

    assert!(layout.blocks.is_empty());
    assert!(layout.band.offsets.is_empty());
    assert_eq!(layout.footer_text, "PLEASE CALL - 123!");

    // Both band rules are drawn across the usable width
    let x = 18 + 10;
    assert_eq!(
        *poster.canvas.get_pixel(x, layout.top_rule_y as u32),
        TEXT_COLOR
    );
    assert_eq!(
        *poster.canvas.get_pixel(x, layout.bottom_rule_y as u32),
        TEXT_COLOR
    );
    // Nothing drawn between them
    let between = (layout.top_rule_y + layout.bottom_rule_y) / 2;
    assert_eq!(*poster.canvas.get_pixel(x, between as u32), BACKGROUND_COLOR);
}

#[test]
fn test_only_four_attributes_are_drawn() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let mut record = record(write_photo(dir.path(), "a.png", 300, 300), Classification::None);
    record.attributes = (0..6)
        .map(|i| Attribute::new(format!("Label {}", i), "short"))
        .collect();

    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(poster.layout.blocks.len(), 4);
    assert_eq!(poster.layout.blocks[3].label, "Label 3");

    let options = PosterOptions {
        max_attributes: 2,
        ..low_dpi_options()
    };
    let ctx = RenderContext::embedded(&options).unwrap();
    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(poster.layout.blocks.len(), 2);
}

#[test]
fn test_sentinel_classification_keeps_layout() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let photo = write_photo(dir.path(), "a.png", 500, 400);
    let phones = pool(&["0123"]);

    let hidden = render_poster(
        &ctx,
        &record(photo.clone(), Classification::parse("X")),
        &phones,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    let shown = render_poster(
        &ctx,
        &record(photo, Classification::Labeled("Cold Case".to_string())),
        &phones,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();

    let (a, b) = (&hidden.layout, &shown.layout);
    assert!(!a.stamp_visible);
    assert!(b.stamp_visible);
    assert_eq!(a.header, b.header);
    assert_eq!(a.photo, b.photo);
    assert_eq!(a.name, b.name);
    assert_eq!(a.number, b.number);
    assert_eq!(a.top_rule_y, b.top_rule_y);
    assert_eq!(a.bottom_rule_y, b.bottom_rule_y);
    assert_eq!(a.band, b.band);
    assert_eq!(a.blocks, b.blocks);
    assert_eq!(a.footer, b.footer);
    assert_eq!(a.stamp_side, StampSide::Right);
    assert_eq!(b.stamp_side, StampSide::Right);

    // Sentinel stamp area is untouched page
    assert!(
        pixels_in(&hidden, &a.stamp)
            .iter()
            .all(|p| *p == BACKGROUND_COLOR)
    );
    assert!(
        pixels_in(&shown, &b.stamp)
            .iter()
            .any(|p| *p != BACKGROUND_COLOR)
    );

    // Everything outside the stamps is pixel-identical
    for (x, y, pixel) in hidden.canvas.enumerate_pixels() {
        let (x, y) = (i64::from(x), i64::from(y));
        if contains(&a.stamp, x, y) || contains(&b.stamp, x, y) {
            continue;
        }
        assert_eq!(pixel, shown.canvas.get_pixel(x as u32, y as u32));
    }
}

#[test]
fn test_stamp_is_vertical() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let record = record(
        write_photo(dir.path(), "a.png", 300, 300),
        Classification::Labeled("Cold Case".to_string()),
    );
    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();
    let stamp = poster.layout.stamp;

    assert!(stamp.height > stamp.width);
    // Vertically centered on the photo
    let photo = poster.layout.photo;
    let photo_center = photo.y + i64::from(photo.height) / 2;
    let stamp_center = stamp.y + i64::from(stamp.height) / 2;
    assert!((photo_center - stamp_center).abs() <= 1);
    assert!(stamp.x >= photo.right());
}

#[test]
fn test_document_scan_crop() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let record = record(write_photo(dir.path(), "scan.png", 707, 1000), Classification::None);
    let poster = render_poster(&ctx, &record, &pool(&["123"]), &mut StdRng::seed_from_u64(1))
        .unwrap();

    let crop = poster.layout.crop;
    assert_eq!(crop.policy, CropPolicy::DocumentPage);
    assert_eq!((crop.x, crop.y), (0, 146));
    assert_eq!((crop.width, crop.height), (707, 707));
    assert_eq!(poster.layout.photo.width, 505);
}

#[test]
fn test_single_number_pool_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let ctx = context();
    let record = record(
        write_photo(dir.path(), "a.png", 320, 240),
        Classification::Labeled("Unsolved".to_string()),
    );
    let phones = pool(&["017621663536"]);

    let first = render_poster(&ctx, &record, &phones, &mut StdRng::seed_from_u64(1)).unwrap();
    let second = render_poster(&ctx, &record, &phones, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(first.layout, second.layout);
    assert!(first.canvas == second.canvas);
    assert_eq!(first.layout.footer_text, "PLEASE CALL - 017621663536!");
}

#[test]
fn test_phone_number_comes_from_pool() {
    let phones = pool(&["111", "222", "333"]);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let number = choose_phone_number(&phones, &mut rng).unwrap();
        assert!(phones.iter().any(|p| p == number));
    }
}

#[test]
fn test_empty_phone_pool_is_rejected() {
    let ctx = context();
    let record = record("/nonexistent/photo.png".into(), Classification::None);

    match render_poster(&ctx, &record, &[], &mut StdRng::seed_from_u64(1)) {
        Err(PosterError::Config(msg)) => assert!(msg.contains("empty")),
        other => panic!("Expected Config error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_image_reports_path() {
    let ctx = context();
    let record = record("/nonexistent/photo.png".into(), Classification::None);

    match render_poster(&ctx, &record, &pool(&["1"]), &mut StdRng::seed_from_u64(1)) {
        Err(PosterError::ImageOpen { path, .. }) => {
            assert_eq!(path, std::path::PathBuf::from("/nonexistent/photo.png"));
        }
        other => panic!("Expected ImageOpen error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_custom_title_and_footer() {
    let dir = TempDir::new().unwrap();
    let options = PosterOptions {
        title: "WANTED".to_string(),
        footer_template: "Call {number} now".to_string(),
        ..low_dpi_options()
    };
    let ctx = RenderContext::embedded(&options).unwrap();
    let record = record(write_photo(dir.path(), "a.png", 200, 200), Classification::None);
    let poster = render_poster(&ctx, &record, &pool(&["42"]), &mut StdRng::seed_from_u64(1))
        .unwrap();

    assert_eq!(poster.layout.footer_text, "Call 42 now");
    assert_eq!(ctx.footer_text("7"), "Call 7 now");
}

#[test]
fn test_oversized_stamp_is_clamped_to_left_margin() {
    let dir = TempDir::new().unwrap();
    let options = PosterOptions {
        font_sizes: FontSizes {
            classification_in: 14.0,
            ..FontSizes::default()
        },
        ..low_dpi_options()
    };
    let ctx = RenderContext::embedded(&options).unwrap();
    let photo = write_photo(dir.path(), "a.png", 300, 300);
    let phones = pool(&["123"]);

    let shown = render_poster(
        &ctx,
        &record(photo.clone(), Classification::Labeled("Top Secret".to_string())),
        &phones,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    let hidden = render_poster(
        &ctx,
        &record(photo, Classification::None),
        &phones,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();

    // Too wide for either side of a 505px photo on a 559px usable width
    let stamp = shown.layout.stamp;
    assert_eq!(shown.layout.stamp_side, StampSide::Clamped);
    assert!(stamp.width > 559);
    assert_eq!(stamp.x, 18);

    // The visible part lands on the page, starting at the left margin
    let visible = stamp.clip_to(595, 842).unwrap();
    assert_eq!(visible.x, 18);
    assert_eq!(visible.right(), 595);
    assert!(visible.width > 0 && visible.height > 0);
    assert!(
        pixels_in(&shown, &stamp)
            .iter()
            .zip(pixels_in(&hidden, &stamp))
            .any(|(a, b)| *a != b)
    );

    // Clamping moves only the stamp
    assert_eq!(shown.layout.photo, hidden.layout.photo);
    assert_eq!(shown.layout.band, hidden.layout.band);
    assert_eq!(shown.layout.footer, hidden.layout.footer);
}
