use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use polgallery_core::{Catalog, ComparisonSet, CoreError, FilterSpec};
use polgallery_render::comparison::EMPTY_SLOT_PROMPT;
use polgallery_render::{
    build_comparison, build_gallery, compare_records, decode_batch, decode_png, AssetRequest,
    ComparisonSlot, RenderError,
};

fn ids(view: &polgallery_render::GalleryView) -> Vec<String> {
    view.cards().map(|c| c.id.clone()).collect()
}

#[test]
fn lp_mad_view_is_sorted_by_spin_then_angle() {
    let catalog = Catalog::standard();
    let filter = FilterSpec::from_raw("lp", "", "MAD", "");
    let view = build_gallery(&catalog, &filter, &ComparisonSet::new());

    assert_eq!(view.groups.len(), 1);
    assert_eq!(
        ids(&view),
        [
            "lp-0-MAD-1",
            "lp-0-MAD-30",
            "lp-0-MAD-60",
            "lp-0-MAD-90",
            "lp-0.9-MAD-1",
            "lp-0.9-MAD-30",
            "lp-0.9-MAD-60",
            "lp-0.9-MAD-90",
        ]
    );
}

#[test]
fn unfiltered_view_covers_whole_catalog() {
    let catalog = Catalog::standard();
    let view = build_gallery(&catalog, &FilterSpec::default(), &ComparisonSet::new());

    let group_ids: Vec<&str> = view.groups.iter().map(|g| g.quantity_id).collect();
    assert_eq!(group_ids, ["I", "lp", "cp", "evpa"]);

    let shown: HashSet<String> = view.cards().map(|c| c.id.clone()).collect();
    let all: HashSet<String> = catalog.iter().map(|r| r.id.clone()).collect();
    assert_eq!(shown, all);
    assert_eq!(view.len(), 64);
}

#[test]
fn groups_are_sorted() {
    let catalog = Catalog::standard();
    let view = build_gallery(&catalog, &FilterSpec::default(), &ComparisonSet::new());

    for group in &view.groups {
        for pair in group.cards.windows(2) {
            let a = catalog.get(&pair[0].id).unwrap();
            let b = catalog.get(&pair[1].id).unwrap();
            assert_ne!(compare_records(a, b), Ordering::Greater, "{} > {}", a.id, b.id);

            let (sa, sb): (f64, f64) = (a.spin.parse().unwrap(), b.spin.parse().unwrap());
            let (aa, ab): (f64, f64) = (a.angle.parse().unwrap(), b.angle.parse().unwrap());
            assert!(
                sa < sb || (sa == sb && a.field < b.field) || (sa == sb && a.field == b.field && aa <= ab)
            );
        }
    }
}

#[test]
fn rebuild_is_idempotent() {
    let catalog = Catalog::standard();
    let filter = FilterSpec::from_raw("", "0", "", "60");
    let mut selection = ComparisonSet::new();
    selection.toggle("I-0-SANE-60").unwrap();

    let first = build_gallery(&catalog, &filter, &selection);
    let second = build_gallery(&catalog, &filter, &selection);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn four_toggles_fill_four_slots() {
    let catalog = Catalog::standard();
    let mut selection = ComparisonSet::new();
    let picks = ["I-0-MAD-1", "lp-0-MAD-1", "cp-0-MAD-1", "evpa-0-MAD-1"];
    for id in picks {
        selection.toggle(id).unwrap();
    }

    let view = build_comparison(&catalog, &selection);
    for (slot, id) in view.slots.iter().zip(picks) {
        let image = slot.image().expect("slot filled");
        assert_eq!(image.id, id);
        assert_eq!(image.spin, "0");
        assert_eq!(image.field, "MAD");
        assert_eq!(image.angle, "1");
        assert_eq!(image.filename, "0_MAD_1.png");
    }
    assert_eq!(view.slots[3].image().unwrap().quantity_id, "evpa");
}

#[test]
fn full_panel_rejects_then_shifts_on_removal() {
    let catalog = Catalog::standard();
    let mut selection = ComparisonSet::new();
    for id in ["I-0-MAD-1", "lp-0-MAD-1", "cp-0-MAD-1", "evpa-0-MAD-1"] {
        selection.toggle(id).unwrap();
    }
    let before = build_comparison(&catalog, &selection);

    let err = selection.toggle("cp-0.9-SANE-90").unwrap_err();
    assert_eq!(err.to_string(), "You can compare at most 4 images at a time.");
    let render_err: RenderError = err.into();
    assert!(matches!(
        render_err,
        RenderError::Core(CoreError::ComparisonFull { capacity: 4 })
    ));
    assert_eq!(build_comparison(&catalog, &selection), before);

    selection.toggle("I-0-MAD-1").unwrap();
    let after = build_comparison(&catalog, &selection);
    let slot_ids: Vec<Option<&str>> = after
        .slots
        .iter()
        .map(|s| s.image().map(|i| i.id.as_str()))
        .collect();
    assert_eq!(
        slot_ids,
        [
            Some("lp-0-MAD-1"),
            Some("cp-0-MAD-1"),
            Some("evpa-0-MAD-1"),
            None
        ]
    );
    assert_eq!(after.slots[3], ComparisonSlot::Empty);
    assert!(!EMPTY_SLOT_PROMPT.is_empty());

    let gallery = build_gallery(&catalog, &FilterSpec::default(), &selection);
    let pinned: Vec<&str> = gallery
        .cards()
        .filter(|c| c.in_comparison)
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(pinned.len(), 3);
    assert!(!pinned.contains(&"I-0-MAD-1"));
}

// ---------------------------------------------------------------------------
// Asset decoding
// ---------------------------------------------------------------------------

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("polgallery-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &Path, width: u32, height: u32, color: png::ColorType, data: &[u8]) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
}

#[test]
fn decode_rgb_png_expands_to_rgba() {
    let dir = scratch_dir("rgb");
    let path = dir.join("0_MAD_1.png");
    write_png(&path, 2, 1, png::ColorType::Rgb, &[10, 20, 30, 40, 50, 60]);

    let image = decode_png(&path).unwrap();
    assert_eq!((image.width, image.height), (2, 1));
    assert_eq!(image.pixels, [10, 20, 30, 255, 40, 50, 60, 255]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn decode_grayscale_png() {
    let dir = scratch_dir("gray");
    let path = dir.join("g.png");
    write_png(&path, 1, 2, png::ColorType::Grayscale, &[7, 200]);

    let image = decode_png(&path).unwrap();
    assert_eq!(image.pixels, [7, 7, 7, 255, 200, 200, 200, 255]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn batch_keeps_order_and_reports_failures() {
    let root = scratch_dir("batch");
    std::fs::create_dir_all(root.join("I")).unwrap();
    write_png(
        &root.join("I").join("0_MAD_1.png"),
        1,
        1,
        png::ColorType::Rgba,
        &[1, 2, 3, 4],
    );
    std::fs::write(root.join("I").join("0_MAD_30.png"), b"not a png").unwrap();

    let catalog = Catalog::standard();
    let requests: Vec<AssetRequest> = ["I-0-MAD-1", "I-0-MAD-30", "I-0-MAD-60"]
        .iter()
        .map(|id| AssetRequest::for_record(&root, catalog.get(id).unwrap()))
        .collect();
    let results = decode_batch(&requests);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].0, "I-0-MAD-1");
    assert_eq!(results[0].1.as_ref().unwrap().pixels, [1, 2, 3, 4]);
    assert!(matches!(results[1].1, Err(RenderError::Decode { .. })));
    assert!(matches!(results[2].1, Err(RenderError::Io { .. })));

    std::fs::remove_dir_all(&root).ok();
}
