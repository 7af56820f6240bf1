//! Filtered, grouped, and ordered gallery view.
//!
//! The view is a plain data tree: the UI layer draws it, tests inspect it.
//! Building is a pure function of the catalog, the filter and the current
//! comparison selection, so rebuilding with unchanged inputs yields an equal
//! view that replaces the old one wholesale.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use polgallery_core::{Catalog, ComparisonSet, FilterSpec, ImageRecord};

/// Button label for a card already pinned to the comparison panel.
pub const IN_COMPARISON_LABEL: &str = "In comparison";
/// Button label for a card that can be pinned.
pub const ADD_TO_COMPARISON_LABEL: &str = "Add to comparison";

/// One thumbnail in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryCard {
    /// Catalog id, also the payload of the toggle affordance.
    pub id: String,
    pub src: String,
    pub filename: String,
    pub alt_text: String,
    pub spin: &'static str,
    pub field: &'static str,
    pub angle: &'static str,
    pub in_comparison: bool,
    /// [`IN_COMPARISON_LABEL`] or [`ADD_TO_COMPARISON_LABEL`].
    pub toggle_label: &'static str,
}

impl GalleryCard {
    fn new(record: &ImageRecord, selection: &ComparisonSet) -> Self {
        let in_comparison = selection.contains(&record.id);
        Self {
            id: record.id.clone(),
            src: record.src.clone(),
            filename: record.filename.clone(),
            alt_text: record.alt_text(),
            spin: record.spin,
            field: record.field,
            angle: record.angle,
            in_comparison,
            toggle_label: if in_comparison {
                IN_COMPARISON_LABEL
            } else {
                ADD_TO_COMPARISON_LABEL
            },
        }
    }
}

/// All visible cards of one quantity, under a heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryGroup {
    pub quantity_id: &'static str,
    pub quantity_label: &'static str,
    pub cards: Vec<GalleryCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GalleryView {
    /// Non-empty groups in quantity declaration order.
    pub groups: Vec<GalleryGroup>,
}

impl GalleryView {
    /// Total number of visible cards.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every visible card in display order.
    pub fn cards(&self) -> impl Iterator<Item = &GalleryCard> {
        self.groups.iter().flat_map(|g| g.cards.iter())
    }
}

/// Display ordering inside a quantity group.
///
/// Spin and angle compare numerically, field compares lexicographically.
/// Values that fail to parse as numbers compare equal on that key.
pub fn compare_records(a: &ImageRecord, b: &ImageRecord) -> Ordering {
    compare_numeric(a.spin, b.spin)
        .then_with(|| a.field.cmp(b.field))
        .then_with(|| compare_numeric(a.angle, b.angle))
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Build the gallery for the records that pass `filter`.
pub fn build_gallery(
    catalog: &Catalog,
    filter: &FilterSpec,
    selection: &ComparisonSet,
) -> GalleryView {
    let visible = filter.apply(catalog);

    let groups: Vec<GalleryGroup> = catalog
        .domains()
        .quantities
        .iter()
        .filter_map(|quantity| {
            let mut records: Vec<&ImageRecord> = visible
                .iter()
                .copied()
                .filter(|r| r.quantity_id == quantity.id)
                .collect();
            if records.is_empty() {
                return None;
            }
            records.sort_by(|a, b| compare_records(a, b));
            Some(GalleryGroup {
                quantity_id: quantity.id,
                quantity_label: quantity.label,
                cards: records
                    .into_iter()
                    .map(|r| GalleryCard::new(r, selection))
                    .collect(),
            })
        })
        .collect();

    debug!(
        "Gallery rebuilt: {} images in {} groups",
        visible.len(),
        groups.len()
    );
    GalleryView { groups }
}
