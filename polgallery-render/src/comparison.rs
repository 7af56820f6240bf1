use serde::Serialize;
use tracing::warn;

use polgallery_core::{Catalog, ComparisonSet, ImageRecord, COMPARISON_CAPACITY};

/// Placeholder shown in a slot with no image.
pub const EMPTY_SLOT_PROMPT: &str = "Empty slot. Add images from the gallery below.";

/// Contents of a filled comparison slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotImage {
    pub id: String,
    pub src: String,
    pub alt_text: String,
    pub quantity_id: &'static str,
    pub spin: &'static str,
    pub field: &'static str,
    pub angle: &'static str,
    pub filename: String,
}

impl SlotImage {
    fn new(record: &ImageRecord) -> Self {
        Self {
            id: record.id.clone(),
            src: record.src.clone(),
            alt_text: record.alt_text(),
            quantity_id: record.quantity_id,
            spin: record.spin,
            field: record.field,
            angle: record.angle,
            filename: record.filename.clone(),
        }
    }

    /// One-line caption, e.g. `lp — a = 0.9, MAD, 30°`.
    pub fn caption(&self) -> String {
        format!(
            "{} \u{2014} a = {}, {}, {}\u{b0}",
            self.quantity_id, self.spin, self.field, self.angle
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ComparisonSlot {
    Filled(SlotImage),
    Empty,
}

impl ComparisonSlot {
    pub fn image(&self) -> Option<&SlotImage> {
        match self {
            Self::Filled(image) => Some(image),
            Self::Empty => None,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

/// The fixed four-slot comparison panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    /// Slot `i` shows the `i`-th selected image.
    pub slots: [ComparisonSlot; COMPARISON_CAPACITY],
}

impl ComparisonView {
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }
}

impl Default for ComparisonView {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| ComparisonSlot::Empty),
        }
    }
}

pub fn build_comparison(catalog: &Catalog, selection: &ComparisonSet) -> ComparisonView {
    let slots = std::array::from_fn(|i| match selection.slot(i) {
        Some(id) => match catalog.get(id) {
            Some(record) => ComparisonSlot::Filled(SlotImage::new(record)),
            None => {
                warn!("Comparison slot {i} holds unknown image {id}");
                ComparisonSlot::Empty
            }
        },
        None => ComparisonSlot::Empty,
    });
    ComparisonView { slots }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_gives_four_empty_slots() {
        let view = build_comparison(&Catalog::standard(), &ComparisonSet::new());
        assert_eq!(view.slots.len(), 4);
        assert_eq!(view.filled(), 0);
        assert_eq!(view, ComparisonView::default());
    }

    #[test]
    fn caption_format() {
        let catalog = Catalog::standard();
        let mut selection = ComparisonSet::new();
        selection.toggle("lp-0.9-MAD-30").unwrap();
        let view = build_comparison(&catalog, &selection);
        let image = view.slots[0].image().unwrap();
        assert_eq!(image.caption(), "lp \u{2014} a = 0.9, MAD, 30\u{b0}");
        assert_eq!(image.filename, "0.9_MAD_30.png");
        assert_eq!(image.src, "lp/0.9_MAD_30.png");
    }

    #[test]
    fn unknown_id_renders_empty() {
        let catalog = Catalog::standard();
        let mut selection = ComparisonSet::new();
        selection.toggle("nope").unwrap();
        let view = build_comparison(&catalog, &selection);
        assert!(!view.slots[0].is_filled());
    }

    #[test]
    fn slots_serialize_with_state_tag() {
        let catalog = Catalog::standard();
        let mut selection = ComparisonSet::new();
        selection.toggle("I-0-SANE-1").unwrap();
        let json = serde_json::to_value(build_comparison(&catalog, &selection)).unwrap();
        assert_eq!(json["slots"][0]["state"], "filled");
        assert_eq!(json["slots"][0]["quantity_id"], "I");
        assert_eq!(json["slots"][1]["state"], "empty");
    }
}
