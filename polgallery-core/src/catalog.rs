use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Domains, QuantityDefinition};
use crate::error::CoreError;

/// One pre-rendered image in the gallery.
///
/// Every field is derived from the owning quantity and the
/// (spin, field, angle) combination; nothing is read from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    /// `"{quantity}-{spin}-{field}-{angle}"`.
    pub id: String,
    pub quantity_id: &'static str,
    pub quantity_label: &'static str,
    pub folder: &'static str,
    pub spin: &'static str,
    pub field: &'static str,
    pub angle: &'static str,
    /// `"{spin}_{field}_{angle}.png"`.
    pub filename: String,
    /// `"{folder}/{filename}"`, relative to the asset root.
    pub src: String,
}

impl ImageRecord {
    fn new(
        quantity: &'static QuantityDefinition,
        spin: &'static str,
        field: &'static str,
        angle: &'static str,
    ) -> Self {
        let filename = format!("{spin}_{field}_{angle}.png");
        let src = format!("{}/{filename}", quantity.folder);
        Self {
            id: image_id(quantity.id, spin, field, angle),
            quantity_id: quantity.id,
            quantity_label: quantity.label,
            folder: quantity.folder,
            spin,
            field,
            angle,
            filename,
            src,
        }
    }

    /// Accessible description used as image alt text.
    pub fn alt_text(&self) -> String {
        format!(
            "{}, spin {}, {}, angle {}\u{b0}",
            self.quantity_label, self.spin, self.field, self.angle
        )
    }
}

/// Compose the catalog id for a parameter combination.
pub fn image_id(quantity: &str, spin: &str, field: &str, angle: &str) -> String {
    format!("{quantity}-{spin}-{field}-{angle}")
}

/// The immutable set of all gallery images plus an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    domains: Domains,
    records: Vec<ImageRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the full cross product of `domains`.
    ///
    /// Records are ordered quantity, then spin, then field, then angle, each
    /// in declaration order.
    pub fn build(domains: Domains) -> Self {
        let quantities: &'static [QuantityDefinition] = domains.quantities;
        let mut records = Vec::with_capacity(domains.combinations());
        for quantity in quantities {
            for &spin in domains.spins {
                for &field in domains.fields {
                    for &angle in domains.angles {
                        records.push(ImageRecord::new(quantity, spin, field, angle));
                    }
                }
            }
        }

        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();

        debug!("Built catalog with {} images", records.len());
        Self {
            domains,
            records,
            index,
        }
    }

    /// Build the catalog for the built-in parameter grid.
    pub fn standard() -> Self {
        Self::build(Domains::standard())
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Like [`get`](Self::get) but reports a missing id as an error.
    pub fn require(&self, id: &str) -> crate::Result<&ImageRecord> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownImage(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
