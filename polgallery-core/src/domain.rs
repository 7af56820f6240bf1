//! The fixed parameter grid the gallery images were rendered over.

use serde::Serialize;

/// One physical quantity shown in the gallery.
///
/// Declaration order in [`QUANTITIES`] is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityDefinition {
    /// Short code, e.g. `"lp"`. Also the first component of every image id.
    pub id: &'static str,
    /// Asset folder holding this quantity's images.
    pub folder: &'static str,
    /// Human-readable heading.
    pub label: &'static str,
}

pub const QUANTITIES: [QuantityDefinition; 4] = [
    QuantityDefinition {
        id: "I",
        folder: "I",
        label: "Total intensity (Stokes I)",
    },
    QuantityDefinition {
        id: "lp",
        folder: "lp",
        label: "Linear polarization (LP)",
    },
    QuantityDefinition {
        id: "cp",
        folder: "cp",
        label: "Circular polarization (CP)",
    },
    QuantityDefinition {
        id: "evpa",
        folder: "evpa",
        label: "EVPA",
    },
];

/// Dimensionless black-hole spin `a`.
pub const SPINS: [&str; 2] = ["0", "0.9"];

/// Accretion-flow magnetic field state.
pub const FIELDS: [&str; 2] = ["MAD", "SANE"];

/// Viewing inclination in degrees.
pub const ANGLES: [&str; 4] = ["1", "30", "60", "90"];

/// The four parameter domains a catalog is built from.
///
/// Values are kept as the exact strings used in file names and ids; numeric
/// interpretation happens only when ordering cards for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domains {
    pub quantities: &'static [QuantityDefinition],
    pub spins: &'static [&'static str],
    pub fields: &'static [&'static str],
    pub angles: &'static [&'static str],
}

impl Domains {
    /// The built-in grid: 4 quantities × 2 spins × 2 fields × 4 angles.
    pub const fn standard() -> Self {
        Self {
            quantities: &QUANTITIES,
            spins: &SPINS,
            fields: &FIELDS,
            angles: &ANGLES,
        }
    }

    /// Number of combinations in the cross product.
    pub fn combinations(&self) -> usize {
        self.quantities.len() * self.spins.len() * self.fields.len() * self.angles.len()
    }

    /// Look up a quantity by its short code.
    pub fn quantity(&self, id: &str) -> Option<&'static QuantityDefinition> {
        let quantities: &'static [QuantityDefinition] = self.quantities;
        quantities.iter().find(|q| q.id == id)
    }
}

impl Default for Domains {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grid_has_64_combinations() {
        assert_eq!(Domains::standard().combinations(), 64);
    }

    #[test]
    fn quantity_lookup() {
        let d = Domains::standard();
        assert_eq!(d.quantity("cp").map(|q| q.label), Some("Circular polarization (CP)"));
        assert!(d.quantity("CP").is_none());
    }

    #[test]
    fn folders_match_ids() {
        for q in QUANTITIES {
            assert_eq!(q.id, q.folder);
        }
    }
}
