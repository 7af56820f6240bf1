use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ImageRecord};
use crate::domain::Domains;
use crate::error::CoreError;

/// Which of the four parameters a filter value constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Quantity,
    Spin,
    Field,
    Angle,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [Self::Quantity, Self::Spin, Self::Field, Self::Angle];

    pub fn label(self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::Spin => "spin",
            Self::Field => "field",
            Self::Angle => "angle",
        }
    }

    /// The closed set of values this field may take.
    pub fn options(self, domains: &Domains) -> Vec<&'static str> {
        match self {
            Self::Quantity => domains.quantities.iter().map(|q| q.id).collect(),
            Self::Spin => domains.spins.to_vec(),
            Self::Field => domains.fields.to_vec(),
            Self::Angle => domains.angles.to_vec(),
        }
    }

    fn value_of(self, record: &ImageRecord) -> &str {
        match self {
            Self::Quantity => record.quantity_id,
            Self::Spin => record.spin,
            Self::Field => record.field,
            Self::Angle => record.angle,
        }
    }
}

/// A partial parameter selection. `None` leaves a field unconstrained.
///
/// Matching is exact string equality; there is no case folding and no
/// numeric interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub quantity: Option<String>,
    pub spin: Option<String>,
    pub field: Option<String>,
    pub angle: Option<String>,
}

impl FilterSpec {
    /// Build from raw control values where an empty string means "any".
    pub fn from_raw(quantity: &str, spin: &str, field: &str, angle: &str) -> Self {
        Self {
            quantity: non_empty(quantity),
            spin: non_empty(spin),
            field: non_empty(field),
            angle: non_empty(angle),
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Quantity => self.quantity.as_deref(),
            FilterField::Spin => self.spin.as_deref(),
            FilterField::Field => self.field.as_deref(),
            FilterField::Angle => self.angle.as_deref(),
        }
    }

    /// Set one constraint. An empty value clears it.
    pub fn set(&mut self, field: FilterField, value: &str) {
        let slot = match field {
            FilterField::Quantity => &mut self.quantity,
            FilterField::Spin => &mut self.spin,
            FilterField::Field => &mut self.field,
            FilterField::Angle => &mut self.angle,
        };
        *slot = non_empty(value);
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|&f| self.get(f).is_none())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, record: &ImageRecord) -> bool {
        FilterField::ALL.iter().all(|&f| match self.get(f) {
            Some(want) => f.value_of(record) == want,
            None => true,
        })
    }

    /// Visible records, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ImageRecord> {
        catalog.iter().filter(|r| self.matches(r)).collect()
    }

    /// Reject any constraint that is not one of the domain's values.
    pub fn validate(&self, domains: &Domains) -> crate::Result<()> {
        for field in FilterField::ALL {
            if let Some(value) = self.get(field) {
                if !field.options(domains).iter().any(|&o| o == value) {
                    return Err(CoreError::InvalidFilterValue {
                        field: field.label(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
