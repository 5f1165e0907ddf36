//! Product label fields as entered on a form.

use serde::{Deserialize, Serialize};

use crate::model::builder::ElementStringBuilder;

/// The three fields of a basic GS1-128 product label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLabel {
    /// 14-digit GTIN (AI 01).
    pub gtin: String,
    /// 6-digit lot number in MMDDYY form (AI 10).
    pub lot_number: String,
    /// 6-digit production date in YYMMDD form (AI 11).
    pub production_date: String,
}

impl ProductLabel {
    /// Creates a label from its fields.
    pub fn new(
        gtin: impl Into<String>,
        lot_number: impl Into<String>,
        production_date: impl Into<String>,
    ) -> Self {
        Self {
            gtin: gtin.into(),
            lot_number: lot_number.into(),
            production_date: production_date.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.gtin.trim(),
            self.lot_number.trim(),
            self.production_date.trim(),
        )
    }

    /// Builds `(01)gtin(11)production_date(10)lot_number`.
    ///
    /// The variable-length lot number goes last so the stream needs no
    /// separator at all.
    pub fn element_string(&self) -> String {
        ElementStringBuilder::new()
            .gtin(&self.gtin)
            .production_date(&self.production_date)
            .batch(&self.lot_number)
            .build()
    }
}
