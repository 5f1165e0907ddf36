//! Fixed-length Application Identifier table.
//!
//! GS1 predefines the value length of a handful of two-digit AIs. A decoder
//! finds the end of those values by counting, so the encoder never places a
//! separator after them. Every AI missing from the table is variable-length.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::limits::TABLE_AI_LEN;

/// Predefined fixed-length AIs: (code, value length in characters).
pub const GS1_FIXED_LENGTHS: &[(&str, usize)] = &[
    ("00", 18), // SSCC
    ("01", 14), // GTIN
    ("02", 14), // GTIN of contained trade items
    ("03", 14), // GTIN of made-to-order items
    ("11", 6),  // production date
    ("12", 6),  // due date
    ("13", 6),  // packaging date
    ("15", 6),  // best before date
    ("16", 6),  // sell by date
    ("17", 6),  // expiration date
    ("20", 2),  // internal product variant
];

lazy_static! {
    static ref GS1_TABLE: AiTable = AiTable::from_entries(GS1_FIXED_LENGTHS.iter().copied());
}

/// Immutable mapping from AI code to its mandated value length.
///
/// There is no way to mutate a table after construction. The GS1 table is
/// built on first use and shared by every caller; tests can build their own
/// with [`AiTable::from_entries`].
#[derive(Debug, Clone, Default)]
pub struct AiTable {
    lengths: FxHashMap<&'static str, usize>,
}

impl AiTable {
    /// Returns the process-wide GS1 fixed-length table.
    pub fn gs1() -> &'static AiTable {
        &GS1_TABLE
    }

    /// Builds a table from `(code, length)` pairs. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, usize)>,
    {
        Self {
            lengths: entries.into_iter().collect(),
        }
    }

    /// Looks up the fixed value length for an AI code.
    ///
    /// Returns `None` for variable-length AIs, including any code that is not
    /// exactly two characters long.
    #[inline]
    pub fn lookup(&self, ai: &str) -> Option<usize> {
        if ai.len() != TABLE_AI_LEN {
            return None;
        }
        self.lengths.get(ai).copied()
    }

    /// Returns true if the AI has a fixed value length.
    pub fn is_fixed(&self, ai: &str) -> bool {
        self.lookup(ai).is_some()
    }

    /// Number of fixed-length AIs in the table.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Returns true if no AI is fixed-length.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Returns the entries sorted by AI code.
    pub fn entries(&self) -> Vec<(&'static str, usize)> {
        let mut entries: Vec<_> = self.lengths.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable();
        entries
    }
}

/// Looks up an AI code in the GS1 fixed-length table.
pub fn lookup(ai: &str) -> Option<usize> {
    AiTable::gs1().lookup(ai)
}
