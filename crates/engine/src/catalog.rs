use crate::error::SummaryError;

/// Identifier for assets that sit in no subbasin.
pub const NO_SUBBASIN: &str = "";

/// The canonical subbasin list. Two letters + two digits, plus the
/// no-subbasin sentinel. Closed: nothing is added or removed at runtime.
const FIXED_SUBBASINS: &[&str] = &[
    "BR01", "BR02", "BR03", "BR04", "CC01", "CC02", "CC03", "CC04", "CC05",
    "CC06", "CC07", "CC08", "CC09", "CC10", "CC11", "CC12", "CC21", "GC01",
    "GC02", "GC03", "GC04", "GC05", "GC06", "GC07", "GC08", "GC09", "GC10",
    "GC11", "GC12", "GC13", "GC14", "GC15", "GC16", "GC17", "GC18", "MC01",
    "MC02", "MC03", "MC04", "MC05", "RB01", "RB02", "RB03", "RB04", "RB05",
    "RB06", "RB07", "RB08", "SR01", "SR02", "SR03", "SR04", "SR05", "SR06",
    "SR07", "SR08", "SR09", "SR10", "SR11", "SR12", "SR13", "SR14", "SR15",
    "SB01", "SB02", "SB03", "SB04", "SB05", "SB06", "WC01", "WC02",
    NO_SUBBASIN,
];

/// Immutable, ordered subbasin catalog. Drives every report's row set: one
/// output row per entry, in catalog order, for every asset type.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    /// The authoritative catalog used for production runs.
    pub fn fixed() -> Self {
        Self {
            entries: FIXED_SUBBASINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a catalog from explicit entries, enforcing uniqueness and the
    /// single no-subbasin sentinel.
    pub fn new(entries: Vec<String>) -> Result<Self, SummaryError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.as_str()) {
                return Err(SummaryError::ConfigValidation(format!(
                    "duplicate subbasin '{entry}' in catalog"
                )));
            }
        }
        let sentinels = entries.iter().filter(|e| e.as_str() == NO_SUBBASIN).count();
        if sentinels != 1 {
            return Err(SummaryError::ConfigValidation(format!(
                "catalog must contain exactly one no-subbasin entry, found {sentinels}"
            )));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
