use serde::Serialize;

// ---------------------------------------------------------------------------
// Asset kinds
// ---------------------------------------------------------------------------

/// The four asset inventories. Each flows through its own pipeline; outputs
/// are never cross-referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    GravityMain,
    Manhole,
    PressurizedMain,
    PumpStation,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        Self::GravityMain,
        Self::Manhole,
        Self::PressurizedMain,
        Self::PumpStation,
    ];

    /// Default extract file name; the report reuses the same name in the
    /// output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::GravityMain => "gravity_main.csv",
            Self::Manhole => "manhole.csv",
            Self::PressurizedMain => "pressurized_main.csv",
            Self::PumpStation => "pump_station.csv",
        }
    }

    /// Measure column headers in the rendered report.
    pub fn measure_columns(&self) -> &'static [&'static str] {
        match self {
            Self::GravityMain => &["small", "large", "null/unk"],
            Self::Manhole => &["count"],
            Self::PressurizedMain => &["length"],
            Self::PumpStation => &["count"],
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GravityMain => write!(f, "gravity_main"),
            Self::Manhole => write!(f, "manhole"),
            Self::PressurizedMain => write!(f, "pressurized_main"),
            Self::PumpStation => write!(f, "pump_station"),
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A single normalized row from an asset extract. Numeric fields are `None`
/// when the source value is absent or unparsable.
#[derive(Debug, Clone)]
pub struct AssetRow {
    pub subbasin: String,
    pub diameter: Option<f64>,
    pub length: Option<f64>,
    pub lifecycle_status: String,
    pub owned_by: Option<i64>,
}

impl AssetRow {
    /// The shared row filter: active lifecycle, city ownership code 1.
    pub fn is_active_city(&self) -> bool {
        self.lifecycle_status == "Active" && self.owned_by == Some(1)
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Per-subbasin gravity-main length totals, one slot per diameter bucket.
/// A bucket nobody contributed to stays `None` — "no data", not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GravityTotals {
    pub small: Option<f64>,
    pub large: Option<f64>,
    pub null_unk: Option<f64>,
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Catalog left-joined against an aggregate table. `rows` has exactly one
/// entry per catalog entry, in catalog order; `dropped` holds aggregate keys
/// that matched no catalog entry.
#[derive(Debug)]
pub struct Reconciled<M> {
    pub rows: Vec<(String, Option<M>)>,
    pub dropped: Vec<String>,
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub meta: RunMeta,
    pub kinds: Vec<KindOutcome>,
}

impl RunReport {
    /// True when every asset kind produced its report.
    pub fn all_ok(&self) -> bool {
        self.kinds
            .iter()
            .all(|k| matches!(k.status, KindStatus::Ok(_)))
    }
}

#[derive(Debug, Serialize)]
pub struct RunMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Serialize)]
pub struct KindOutcome {
    pub kind: String,
    #[serde(flatten)]
    pub status: KindStatus,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KindStatus {
    Ok(KindSummary),
    Error { message: String },
}

#[derive(Debug, Serialize)]
pub struct KindSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub groups: usize,
    /// Aggregate subbasin ids absent from the catalog, dropped from output.
    pub dropped_keys: Vec<String>,
    pub output_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, owned_by: Option<i64>) -> AssetRow {
        AssetRow {
            subbasin: "BR01".into(),
            diameter: None,
            length: None,
            lifecycle_status: status.into(),
            owned_by,
        }
    }

    #[test]
    fn active_city_filter() {
        assert!(row("Active", Some(1)).is_active_city());
        assert!(!row("Abandoned", Some(1)).is_active_city());
        assert!(!row("Active", Some(2)).is_active_city());
        assert!(!row("Active", None).is_active_city());
        // Case-sensitive on purpose
        assert!(!row("active", Some(1)).is_active_city());
    }
}
