use std::collections::BTreeMap;

use crate::classify;
use crate::model::{AssetRow, GravityTotals};

/// Group gravity-main rows by subbasin, summing lengths into the three
/// diameter buckets. Each bucket is an independent conditional sum, so a
/// 15-inch row contributes to both `small` and `large`.
pub fn aggregate_gravity(rows: &[AssetRow]) -> BTreeMap<String, GravityTotals> {
    let mut groups: BTreeMap<String, GravityTotals> = BTreeMap::new();

    for row in rows {
        let totals = groups.entry(row.subbasin.clone()).or_default();
        let length = row.length.unwrap_or(0.0);
        if classify::is_small(row.diameter) {
            add(&mut totals.small, length);
        }
        if classify::is_large(row.diameter) {
            add(&mut totals.large, length);
        }
        if classify::is_null_unk(row.diameter) {
            add(&mut totals.null_unk, length);
        }
    }

    groups
}

/// Sum of length per subbasin (pressurized mains).
pub fn aggregate_length(rows: &[AssetRow]) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        *groups.entry(row.subbasin.clone()).or_insert(0.0) += row.length.unwrap_or(0.0);
    }
    groups
}

/// Record count per subbasin (manholes, pump stations).
pub fn aggregate_count(rows: &[AssetRow]) -> BTreeMap<String, u64> {
    let mut groups: BTreeMap<String, u64> = BTreeMap::new();
    for row in rows {
        *groups.entry(row.subbasin.clone()).or_insert(0) += 1;
    }
    groups
}

fn add(slot: &mut Option<f64>, length: f64) {
    *slot = Some(slot.unwrap_or(0.0) + length);
}
