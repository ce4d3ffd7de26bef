//! Diameter bucketing for gravity mains.
//!
//! Three independent predicates, matching the source policy verbatim: a
//! diameter of exactly 15 lands in both `small` and `large` (a known
//! double-count, kept for report parity and flagged to stakeholders), and a
//! diameter strictly between 0 and 1 lands in no bucket at all.

pub fn is_small(diameter: Option<f64>) -> bool {
    matches!(diameter, Some(d) if (1.0..=15.0).contains(&d))
}

pub fn is_large(diameter: Option<f64>) -> bool {
    matches!(diameter, Some(d) if d >= 15.0)
}

/// Null, zero, or negative diameters. Unparsable diameters arrive here as
/// `None` (see `extract`).
pub fn is_null_unk(diameter: Option<f64>) -> bool {
    match diameter {
        None => true,
        Some(d) => d <= 0.0,
    }
}
