use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::model::Reconciled;

/// Left-join the catalog against an aggregate table. The catalog drives:
/// every entry yields exactly one output row, in catalog order, whether or
/// not any aggregate matched it. Aggregate keys absent from the catalog
/// (retired or malformed subbasin ids) are dropped from output and returned
/// in `Reconciled::dropped` for diagnostics.
pub fn reconcile<M>(catalog: &Catalog, mut aggregates: BTreeMap<String, M>) -> Reconciled<M> {
    let mut rows = Vec::with_capacity(catalog.len());
    for entry in catalog.entries() {
        rows.push((entry.clone(), aggregates.remove(entry)));
    }
    let dropped: Vec<String> = aggregates.into_keys().collect();
    Reconciled { rows, dropped }
}
