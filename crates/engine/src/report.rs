use crate::error::SummaryError;
use crate::model::{AssetKind, GravityTotals, Reconciled};

pub const SUBBASIN_COLUMN: &str = "subbasin";

/// Render a reconciled gravity-main table: one measure column per diameter
/// bucket.
pub fn render_gravity(recon: &Reconciled<GravityTotals>) -> Result<String, SummaryError> {
    render(
        AssetKind::GravityMain,
        recon.rows.iter().map(|(subbasin, measures)| {
            let fields = match measures {
                Some(t) => vec![fmt_opt(t.small), fmt_opt(t.large), fmt_opt(t.null_unk)],
                None => vec![String::new(); 3],
            };
            (subbasin.as_str(), fields)
        }),
    )
}

/// Render a reconciled length-sum table (pressurized mains).
pub fn render_length(recon: &Reconciled<f64>) -> Result<String, SummaryError> {
    render(
        AssetKind::PressurizedMain,
        recon.rows.iter().map(|(subbasin, measures)| {
            (subbasin.as_str(), vec![fmt_opt(measures.as_ref().copied())])
        }),
    )
}

/// Render a reconciled count table (manholes, pump stations).
pub fn render_count(kind: AssetKind, recon: &Reconciled<u64>) -> Result<String, SummaryError> {
    render(
        kind,
        recon.rows.iter().map(|(subbasin, measures)| {
            let field = measures.map(|c| c.to_string()).unwrap_or_default();
            (subbasin.as_str(), vec![field])
        }),
    )
}

fn fmt_opt(value: Option<f64>) -> String {
    // "No data" serializes as an empty field, distinct from "0"
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Serialize rows to CSV with every field quoted, the downstream consumer
/// contract. Renders entirely in memory so a report is only written to disk
/// once it is complete.
fn render<'a, I>(kind: AssetKind, rows: I) -> Result<String, SummaryError>
where
    I: Iterator<Item = (&'a str, Vec<String>)>,
{
    let csv_err = |message: String| SummaryError::Csv {
        asset: kind.to_string(),
        message,
    };

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    let mut header = vec![SUBBASIN_COLUMN.to_string()];
    header.extend(kind.measure_columns().iter().map(|c| c.to_string()));
    writer
        .write_record(&header)
        .map_err(|e| csv_err(e.to_string()))?;

    for (subbasin, fields) in rows {
        let mut record = vec![subbasin.to_string()];
        record.extend(fields);
        writer
            .write_record(&record)
            .map_err(|e| csv_err(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv_err(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| csv_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::reconcile::reconcile;
    use std::collections::BTreeMap;

    fn catalog() -> Catalog {
        Catalog::new(vec!["BR01".into(), "BR02".into(), "".into()]).unwrap()
    }

    #[test]
    fn gravity_report_quotes_everything() {
        let mut aggs = BTreeMap::new();
        aggs.insert(
            "BR01".to_string(),
            GravityTotals {
                small: Some(100.0),
                large: Some(50.0),
                null_unk: None,
            },
        );
        let recon = reconcile(&catalog(), aggs);
        let out = render_gravity(&recon).unwrap();
        assert_eq!(
            out,
            "\"subbasin\",\"small\",\"large\",\"null/unk\"\n\
             \"BR01\",\"100\",\"50\",\"\"\n\
             \"BR02\",\"\",\"\",\"\"\n\
             \"\",\"\",\"\",\"\"\n"
        );
    }

    #[test]
    fn count_report_no_data_is_empty_not_zero() {
        let mut aggs = BTreeMap::new();
        aggs.insert("BR02".to_string(), 12u64);
        let recon = reconcile(&catalog(), aggs);
        let out = render_count(AssetKind::Manhole, &recon).unwrap();
        assert_eq!(
            out,
            "\"subbasin\",\"count\"\n\
             \"BR01\",\"\"\n\
             \"BR02\",\"12\"\n\
             \"\",\"\"\n"
        );
    }

    #[test]
    fn length_report_preserves_fractions() {
        let mut aggs = BTreeMap::new();
        aggs.insert("BR01".to_string(), 410.75f64);
        let recon = reconcile(&catalog(), aggs);
        let out = render_length(&recon).unwrap();
        assert!(out.contains("\"BR01\",\"410.75\""));
        assert!(out.starts_with("\"subbasin\",\"length\"\n"));
    }
}
