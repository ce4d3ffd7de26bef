use crate::error::SummaryError;
use crate::model::{AssetKind, AssetRow};

/// Source column names for one asset kind. Extracts come from different
/// export vintages, so the same semantic column can differ per kind (the
/// length column is `Shape_Length` on gravity mains but `SHAPE_Length` on
/// pressurized mains). All canonicalization happens here; downstream stages
/// only see `AssetRow` field names.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pub subbasin: &'static str,
    pub status: &'static str,
    pub owner: &'static str,
    pub diameter: Option<&'static str>,
    pub length: Option<&'static str>,
}

pub fn column_map(kind: AssetKind) -> ColumnMap {
    match kind {
        AssetKind::GravityMain => ColumnMap {
            subbasin: "SUBBASINID",
            status: "LIFECYCLESTATUS",
            owner: "OWNEDBY",
            diameter: Some("DIAMETER"),
            length: Some("Shape_Length"),
        },
        AssetKind::Manhole => ColumnMap {
            subbasin: "SUBBASINID",
            status: "LIFECYCLESTATUS",
            owner: "OWNEDBY",
            diameter: None,
            length: None,
        },
        AssetKind::PressurizedMain => ColumnMap {
            subbasin: "SUBBASINID",
            status: "LIFECYCLESTATUS",
            owner: "OWNEDBY",
            diameter: None,
            length: Some("SHAPE_Length"),
        },
        AssetKind::PumpStation => ColumnMap {
            subbasin: "SUBBASINID",
            status: "LIFECYCLESTATUS",
            owner: "OWNEDBY",
            diameter: None,
            length: None,
        },
    }
}

/// Numeric fields are best-effort: absent or unparsable values become `None`
/// rather than failing the run.
fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Load one asset extract into normalized rows. Extra columns are ignored;
/// a missing required column is fatal for this asset kind.
pub fn load_asset_rows(kind: AssetKind, csv_data: &str) -> Result<Vec<AssetRow>, SummaryError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SummaryError::Csv {
            asset: kind.to_string(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = column_map(kind);

    let idx = |name: &str| -> Result<usize, SummaryError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SummaryError::MissingColumn {
                asset: kind.to_string(),
                column: name.into(),
            })
    };

    let subbasin_idx = idx(col.subbasin)?;
    let status_idx = idx(col.status)?;
    let owner_idx = idx(col.owner)?;
    let diameter_idx = col.diameter.map(&idx).transpose()?;
    let length_idx = col.length.map(&idx).transpose()?;

    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| SummaryError::Csv {
            asset: kind.to_string(),
            message: e.to_string(),
        })?;

        let field = |i: usize| record.get(i).unwrap_or("");

        rows.push(AssetRow {
            subbasin: field(subbasin_idx).to_string(),
            diameter: diameter_idx.and_then(|i| parse_f64(field(i))),
            length: length_idx.and_then(|i| parse_f64(field(i))),
            lifecycle_status: field(status_idx).to_string(),
            owned_by: parse_i64(field(owner_idx)),
        });
    }

    Ok(rows)
}
