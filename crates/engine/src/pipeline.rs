use std::fs;
use std::path::Path;

use crate::aggregate::{aggregate_count, aggregate_gravity, aggregate_length};
use crate::catalog::Catalog;
use crate::config::ReportConfig;
use crate::error::SummaryError;
use crate::extract::load_asset_rows;
use crate::model::{
    AssetKind, AssetRow, KindOutcome, KindStatus, KindSummary, RunMeta, RunReport,
};
use crate::reconcile::reconcile;
use crate::report;

/// Run all four asset pipelines. Each kind is independent: a schema or IO
/// failure aborts only that kind's report, the rest still run and write.
/// Only creating the output directory is fatal for the run as a whole.
pub fn run(config: &ReportConfig, catalog: &Catalog) -> Result<RunReport, SummaryError> {
    fs::create_dir_all(&config.output_dir).map_err(|e| io_err(&config.output_dir, e))?;

    let mut kinds = Vec::with_capacity(AssetKind::ALL.len());
    for kind in AssetKind::ALL {
        let status = match run_kind(config, catalog, kind) {
            Ok(summary) => KindStatus::Ok(summary),
            Err(e) => KindStatus::Error {
                message: e.to_string(),
            },
        };
        kinds.push(KindOutcome {
            kind: kind.to_string(),
            status,
        });
    }

    Ok(RunReport {
        meta: RunMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        kinds,
    })
}

/// One asset kind end to end: extract → filter → aggregate → reconcile →
/// render → write. The report is rendered completely in memory before the
/// output file is touched, so a failed run never leaves a partial report.
pub fn run_kind(
    config: &ReportConfig,
    catalog: &Catalog,
    kind: AssetKind,
) -> Result<KindSummary, SummaryError> {
    let file_name = config.files.for_kind(kind);
    let input_path = config.input_dir.join(file_name);
    let csv_data = fs::read_to_string(&input_path).map_err(|e| io_err(&input_path, e))?;

    let rows = load_asset_rows(kind, &csv_data)?;
    let rows_read = rows.len();
    let kept: Vec<AssetRow> = rows.into_iter().filter(AssetRow::is_active_city).collect();
    let rows_kept = kept.len();

    let (rendered, groups, dropped_keys) = match kind {
        AssetKind::GravityMain => {
            let aggregates = aggregate_gravity(&kept);
            let groups = aggregates.len();
            let reconciled = reconcile(catalog, aggregates);
            (report::render_gravity(&reconciled)?, groups, reconciled.dropped)
        }
        AssetKind::PressurizedMain => {
            let aggregates = aggregate_length(&kept);
            let groups = aggregates.len();
            let reconciled = reconcile(catalog, aggregates);
            (report::render_length(&reconciled)?, groups, reconciled.dropped)
        }
        AssetKind::Manhole | AssetKind::PumpStation => {
            let aggregates = aggregate_count(&kept);
            let groups = aggregates.len();
            let reconciled = reconcile(catalog, aggregates);
            (
                report::render_count(kind, &reconciled)?,
                groups,
                reconciled.dropped,
            )
        }
    };

    let output_path = config.output_dir.join(file_name);
    fs::write(&output_path, rendered).map_err(|e| io_err(&output_path, e))?;

    Ok(KindSummary {
        rows_read,
        rows_kept,
        groups,
        dropped_keys,
        output_file: file_name.to_string(),
    })
}

fn io_err(path: &Path, err: std::io::Error) -> SummaryError {
    SummaryError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
