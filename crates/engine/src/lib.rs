//! `basinreport-engine` — subbasin asset summary engine.
//!
//! Reconciles sewer asset extracts (gravity mains, manholes, pressurized
//! mains, pump stations) against the fixed subbasin catalog and renders one
//! per-subbasin summary report per asset type. Pure engine crate: no CLI or
//! terminal dependencies.

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod reconcile;
pub mod report;

pub use catalog::Catalog;
pub use config::ReportConfig;
pub use error::SummaryError;
pub use model::{AssetKind, AssetRow, RunReport};
pub use pipeline::run;
