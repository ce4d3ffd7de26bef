use std::path::PathBuf;

use serde::Deserialize;

use crate::error::SummaryError;
use crate::model::AssetKind;

/// Run configuration: where to read extracts, where to write reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub files: FileNames,
}

/// Per-asset extract file names. Reports reuse the same name under
/// `output_dir`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileNames {
    pub gravity_main: String,
    pub manhole: String,
    pub pressurized_main: String,
    pub pump_station: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            gravity_main: AssetKind::GravityMain.file_name().into(),
            manhole: AssetKind::Manhole.file_name().into(),
            pressurized_main: AssetKind::PressurizedMain.file_name().into(),
            pump_station: AssetKind::PumpStation.file_name().into(),
        }
    }
}

impl FileNames {
    pub fn for_kind(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::GravityMain => &self.gravity_main,
            AssetKind::Manhole => &self.manhole,
            AssetKind::PressurizedMain => &self.pressurized_main,
            AssetKind::PumpStation => &self.pump_station,
        }
    }
}

impl ReportConfig {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Result<Self, SummaryError> {
        let config = Self {
            input_dir,
            output_dir,
            files: FileNames::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(input: &str) -> Result<Self, SummaryError> {
        let config: ReportConfig =
            toml::from_str(input).map_err(|e| SummaryError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SummaryError> {
        // Reports reuse the extract file names, so writing into the input
        // directory would clobber the extracts.
        if self.input_dir == self.output_dir {
            return Err(SummaryError::ConfigValidation(format!(
                "input_dir and output_dir must differ, both are {}",
                self.input_dir.display()
            )));
        }
        Ok(())
    }
}
