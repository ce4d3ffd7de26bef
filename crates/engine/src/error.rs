use std::fmt;

#[derive(Debug)]
pub enum SummaryError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config or catalog validation error.
    ConfigValidation(String),
    /// Missing required column in an asset extract.
    MissingColumn { asset: String, column: String },
    /// Malformed CSV in an asset extract (bad record, not a bad value).
    Csv { asset: String, message: String },
    /// IO error with the offending path.
    Io { path: String, message: String },
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { asset, column } => {
                write!(f, "{asset}: missing column '{column}'")
            }
            Self::Csv { asset, message } => write!(f, "{asset}: {message}"),
            Self::Io { path, message } => write!(f, "{path}: {message}"),
        }
    }
}

impl std::error::Error for SummaryError {}
