//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of the
//! shell contract — scheduled jobs rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range | Domain    | Description                                   |
//! |-------|-----------|-----------------------------------------------|
//! | 0     | Universal | Success                                       |
//! | 1     | Universal | General error (unspecified)                   |
//! | 2     | Universal | CLI usage error (bad args)                    |
//! | 3-9   | report    | Summary-report codes                          |

/// Success - all asset reports written.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config failed to parse or validate.
pub const EXIT_REPORT_INVALID_CONFIG: u8 = 3;

/// Runtime failure before any asset pipeline ran (unreadable config,
/// unwritable output directory).
pub const EXIT_REPORT_RUNTIME: u8 = 4;

/// At least one asset kind failed; the others still wrote their reports.
pub const EXIT_REPORT_PARTIAL: u8 = 5;
