// src/core/report.rs
use std::fs;
use std::path::Path;

use crate::error::ReportError;

/// Reads the full contents of a battery report file as UTF-8 text.
///
/// The report is either a `powercfg /batteryreport` HTML export or a
/// `system_profiler SPPowerDataType` text export; the extension is a hint
/// only and is not validated here.
///
/// # Errors
///
/// Returns [`ReportError::ReadFailure`] if the file cannot be opened, read,
/// or decoded as UTF-8. The underlying I/O error is kept as the source for
/// diagnostics; no retry is attempted.
pub fn load_report(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(ReportError::ReadFailure)
}
