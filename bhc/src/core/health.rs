// src/core/health.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ReportError;
use crate::models::HealthReading;

// powercfg HTML reports label the fields in upper case with the value (a
// formatted number plus unit, e.g. "57,009 mWh") further along the same line.
static POWERCFG_DESIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)DESIGN CAPACITY\s*([^\n]*)").expect("hard-coded pattern"));
static POWERCFG_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)FULL CHARGE CAPACITY\s*([^\n]*)").expect("hard-coded pattern")
});

// system_profiler text reports use "Label: <digits>" lines.
static PROFILER_DESIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Design Capacity:\s*(\d+)").expect("hard-coded pattern"));
static PROFILER_FULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Full Charge Capacity:\s*(\d+)").expect("hard-coded pattern"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("hard-coded pattern"));

/// Extracts the design and full-charge capacities from raw report text and
/// computes the battery health percentage.
///
/// The powercfg label family is tried first; only if it fails to locate both
/// fields does the system_profiler family get a turn. Both fields always come
/// from the same family, never one from each. The resulting percentage is
/// rounded to two decimal places and may exceed 100 when the reported
/// full-charge capacity is above the design capacity (e.g. after
/// recalibration); it is never clamped.
///
/// Pure and deterministic: the same text always yields the same outcome.
///
/// # Errors
///
/// * [`ReportError::FieldsNotFound`] if neither label family locates both
///   capacity fields.
/// * [`ReportError::CapacityParse`] if a located field contains no usable
///   digit run, or parses to zero.
pub fn compute_health(text: &str) -> Result<HealthReading, ReportError> {
    let (design_field, full_field) =
        capacity_fields(text).ok_or(ReportError::FieldsNotFound)?;

    let design = parse_capacity(design_field).ok_or(ReportError::CapacityParse)?;
    let full_charge = parse_capacity(full_field).ok_or(ReportError::CapacityParse)?;

    let percent = round_to_hundredths(full_charge as f64 / design as f64 * 100.0);
    Ok(HealthReading { percent })
}

/// Locates the raw design and full-charge capacity fields, trying the
/// powercfg family first and falling back to the system_profiler family only
/// when the powercfg family misses either field.
fn capacity_fields(text: &str) -> Option<(&str, &str)> {
    let design = first_capture(&POWERCFG_DESIGN, text);
    let full = first_capture(&POWERCFG_FULL, text);
    if let (Some(design), Some(full)) = (design, full) {
        return Some((design, full));
    }

    let design = first_capture(&PROFILER_DESIGN, text)?;
    let full = first_capture(&PROFILER_FULL, text)?;
    Some((design, full))
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Normalizes a captured capacity field to an integer: strip comma grouping,
/// then take the first contiguous digit run anywhere in the (possibly
/// unit-suffixed, possibly markup-laden) text.
///
/// A zero capacity is a parse failure, not a valid reading; this keeps a
/// zero design capacity from ever reaching the division.
fn parse_capacity(field: &str) -> Option<u64> {
    let cleaned = field.replace(',', "");
    let run = DIGIT_RUN.find(&cleaned)?;
    let value: u64 = run.as_str().parse().ok()?;
    (value > 0).then_some(value)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
