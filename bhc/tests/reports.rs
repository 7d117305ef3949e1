// End-to-end checks: load a report fixture from disk, then extract health.
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use bhc::{ReportError, compute_health, load_report};

// Trimmed-down shape of a real powercfg export: one big HTML table, labels
// and values in separate cells on the same line.
const POWERCFG_FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<body>
<h1>Battery report</h1>
<table>
<tr><td><span class="label">DESIGN CAPACITY</span></td><td>57,009 mWh</td></tr>
<tr><td><span class="label">FULL CHARGE CAPACITY</span></td><td>49,832 mWh</td></tr>
<tr><td><span class="label">CYCLE COUNT</span></td><td>312</td></tr>
</table>
</body>
</html>
"#;

const PROFILER_FIXTURE: &str = "Power:

    Battery Information:

      Model Information:
          Device Name: bq20z451
      Charge Information:
          Charge Remaining: 3841
          Fully Charged: No
          Charging: No
          Design Capacity: 5263
          Full Charge Capacity: 4200
      Health Information:
          Cycle Count: 487
";

#[test]
fn powercfg_fixture_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("battery-report.html");
    fs::write(&path, POWERCFG_FIXTURE)?;

    let text = load_report(&path)?;
    let reading = compute_health(&text)?;
    assert_eq!(reading.percent, 87.41, "49832 / 57009 rounds to 87.41");
    Ok(())
}

#[test]
fn system_profiler_fixture_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("battery-report.txt");
    fs::write(&path, PROFILER_FIXTURE)?;

    let text = load_report(&path)?;
    let reading = compute_health(&text)?;
    assert_eq!(reading.percent, 79.80, "4200 / 5263 rounds to 79.80");
    Ok(())
}

#[test]
fn surrounding_figures_do_not_confuse_extraction() -> Result<()> {
    // Cycle counts and charge-remaining lines carry digit runs of their own;
    // only the labeled capacity lines may feed the calculation.
    let reading = compute_health(PROFILER_FIXTURE)?;
    assert_eq!(reading.percent, 79.80);
    Ok(())
}

#[test]
fn utf16_export_is_a_read_failure() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("battery-report.html");
    // A UTF-16LE export: the 0xFF in the BOM alone already fails UTF-8
    // decoding, so the loader must report a read failure.
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "DESIGN CAPACITY".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, &bytes)?;

    let result = load_report(&path);
    assert!(matches!(result, Err(ReportError::ReadFailure(_))));
    Ok(())
}
