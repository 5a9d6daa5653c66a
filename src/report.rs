//! Export projection snapshots as CSV or JSON

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};
use crate::projection::YearSnapshot;

/// Write snapshots as CSV, one row per year, to any writer
pub fn write_snapshots_csv<W: Write>(writer: W, snapshots: &[YearSnapshot]) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for snapshot in snapshots {
        csv_writer.serialize(snapshot)?;
    }
    csv_writer.flush().map_err(|e| PlannerError::io("<csv output>", e))?;
    Ok(())
}

/// Write snapshots as CSV to a file
pub fn write_snapshots_csv_file(path: &Path, snapshots: &[YearSnapshot]) -> PlannerResult<()> {
    let file = File::create(path).map_err(|e| PlannerError::io(path, e))?;
    write_snapshots_csv(file, snapshots)?;
    log::info!("wrote {} snapshots to {}", snapshots.len(), path.display());
    Ok(())
}

/// Pretty JSON for any result type
pub fn to_json<T: Serialize>(value: &T) -> PlannerResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{simulate, InstrumentType, ProjectionConfig};

    #[test]
    fn test_csv_header_and_rows() {
        let result = simulate(&ProjectionConfig {
            horizon_years: 2,
            monthly_contribution: 10_000.0,
            annual_nominal_return_percent: 12.0,
            annual_inflation_percent: 6.0,
            instrument: InstrumentType::Fd,
            start_age: Some(40),
        });

        let mut buffer = Vec::new();
        write_snapshots_csv(&mut buffer, &result.snapshots).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "year_index,age,total_corpus,total_invested,returns_earned,inflation_adjusted_corpus"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,41,"));
        assert!(lines[2].starts_with("2,42,"));
    }

    #[test]
    fn test_missing_age_is_empty_field() {
        let snapshot = YearSnapshot::new(1, None, 110.0, 100.0, 0.0);
        let mut buffer = Vec::new();
        write_snapshots_csv(&mut buffer, &[snapshot]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().nth(1), Some("1,,110.0,100.0,10.0,110.0"));
    }

    #[test]
    fn test_json_round_trips() {
        let snapshot = YearSnapshot::new(3, Some(30), 500.0, 400.0, 0.0);
        let json = to_json(&snapshot).unwrap();
        let back: YearSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
