//! CSV report export for a finished simulation.
//!
//! The report is a short header block followed by a delimited table of
//! `(day, weight)` rows. Defaults match spreadsheet conventions that use
//! `;` as separator and `,` as decimal mark.

use crate::{Result, SimulationReport};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Title line written at the top of every report
pub const REPORT_TITLE: &str = "WEIGHT SIMULATION REPORT";

/// Formatting knobs for the CSV table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsvReportOptions {
    pub delimiter: u8,
    pub decimal_comma: bool,
}

impl Default for CsvReportOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimal_comma: true,
        }
    }
}

/// A row in the CSV table
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    #[serde(rename = "Day")]
    day: i64,
    #[serde(rename = "Weight (kg)")]
    weight: String,
}

impl CsvRow {
    fn new(time_days: f64, weight_kg: f64, options: &CsvReportOptions) -> Self {
        CsvRow {
            // Whole days, truncated
            day: time_days as i64,
            weight: format_decimal(weight_kg, 2, options.decimal_comma),
        }
    }
}

fn format_decimal(value: f64, precision: usize, decimal_comma: bool) -> String {
    let s = format!("{:.*}", precision, value);
    if decimal_comma {
        s.replace('.', ",")
    } else {
        s
    }
}

/// File name for a subject's report: `Simulation_<name>.csv` with spaces
/// replaced by underscores.
pub fn report_file_name(name: &str) -> String {
    let stem = name.trim().replace(' ', "_");
    if stem.is_empty() {
        "Simulation.csv".to_string()
    } else {
        format!("Simulation_{}.csv", stem)
    }
}

/// Write the header block and trajectory table to `out`.
pub fn write_csv_report<W: Write>(
    report: &SimulationReport,
    generated_at: NaiveDateTime,
    options: &CsvReportOptions,
    mut out: W,
) -> Result<()> {
    let params = &report.parameters;

    writeln!(out, "{}", REPORT_TITLE)?;
    writeln!(out, "Simulation: {}", generated_at.format("%d/%m/%Y %H:%M"))?;
    writeln!(out, "Name: {}", params.name)?;
    writeln!(out, "Age: {}", params.age_years)?;
    writeln!(out, "Initial weight: {} kg", params.initial_weight_kg)?;
    writeln!(
        out,
        "Final estimated weight: {:.2} kg",
        report.scalars.final_weight_kg
    )?;
    writeln!(
        out,
        "Recommended intake: {:.0} kcal/day",
        report.scalars.recommended_intake_kcal
    )?;
    writeln!(out, "Goal: {}", report.goal.label())?;
    writeln!(out)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_writer(&mut out);

    for point in &report.trajectory {
        writer.serialize(CsvRow::new(point.time_days, point.weight_kg, options))?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the report to `dir`, named after the subject, and return the path.
///
/// The file is synced before returning.
pub fn save_csv_report(
    report: &SimulationReport,
    dir: &Path,
    options: &CsvReportOptions,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(&report.parameters.name));
    save_csv_report_to(report, &path, options)?;
    Ok(path)
}

/// Write the report to an explicit file path.
pub fn save_csv_report_to(
    report: &SimulationReport,
    path: &Path,
    options: &CsvReportOptions,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    let generated_at = chrono::Local::now().naive_local();
    write_csv_report(report, generated_at, options, &mut file)?;
    file.sync_all()?;

    tracing::info!(
        "Wrote {} trajectory rows to {:?}",
        report.trajectory.len(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{simulate, SimulationParameters};
    use chrono::NaiveDate;

    fn sample_report() -> SimulationReport {
        let params = SimulationParameters::new("Oscar Gonzalez", 25, 80.0, 75.0, 1800.0, 30);
        simulate(&params).unwrap()
    }

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    fn render(options: &CsvReportOptions) -> String {
        let mut buf = Vec::new();
        write_csv_report(&sample_report(), fixed_time(), options, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_block() {
        let text = render(&CsvReportOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], REPORT_TITLE);
        assert_eq!(lines[1], "Simulation: 14/03/2025 09:05");
        assert_eq!(lines[2], "Name: Oscar Gonzalez");
        assert_eq!(lines[3], "Age: 25");
        assert_eq!(lines[4], "Initial weight: 80 kg");
        assert_eq!(lines[5], "Final estimated weight: 75.00 kg");
        assert_eq!(lines[6], "Recommended intake: 514 kcal/day");
        assert_eq!(lines[7], "Goal: Weight loss");
        assert_eq!(lines[8], "");
    }

    #[test]
    fn test_table_uses_semicolon_and_decimal_comma() {
        let text = render(&CsvReportOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[9], "Day;Weight (kg)");
        assert_eq!(lines[10], "0;80,00");
        assert_eq!(lines[11], "1;79,83");
        assert_eq!(lines.last().copied(), Some("30;75,00"));
        // header block + column header + 31 rows
        assert_eq!(lines.len(), 9 + 1 + 31);
    }

    #[test]
    fn test_plain_decimal_option() {
        let options = CsvReportOptions {
            delimiter: b',',
            decimal_comma: false,
        };
        let text = render(&options);
        assert!(text.contains("Day,Weight (kg)\n"));
        assert!(text.contains("\n0,80.00\n"));
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("Oscar Gonzalez"),
            "Simulation_Oscar_Gonzalez.csv"
        );
        assert_eq!(report_file_name("  "), "Simulation.csv");
    }

    #[test]
    fn test_save_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("reports");

        let path = save_csv_report(&sample_report(), &dir, &CsvReportOptions::default()).unwrap();

        assert_eq!(path, dir.join("Simulation_Oscar_Gonzalez.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(REPORT_TITLE));
        assert!(contents.contains("30;75,00"));
    }
}
