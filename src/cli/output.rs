//! Output formatting utilities

use miette::{IntoDiagnostic, Result};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::{format_angle, format_volume};
use crate::cli::OutputFormat;
use crate::core::sensitivity::Sample;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Tsv
            } else {
                OutputFormat::Yaml
            }
        }
        other => other,
    }
}

#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "ANGLE (deg)")]
    angle: String,
    #[tabled(rename = "VOLUME")]
    volume: String,
}

/// Render samples in the requested format
pub fn format_samples(samples: &[Sample], format: OutputFormat) -> Result<String> {
    match effective_format(format, true) {
        OutputFormat::Tsv | OutputFormat::Auto => {
            let mut out = String::from("angle\tvolume\n");
            for sample in samples {
                out.push_str(&format!(
                    "{}\t{}\n",
                    format_angle(sample.angle),
                    format_volume(sample.volume)
                ));
            }
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            for sample in samples {
                wtr.serialize(sample).into_diagnostic()?;
            }
            let bytes = wtr.into_inner().map_err(|e| miette::miette!("{}", e))?;
            String::from_utf8(bytes).into_diagnostic()
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(samples).into_diagnostic()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yml::to_string(&samples).into_diagnostic(),
        OutputFormat::Table => {
            let rows: Vec<SampleRow> = samples
                .iter()
                .map(|s| SampleRow {
                    angle: format_angle(s.angle),
                    volume: format_volume(s.volume),
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            Ok(format!("{}\n", table))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sensitivity::Volume;

    fn samples() -> Vec<Sample> {
        vec![
            Sample {
                angle: 0.05,
                volume: Volume::Infinite,
            },
            Sample {
                angle: 90.0,
                volume: Volume::Finite(0.5),
            },
        ]
    }

    #[test]
    fn test_effective_format() {
        assert_eq!(effective_format(OutputFormat::Auto, true), OutputFormat::Tsv);
        assert_eq!(effective_format(OutputFormat::Auto, false), OutputFormat::Yaml);
        assert_eq!(effective_format(OutputFormat::Csv, false), OutputFormat::Csv);
    }

    #[test]
    fn test_tsv() {
        let out = format_samples(&samples(), OutputFormat::Auto).unwrap();
        assert_eq!(out, "angle\tvolume\n0.0500\tinf\n90.0000\t0.500000\n");
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let out = format_samples(&samples(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["angle,volume", "0.05,inf", "90.0,0.5"]);
    }

    #[test]
    fn test_json_marks_infinite() {
        let out = format_samples(&samples(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["volume"], "inf");
        assert_eq!(value[1]["volume"], 0.5);
    }

    #[test]
    fn test_table_contains_headers() {
        let out = format_samples(&samples(), OutputFormat::Table).unwrap();
        assert!(out.contains("ANGLE (deg)"));
        assert!(out.contains("VOLUME"));
        assert!(out.contains("inf"));
    }
}
