use crate::core::{DocumentSet, EmissionResult};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmissionReport {
    pub generated_at: DateTime<Utc>,
    pub output_dir: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<EmissionResult>,
}

impl EmissionReport {
    pub fn new(output_dir: impl Into<String>, results: Vec<EmissionResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.succeeded).count();
        Self {
            generated_at: Utc::now(),
            output_dir: output_dir.into(),
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

pub fn format_result(result: &EmissionResult) -> String {
    if result.succeeded {
        format!("✓ generated: {}", result.filename)
    } else {
        format!(
            "✗ failed: {} ({})",
            result.filename,
            result.error.as_deref().unwrap_or("unknown error")
        )
    }
}

pub fn format_summary(results: &[EmissionResult]) -> String {
    let total = results.len();
    let succeeded = results.iter().filter(|r| r.succeeded).count();
    if succeeded == total {
        format!("Done: all {} documents generated", total)
    } else {
        format!(
            "Done: {} of {} documents generated, {} failed",
            succeeded,
            total,
            total - succeeded
        )
    }
}

pub fn print_report<W: Write>(writer: &mut W, report: &EmissionReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for result in &report.results {
                writeln!(writer, "{}", format_result(result))?;
            }
            writeln!(writer)?;
            writeln!(writer, "{}", format_summary(&report.results))?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// `--list` 的輸出：預計寫出的檔名與大小，不觸碰檔案系統
pub fn print_plan<W: Write>(writer: &mut W, documents: &DocumentSet, output_dir: &str) -> Result<()> {
    writeln!(writer, "{} documents would be written to {}:", documents.len(), output_dir)?;
    for doc in documents {
        writeln!(writer, "  {} ({} bytes)", doc.filename, doc.body.len())?;
    }
    writer.flush()?;
    Ok(())
}
