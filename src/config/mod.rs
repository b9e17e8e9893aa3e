pub mod cli;
pub mod manifest;

use crate::core::report::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Clone, Parser)]
#[command(name = "cms-docgen")]
#[command(about = "Generate the CMS API reference documents as Markdown files")]
pub struct CliConfig {
    /// Directory the documents are written to [default: .]
    #[arg(long)]
    pub output_dir: Option<String>,

    /// TOML manifest describing the documents (defaults to the builtin CMS reference)
    #[arg(long)]
    pub manifest: Option<String>,

    /// Create the output directory before writing
    #[arg(long)]
    pub create_dir: bool,

    /// List the documents that would be written, without writing them
    #[arg(long)]
    pub list: bool,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,

    /// Exit with a non-zero status if any document failed
    #[arg(long)]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 命令列優先，其次 manifest 設定，最後為預設值
    pub fn resolve_output_dir(&self, manifest_output_dir: Option<&str>) -> String {
        self.output_dir
            .as_deref()
            .or(manifest_output_dir)
            .unwrap_or(DEFAULT_OUTPUT_DIR)
            .to_string()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output_dir) = &self.output_dir {
            validate_path("output_dir", output_dir)?;
        }
        if let Some(manifest) = &self.manifest {
            validate_path("manifest", manifest)?;
        }
        Ok(())
    }
}
