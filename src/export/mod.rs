//! Pure report export.
//!
//! Transforms a completed [`ResearchResult`] into downloadable text.
//! JSON carries the full result; markdown carries only the summary and
//! findings, deliberately omitting sources to keep exports short. The
//! `pdf` format is a plain-text surrogate that reuses the markdown
//! renderer; no binary PDF is produced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::backend::{ResearchReport, ResearchResult};
use crate::error::ExportResult;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Nominal PDF; currently rendered as markdown text
    Pdf,
    Markdown,
    Json,
}

impl ExportFormat {
    /// The literal format string, used as the file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        }
    }

    /// Download file name: `research-report.<format>`
    pub fn file_name(&self) -> String {
        format!("research-report.{}", self.as_str())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}'")),
        }
    }
}

/// Render a research result in the given format.
///
/// JSON serializes the entire result with stable field order and
/// indentation; markdown and pdf share the text renderer and omit
/// sources.
pub fn render(result: &ResearchResult, format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        ExportFormat::Markdown | ExportFormat::Pdf => Ok(render_markdown(&result.research_report)),
    }
}

fn render_markdown(report: &ResearchReport) -> String {
    let mut out = format!("# Research Report\n\n{}\n\n## Key Findings\n", report.summary);
    for finding in &report.key_findings {
        out.push_str("- ");
        out.push_str(finding);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_strings_and_file_names() {
        assert_eq!(ExportFormat::Pdf.file_name(), "research-report.pdf");
        assert_eq!(ExportFormat::Markdown.file_name(), "research-report.markdown");
        assert_eq!(ExportFormat::Json.file_name(), "research-report.json");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!("docx".parse::<ExportFormat>().is_err());
    }
}
