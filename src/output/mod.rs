mod cli;
mod json;

pub use cli::{print_cli_table, print_profiles_table};
pub use json::{print_json, print_profiles_json};

use crate::model::{Profiles, ScanReport};
use anyhow::Result;

/// Output format for scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON format for programmatic use
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use 'table' or 'json'", s)),
        }
    }
}

pub fn print_result(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_cli_table(report),
        OutputFormat::Json => print_json(report),
    }
}

pub fn print_profiles(profiles: &Profiles, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_profiles_table(profiles),
        OutputFormat::Json => print_profiles_json(profiles),
    }
}

/// Format result to string for file output
pub fn format_result_to_string(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        // Tables are for terminals; files always get JSON.
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExtensionNode, Extensions, InstallKind};
    use std::str::FromStr;

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::from_str("table"), Ok(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_result_to_string() {
        let mut extensions = Extensions::new();
        extensions.insert(
            "ext1".to_string(),
            ExtensionNode::new(InstallKind::Offline, "", "Dark Reader", "ext1/4.9.1_0", "Default"),
        );
        let report = ScanReport::new("/data", extensions);

        let text = format_result_to_string(&report, OutputFormat::Table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["extensions"]["ext1"]["name"], "Dark Reader");
        assert_eq!(value["extensions"]["ext1"]["profiles"][0], "Default");
        assert_eq!(value["extensions"]["ext1"]["icon"], "");
        assert_eq!(value["extensions"]["ext1"]["kind"], "offline");
    }
}
