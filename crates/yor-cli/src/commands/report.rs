use crate::config_loader::OutputSettings;
use crate::formatters::json::JsonFormatter;
use crate::formatters::table::TableFormatter;
use crate::formatters::Formatter;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use yor_config::OutputFormat;
use yor_core::{ChangeSnapshot, ReportService};

pub fn report(changes_path: &Path, settings: &OutputSettings) -> Result<()> {
    let content = fs::read_to_string(changes_path)
        .with_context(|| format!("Failed to read change snapshot at {:?}", changes_path))?;
    let snapshot: ChangeSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse change snapshot at {:?}", changes_path))?;

    let changes = snapshot.into_accumulator();
    let mut service = ReportService::new();
    let report = service.create_report(&changes);
    debug!(
        scanned = report.summary.scanned,
        new = report.summary.new_resources,
        updated = report.summary.updated_resources,
        "report ready"
    );

    if let Some(path) = &settings.json_file {
        JsonFormatter.write_to_file(report, path);
    }

    let formatter: Box<dyn Formatter> = match settings.format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Cli => Box::new(TableFormatter::new(settings.palette)),
    };
    formatter.print(report);

    Ok(())
}
