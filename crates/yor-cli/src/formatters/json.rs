use crate::formatters::Formatter;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, error, warn};
use yor_core::{write_json_file, Report};

pub struct JsonFormatter;

impl JsonFormatter {
    /// Writes the JSON document to `path`. A failed write is logged and otherwise ignored.
    pub fn write_to_file(&self, report: &Report, path: &Path) {
        match write_json_file(report, path) {
            Ok(()) => debug!("wrote JSON report to {:?}", path),
            Err(e) => warn!("Failed to write JSON report: {}", e),
        }
    }
}

impl Formatter for JsonFormatter {
    fn print(&self, report: &Report) {
        let bytes = match report.to_json_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Couldn't encode report as JSON: {}", e);
                return;
            }
        };

        if let Err(e) = write_document(&mut io::stdout().lock(), &bytes) {
            warn!("Failed to print JSON report: {}", e);
        }
    }
}

fn write_document<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")?;
    out.flush()
}
