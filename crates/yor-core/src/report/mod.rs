pub mod builder;
pub mod service;

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// JSON indentation of the report document.
const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub scanned: usize,
    pub new_resources: usize,
    pub updated_resources: usize,
}

/// One tag change on one resource, flattened for output.
///
/// `old_value` is empty when the tag did not exist before the pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagRecord {
    pub file: String,
    #[serde(rename = "resourceId")]
    pub resource_id: String,
    pub key: String,
    #[serde(rename = "oldValue")]
    pub old_value: String,
    #[serde(rename = "updatedValue")]
    pub updated_value: String,
    #[serde(rename = "yorTraceId")]
    pub yor_trace_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: ReportSummary,
    pub new_resource_tags: Vec<TagRecord>,
    pub updated_resource_tags: Vec<TagRecord>,
}

impl Report {
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ReportError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ReportError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Writes the JSON document to `path`, creating or truncating it.
///
/// On unix the file is created with owner-only read/write permissions.
pub fn write_json_file(report: &Report, path: &Path) -> Result<(), ReportError> {
    let bytes = report.to_json_bytes()?;
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(&bytes).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}
