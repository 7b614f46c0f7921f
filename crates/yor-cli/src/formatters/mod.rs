use yor_core::Report;

pub mod json;
pub mod table;

/// Renders a finished report to stdout. Output failures are logged, never returned.
pub trait Formatter {
    fn print(&self, report: &Report);
}
