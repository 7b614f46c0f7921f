use crate::formatters::table::TableFormatter;
use crate::output::Palette;
use anyhow::Result;
use yor_core::{builtin_tag_groups, filter_groups};

pub fn list(groups: &[String], palette: Palette) -> Result<()> {
    let selected = filter_groups(builtin_tag_groups(), groups)?;
    TableFormatter::new(palette).print_tag_groups(&selected);
    Ok(())
}
