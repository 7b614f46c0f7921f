use crate::formatters::Formatter;
use crate::output::{CellStyle, Palette};
use colored::Color;
use prettytable::{format, Cell, Row, Table};
use std::fmt;
use std::io::{self, Write};
use tracing::warn;
use yor_core::{Report, TagGroup, TagRecord};

const LOGO: &str = r"
 __   _____  ____
 \ \ / / _ \|  _ \
  \ V / | | | |_) |
   | || |_| |  _ <
   |_| \___/|_| \_\
";

const NEW_RESOURCE_HEADERS: [&str; 5] = ["File", "Resource", "Tag Key", "Tag Value", "Yor ID"];
const NEW_RESOURCE_STYLES: [CellStyle; 5] = [
    CellStyle::Plain,
    CellStyle::Plain,
    CellStyle::Bold,
    CellStyle::Fg(Color::Green),
    CellStyle::Plain,
];
/// File, Resource and Yor ID cells span consecutive equal rows.
pub const NEW_RESOURCE_MERGE_COLUMNS: [usize; 3] = [0, 1, 4];

const UPDATED_RESOURCE_HEADERS: [&str; 6] = [
    "File",
    "Resource",
    "Tag Key",
    "Old Value",
    "Updated Value",
    "Yor ID",
];
const UPDATED_RESOURCE_STYLES: [CellStyle; 6] = [
    CellStyle::Plain,
    CellStyle::Plain,
    CellStyle::Bold,
    CellStyle::Fg(Color::Red),
    CellStyle::Fg(Color::Green),
    CellStyle::Plain,
];
pub const UPDATED_RESOURCE_MERGE_COLUMNS: [usize; 3] = [0, 1, 5];

const TAG_GROUP_HEADERS: [&str; 3] = ["Group", "Tag Key", "Description"];
const TAG_GROUP_STYLES: [CellStyle; 3] = [CellStyle::Plain, CellStyle::Plain, CellStyle::Plain];
pub const TAG_GROUP_MERGE_COLUMNS: [usize; 1] = [0];

/// A laid-out table plus which data cells continue the cell above them.
pub struct MergedTable {
    table: Table,
    merged: Vec<Vec<bool>>,
}

impl MergedTable {
    /// Plain prettytable layout with the row separator opened under every
    /// merged cell, so a run reads as one tall cell.
    pub fn render(&self) -> String {
        let laid_out = self.table.to_string();
        let lines: Vec<&str> = laid_out.lines().collect();
        let separators: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.starts_with('+'))
            .map(|(i, _)| i)
            .collect();

        let mut rendered = String::with_capacity(laid_out.len());
        for (i, &line) in lines.iter().enumerate() {
            // 0 is the top border, 1 sits under the titles; separator k > 1
            // sits above data row k - 1. The last one is the bottom border.
            let opened = match separators.iter().position(|&s| s == i) {
                Some(k) if k > 1 && k + 1 < separators.len() => {
                    self.merged.get(k - 1).map(|marks| open_separator(line, marks))
                }
                _ => None,
            };
            rendered.push_str(opened.as_deref().unwrap_or(line));
            rendered.push('\n');
        }
        rendered
    }
}

impl fmt::Display for MergedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Blanks the dashes of each column segment whose cell below is merged.
fn open_separator(line: &str, marks: &[bool]) -> String {
    let mut column = 0;
    let mut inside = false;
    line.chars()
        .map(|c| {
            if c == '+' {
                if inside {
                    column += 1;
                }
                inside = true;
                c
            } else if marks.get(column).copied().unwrap_or(false) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

pub struct TableFormatter {
    palette: Palette,
}

impl TableFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Renders banner, summary and tables into `out`.
    pub fn render<W: Write + ?Sized>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        self.write_banner(out)?;
        self.write_summary(report, out)?;
        writeln!(out)?;

        if report.summary.new_resources > 0 {
            let heading = format!("New Resources Traced ({}):", report.summary.new_resources);
            writeln!(out, "{}", self.palette.paint(&heading, Color::Yellow))?;
            write!(out, "{}", self.new_resources_table(&report.new_resource_tags))?;
        }
        writeln!(out)?;

        if report.summary.updated_resources > 0 {
            let heading = format!(
                "Updated Resource Traces ({}):",
                report.summary.updated_resources
            );
            writeln!(out, "{}", self.palette.paint(&heading, Color::Green))?;
            write!(
                out,
                "{}",
                self.updated_resources_table(&report.updated_resource_tags)
            )?;
        }

        out.flush()
    }

    fn write_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", LOGO.trim_start_matches('\n'))?;
        let version = format!("yor v{}", env!("CARGO_PKG_VERSION"));
        writeln!(out, "{}", self.palette.paint(&version, Color::Magenta))
    }

    fn write_summary<W: Write + ?Sized>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        let summary = &report.summary;
        writeln!(out, "{}", self.palette.bold("Yor Findings Summary"))?;
        writeln!(
            out,
            "Scanned Resources:      {}",
            self.palette.paint(&summary.scanned.to_string(), Color::Blue)
        )?;
        writeln!(
            out,
            "New Resources Traced:   {}",
            self.palette.paint(&summary.new_resources.to_string(), Color::Yellow)
        )?;
        writeln!(
            out,
            "Updated Resources:      {}",
            self.palette.paint(&summary.updated_resources.to_string(), Color::Green)
        )
    }

    pub fn new_resources_table(&self, records: &[TagRecord]) -> MergedTable {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    r.file.clone(),
                    r.resource_id.clone(),
                    r.key.clone(),
                    r.updated_value.clone(),
                    r.yor_trace_id.clone(),
                ]
            })
            .collect();
        self.build_table(
            &NEW_RESOURCE_HEADERS,
            &NEW_RESOURCE_STYLES,
            rows,
            &NEW_RESOURCE_MERGE_COLUMNS,
        )
    }

    pub fn updated_resources_table(&self, records: &[TagRecord]) -> MergedTable {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    r.file.clone(),
                    r.resource_id.clone(),
                    r.key.clone(),
                    r.old_value.clone(),
                    r.updated_value.clone(),
                    r.yor_trace_id.clone(),
                ]
            })
            .collect();
        self.build_table(
            &UPDATED_RESOURCE_HEADERS,
            &UPDATED_RESOURCE_STYLES,
            rows,
            &UPDATED_RESOURCE_MERGE_COLUMNS,
        )
    }

    /// One row per tag; a group without tags still gets a row of its own.
    pub fn tag_groups_table(&self, groups: &[TagGroup]) -> MergedTable {
        let mut rows = Vec::new();
        for group in groups {
            if group.tags.is_empty() {
                rows.push(vec![group.name.clone(), String::new(), String::new()]);
            }
            for tag in &group.tags {
                rows.push(vec![
                    group.name.clone(),
                    tag.key.clone(),
                    tag.description.clone(),
                ]);
            }
        }
        self.build_table(&TAG_GROUP_HEADERS, &TAG_GROUP_STYLES, rows, &TAG_GROUP_MERGE_COLUMNS)
    }

    pub fn print_tag_groups(&self, groups: &[TagGroup]) {
        let table = self.tag_groups_table(groups);
        if let Err(e) = write!(io::stdout().lock(), "{}", table) {
            warn!("Failed to print tag groups: {}", e);
        }
    }

    fn build_table(
        &self,
        headers: &[&str],
        styles: &[CellStyle],
        rows: Vec<Vec<String>>,
        merge: &[usize],
    ) -> MergedTable {
        let merged = merge_marks(&rows, merge);
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_DEFAULT);

        table.set_titles(Row::new(
            headers
                .iter()
                .map(|h| Cell::new(&self.palette.bold(h)))
                .collect(),
        ));

        for (row, marks) in rows.iter().zip(&merged) {
            table.add_row(Row::new(
                row.iter()
                    .zip(styles)
                    .zip(marks)
                    .map(|((value, style), &hidden)| {
                        if hidden {
                            Cell::new("")
                        } else {
                            Cell::new(&self.palette.cell(value, *style))
                        }
                    })
                    .collect(),
            ));
        }

        MergedTable { table, merged }
    }
}

impl Formatter for TableFormatter {
    fn print(&self, report: &Report) {
        if let Err(e) = self.render(report, &mut io::stdout().lock()) {
            warn!("Failed to print report table: {}", e);
        }
    }
}

/// Marks a cell in each of `columns` that repeats the non-empty value directly
/// above it, so the first occurrence spans the run. Empty cells never merge.
pub fn merge_marks(rows: &[Vec<String>], columns: &[usize]) -> Vec<Vec<bool>> {
    let mut marks = Vec::with_capacity(rows.len());
    let mut previous: Option<&Vec<String>> = None;

    for row in rows {
        let mut merged = vec![false; row.len()];
        if let Some(prev) = previous {
            for &col in columns {
                if col < row.len() && !row[col].is_empty() && prev.get(col) == Some(&row[col]) {
                    merged[col] = true;
                }
            }
        }
        previous = Some(row);
        marks.push(merged);
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use yor_core::{builtin_tag_groups, ReportSummary, TagDescriptor};

    fn record(resource: &str, key: &str, old: &str, new: &str, trace: &str) -> TagRecord {
        TagRecord {
            file: "main.tf".to_string(),
            resource_id: resource.to_string(),
            key: key.to_string(),
            old_value: old.to_string(),
            updated_value: new.to_string(),
            yor_trace_id: trace.to_string(),
        }
    }

    fn sample_report() -> Report {
        Report {
            summary: ReportSummary {
                scanned: 4,
                new_resources: 1,
                updated_resources: 1,
            },
            new_resource_tags: vec![
                record("aws_vpc.main", "yor_trace", "", "t-1", "t-1"),
                record("aws_vpc.main", "env", "", "dev", "t-1"),
            ],
            updated_resource_tags: vec![
                record("aws_s3_bucket.data", "env", "", "prod", "yor_trace_123"),
                record("aws_s3_bucket.data", "owner", "alice", "bob", "yor_trace_123"),
            ],
        }
    }

    fn render_plain(report: &Report) -> String {
        let mut out = Vec::new();
        TableFormatter::new(Palette::new(false))
            .render(report, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn rows(values: &[&[&str]]) -> Vec<Vec<String>> {
        values
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    /// Column segments of a separator line, border junctions dropped.
    fn segments(line: &str) -> Vec<&str> {
        let inner = line.trim_end().trim_start_matches('+').trim_end_matches('+');
        inner.split('+').collect()
    }

    #[test]
    fn test_merge_marks_repeated_cells() {
        let rows = rows(&[
            &["main.tf", "aws_vpc.main", "env"],
            &["main.tf", "aws_vpc.main", "owner"],
            &["main.tf", "aws_subnet.a", "owner"],
        ]);

        let marks = merge_marks(&rows, &[0, 1]);

        assert_eq!(marks[0], vec![false, false, false]);
        assert_eq!(marks[1], vec![true, true, false]);
        assert_eq!(marks[2], vec![true, false, false]);
    }

    #[test]
    fn test_merge_runs_of_three() {
        let marks = merge_marks(&rows(&[&["a.tf"], &["a.tf"], &["a.tf"]]), &[0]);
        assert_eq!(marks, vec![vec![false], vec![true], vec![true]]);
    }

    #[test]
    fn test_empty_values_never_merge() {
        let marks = merge_marks(&rows(&[&["", "x"], &["", "x"]]), &[0, 1]);
        assert_eq!(marks[1], vec![false, true]);
    }

    #[test]
    fn test_separator_opens_under_merged_cells() {
        let formatter = TableFormatter::new(Palette::new(false));
        let table = formatter
            .updated_resources_table(&sample_report().updated_resource_tags)
            .render();
        let separators: Vec<&str> = table.lines().filter(|l| l.starts_with('+')).collect();

        // top, under titles, between the two rows, bottom
        assert_eq!(separators.len(), 4);
        let between = segments(separators[2]);
        assert_eq!(between.len(), 6);
        for merged in [0, 1, 5] {
            assert!(!between[merged].contains('-'), "column {} crossed: {}", merged, separators[2]);
            assert!(between[merged].trim().is_empty());
        }
        for split in [2, 3, 4] {
            assert!(between[split].chars().all(|c| c == '-'));
        }
        assert!(segments(separators[3]).iter().all(|s| s.chars().all(|c| c == '-')));
    }

    #[test]
    fn test_separator_kept_between_resources() {
        let records = vec![
            record("aws_vpc.main", "env", "", "dev", "t-1"),
            record("aws_subnet.a", "env", "", "dev", "t-2"),
        ];
        let formatter = TableFormatter::new(Palette::new(false));
        let table = formatter.new_resources_table(&records).render();
        let separators: Vec<&str> = table.lines().filter(|l| l.starts_with('+')).collect();

        let between = segments(separators[2]);
        assert!(!between[0].contains('-'));
        assert!(between[1].chars().all(|c| c == '-'));
        assert!(between[4].chars().all(|c| c == '-'));
    }

    #[test]
    fn test_colored_cells_follow_column_styles() {
        colored::control::set_override(true);
        let formatter = TableFormatter::new(Palette::new(true));
        let report = sample_report();

        let updated = formatter
            .updated_resources_table(&report.updated_resource_tags)
            .render();
        assert!(updated.contains("\u{1b}[1mowner\u{1b}[0m"));
        assert!(updated.contains("\u{1b}[31malice\u{1b}[0m"));
        assert!(updated.contains("\u{1b}[32mbob\u{1b}[0m"));
        assert!(updated.contains("\u{1b}[1mOld Value\u{1b}[0m"));

        let new = formatter.new_resources_table(&report.new_resource_tags).render();
        assert!(new.contains("\u{1b}[1myor_trace\u{1b}[0m"));
        assert!(new.contains("\u{1b}[32mdev\u{1b}[0m"));
        assert!(new.contains("| t-1"));
    }

    #[test]
    fn test_render_summary_and_tables() {
        let output = render_plain(&sample_report());

        assert!(output.contains(&format!("yor v{}", env!("CARGO_PKG_VERSION"))));
        assert!(output.contains("Yor Findings Summary"));
        assert!(output.contains("Scanned Resources:      4"));
        assert!(output.contains("New Resources Traced:   1"));
        assert!(output.contains("Updated Resources:      1"));
        assert!(output.contains("New Resources Traced (1):"));
        assert!(output.contains("Updated Resource Traces (1):"));
        assert!(output.contains("Tag Value"));
        assert!(output.contains("Old Value"));
        assert!(output.contains("Updated Value"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_merged_cells_render_once() {
        let formatter = TableFormatter::new(Palette::new(false));
        let table = formatter
            .updated_resources_table(&sample_report().updated_resource_tags)
            .to_string();

        assert_eq!(table.matches("aws_s3_bucket.data").count(), 1);
        assert_eq!(table.matches("yor_trace_123").count(), 1);
        assert!(table.contains("alice"));
        assert!(table.contains("bob"));
        // two data rows plus title
        assert_eq!(table.lines().filter(|l| l.starts_with('|')).count(), 3);
    }

    #[test]
    fn test_empty_report_has_no_tables() {
        let output = render_plain(&Report::default());

        assert!(output.contains("Scanned Resources:      0"));
        assert!(!output.contains("Tag Key"));
        assert!(!output.contains("New Resources Traced ("));
        assert!(!output.contains("Updated Resource Traces ("));
    }

    #[test]
    fn test_tag_groups_table_keeps_empty_groups() {
        let formatter = TableFormatter::new(Palette::new(false));
        let table = formatter.tag_groups_table(&builtin_tag_groups()).to_string();

        assert!(table.contains("external"));
        assert!(table.contains("git_last_modified_by"));
        assert_eq!(table.lines().filter(|l| l.starts_with("| git ")).count(), 1);
    }

    #[test]
    fn test_tag_groups_follow_caller_order() {
        let groups = vec![
            TagGroup::new("zeta", vec![TagDescriptor::new("z_key", "last letter")]),
            TagGroup::new("alpha", Vec::new()),
        ];
        let formatter = TableFormatter::new(Palette::new(false));
        let table = formatter.tag_groups_table(&groups).to_string();

        let zeta = table.find("zeta").unwrap();
        let alpha = table.find("alpha").unwrap();
        assert!(zeta < alpha);
    }
}
