use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use yor_config::OutputFormat;

#[derive(Parser)]
#[command(name = "yor")]
#[command(about = "Report tag changes traced across IaC resources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config file (default: ./.yor.toml)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a report from a change snapshot and print it
    Report {
        /// Change snapshot (JSON) written by a tagging pass
        #[arg(long, value_name = "FILE")]
        changes: PathBuf,
        /// Output format
        #[arg(long, short, value_enum)]
        output: Option<FormatArg>,
        /// Also write the JSON report to this file
        #[arg(long, value_name = "FILE")]
        output_json_file: Option<PathBuf>,
    },
    /// Inspect the tag catalog
    #[command(subcommand)]
    Tags(TagsCommand),
}

#[derive(Subcommand)]
pub enum TagsCommand {
    /// List tag groups and the tags they add
    List {
        /// Only show these groups (repeatable)
        #[arg(long = "group", value_name = "NAME")]
        groups: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Cli,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Cli => OutputFormat::Cli,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
