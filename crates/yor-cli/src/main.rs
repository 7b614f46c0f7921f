mod cli;
mod commands;
mod config_loader;
mod formatters;
mod output;

use clap::Parser;
use cli::{Cli, Commands, TagsCommand};
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = config_loader::load_effective_config(cli.config.as_ref()).and_then(|config| {
        match &cli.command {
            Commands::Report {
                changes,
                output,
                output_json_file,
            } => {
                let settings = config_loader::resolve_output(
                    &config,
                    cli.no_color,
                    output.map(Into::into),
                    output_json_file.clone(),
                );
                commands::report::report(changes, &settings)
            }
            Commands::Tags(TagsCommand::List { groups }) => {
                let settings = config_loader::resolve_output(&config, cli.no_color, None, None);
                let groups = if groups.is_empty() {
                    &config.tags.groups
                } else {
                    groups
                };
                commands::tags::list(groups, settings.palette)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        exit(2);
    }
}
