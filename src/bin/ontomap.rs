use std::{error::Error, process::ExitCode};

use clap::{Parser, Subcommand};
use colored::Colorize;
use ontomap::{
    config::{LogLevel, LoggerSettings},
    logger,
    mapping::{
        EmbeddedOntologyMappingLoader, EmbeddedResources, OntologyMappingLoader, ResourceCatalog,
    },
};

/// Inspect the ontology mappings bundled with this build.
#[derive(Debug, Parser)]
#[command(name = "ontomap", version, about)]
struct Cli {
    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, value_enum, default_value_t = Level::Warn, global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the names of all bundled resources.
    List,
    /// Load a bundled mapping and print its section summary.
    Check {
        /// Trailing part of the resource name, e.g. `mappings/v1/brick_to_rec.json`.
        resource: String,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => Self::Trace,
            Level::Debug => Self::Debug,
            Level::Info => Self::Info,
            Level::Warn => Self::Warn,
            Level::Error => Self::Error,
        }
    }
}

fn check(resource: String) -> ExitCode {
    let result = EmbeddedOntologyMappingLoader::new(resource)
        .and_then(|loader| loader.load_ontology_mapping());

    match result {
        Ok(mapping) => {
            let summary = mapping.summary();
            println!("{}", "mapping loaded".green().bold());
            println!("  input ontologies:       {}", summary.input_ontologies);
            println!("  output ontologies:      {}", summary.output_ontologies);
            println!("  namespace remaps:       {}", summary.namespace_remaps);
            println!("  interface remaps:       {}", summary.interface_remaps);
            println!("  relationship remaps:    {}", summary.relationship_remaps);
            println!("  property projections:   {}", summary.property_projections);
            println!("  fill properties:        {}", summary.fill_properties);
            println!("  object transformations: {}", summary.object_transformations);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  {} {cause}", "caused by:".yellow());
                source = cause.source();
            }
            if err.is_mapping_file_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(&LoggerSettings {
        level: cli.log_level.into(),
        ..LoggerSettings::default()
    });

    match cli.command {
        Command::List => {
            for name in EmbeddedResources::bundled().resource_names() {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Command::Check { resource } => check(resource),
    }
}
