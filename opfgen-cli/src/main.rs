//! opfgen CLI - generate EPUB package documents from a content directory

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use opfgen_core::pipeline::{DEFAULT_CONTENT_DIR, DEFAULT_METADATA_PATH, DEFAULT_OUTPUT_PATH};
use opfgen_core::{GenerateOptions, IdStrategy, ScanOptions, SpineRules};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "opfgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the package document
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file path
        #[arg(short, long, env = "OPFGEN_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Fail on consistency issues instead of warning
        #[arg(long)]
        strict: bool,

        /// Print the document to stdout before writing it
        #[arg(long, env = "OPFGEN_ECHO")]
        echo: bool,
    },

    /// Display the metadata, manifest and spine that would be generated
    Info {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the package document for dangling references and blank fields
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Inputs shared by every command
#[derive(Args)]
struct SourceArgs {
    /// Metadata file path
    #[arg(short, long, env = "OPFGEN_METADATA", default_value = DEFAULT_METADATA_PATH)]
    metadata: PathBuf,

    /// Content directory
    #[arg(short, long, env = "OPFGEN_CONTENT_DIR", default_value = DEFAULT_CONTENT_DIR)]
    content_dir: PathBuf,

    /// Sort directory entries by name for reproducible output
    #[arg(long, env = "OPFGEN_SORT")]
    sort: bool,

    /// Id derivation (legacy, stem)
    #[arg(long, default_value = "legacy")]
    id_strategy: IdStrategy,

    /// Path segment prepended to every manifest href
    #[arg(long)]
    href_prefix: Option<String>,

    /// Filename marker for table-of-contents documents
    #[arg(long, default_value = "toc")]
    toc_marker: String,

    /// Filename marker for stylesheets
    #[arg(long, default_value = "style")]
    style_marker: String,

    /// Filename marker for cover pages
    #[arg(long, default_value = "cover")]
    cover_marker: String,
}

impl SourceArgs {
    fn into_options(self) -> GenerateOptions {
        GenerateOptions {
            metadata_path: self.metadata,
            content_dir: self.content_dir,
            scan: ScanOptions {
                sort_entries: self.sort,
                id_strategy: self.id_strategy,
                href_prefix: self.href_prefix,
            },
            spine_rules: SpineRules {
                toc_marker: self.toc_marker,
                style_marker: self.style_marker,
                cover_marker: self.cover_marker,
            },
            ..GenerateOptions::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "opfgen=debug,opfgen_core=debug"
    } else {
        "opfgen=info,opfgen_core=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            source,
            output,
            strict,
            echo,
        } => {
            let options = GenerateOptions {
                output_path: output,
                strict,
                ..source.into_options()
            };
            commands::generate(&options, echo)
        }

        Commands::Info { source, json } => commands::info(&source.into_options(), json),

        Commands::Validate { source } => commands::validate(&source.into_options()),
    }
}
