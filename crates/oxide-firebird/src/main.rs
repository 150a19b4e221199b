//! oxide-firebird CLI
//!
//! Compiles JSON schema blueprints into Firebird DDL. Prints SQL only; it
//! never connects to a database.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_firebird::error::GrammarError;
use oxide_firebird::prelude::*;

/// Firebird DDL generation for schema blueprints.
#[derive(Parser)]
#[command(name = "oxide-firebird")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file (table prefix, identity mode).
    #[arg(short, long, env = "OXIDE_FIREBIRD_CONFIG")]
    config: Option<PathBuf>,

    /// Table prefix, overriding the configuration file.
    #[arg(short, long, env = "OXIDE_FIREBIRD_PREFIX")]
    prefix: Option<String>,

    /// Identity mode: `native` (Firebird 3.0+) or `emulated`.
    #[arg(short, long, env = "OXIDE_FIREBIRD_IDENTITY")]
    identity: Option<IdentityMode>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a table blueprint.
    Compile {
        /// Blueprint JSON file.
        blueprint: PathBuf,
    },

    /// Compile a standalone sequence blueprint.
    Sequence {
        /// Sequence blueprint JSON file.
        sequence: PathBuf,
    },

    /// Print a catalog existence query.
    Probe {
        /// Object kind to probe.
        #[arg(value_enum)]
        kind: ProbeKind,

        /// Table name (column probe only).
        #[arg(short, long)]
        table: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProbeKind {
    Table,
    Column,
    Sequence,
    Trigger,
}

fn load_json<T: DeserializeOwned>(path: &Path) -> oxide_firebird::Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| GrammarError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn load_config(cli: &Cli) -> oxide_firebird::Result<GrammarConfig> {
    let mut config = match &cli.config {
        Some(path) => GrammarConfig::from_file(path)?,
        None => GrammarConfig::default(),
    };
    if let Some(prefix) = &cli.prefix {
        config.table_prefix.clone_from(prefix);
    }
    if let Some(identity) = cli.identity {
        config.identity = identity;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid SQL
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&cli)?;
    debug!(
        prefix = %config.table_prefix,
        identity = ?config.identity,
        "Loaded configuration"
    );
    let grammar = Grammar::new(config);

    match cli.command {
        Commands::Compile { blueprint } => {
            let model: Blueprint = load_json(&blueprint)?;
            let statements = model.to_sql(&grammar)?;
            info!(
                table = %model.table,
                statements = statements.len(),
                "Compiled blueprint"
            );
            print!("{}", to_isql_script(&statements));
        }

        Commands::Sequence { sequence } => {
            let model: SequenceBlueprint = load_json(&sequence)?;
            let statements = model.to_sql(&grammar)?;
            info!(
                sequence = %model.sequence,
                statements = statements.len(),
                "Compiled sequence blueprint"
            );
            print!("{}", to_isql_script(&statements));
        }

        Commands::Probe { kind, table } => {
            let sql = match kind {
                ProbeKind::Table => grammar.compile_table_exists(),
                ProbeKind::Column => {
                    let table = table.ok_or_else(|| {
                        anyhow::anyhow!("--table is required for the column probe")
                    })?;
                    grammar.compile_column_exists(&table)
                }
                ProbeKind::Sequence => grammar.compile_sequence_exists(),
                ProbeKind::Trigger => grammar.compile_trigger_exists(),
            };
            println!("{sql}");
        }
    }

    Ok(())
}
