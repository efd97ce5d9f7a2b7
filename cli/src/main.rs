use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tyras_metadata_jsonschema::{compress_unions_deep, default_fallback_value, SchemaOptions};

#[derive(Parser)]
#[command(name = "tyras-schema")]
#[command(about = "Post-process JSON Schemas produced for TyRAS endpoint metadata")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Collapse `anyOf` unions of const/enum schemas into a single const/enum
    Compress {
        /// Input JSON Schema file
        input: PathBuf,

        /// Output schema file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with schema options (kebab-case keys)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Max nesting depth to descend into (overrides the config file)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Print the schema used when no transformer matches a validator
    Fallback {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compress {
            input,
            output,
            config,
            max_depth,
            format,
        } => {
            let schema: serde_json::Value = read_json(&input, "schema")?;

            let mut options = match config {
                Some(path) => read_json::<SchemaOptions>(&path, "config")?,
                None => SchemaOptions::default(),
            };
            if let Some(max_depth) = max_depth {
                options.max_depth = max_depth;
            }

            let result = compress_unions_deep(&schema, &options)
                .map_err(|e| anyhow::Error::from(e).context("Compression failed"))?;

            write_json(&result, output.as_ref(), format)?;
        }
        Commands::Fallback { format } => {
            write_json(&default_fallback_value(), None, format)?;
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {what} file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {what} from: {}", path.display()))
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
