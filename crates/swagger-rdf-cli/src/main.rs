use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use swagger_rdf_core::{turtle, Config, ConfigError, ContextBuilder, ConvertError, Converter};
use tracing::Level;

#[derive(Parser)]
#[command(name = "swagger-rdf")]
#[command(about = "Convert Swagger/OpenAPI 2.0 documents into an RDF graph", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./swagger-rdf.toml or the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URI for generated resources
    #[arg(long, global = true)]
    base_uri: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Swagger document to Turtle
    Convert {
        /// Input file (.json, .yaml or .yml); prompted for when omitted
        file: Option<PathBuf>,

        /// Write Turtle to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the context mapping literal
    Context,
    /// Print the default configuration
    Config,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match load_config(cli.config.as_deref(), cli.base_uri) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error[{}]: {}", e.kind(), e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.command {
        Commands::Convert { file, output } => {
            if output.is_some() {
                config.output.output_path = output;
            }
            let path = match file {
                Some(path) => path,
                None => prompt_for_path(&config)?,
            };

            if let Err(e) = convert(&path, &config) {
                eprintln!("error[{}]: {}", e.kind(), e);
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Context => {
            let converter = Converter::from_config(&config);
            match ContextBuilder::new(converter.namespace()).literal() {
                Ok(literal) => println!("{}", literal),
                Err(e) => {
                    eprintln!("error[{}]: {}", e.kind(), e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the configuration and apply the `--base-uri` override.
fn load_config(path: Option<&Path>, base_uri: Option<String>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    if let Some(base) = base_uri {
        config.namespace.base_uri = base;
        config.validate()?;
    }
    Ok(config)
}

/// Convert one file and emit the graph. Nothing is written unless the whole
/// conversion succeeds.
fn convert(path: &Path, config: &Config) -> Result<(), ConvertError> {
    let graph = Converter::from_config(config).convert_file(path)?;
    tracing::info!(triples = graph.len(), "conversion finished");

    match &config.output.output_path {
        Some(out) => turtle::write_turtle_file(&graph, out)?,
        None => println!("{}", turtle::to_turtle(&graph)?),
    }
    println!("{}", config.output.completion_notice);
    Ok(())
}

/// Ask for the input path on stdin. An empty answer selects the configured
/// default file.
fn prompt_for_path(config: &Config) -> io::Result<PathBuf> {
    print!("Enter the path to the Swagger JSON file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim();

    Ok(if answer.is_empty() {
        PathBuf::from(&config.output.input_file)
    } else {
        PathBuf::from(answer)
    })
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
