use clap::{Parser, Subcommand};
use manifest_validation::cli::{self, Source};
use manifest_validation::settings::{self, OutputFormat};
use manifest_validation::{APP_NAME, LOG_ENV, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Validate Web App Manifests against the PWA rule catalog", long_about = None)]
struct Cli {
    /// Settings file (default: ~/.config/manifest-validation/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (default: from settings)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every rule (or only required ones) against a manifest
    Validate {
        /// Manifest file, or - for stdin
        path: Option<PathBuf>,

        /// Only run required rules
        #[arg(long)]
        required_only: bool,
    },
    /// Validate a single field value
    Field {
        /// Manifest member name
        name: String,

        /// Value as JSON (bare text is taken as a string)
        value: String,
    },
    /// List required members the manifest does not declare
    Missing {
        /// Manifest file, or - for stdin
        path: Option<PathBuf>,
    },
    /// Show failing optional rules for declared members
    Improvements {
        /// Manifest file, or - for stdin
        path: Option<PathBuf>,
    },
    /// Validate every manifest.json and *.webmanifest under a directory
    Scan {
        dir: PathBuf,
    },
    /// List the rule catalog
    Rules,
    /// Print the language code table
    Langs,
    /// Show the effective settings, or write defaults
    Config {
        /// Write a default settings file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn status(passed: bool) -> ExitCode {
    if passed { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

async fn run(args: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config_path = args.config.as_deref();

    if let Commands::Config { init: true, force } = args.command {
        cli::init_config(config_path, force)?;
        return Ok(ExitCode::SUCCESS);
    }

    let settings = settings::load_settings(config_path)?;
    let format = args.format.unwrap_or(settings.output.format);

    let code = match args.command {
        Commands::Validate { path, required_only } => {
            let source = Source::from_arg(path)?;
            status(cli::validate(&source, required_only, format, &settings).await?)
        }
        Commands::Field { name, value } => status(cli::validate_field(&name, &value, format, &settings).await?),
        Commands::Missing { path } => {
            let source = Source::from_arg(path)?;
            status(cli::show_missing(&source, format)?)
        }
        Commands::Improvements { path } => {
            let source = Source::from_arg(path)?;
            cli::show_improvements(&source, format, &settings).await?;
            ExitCode::SUCCESS
        }
        Commands::Scan { dir } => status(cli::scan(&dir, format, &settings).await? == 0),
        Commands::Rules => {
            cli::list_rules(format, &settings)?;
            ExitCode::SUCCESS
        }
        Commands::Langs => {
            cli::list_languages(format)?;
            ExitCode::SUCCESS
        }
        Commands::Config { .. } => {
            cli::show_config(config_path, &settings)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[{}] Error: {}", APP_NAME, e);
            ExitCode::from(2)
        }
    }
}
