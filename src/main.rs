use anyhow::{Context, Result};
use chromhelper::{
    config::Config,
    output::{format_result_to_string, print_profiles, print_result, OutputFormat},
    scanner::{FailurePolicy, Scanner},
};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "chromhelper")]
#[command(
    author,
    version,
    about = "List Chrome profiles and the extensions installed in them"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Chrome user-data directory (defaults to the platform location)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed extensions across all profiles (default)
    Extensions(ExtensionsArgs),

    /// List browser profiles
    Profiles {
        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Print the Chrome user-data directory that would be scanned
    DataDir,

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Default)]
struct ExtensionsArgs {
    /// Output format (table, json)
    #[arg(short, long)]
    format: Option<String>,

    /// Write output to file
    #[arg(short, long)]
    output: Option<String>,

    /// Abort on the first unreadable profile or manifest
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Skip unreadable profiles and manifests
    #[arg(long)]
    lenient: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    match cli.command.unwrap_or_else(|| Commands::Extensions(ExtensionsArgs::default())) {
        Commands::Extensions(args) => run_extensions(&config, args),
        Commands::Profiles { format } => {
            let format = parse_format(format.as_deref().unwrap_or(&config.default_format))?;
            let scanner = Scanner::new(config.data_root()?);
            let profiles = scanner.scan_profiles()?;
            print_profiles(&profiles, format)
        }
        Commands::DataDir => {
            println!("{}", config.data_root()?.display());
            Ok(())
        }
        Commands::Config { init, path } => handle_config(init, path),
    }
}

fn run_extensions(config: &Config, args: ExtensionsArgs) -> Result<()> {
    let format = parse_format(args.format.as_deref().unwrap_or(&config.default_format))?;
    let policy = if args.strict {
        FailurePolicy::Abort
    } else if args.lenient {
        FailurePolicy::Skip
    } else {
        config.failure_policy
    };

    let scanner = Scanner::new(config.data_root()?).with_policy(policy);
    tracing::info!("Scanning {}", scanner.data_root().display());

    let spinner = (format == OutputFormat::Table).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning profiles...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = scanner.scan();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result.with_context(|| {
        format!("Failed to scan {}", scanner.data_root().display())
    })?;

    if let Some(path) = args.output {
        let content = format_result_to_string(&report, format)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write output file: {}", path))?;
        println!("Results written to: {}", path);
        return Ok(());
    }

    print_result(&report, format)
}

fn parse_format(s: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(s).map_err(|e| anyhow::anyhow!(e))
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    // Show current config
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'chromhelper config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("chromhelper=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chromhelper=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
