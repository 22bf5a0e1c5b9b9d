use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resultflow::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resultflow")]
#[command(about = "Combine test results and log each new output")]
struct Cli {
    /// Log output format: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline once and print the combined output
    Run {
        /// Candidate values for the first result, as a JSON array
        #[arg(short, long)]
        range: Option<String>,
        /// Test type used to look up the second result
        #[arg(short, long)]
        test_type: Option<String>,
        /// Path of the result log
        #[arg(short, long)]
        log_path: Option<PathBuf>,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the result log
    Show {
        /// Path of the result log
        #[arg(short, long)]
        log_path: Option<PathBuf>,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the score for each test type
    Table,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    if let Err(err) = execute(cli.command) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            range,
            test_type,
            log_path,
            config,
        } => {
            let mut config = load_config(config, log_path)?;
            if let Some(range) = range {
                config.result_range = parse_range(&range)?;
            }
            if let Some(test_type) = test_type {
                config.test_type = test_type;
            }

            let mut pipeline =
                ResultsPipeline::from_config(&config).context("Failed to open result log")?;
            let report = pipeline.run(&config).context("Pipeline run failed")?;

            println!("{}", report.output);
        }
        Commands::Show { log_path, config } => {
            let config = load_config(config, log_path)?;
            let log = ResultLog::open(&config.log_path).context("Failed to open result log")?;
            println!("{}", log.to_pretty_json()?);
        }
        Commands::Table => {
            for difficulty in Difficulty::ALL {
                println!("{:<8}{}", difficulty.as_str(), difficulty.score());
            }
        }
    }

    Ok(())
}

/// Flag > config file > default.
fn load_config(path: Option<PathBuf>, log_path: Option<PathBuf>) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => PipelineConfig::from_file(&path)?,
        None => PipelineConfig::default(),
    };
    if let Some(log_path) = log_path {
        config.log_path = log_path;
    }
    Ok(config)
}

fn parse_range(raw: &str) -> Result<Vec<serde_json::Value>> {
    serde_json::from_str(raw).with_context(|| format!("--range must be a JSON array, got '{raw}'"))
}
