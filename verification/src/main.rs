use std::path::PathBuf;

use clap::{Parser, Subcommand};
use polytope_verification::{suite, Section, SimulationSummary, SuiteConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "polytope-verify", about = "E8 / 600-cell / 24-cell verification suite")]
struct Cli {
    /// Path to config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run verification sections and print their reports.
    Run {
        /// Sections to run (default: all)
        #[arg(value_enum)]
        sections: Vec<Section>,
    },

    /// Compute the run summary and write it as JSON.
    Summary {
        /// Output path (default: the config's summary_path)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SuiteConfig::load(path)?,
        None => SuiteConfig::default(),
    };

    match cli.command {
        Some(Commands::Run { sections }) => cmd_run(&config, &sections),
        Some(Commands::Summary { out }) => cmd_summary(&config, out)?,
        None => {
            cmd_run(&config, &[]);
            cmd_summary(&config, None)?;
        }
    }
    Ok(())
}

fn cmd_run(config: &SuiteConfig, sections: &[Section]) {
    let reports = suite::run(config, sections);
    for r in &reports {
        println!("{r}");
    }
    let (passed, failed) = suite::tally(&reports);
    println!("\n{} reports: {passed} checks passed, {failed} failed", reports.len());
}

fn cmd_summary(config: &SuiteConfig, out: Option<PathBuf>) -> anyhow::Result<()> {
    let summary = SimulationSummary::compute(config);
    println!("\n{summary}");
    let path = out.unwrap_or_else(|| config.summary_path.clone());
    summary.write_json(&path)?;
    println!("\nResults saved to {}", path.display());
    Ok(())
}
