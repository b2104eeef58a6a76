use std::path::PathBuf;
use std::process::ExitCode;

use arraybench_history::{report, Format};
use clap::Parser;
use log::error;

#[derive(Debug, Parser)]
#[command(
    name = "arraybench-history",
    version,
    about = "Compare arraybench results across criterion baselines",
    long_about = None
)]
struct Cli {
    /// Criterion output directory
    #[arg(long, value_name = "DIR", default_value = "target/criterion")]
    criterion_dir: PathBuf,

    /// Baseline to include; the first one is the reference for ratios
    #[arg(long = "baseline", value_name = "NAME", default_values_t = [String::from("new")])]
    baselines: Vec<String>,

    /// Only show benchmark ids containing this text
    #[arg(long)]
    filter: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match report(&cli.criterion_dir, &cli.baselines, cli.filter.as_deref(), cli.format) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
