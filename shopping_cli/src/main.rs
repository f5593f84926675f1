use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use shopping::metrics::Evaluation;
use shopping::pipeline::{run, PipelineConfig, DEFAULT_TEST_SIZE};

#[derive(Parser)]
#[command(name = "shopping", about = "Predict purchase intent from browsing sessions with 1-NN")]
struct Cli {
    /// CSV export of browsing sessions, 18 columns per row.
    data: PathBuf,

    /// Fraction of sessions held out for testing, in (0, 1).
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    test_size: f64,

    /// Seed for the train/test shuffle. Omit for a fresh random split.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        let config = PipelineConfig::new(&self.data).with_test_size(self.test_size);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn report(evaluation: &Evaluation) {
    println!("Correct: {}", evaluation.correct);
    println!("Incorrect: {}", evaluation.incorrect);
    println!("True Positive Rate: {:.2}%", 100.0 * evaluation.sensitivity);
    println!("True Negative Rate: {:.2}%", 100.0 * evaluation.specificity);
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli.pipeline_config()) {
        Ok(evaluation) => {
            report(&evaluation);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Pipeline failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
