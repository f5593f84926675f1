// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use log::info;
use std::path::{Path, PathBuf};

use crate::classifier::NearestNeighbor;
use crate::data::{load_data, train_test_split, ShoppingCsvLoader, SplitConfig};
use crate::error::PipelineError;
use crate::metrics::{ConfusionMatrix, Evaluation};

/// Fraction of sessions held out for testing unless configured otherwise.
pub const DEFAULT_TEST_SIZE: f64 = 0.4;

/// Configuration for one load → split → fit → predict → evaluate run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    data_path: PathBuf,
    test_size: f64,
    seed: Option<u64>,
}

impl PipelineConfig {
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        PipelineConfig {
            data_path: data_path.as_ref().to_path_buf(),
            test_size: DEFAULT_TEST_SIZE,
            seed: None,
        }
    }

    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn split_config(&self) -> SplitConfig {
        let config = SplitConfig::new(self.test_size);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Runs the whole pipeline and returns the test-set evaluation.
///
/// Any failure aborts the run; no partial results are returned.
pub fn run(config: &PipelineConfig) -> Result<Evaluation, PipelineError> {
    info!("Starting pipeline with config: {:?}", config);

    let dataset = load_data::<ShoppingCsvLoader, _>(&config.data_path)?;
    let (train, test) = train_test_split(&dataset, &config.split_config())?;
    info!("Training on {} sessions, testing on {}", train.len(), test.len());

    let model = NearestNeighbor::fit(&train)?;
    let predictions = model.predict(test.features())?;

    let matrix = ConfusionMatrix::from_labels(test.labels(), &predictions)?;
    let evaluation = Evaluation::from_matrix(&matrix)?;
    info!("Pipeline completed: {:?}", evaluation);
    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DataError, ModelError, SplitError};
    use std::fmt::Write as _;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Administrative,Administrative_Duration,Informational,Informational_Duration,ProductRelated,ProductRelated_Duration,BounceRates,ExitRates,PageValues,SpecialDay,Month,OperatingSystems,Browser,Region,TrafficType,VisitorType,Weekend,Revenue\n";

    fn init_logger() {
        let _ =
            env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
    }

    // Buyers sit far from browsers on page values, so 1-NN separates them.
    fn synthetic_csv(rows: usize) -> String {
        let months = ["Feb", "Mar", "Abr", "May", "June", "Nov", "Dec"];
        let mut content = String::from(HEADER);
        for i in 0..rows {
            let buyer = i % 3 == 0;
            let page_values = if buyer { 500.0 + i as f64 } else { i as f64 * 0.01 };
            writeln!(
                content,
                "{},{:.1},0,0,{},{:.1},0.01,0.02,{:.2},0,{},2,1,{},3,{},{},{}",
                i % 4,
                i as f64 * 1.5,
                i % 10,
                i as f64 * 2.0,
                page_values,
                months[i % months.len()],
                i % 9 + 1,
                if i % 2 == 0 { "Returning_Visitor" } else { "New_Visitor" },
                if i % 5 == 0 { "TRUE" } else { "FALSE" },
                if buyer { "TRUE" } else { "FALSE" },
            )
            .unwrap();
        }
        content
    }

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_run_end_to_end() {
        init_logger();
        let temp_file = create_temp_csv(&synthetic_csv(60));

        let config = PipelineConfig::new(temp_file.path()).with_seed(3);
        let evaluation = run(&config).expect("Pipeline failed");

        assert_eq!(evaluation.correct + evaluation.incorrect, 24);
        assert_eq!(evaluation.sensitivity, 1.0);
        assert_eq!(evaluation.specificity, 1.0);
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let temp_file = create_temp_csv(&synthetic_csv(45));

        let config = PipelineConfig::new(temp_file.path()).with_test_size(0.3).with_seed(11);
        let first = run(&config).unwrap();
        let second = run(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.correct + first.incorrect, 14);
    }

    #[test]
    fn test_run_missing_file() {
        let config = PipelineConfig::new("does/not/exist.csv");
        let result = run(&config);
        assert!(matches!(result, Err(PipelineError::Data(DataError::FileOpen(_)))));
    }

    #[test]
    fn test_run_invalid_test_size() {
        let temp_file = create_temp_csv(&synthetic_csv(10));
        let config = PipelineConfig::new(temp_file.path()).with_test_size(1.0);
        let result = run(&config);
        assert!(matches!(result, Err(PipelineError::Split(SplitError::InvalidTestSize(_)))));
    }

    #[test]
    fn test_run_reports_bad_record() {
        let mut content = synthetic_csv(5);
        content.push_str("0,0,0,0,1,0,0.2,0.2,0,0,Sept,1,1,1,1,Returning_Visitor,FALSE,FALSE\n");
        let temp_file = create_temp_csv(&content);

        let err = run(&PipelineConfig::new(temp_file.path())).unwrap_err();
        assert!(err.to_string().contains("Line 7"), "Unexpected error: {}", err);
        assert!(err.to_string().contains("Sept"), "Unexpected error: {}", err);
    }

    #[test]
    fn test_run_single_class_test_set() {
        let mut content = String::from(HEADER);
        for i in 0..6 {
            writeln!(content, "{i},0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE")
                .unwrap();
        }
        let temp_file = create_temp_csv(&content);

        let result = run(&PipelineConfig::new(temp_file.path()).with_seed(0));
        assert!(matches!(result, Err(PipelineError::Metrics(_))));
    }

    #[test]
    fn model_error_converts() {
        let err: PipelineError = ModelError::EmptyTrainingSet.into();
        assert!(err.to_string().starts_with("Model error"));
    }
}
