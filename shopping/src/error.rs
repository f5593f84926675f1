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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Record has {actual} fields, expected {expected}")]
    FieldCount { actual: usize, expected: usize },

    #[error("Invalid integer '{value}' in column {column}: {source}")]
    MalformedInteger { column: &'static str, value: String, source: std::num::ParseIntError },

    #[error("Invalid number '{value}' in column {column}: {source}")]
    MalformedFloat { column: &'static str, value: String, source: std::num::ParseFloatError },

    #[error("Non-finite number '{value}' in column {column}")]
    NonFinite { column: &'static str, value: String },

    #[error("Unknown {column} category '{value}'")]
    UnknownCategory { column: &'static str, value: String },
}

impl EncodeError {
    /// True for every unparseable-field variant, false for unknown categories.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, EncodeError::UnknownCategory { .. })
    }
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to open file: {0}")]
    FileOpen(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("Line {line}: {source}")]
    Record { line: u64, source: EncodeError },

    #[error("Data file contains no session records")]
    EmptyFile,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Failed to shape data into array: {0}")]
    ArrayShape(#[from] ndarray::ShapeError),
}

#[derive(Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("Test size must lie strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    #[error("Cannot split {rows} rows with test size {test_size}: one side would be empty")]
    TooFewRows { rows: usize, test_size: f64 },
}

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Cannot fit a nearest-neighbor model on an empty training set")]
    EmptyTrainingSet,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum MetricsError {
    #[error("Cannot evaluate empty label sequences")]
    EmptyInput,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{rate} is undefined: no actual {class} labels")]
    UndefinedRate { rate: &'static str, class: &'static str },
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),
}
