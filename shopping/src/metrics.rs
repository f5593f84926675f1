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

use crate::data::Label;
use crate::error::MetricsError;

/// Counts of the four (actual, predicted) outcomes for binary labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_negatives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
}

impl ConfusionMatrix {
    /// Tallies index-aligned `actual` and `predicted` labels.
    ///
    /// # Errors
    /// - `MetricsError::EmptyInput` if either sequence is empty.
    /// - `MetricsError::DimensionMismatch` if the lengths differ.
    pub fn from_labels(actual: &[Label], predicted: &[Label]) -> Result<Self, MetricsError> {
        if actual.is_empty() || predicted.is_empty() {
            return Err(MetricsError::EmptyInput);
        }
        if actual.len() != predicted.len() {
            return Err(MetricsError::DimensionMismatch {
                expected: actual.len(),
                actual: predicted.len(),
            });
        }

        let mut matrix = ConfusionMatrix::default();
        for (&truth, &guess) in actual.iter().zip(predicted) {
            match (truth, guess) {
                (Label::Purchase, Label::Purchase) => matrix.true_positives += 1,
                (Label::Purchase, Label::NoPurchase) => matrix.false_negatives += 1,
                (Label::NoPurchase, Label::NoPurchase) => matrix.true_negatives += 1,
                (Label::NoPurchase, Label::Purchase) => matrix.false_positives += 1,
            }
        }
        Ok(matrix)
    }

    pub fn actual_positives(&self) -> usize {
        self.true_positives + self.false_negatives
    }

    pub fn actual_negatives(&self) -> usize {
        self.true_negatives + self.false_positives
    }

    pub fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }

    pub fn incorrect(&self) -> usize {
        self.false_positives + self.false_negatives
    }

    /// True positive rate. Undefined when no actual label is positive.
    pub fn sensitivity(&self) -> Result<f64, MetricsError> {
        rate(self.true_positives, self.actual_positives(), "sensitivity", "positive")
    }

    /// True negative rate. Undefined when no actual label is negative.
    pub fn specificity(&self) -> Result<f64, MetricsError> {
        rate(self.true_negatives, self.actual_negatives(), "specificity", "negative")
    }
}

fn rate(
    hits: usize,
    total: usize,
    name: &'static str,
    class: &'static str,
) -> Result<f64, MetricsError> {
    if total == 0 {
        return Err(MetricsError::UndefinedRate { rate: name, class });
    }
    Ok(hits as f64 / total as f64)
}

/// Outcome of comparing predictions against ground truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub correct: usize,
    pub incorrect: usize,
    pub sensitivity: f64,
    pub specificity: f64,
}

impl Evaluation {
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Result<Self, MetricsError> {
        Ok(Evaluation {
            correct: matrix.correct(),
            incorrect: matrix.incorrect(),
            sensitivity: matrix.sensitivity()?,
            specificity: matrix.specificity()?,
        })
    }
}

/// Computes `(sensitivity, specificity)` for index-aligned label sequences.
pub fn evaluate(actual: &[Label], predicted: &[Label]) -> Result<(f64, f64), MetricsError> {
    let matrix = ConfusionMatrix::from_labels(actual, predicted)?;
    Ok((matrix.sensitivity()?, matrix.specificity()?))
}
