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

use ndarray::{Array2, ArrayView1, Axis};

use crate::data::record::{FeatureVector, Label, Session, FEATURE_COUNT};
use crate::error::DataError;

/// Session feature rows with their index-aligned labels.
///
/// `features` always has `FEATURE_COUNT` columns and exactly one row per label.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Vec<Label>,
}

impl Dataset {
    pub fn new(features: Array2<f64>, labels: Vec<Label>) -> Result<Self, DataError> {
        if features.ncols() != FEATURE_COUNT {
            return Err(DataError::DimensionMismatch {
                expected: FEATURE_COUNT,
                actual: features.ncols(),
            });
        }
        if features.nrows() != labels.len() {
            return Err(DataError::DimensionMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }
        Ok(Dataset { features, labels })
    }

    pub fn from_vectors(vectors: &[FeatureVector], labels: Vec<Label>) -> Result<Self, DataError> {
        let flat: Vec<f64> = vectors.iter().flat_map(|v| v.iter().copied()).collect();
        let features = Array2::from_shape_vec((vectors.len(), FEATURE_COUNT), flat)?;
        Dataset::new(features, labels)
    }

    pub fn from_sessions<I>(rows: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (Session, Label)>,
    {
        let (vectors, labels): (Vec<FeatureVector>, Vec<Label>) =
            rows.into_iter().map(|(session, label)| (session.features(), label)).unzip();
        Dataset::from_vectors(&vectors, labels)
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.features.row(index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of rows labeled `Label::Purchase`.
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|l| l.is_purchase()).count()
    }

    /// Copies the rows at `indices`, in that order, into a new dataset.
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    pub(crate) fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(Axis(0), indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(fill: f64) -> FeatureVector {
        [fill; FEATURE_COUNT]
    }

    #[test]
    fn from_vectors_keeps_alignment() {
        let dataset = Dataset::from_vectors(
            &[vector(0.0), vector(1.0), vector(2.0)],
            vec![Label::NoPurchase, Label::Purchase, Label::NoPurchase],
        )
        .unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.features().dim(), (3, FEATURE_COUNT));
        assert_eq!(dataset.row(1)[16], 1.0);
        assert_eq!(dataset.labels()[1], Label::Purchase);
        assert_eq!(dataset.positives(), 1);
    }

    #[test]
    fn label_count_mismatch() {
        let result = Dataset::from_vectors(&[vector(0.0), vector(1.0)], vec![Label::Purchase]);
        assert!(matches!(result, Err(DataError::DimensionMismatch { expected: 2, actual: 1 })));
    }

    #[test]
    fn wrong_feature_width() {
        let result = Dataset::new(Array2::zeros((2, 3)), vec![Label::Purchase; 2]);
        assert!(matches!(result, Err(DataError::DimensionMismatch { expected: 17, actual: 3 })));
    }

    #[test]
    fn select_copies_rows_in_order() {
        let dataset = Dataset::from_vectors(
            &[vector(0.0), vector(1.0), vector(2.0)],
            vec![Label::NoPurchase, Label::Purchase, Label::NoPurchase],
        )
        .unwrap();
        let subset = dataset.select(&[2, 1]);
        assert_eq!(subset.len(), 2);
        assert_eq!(subset.row(0)[0], 2.0);
        assert_eq!(subset.labels(), &[Label::NoPurchase, Label::Purchase]);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    #[should_panic]
    fn select_out_of_range_panics() {
        let dataset = Dataset::from_vectors(&[vector(0.0)], vec![Label::Purchase]).unwrap();
        let _ = dataset.select(&[1]);
    }

    #[test]
    fn empty_dataset() {
        let dataset = Dataset::from_vectors(&[], Vec::new()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.features().dim(), (0, FEATURE_COUNT));
    }
}
