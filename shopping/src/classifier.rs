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

use log::debug;
use ndarray::{Array2, ArrayView1, Axis, Zip};

use crate::data::{Dataset, Label};
use crate::error::ModelError;

/// Euclidean distance between two feature rows.
///
/// Squares are accumulated relative to the largest component difference seen
/// so far, so rows with magnitudes far beyond `sqrt(f64::MAX)` still compare
/// correctly instead of overflowing to infinity.
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    let (scale, ssq) = Zip::from(a).and(b).fold((0.0_f64, 1.0_f64), |(scale, ssq), &a_i, &b_i| {
        let diff = (a_i - b_i).abs();
        if diff == 0.0 {
            (scale, ssq)
        } else if scale < diff {
            let r = scale / diff;
            (diff, 1.0 + ssq * r * r)
        } else {
            let r = diff / scale;
            (scale, ssq + r * r)
        }
    });
    scale * ssq.sqrt()
}

/// A 1-nearest-neighbor classifier over raw, unscaled session features.
///
/// Holds a shared borrow of its training set and never modifies it, so one
/// fitted model can serve queries from several threads.
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighbor<'a> {
    training: &'a Dataset,
}

impl<'a> NearestNeighbor<'a> {
    /// Fits the model on `training`.
    ///
    /// # Errors
    /// Returns `ModelError::EmptyTrainingSet` when `training` has no rows.
    pub fn fit(training: &'a Dataset) -> Result<Self, ModelError> {
        if training.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        debug!("Fitted nearest-neighbor model on {} sessions", training.len());
        Ok(NearestNeighbor { training })
    }

    /// Finds the training row closest to `query`.
    ///
    /// Returns the row index and its Euclidean distance. When several rows
    /// share the minimum distance the earliest one wins.
    pub fn nearest(&self, query: ArrayView1<f64>) -> Result<(usize, f64), ModelError> {
        let features = self.training.features();
        if query.len() != features.ncols() {
            return Err(ModelError::DimensionMismatch {
                expected: features.ncols(),
                actual: query.len(),
            });
        }

        let mut best_index = 0;
        let mut best = f64::INFINITY;
        for (i, row) in features.axis_iter(Axis(0)).enumerate() {
            let dist = euclidean(row, query);
            if dist < best {
                best = dist;
                best_index = i;
            }
        }
        Ok((best_index, best))
    }

    /// Predicts the label of a single feature row.
    pub fn predict_one(&self, query: ArrayView1<f64>) -> Result<Label, ModelError> {
        let (index, _) = self.nearest(query)?;
        Ok(self.training.labels()[index])
    }

    /// Predicts one label per row of `queries`, in row order.
    pub fn predict(&self, queries: &Array2<f64>) -> Result<Vec<Label>, ModelError> {
        let predictions = queries
            .axis_iter(Axis(0))
            .map(|row| self.predict_one(row))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "Predicted {} sessions ({} with revenue)",
            predictions.len(),
            predictions.iter().filter(|l| l.is_purchase()).count()
        );
        Ok(predictions)
    }
}
