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
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::data::dataset::Dataset;
use crate::error::SplitError;

/// Configuration for a randomized train/test split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    test_size: f64,
    seed: Option<u64>,
}

impl SplitConfig {
    /// `test_size` is the fraction of rows held out for testing, in (0, 1).
    pub fn new(test_size: f64) -> Self {
        SplitConfig { test_size, seed: None }
    }

    /// Fixes the shuffle so the split is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn test_size(&self) -> f64 {
        self.test_size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig::new(0.4)
    }
}

/// Shuffles `dataset` and copies it into disjoint `(train, test)` subsets.
///
/// The test side receives `ceil(test_size * n)` rows, the train side the
/// rest. Labels stay aligned with their feature rows on both sides.
pub fn train_test_split(
    dataset: &Dataset,
    config: &SplitConfig,
) -> Result<(Dataset, Dataset), SplitError> {
    let test_size = config.test_size;
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(SplitError::InvalidTestSize(test_size));
    }

    let rows = dataset.len();
    let n_test = (test_size * rows as f64).ceil() as usize;
    if n_test == 0 || n_test >= rows {
        return Err(SplitError::TooFewRows { rows, test_size });
    }

    let indices = match config.seed {
        Some(seed) => shuffled_indices(rows, &mut StdRng::seed_from_u64(seed)),
        None => shuffled_indices(rows, &mut rand::thread_rng()),
    };
    let (test_idx, train_idx) = indices.split_at(n_test);
    debug!("Split data: train_size={}, test_size={}", train_idx.len(), test_idx.len());

    Ok((dataset.select(train_idx), dataset.select(test_idx)))
}

fn shuffled_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}
