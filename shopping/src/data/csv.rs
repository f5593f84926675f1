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

use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::dataset::Dataset;
use crate::data::record::{encode, is_header};
use crate::data::DataLoader;
use crate::error::DataError;

/// Loads session exports: 18 comma-separated fields per row, optional header row.
pub struct ShoppingCsvLoader;

impl ShoppingCsvLoader {
    /// Reads and encodes every session row from `reader`.
    ///
    /// Rows whose first field is `Administrative` are treated as headers and
    /// skipped wherever they appear. Any other row must encode cleanly; the
    /// first failure aborts the load and reports its 1-based line number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
        let mut rdr =
            csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);

        let mut rows = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let line = record.position().map_or(i as u64 + 1, |p| p.line());
            let fields: Vec<&str> = record.iter().collect();
            if is_header(&fields) {
                debug!("Skipping header row at line {}", line);
                continue;
            }
            let encoded = encode(&fields).map_err(|source| DataError::Record { line, source })?;
            rows.push(encoded);
        }

        if rows.is_empty() {
            return Err(DataError::EmptyFile);
        }

        let dataset = Dataset::from_sessions(rows)?;
        info!("Loaded {} sessions ({} with revenue)", dataset.len(), dataset.positives());
        Ok(dataset)
    }
}

impl DataLoader for ShoppingCsvLoader {
    type Error = DataError;

    fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, DataError> {
        let path = path.as_ref();
        debug!("Opening session data at {:?}", path);
        let file = File::open(path)?;
        ShoppingCsvLoader::from_reader(file)
    }
}
