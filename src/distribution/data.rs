// Copyright 2024 Vladimir Kharchev

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reading samples from text sources with one number per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::trace;

use crate::error::{Error, Result};

/// Opens the sample file at `path` for buffered reading.
///
/// # Errors
///
/// Returns [`Error::DataAccess`] if the file cannot be opened.
pub fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::DataAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parses one number per line from `reader` and returns them in order.
///
/// Surrounding whitespace of each line is ignored. An empty line is not a number.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Parse`] if a line is not a number.
pub fn parse_samples(reader: impl BufRead) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let value = line.trim().parse::<f64>().map_err(|source| Error::Parse {
            line: index + 1,
            content: line.clone(),
            source,
        })?;
        trace!("line {}: {value}", index + 1);
        samples.push(value);
    }
    Ok(samples)
}
