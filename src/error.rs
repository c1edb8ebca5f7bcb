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

//! Contains the [`Error`] type shared by every distribution in the crate.

use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The error returned by fallible operations on distributions.
#[derive(Error, Debug)]
pub enum Error {
    /// The sample source could not be opened or read.
    #[error("cannot read data from {}: {source}", .path.display())]
    DataAccess {
        /// The path of the sample source.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Reading from an unnamed sample source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the sample source is not a number.
    #[error("line {line}: {content:?} is not a number: {source}")]
    Parse {
        /// The 1-based number of the offending line.
        line: usize,
        /// The text of the offending line.
        content: String,
        /// The underlying parse error.
        source: ParseFloatError,
    },

    /// The operation is undefined for the current state or the given arguments.
    #[error("domain error: {0}")]
    Domain(String),

    /// The operands of a binary operation are not compatible.
    #[error("precondition failed: {0}")]
    Precondition(String),
}

impl Error {
    /// Names the file an I/O error came from.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            Error::Io(source) => Error::DataAccess {
                path: path.to_path_buf(),
                source,
            },
            err => err,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
