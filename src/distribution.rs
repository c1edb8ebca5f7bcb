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

//! Contains the [`Distribution`] trait and the state shared by all its implementors.
//!
//! Every distribution caches its mean and standard deviation and owns a sequence of raw samples.
//! The samples are loaded with [`Distribution::read_data_file`] or [`Distribution::read_data`];
//! turning them into new parameters is up to each implementor.

use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::error::Result;

pub mod data;

#[allow(clippy::module_name_repetitions)]
/// The state shared by every distribution: the raw samples and the cached summary statistics.
///
/// Only the owner of the state can change it. [`Distribution`] hands out shared references, so
/// the statistics of a distribution change only through the methods of its type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistributionBase {
    /// Samples in the order they were read
    pub(crate) data: Vec<f64>,
    pub(crate) mean: f64,
    pub(crate) stdev: f64,
}

impl DistributionBase {
    /// Returns the state with the given statistics and no samples.
    #[must_use]
    pub fn new(mean: f64, stdev: f64) -> Self {
        Self {
            data: Vec::new(),
            mean,
            stdev,
        }
    }

    /// Stores newly calculated statistics. The samples are kept.
    pub fn set_statistics(&mut self, mean: f64, stdev: f64) {
        self.mean = mean;
        self.stdev = stdev;
    }

    /// Replaces the samples. The statistics are kept.
    pub fn set_data(&mut self, data: Vec<f64>) {
        self.data = data;
    }
}

/// A probability distribution with a mean, a standard deviation and a set of raw samples.
///
/// An implementor owns a [`DistributionBase`] and keeps its statistics up to date:
/// ```
/// use binomial_distributions::{Distribution, DistributionBase};
///
/// struct Exponential {
///     base: DistributionBase,
///     rate: f64,
/// }
///
/// impl Exponential {
///     fn new(rate: f64) -> Self {
///         Self { base: DistributionBase::new(1.0 / rate, 1.0 / rate), rate }
///     }
///
///     fn replace_stats_with_data(&mut self) {
///         let mean = self.data().iter().sum::<f64>() / self.data().len() as f64;
///         self.rate = 1.0 / mean;
///         self.base.set_statistics(mean, mean);
///     }
/// }
///
/// impl Distribution for Exponential {
///     fn base(&self) -> &DistributionBase {
///         &self.base
///     }
///
///     fn replace_data(&mut self, data: Vec<f64>) {
///         self.base.set_data(data);
///     }
/// }
///
/// let mut distr = Exponential::new(0.5);
/// distr.read_data("1\n2\n3\n".as_bytes())?;
/// distr.replace_stats_with_data();
/// assert_eq!(distr.mean(), 2.0);
/// assert_eq!(distr.rate, 0.5);
/// assert_eq!(distr.data(), &[1.0, 2.0, 3.0]);
/// # Ok::<(), binomial_distributions::Error>(())
/// ```
///
/// Holders of a distribution only get a shared reference to its state, so they cannot overwrite
/// the cached statistics:
/// ```compile_fail
/// use binomial_distributions::{Binomial, Distribution};
///
/// let mut distr = Binomial::new(0.4, 20).unwrap();
/// distr.base().set_statistics(999.0, -1.0);
/// ```
pub trait Distribution {
    /// Returns the shared state of the distribution.
    fn base(&self) -> &DistributionBase;

    /// Replaces the samples with `data`.
    ///
    /// The statistics are not recalculated.
    fn replace_data(&mut self, data: Vec<f64>);

    /// The mean as it was last calculated.
    fn mean(&self) -> f64 {
        self.base().mean
    }

    /// The standard deviation as it was last calculated.
    fn stdev(&self) -> f64 {
        self.base().stdev
    }

    /// The loaded samples.
    fn data(&self) -> &[f64] {
        &self.base().data
    }

    /// Replaces the samples with the numbers read from `reader`, one number per line.
    ///
    /// The statistics are not recalculated. On failure the previous samples are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if reading fails and
    /// [`Error::Parse`](crate::Error::Parse) if a line is not a number.
    fn read_data(&mut self, reader: impl BufRead) -> Result<()>
    where
        Self: Sized,
    {
        let samples = data::parse_samples(reader)?;
        debug!("Loaded {} samples", samples.len());
        self.replace_data(samples);
        Ok(())
    }

    /// Replaces the samples with the numbers read from the file at `path`, one number per line.
    ///
    /// The statistics are not recalculated. On failure the previous samples are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataAccess`](crate::Error::DataAccess) if the file cannot be opened or
    /// read and [`Error::Parse`](crate::Error::Parse) if a line is not a number.
    fn read_data_file(&mut self, path: impl AsRef<Path>) -> Result<()>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        debug!("Reading samples from {}", path.display());
        let reader = data::open(path)?;
        self.read_data(reader).map_err(|err| err.with_path(path))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::Error;

    /// A distribution with a constant spread whose mean follows the data.
    struct Shifted {
        base: DistributionBase,
    }

    impl Shifted {
        #[allow(clippy::cast_precision_loss)]
        fn refit(&mut self) {
            let mean = self.data().iter().sum::<f64>() / self.data().len() as f64;
            self.base.set_statistics(mean, self.stdev());
        }
    }

    impl Distribution for Shifted {
        fn base(&self) -> &DistributionBase {
            &self.base
        }

        fn replace_data(&mut self, data: Vec<f64>) {
            self.base.set_data(data);
        }
    }

    fn shifted() -> Shifted {
        Shifted {
            base: DistributionBase::new(25.0, 2.0),
        }
    }

    #[test]
    fn test_new_keeps_statistics() {
        let distr = shifted();
        assert_eq!(distr.mean(), 25.0);
        assert_eq!(distr.stdev(), 2.0);
        assert!(distr.data().is_empty());
    }

    #[test]
    fn test_read_data_from_reader() {
        let mut distr = shifted();
        distr.read_data(Cursor::new("4\n5\n6\n")).unwrap();
        assert_eq!(distr.data(), &[4.0, 5.0, 6.0]);
        assert_eq!(distr.mean(), 25.0);
    }

    #[test]
    fn test_set_statistics_keeps_data() {
        let mut distr = shifted();
        distr.read_data(Cursor::new("1\n2\n3")).unwrap();
        distr.refit();
        assert_eq!(distr.mean(), 2.0);
        assert_eq!(distr.stdev(), 2.0);
        assert_eq!(distr.data().len(), 3);
    }

    #[test]
    fn test_read_data_file_replaces_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\n3\n2.5").unwrap();

        let mut distr = shifted();
        distr.replace_data(vec![7.0, 8.0, 9.0, 10.0]);
        distr.read_data_file(file.path()).unwrap();
        assert_eq!(distr.data(), &[1.0, 3.0, 2.5]);
        // loading does not touch the statistics
        assert_eq!(distr.mean(), 25.0);
        assert_eq!(distr.stdev(), 2.0);
    }

    #[test]
    fn test_read_data_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut distr = shifted();
        let err = distr.read_data_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::DataAccess { .. }));
    }

    #[test]
    fn test_read_data_file_directory() {
        // opening a directory may succeed, reading it does not
        let dir = tempfile::tempdir().unwrap();
        let mut distr = shifted();
        let err = distr.read_data_file(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DataAccess { .. }));
    }

    #[test]
    fn test_failed_load_keeps_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\nfoo\n0").unwrap();

        let mut distr = shifted();
        distr.replace_data(vec![1.0, 0.0]);
        let err = distr.read_data_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
        assert_eq!(distr.data(), &[1.0, 0.0]);
    }
}
