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

//! Probability distributions as reusable objects.
//!
//! A distribution caches its mean and standard deviation, can load raw samples from a text file
//! and can re-estimate its parameters from them. The shared part is the [`Distribution`] trait;
//! [`Binomial`] is the concrete distribution provided by the crate.
//!
//! # Examples
//!
//! A binomial distribution is described by the probability of success `p` and the number of
//! trials `n`. The statistics are calculated as soon as it is constructed:
//! ```
//! use binomial_distributions::{Binomial, Distribution};
//!
//! let distr = Binomial::new(0.4, 20)?;
//! assert_eq!(distr.mean(), 8.0);
//! assert!((distr.stdev() - 2.1909).abs() < 1e-4);
//!
//! // Probability of exactly 8 successes
//! let mass = distr.pmf(8)?;
//! assert!((mass - 0.1797).abs() < 1e-4);
//!
//! println!("{distr}");
//! # Ok::<(), binomial_distributions::Error>(())
//! ```
//!
//! The parameters can also be estimated from a file of trial outcomes, one `0` or `1` per line:
//! ```
//! use std::io::Write;
//! use binomial_distributions::{Binomial, Distribution};
//!
//! let mut file = tempfile::NamedTempFile::new().unwrap();
//! writeln!(file, "1\n0\n1\n1").unwrap();
//!
//! let mut distr = Binomial::default();
//! distr.read_data_file(file.path())?;
//! let (p, n) = distr.replace_stats_with_data()?;
//! assert_eq!((p, n), (0.75, 4));
//! assert_eq!(distr.mean(), 3.0);
//! # Ok::<(), binomial_distributions::Error>(())
//! ```
//!
//! The sum of two independent binomial variables with the same `p` is binomial again:
//! ```
//! use binomial_distributions::{Binomial, Error};
//!
//! let a = Binomial::new(0.25, 10)?;
//! let b = Binomial::new(0.25, 30)?;
//! assert_eq!(a.combine(&b)?.n(), 40);
//!
//! let c = Binomial::new(0.5, 30)?;
//! assert!(matches!(a.combine(&c), Err(Error::Precondition(_))));
//! # Ok::<(), Error>(())
//! ```
//!
//! Drawing the plots is left to other libraries. [`Binomial::pmf_chart`] and
//! [`Binomial::data_chart`] return everything needed to draw them as a [`BarChart`].
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod binomial;
pub mod chart;
pub mod distribution;
pub mod error;
pub mod sample;

pub use binomial::Binomial;
pub use chart::{BarChart, OutcomeCounts};
pub use distribution::{Distribution, DistributionBase};
pub use error::{Error, Result};
