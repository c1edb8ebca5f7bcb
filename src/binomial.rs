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

//! Contains the [`Binomial`] distribution.
//!
//! A binomial distribution is defined by two parameters: the probability `p` of a positive outcome
//! of one trial and the number of trials `n`. From them the mean and the standard deviation follow:
//!
//! - mean = n·p
//! - standard deviation = √(n·p·(1 − p))
//!
//! For example, flipping a fair coin 25 times gives `p = 0.5` and `n = 25`.

use std::fmt;

use log::debug;
use statrs::function::factorial::ln_binomial;

use crate::chart::{BarChart, OutcomeCounts};
use crate::distribution::{Distribution, DistributionBase};
use crate::error::{Error, Result};

/// A binomial distribution with cached mean and standard deviation.
///
/// The cached statistics are recalculated every time `p` or `n` changes through the methods of
/// this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    base: DistributionBase,
    /// Probability of success of one trial, in `[0, 1]`
    p: f64,
    /// Number of trials
    n: u64,
}

/// Returns an error unless `p` is a probability.
fn check_probability(p: f64) -> Result<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::Domain(format!("p must be in [0, 1], got {p}")))
    }
}

/// Probability of exactly `k` successes in `n` trials, `k <= n`.
///
/// Evaluated in log space, so it stays finite for large `n`.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
fn mass(k: u64, n: u64, p: f64) -> f64 {
    // 0^0 = 1 at both ends
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let kf = k as f64;
    let failures = (n - k) as f64;
    (ln_binomial(n, k) + kf * p.ln() + failures * (-p).ln_1p()).exp()
}

impl Binomial {
    /// Default probability of success
    pub const DEFAULT_P: f64 = 0.5;
    /// Default number of trials
    pub const DEFAULT_N: u64 = 20;

    /// Constructs the distribution of the number of successes in `n` trials with probability of
    /// success `p` and calculates its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `p` is not in `[0, 1]`.
    pub fn new(p: f64, n: u64) -> Result<Self> {
        check_probability(p)?;
        Ok(Self::with_parameters(p, n))
    }

    /// Builds the distribution from a `p` already known to be in `[0, 1]`.
    fn with_parameters(p: f64, n: u64) -> Self {
        let mut distr = Self {
            base: DistributionBase::default(),
            p,
            n,
        };
        distr.calculate_mean();
        distr.calculate_stdev();
        distr
    }

    /// Probability of success of one trial.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Number of trials.
    #[must_use]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Sets the probability of success and recalculates the statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `p` is not in `[0, 1]`. The distribution is then unchanged.
    pub fn set_p(&mut self, p: f64) -> Result<()> {
        check_probability(p)?;
        self.p = p;
        self.calculate_mean();
        self.calculate_stdev();
        Ok(())
    }

    /// Sets the number of trials and recalculates the statistics.
    pub fn set_n(&mut self, n: u64) {
        self.n = n;
        self.calculate_mean();
        self.calculate_stdev();
    }

    /// Calculates the mean `n·p`, stores it and returns it.
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_mean(&mut self) -> f64 {
        self.base.mean = self.n as f64 * self.p;
        self.base.mean
    }

    /// Calculates the standard deviation `√(n·p·(1 − p))`, stores it and returns it.
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_stdev(&mut self) -> f64 {
        self.base.stdev = (self.n as f64 * self.p * (1.0 - self.p)).sqrt();
        self.base.stdev
    }

    /// Estimates `p` and `n` from the loaded samples and recalculates the statistics.
    ///
    /// Every sample is one trial: `1` is a success and `0` a failure. `n` becomes the number of
    /// samples and `p` the fraction of successes. Returns the new `(p, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if no samples are loaded or a sample is neither `0` nor `1`.
    /// The distribution is then unchanged.
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn replace_stats_with_data(&mut self) -> Result<(f64, u64)> {
        let data = &self.base.data;
        if data.is_empty() {
            return Err(Error::Domain(
                "insufficient data: no samples are loaded".to_string(),
            ));
        }
        if let Some((index, x)) = data
            .iter()
            .enumerate()
            .find(|&(_, &x)| x != 0.0 && x != 1.0)
        {
            return Err(Error::Domain(format!(
                "sample {} is {x}, every sample must be 0 or 1",
                index + 1
            )));
        }
        let n = data.len() as u64;
        let p = data.iter().sum::<f64>() / n as f64;
        debug!("Estimated p = {p}, n = {n} from the data");

        self.p = p;
        self.n = n;
        self.calculate_mean();
        self.calculate_stdev();
        Ok((p, n))
    }

    /// Returns the probability of exactly `k` successes:
    /// `C(n, k) · p^k · (1 − p)^(n − k)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `k > n`.
    pub fn pmf(&self, k: u64) -> Result<f64> {
        if k > self.n {
            return Err(Error::Domain(format!(
                "pmf is defined for 0 <= k <= {}, got k = {k}",
                self.n
            )));
        }
        Ok(mass(k, self.n, self.p))
    }

    /// Returns `(k, pmf(k))` for every `k` from `0` to `n`, in order.
    ///
    /// The values are calculated lazily, so any `n` can be iterated.
    pub fn pmf_series(&self) -> impl Iterator<Item = (u64, f64)> {
        let (n, p) = (self.n, self.p);
        (0..=n).map(move |k| (k, mass(k, n, p)))
    }

    /// Returns the bar chart of [`Self::pmf_series`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if the `n + 1` bars do not fit in memory.
    #[allow(clippy::cast_precision_loss)]
    pub fn pmf_chart(&self) -> Result<BarChart> {
        let len = usize::try_from(self.n)
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| Error::Domain(format!("too many bars to chart: n = {}", self.n)))?;
        let mut bars = Vec::new();
        bars.try_reserve_exact(len)
            .map_err(|err| Error::Domain(format!("cannot chart {len} bars: {err}")))?;
        bars.extend(self.pmf_series().map(|(k, mass)| (k as f64, mass)));
        Ok(BarChart {
            title: "PDF Values for Numbers of Successes",
            x_label: "Number of successes",
            y_label: "PDF value",
            bars,
        })
    }

    /// Counts the failures and successes among the loaded samples.
    #[must_use]
    pub fn outcome_counts(&self) -> OutcomeCounts {
        OutcomeCounts::from_samples(&self.base.data)
    }

    /// Returns the histogram of the loaded samples.
    #[must_use]
    pub fn data_chart(&self) -> BarChart {
        self.outcome_counts().chart()
    }

    /// Returns the distribution of the sum of `self` and `other`, which is binomial with the same
    /// `p` and the total number of trials. The result has no samples.
    ///
    /// The probabilities are compared exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] if the probabilities differ and [`Error::Domain`] if the
    /// total number of trials overflows.
    #[allow(clippy::float_cmp)]
    pub fn combine(&self, other: &Binomial) -> Result<Binomial> {
        if self.p != other.p {
            return Err(Error::Precondition(format!(
                "p values are not equal: {} and {}",
                self.p, other.p
            )));
        }
        let n = self
            .n
            .checked_add(other.n)
            .ok_or_else(|| Error::Domain(format!("{} + {} trials overflow", self.n, other.n)))?;
        Ok(Binomial::with_parameters(self.p, n))
    }

    /// Returns the characteristics of the distribution as
    /// `Mean: {mean}, standard deviation: {stdev}, p: {p}, n: {n}`.
    ///
    /// The cached statistics are used as they are.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl Default for Binomial {
    /// `p = 0.5`, `n = 20`
    fn default() -> Self {
        Self::with_parameters(Self::DEFAULT_P, Self::DEFAULT_N)
    }
}

impl Distribution for Binomial {
    fn base(&self) -> &DistributionBase {
        &self.base
    }

    fn replace_data(&mut self, data: Vec<f64>) {
        self.base.set_data(data);
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point of whole floats: `8.0`, not `8`
        write!(
            f,
            "Mean: {:?}, standard deviation: {:?}, p: {:?}, n: {}",
            self.base.mean, self.base.stdev, self.p, self.n
        )
    }
}
