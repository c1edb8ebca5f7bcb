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

//! Drawing random values from a [`Binomial`] distribution.
//!
//! [`Binomial`] implements [`rand::distributions::Distribution<u64>`]: one draw is the number of
//! successes in `n` independent trials. [`Binomial::simulate_data`] produces raw samples in the
//! same format as a data file, which can then be fed to [`Binomial::replace_stats_with_data`].

use log::debug;
use rand::distributions::Distribution as _;
use rand::Rng;

use crate::binomial::Binomial;
use crate::distribution::Distribution;

impl rand::distributions::Distribution<u64> for Binomial {
    /// Draws the number of successes in `n` trials.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rand_distr::Binomial::new(self.n(), self.p())
            .expect("p of a Binomial is always in [0, 1]")
            .sample(rng)
    }
}

impl Binomial {
    /// Replaces the samples with the outcomes of `len` trials, `1.0` for a success and `0.0` for a
    /// failure.
    ///
    /// The statistics are not recalculated.
    pub fn simulate_data(&mut self, rng: &mut impl Rng, len: usize) {
        let p = self.p();
        let data = (0..len)
            .map(|_| if rng.gen_bool(p) { 1.0 } else { 0.0 })
            .collect();
        debug!("Simulated {len} trials with p = {p}");
        self.replace_data(data);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use rand::distributions::Distribution as _;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use statrs::statistics::Statistics;

    use super::*;

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let distr = Binomial::new(0.3, 12).unwrap();
        assert!(distr.sample_iter(&mut rng).take(1000).all(|k| k <= 12));
    }

    #[test]
    fn test_degenerate_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Binomial::new(0.0, 9).unwrap().sample(&mut rng), 0);
        assert_eq!(Binomial::new(1.0, 9).unwrap().sample(&mut rng), 9);
    }

    #[test]
    fn test_draw_with_many_trials() {
        let mut rng = StdRng::seed_from_u64(5);
        let distr = Binomial::new(0.5, 200_000_000).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let draws: Vec<f64> = (&distr)
            .sample_iter(&mut rng)
            .take(100)
            .map(|k| k as f64)
            .collect();
        // 10 standard deviations around the mean
        let bound = 10.0 * distr.stdev();
        assert!(draws.iter().all(|&k| (k - distr.mean()).abs() < bound));
    }

    #[test]
    fn test_draws_match_statistics() {
        let mut rng = StdRng::seed_from_u64(42);
        let distr = Binomial::new(0.4, 20).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let draws: Vec<f64> = (&distr)
            .sample_iter(&mut rng)
            .take(20_000)
            .map(|k| k as f64)
            .collect();
        assert!((Statistics::mean(&draws) - distr.mean()).abs() < 0.1);
        assert!((Statistics::std_dev(&draws) - distr.stdev()).abs() < 0.1);
    }

    #[test]
    fn test_simulated_data_is_binary() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut distr = Binomial::new(0.25, 20).unwrap();
        distr.simulate_data(&mut rng, 500);
        assert_eq!(distr.data().len(), 500);
        assert!(distr.data().iter().all(|&x| x == 0.0 || x == 1.0));
        // the statistics are still those of the parameters
        assert_eq!(distr.n(), 20);
        assert_eq!(distr.mean(), 5.0);
    }

    #[test]
    fn test_fit_simulated_data() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut distr = Binomial::new(0.7, 1).unwrap();
        distr.simulate_data(&mut rng, 10_000);
        let (p, n) = distr.replace_stats_with_data().unwrap();
        assert_eq!(n, 10_000);
        assert!((p - 0.7).abs() < 0.03);
    }

    #[test]
    fn test_fit_external_bernoulli_data() {
        let mut rng = StdRng::seed_from_u64(11);
        let bernoulli = rand_distr::Bernoulli::new(0.2).unwrap();
        let data = bernoulli
            .sample_iter(&mut rng)
            .take(5_000)
            .map(|success| if success { 1.0 } else { 0.0 })
            .collect();
        let mut distr = Binomial::default();
        distr.replace_data(data);
        let (p, _) = distr.replace_stats_with_data().unwrap();
        assert!((p - 0.2).abs() < 0.03);
        assert_eq!(distr.outcome_counts().zeros + distr.outcome_counts().ones, 5_000);
    }
}
