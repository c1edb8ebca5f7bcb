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

use anyhow::{Context, Result};
use binomial_distributions::{Binomial, Distribution};
use clap::Parser;
use env_logger::Env;
use log::info;

mod cli;

/// Builds the distribution from the data file if one is given, else from `-p` and `-n`.
fn build_distribution(args: &cli::Cli) -> Result<Binomial> {
    let Some(path) = &args.data else {
        return Ok(Binomial::new(args.p, args.n)?);
    };
    info!("Estimating parameters from {}", path.display());
    let mut distr = Binomial::default();
    distr.read_data_file(path)?;
    distr
        .replace_stats_with_data()
        .with_context(|| format!("cannot estimate parameters from {}", path.display()))?;
    Ok(distr)
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.verbosity.filter())).init();

    let distr = build_distribution(&args)?;
    println!("{distr}");

    if args.counts {
        let counts = distr.outcome_counts();
        println!("0\t{}", counts.zeros);
        println!("1\t{}", counts.ones);
    }

    if args.pmf {
        for (k, mass) in distr.pmf_series() {
            println!("{k}\t{mass}");
        }
    }

    if let Some(trials) = args.combine_trials {
        let other = Binomial::new(distr.p(), trials)?;
        let sum = distr.combine(&other)?;
        info!("Combined {} and {} trials", distr.n(), other.n());
        println!("{sum}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parameters_without_data() {
        let args = cli::Cli::parse_from(["binomial", "-p", "0.4", "-n", "20"]);
        let distr = build_distribution(&args).unwrap();
        assert_eq!((distr.p(), distr.n()), (0.4, 20));
    }

    #[test]
    fn test_invalid_parameters_without_data() {
        let args = cli::Cli::parse_from(["binomial", "-p", "2"]);
        assert!(build_distribution(&args).is_err());
    }

    #[test]
    fn test_data_overrides_parameters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\n0\n1\n1").unwrap();
        let path = file.path().to_str().unwrap();

        let args = cli::Cli::parse_from(["binomial", "-p", "2", "--data", path]);
        let distr = build_distribution(&args).unwrap();
        assert_eq!((distr.p(), distr.n()), (0.75, 4));
        assert_eq!(distr.mean(), 3.0);
    }
}
