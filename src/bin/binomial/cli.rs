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

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Summarizes a binomial distribution given by its parameters or estimated from data.
#[derive(Parser, Debug)]
#[command(name = "binomial", version, about = "Binomial distribution summary")]
pub struct Cli {
    #[arg(
        long = "probability",
        short = 'p',
        default_value = "0.5",
        help = "Probability of success of one trial"
    )]
    pub p: f64,

    #[arg(
        long = "trials",
        short = 'n',
        default_value = "20",
        help = "Number of trials"
    )]
    pub n: u64,

    #[arg(
        long,
        value_name = "FILE",
        help = "File with one trial outcome (0 or 1) per line, overrides -p and -n"
    )]
    pub data: Option<PathBuf>,

    #[arg(long, help = "Print the probability mass of every number of successes")]
    pub pmf: bool,

    #[arg(long, help = "Print the number of failures and successes in the data")]
    pub counts: bool,

    #[arg(
        long,
        value_name = "N",
        help = "Also summarize the sum with another distribution of N trials and the same p"
    )]
    pub combine_trials: Option<u64>,

    #[arg(
        value_enum,
        long,
        default_value = "normal",
        value_name = "VERBOSITY",
        help = "Verbosity level"
    )]
    pub verbosity: LogLevel,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Normal,
    Silent,
}

impl LogLevel {
    /// The default `env_logger` filter for the level.
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Verbose => "debug",
            LogLevel::Normal => "info",
            LogLevel::Silent => "off",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Verbose => write!(f, "verbose"),
            LogLevel::Normal => write!(f, "normal"),
            LogLevel::Silent => write!(f, "silent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["binomial"]);
        assert_eq!(cli.p, 0.5);
        assert_eq!(cli.n, 20);
        assert!(cli.data.is_none());
        assert_eq!(cli.verbosity, LogLevel::Normal);
    }

    #[test]
    fn test_arguments() {
        let cli = Cli::parse_from([
            "binomial",
            "-p",
            "0.4",
            "-n",
            "30",
            "--pmf",
            "--combine-trials",
            "10",
            "--verbosity",
            "silent",
        ]);
        assert_eq!(cli.p, 0.4);
        assert_eq!(cli.n, 30);
        assert!(cli.pmf);
        assert_eq!(cli.combine_trials, Some(10));
        assert_eq!(cli.verbosity.filter(), "off");
    }

    #[test]
    fn test_rejects_negative_trials() {
        assert!(Cli::try_parse_from(["binomial", "-n", "-3"]).is_err());
    }
}
