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

//! Contains [`BarChart`], the data handed to an external plotting library.
//!
//! Nothing here draws anything. A chart is only a title, two axis labels and an ordered list of
//! bars.

#[allow(clippy::module_name_repetitions)]
/// A bar chart ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Title of the chart
    pub title: &'static str,
    /// Label of the horizontal axis
    pub x_label: &'static str,
    /// Label of the vertical axis
    pub y_label: &'static str,
    /// `(position, height)` of every bar, left to right
    pub bars: Vec<(f64, f64)>,
}

impl BarChart {
    /// Returns the positions of the bars in order.
    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|&(x, _)| x)
    }

    /// Returns the heights of the bars in order.
    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|&(_, y)| y)
    }
}

/// Number of failures and successes among binary samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    /// Number of samples equal to 0
    pub zeros: usize,
    /// Number of samples equal to 1
    pub ones: usize,
}

impl OutcomeCounts {
    /// Counts the samples equal to 0 and to 1. Other values are not counted.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        samples.iter().fold(Self::default(), |mut counts, &x| {
            if x == 0.0 {
                counts.zeros += 1;
            } else if x == 1.0 {
                counts.ones += 1;
            }
            counts
        })
    }

    /// Returns the histogram of the counts.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn chart(&self) -> BarChart {
        BarChart {
            title: "Distribution of Data",
            x_label: "Outcome",
            y_label: "Count",
            bars: vec![(0.0, self.zeros as f64), (1.0, self.ones as f64)],
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let counts = OutcomeCounts::from_samples(&[1.0, 0.0, 1.0, 1.0, 0.5]);
        assert_eq!(counts, OutcomeCounts { zeros: 1, ones: 3 });
    }

    #[test]
    fn test_counts_chart() {
        let chart = OutcomeCounts { zeros: 4, ones: 6 }.chart();
        assert_eq!(chart.title, "Distribution of Data");
        assert_eq!(chart.x_values().collect::<Vec<_>>(), vec![0.0, 1.0]);
        assert_eq!(chart.y_values().collect::<Vec<_>>(), vec![4.0, 6.0]);
    }
}
