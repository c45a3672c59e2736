// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A one-dimensional histogram with equal-width bins.
//!
//! Bins are left-closed and right-open: bin `i` covers `[edge(i), edge(i + 1))`.
//! Values below the range are counted as underflow, values at or above the upper bound
//! (and NaN) as overflow. Neither is part of the bin contents.

mod error;


use utils::ensure;

pub use error::HistogramError;

/// Where a value lands when filled into a [Histogram].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinLocation {
    Underflow,
    Bin(usize),
    Overflow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    low: f64,
    high: f64,
    contents: Vec<f64>,
    underflow: f64,
    overflow: f64,
    entries: u64,
}

impl Histogram {
    pub fn new(bins_count: usize, low: f64, high: f64) -> Result<Self, HistogramError> {
        ensure!(bins_count > 0, HistogramError::NoBins);
        ensure!(
            low.is_finite() && high.is_finite(),
            HistogramError::NonFiniteRange { low, high }
        );
        ensure!(low < high, HistogramError::EmptyRange { low, high });
        ensure!(
            (high - low).is_finite(),
            HistogramError::NonFiniteRange { low, high }
        );

        Ok(Self {
            low,
            high,
            contents: vec![0.0; bins_count],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        })
    }

    pub fn bins_count(&self) -> usize {
        self.contents.len()
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.bins_count() as f64
    }

    /// Lower edge of bin `index`; `index == bins_count()` gives the upper bound of the range.
    ///
    /// Computed as `low + (high - low) * index / bins_count`, so that e.g. the edges of
    /// 5 bins over `[0, 1)` are exactly the literals 0.2, 0.4, 0.6 and 0.8.
    pub fn bin_low_edge(&self, index: usize) -> Option<f64> {
        (index <= self.bins_count()).then(|| self.edge(index))
    }

    pub fn bin_edges(&self) -> Vec<f64> {
        (0..=self.bins_count()).map(|i| self.edge(i)).collect()
    }

    pub fn bin_center(&self, index: usize) -> Option<f64> {
        (index < self.bins_count()).then(|| (self.edge(index) + self.edge(index + 1)) / 2.0)
    }

    fn edge(&self, index: usize) -> f64 {
        if index == self.bins_count() {
            self.high
        } else {
            self.low + (self.high - self.low) * index as f64 / self.bins_count() as f64
        }
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn find_bin(&self, x: f64) -> BinLocation {
        if x < self.low {
            return BinLocation::Underflow;
        }
        // Written this way so that NaN ends up in the overflow.
        if !(x < self.high) {
            return BinLocation::Overflow;
        }

        let last = self.bins_count() - 1;
        let guess = (((x - self.low) / (self.high - self.low)) * self.bins_count() as f64) as usize;
        let mut index = guess.min(last);

        // The division above may be off by one near the edges; the edges themselves decide.
        if x < self.edge(index) {
            index -= 1;
        } else if index < last && x >= self.edge(index + 1) {
            index += 1;
        }

        BinLocation::Bin(index)
    }

    pub fn fill(&mut self, x: f64) -> BinLocation {
        self.fill_weighted(x, 1.0)
    }

    pub fn fill_weighted(&mut self, x: f64, weight: f64) -> BinLocation {
        let location = self.find_bin(x);
        match location {
            BinLocation::Underflow => self.underflow += weight,
            BinLocation::Bin(index) => self.contents[index] += weight,
            BinLocation::Overflow => self.overflow += weight,
        }
        self.entries += 1;
        location
    }

    pub fn bin_content(&self, index: usize) -> Option<f64> {
        self.contents.get(index).copied()
    }

    pub fn bin_contents(&self) -> &[f64] {
        &self.contents
    }

    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Number of fill calls, including those that went to the underflow or the overflow.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Sum of the bin contents; underflow and overflow are excluded.
    pub fn sum(&self) -> f64 {
        self.contents.iter().sum()
    }

    pub fn max_bin_content(&self) -> f64 {
        self.contents.iter().copied().fold(0.0, f64::max)
    }

    pub fn reset(&mut self) {
        self.contents.iter_mut().for_each(|c| *c = 0.0);
        self.underflow = 0.0;
        self.overflow = 0.0;
        self.entries = 0;
    }
}
