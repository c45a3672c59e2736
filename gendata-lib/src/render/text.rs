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

use std::io::Write;

use histogram::Histogram;

use super::{RenderError, Renderer};

pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Terminal bar chart, one line per bin:
///
/// ```text
/// [0.000, 0.200)      412 |##################################################
/// [0.200, 0.400)      170 |#####################
/// ```
pub struct TextRenderer<W> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_bar_width(out, DEFAULT_BAR_WIDTH)
    }

    /// `bar_width` is the length of the bar of the fullest bin.
    pub fn with_bar_width(out: W, bar_width: usize) -> Self {
        Self { out, bar_width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn bar_len(&self, content: f64, max_content: f64) -> usize {
        if max_content <= 0.0 || content <= 0.0 {
            return 0;
        }
        ((content / max_content) * self.bar_width as f64).round() as usize
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, histogram: &Histogram) -> Result<(), RenderError> {
        let edges = histogram.bin_edges();
        let max_content = histogram.max_bin_content();

        for (index, content) in histogram.bin_contents().iter().enumerate() {
            let bar = "#".repeat(self.bar_len(*content, max_content));
            writeln!(
                self.out,
                "[{:.3}, {:.3}) {:>8} |{bar}",
                edges[index],
                edges[index + 1],
                content,
            )?;
        }
        self.out.flush()?;

        Ok(())
    }
}
