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

use std::path::{Path, PathBuf};

use histogram::Histogram;
use logging::log;
use plotters::prelude::*;

use super::{RenderError, Renderer};

pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

fn drawing_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Draws the histogram as an SVG chart file, one filled rectangle per bin.
pub struct SvgRenderer {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgRenderer {
    pub fn new(path: PathBuf) -> Self {
        Self::with_size(path, DEFAULT_SIZE)
    }

    pub fn with_size(path: PathBuf, size: (u32, u32)) -> Self {
        Self { path, size }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, histogram: &Histogram) -> Result<(), RenderError> {
        let edges = histogram.bin_edges();
        // Leave some headroom above the fullest bin; an empty histogram still gets a y axis.
        let y_max = (histogram.max_bin_content() * 1.1).max(1.0);

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(histogram.low()..histogram.high(), 0.0..y_max)
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("x")
            .y_desc("# entries")
            .draw()
            .map_err(drawing_error)?;

        chart
            .draw_series(histogram.bin_contents().iter().enumerate().map(|(index, content)| {
                Rectangle::new(
                    [(edges[index], 0.0), (edges[index + 1], *content)],
                    BLUE.mix(0.4).filled(),
                )
            }))
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
        log::info!("Histogram chart written to {}", self.path.display());

        Ok(())
    }
}
