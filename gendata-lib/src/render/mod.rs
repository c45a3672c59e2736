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

//! Histogram display.

mod svg;
mod text;

use histogram::Histogram;

pub use svg::SvgRenderer;
pub use text::TextRenderer;

use crate::{config_file::GendataConfig, options::RendererKind};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to draw the chart: {0}")]
    Drawing(String),
}

/// Something that can display a histogram.
pub trait Renderer {
    fn render(&mut self, histogram: &Histogram) -> Result<(), RenderError>;
}

/// Displays nothing.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _histogram: &Histogram) -> Result<(), RenderError> {
        Ok(())
    }
}

/// The renderer selected by the configuration; the text one draws to stdout.
pub fn make_renderer(config: &GendataConfig) -> Box<dyn Renderer> {
    match config.renderer {
        RendererKind::Text => Box::new(TextRenderer::new(std::io::stdout())),
        RendererKind::Svg => Box::new(SvgRenderer::new(config.output.clone())),
        RendererKind::None => Box::new(NullRenderer),
    }
}
