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

//! The gendata configuration.

use std::{
    fs,
    num::NonZeroU64,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::options::{Options, RendererKind};

pub const DEFAULT_SAMPLE_COUNT: u64 = 1000;
pub const DEFAULT_OUTPUT_NAME: &str = "gendata.svg";
pub const DEFAULT_GOF_TOYS: NonZeroU64 = match NonZeroU64::new(50_000) {
    Some(v) => v,
    None => panic!("zero toys"),
};

/// The configuration file contents; every field is optional.
#[must_use]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GendataConfigFile {
    pub sample_count: Option<u64>,
    pub seed: Option<u64>,
    pub renderer: Option<RendererKind>,
    pub output: Option<PathBuf>,
    pub gof: Option<bool>,
    pub gof_toys: Option<NonZeroU64>,
}

impl GendataConfigFile {
    /// Reads the config file; a missing file is an error only if `must_exist` is set.
    pub fn read(config_path: &Path, must_exist: bool) -> Result<Self> {
        if !must_exist && !config_path.exists() {
            return Ok(Self::default());
        }

        let config_as_str = fs::read_to_string(config_path).context(format!(
            "Unable to read config file in {}",
            config_path.display()
        ))?;

        toml::from_str(&config_as_str).context(format!(
            "Failed to parse config file {}",
            config_path.display()
        ))
    }
}

/// The effective configuration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GendataConfig {
    pub sample_count: u64,
    pub seed: Option<u64>,
    pub renderer: RendererKind,
    pub output: PathBuf,
    pub gof: bool,
    pub gof_toys: NonZeroU64,
}

impl GendataConfig {
    /// Command line options (and their env vars) override the config file, which
    /// overrides the defaults.
    pub fn new(config_file: GendataConfigFile, options: &Options) -> Self {
        let GendataConfigFile {
            sample_count,
            seed,
            renderer,
            output,
            gof,
            gof_toys,
        } = config_file;

        Self {
            sample_count: options.sample_count.or(sample_count).unwrap_or(DEFAULT_SAMPLE_COUNT),
            seed: options.seed.or(seed),
            renderer: options.renderer.or(renderer).unwrap_or_default(),
            output: options
                .output
                .clone()
                .or(output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME)),
            gof: options.gof.or(gof).unwrap_or(false),
            gof_toys: options.gof_toys.or(gof_toys).unwrap_or(DEFAULT_GOF_TOYS),
        }
    }

    pub fn from_options(options: &Options) -> Result<Self> {
        let (config_path, must_exist) = options.config_path();
        let config_file = GendataConfigFile::read(&config_path, must_exist)?;
        Ok(Self::new(config_file, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use rstest::rstest;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = GendataConfig::new(GendataConfigFile::default(), &Options::default());

        assert_eq!(
            config,
            GendataConfig {
                sample_count: DEFAULT_SAMPLE_COUNT,
                seed: None,
                renderer: RendererKind::Text,
                output: PathBuf::from(DEFAULT_OUTPUT_NAME),
                gof: false,
                gof_toys: DEFAULT_GOF_TOYS,
            }
        );
    }

    #[test]
    fn read_full_file() {
        let file = write_config(
            r#"
            sample_count = 26
            seed = 42
            renderer = "svg"
            output = "out.svg"
            gof = true
            gof_toys = 100
            "#,
        );

        let config_file = GendataConfigFile::read(file.path(), true).unwrap();
        assert_eq!(
            config_file,
            GendataConfigFile {
                sample_count: Some(26),
                seed: Some(42),
                renderer: Some(RendererKind::Svg),
                output: Some(PathBuf::from("out.svg")),
                gof: Some(true),
                gof_toys: NonZeroU64::new(100),
            }
        );
    }

    #[test]
    fn options_override_file() {
        let config_file = GendataConfigFile {
            sample_count: Some(26),
            seed: Some(42),
            renderer: Some(RendererKind::Svg),
            output: None,
            gof: Some(true),
            gof_toys: None,
        };
        let options = Options {
            sample_count: Some(10),
            renderer: Some(RendererKind::None),
            ..Default::default()
        };

        let config = GendataConfig::new(config_file, &options);
        assert_eq!(config.sample_count, 10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.renderer, RendererKind::None);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_NAME));
        assert!(config.gof);
        assert_eq!(config.gof_toys, DEFAULT_GOF_TOYS);
    }

    #[rstest]
    #[case(Some(true), None, true)]
    #[case(Some(true), Some(false), false)]
    #[case(Some(false), Some(true), true)]
    #[case(None, Some(true), true)]
    #[case(None, None, false)]
    fn gof_precedence(
        #[case] in_file: Option<bool>,
        #[case] on_command_line: Option<bool>,
        #[case] expected: bool,
    ) {
        let config_file = GendataConfigFile {
            gof: in_file,
            ..Default::default()
        };
        let options = Options {
            gof: on_command_line,
            ..Default::default()
        };

        assert_eq!(GendataConfig::new(config_file, &options).gof, expected);
    }

    #[test]
    fn missing_default_file_is_fine() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        assert_eq!(
            GendataConfigFile::read(&path, false).unwrap(),
            GendataConfigFile::default()
        );
        assert!(GendataConfigFile::read(&path, true).is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let file = write_config("rate = 3.0\n");
        let err = GendataConfigFile::read(file.path(), true).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"));
    }

    #[test]
    fn zero_toys_rejected() {
        let file = write_config("gof_toys = 0\n");
        assert!(GendataConfigFile::read(file.path(), true).is_err());
    }

    #[test]
    fn from_options_reads_explicit_file() {
        let file = write_config("sample_count = 7\n");
        let options = Options {
            config_file: Some(file.path().to_owned()),
            ..Default::default()
        };

        let config = GendataConfig::from_options(&options).unwrap();
        assert_eq!(config.sample_count, 7);
    }
}
