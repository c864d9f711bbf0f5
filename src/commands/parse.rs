// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::{OutputFormat, SemvConfig};
use crate::error::Result;
use crate::version::SemVer;
use serde::Serialize;

#[derive(Serialize)]
struct ParseOutput<'a> {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<&'a str>,
    normalized: String,
}

pub struct ParseCommand<'a> {
    config: &'a SemvConfig,
}

impl<'a> ParseCommand<'a> {
    pub fn new(config: &'a SemvConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, version: &str, json: bool) -> Result<()> {
        let output = self.render(version, json)?;
        println!("{output}");
        Ok(())
    }

    /// Parses `version` and renders its fields. `--json` wins over the configured format.
    pub fn render(&self, version: &str, json: bool) -> Result<String> {
        let parsed = SemVer::parse(version)?;
        log::debug!("Parsed '{version}' as {parsed:?}");

        let format = if json {
            OutputFormat::Json
        } else {
            self.config.output.format
        };

        match format {
            OutputFormat::Json => {
                let output = ParseOutput {
                    major: parsed.major(),
                    minor: parsed.minor(),
                    patch: parsed.patch(),
                    pre: parsed.pre(),
                    normalized: parsed.to_string(),
                };
                Ok(serde_json::to_string_pretty(&output)?)
            }
            OutputFormat::Text => Ok(format!(
                "major: {}\nminor: {}\npatch: {}\npre: {}",
                parsed.major(),
                parsed.minor(),
                parsed.patch(),
                parsed.pre().unwrap_or("none")
            )),
        }
    }
}
