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

use crate::error::Result;
use crate::version::SemVer;

pub struct FormatCommand;

impl FormatCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn execute(&self, major: u64, minor: u64, patch: u64, pre: Option<&str>) -> Result<()> {
        println!("{}", self.render(major, minor, patch, pre));
        Ok(())
    }

    pub fn render(&self, major: u64, minor: u64, patch: u64, pre: Option<&str>) -> String {
        let mut version = SemVer::new(major, minor, patch);

        if let Some(pre) = pre {
            if pre.is_empty() {
                log::info!("Empty prerelease is omitted from the formatted version");
            } else if pre.chars().any(char::is_whitespace) {
                log::warn!(
                    "Prerelease '{pre}' contains whitespace; parsing the output will not restore it"
                );
            }
            version = version.with_pre(pre);
        }

        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_release() {
        let command = FormatCommand::new().unwrap();
        assert_eq!(command.render(1, 0, 0, None), "1.0.0");
    }

    #[test]
    fn test_render_prerelease() {
        let command = FormatCommand::new().unwrap();
        assert_eq!(command.render(1, 0, 0, Some("alpha")), "1.0.0-alpha");
        assert_eq!(command.render(3, 4, 5, Some("rc-1")), "3.4.5-rc-1");
    }

    #[test]
    fn test_render_empty_prerelease_is_omitted() {
        let command = FormatCommand::new().unwrap();
        assert_eq!(command.render(1, 2, 3, Some("")), "1.2.3");
    }

    #[test]
    fn test_render_parses_back() {
        let command = FormatCommand::new().unwrap();
        let formatted = command.render(7, 0, 12, Some("beta.2"));

        let parsed = SemVer::parse(&formatted).unwrap();
        assert_eq!(parsed, SemVer::new(7, 0, 12).with_pre("beta.2"));
    }
}
