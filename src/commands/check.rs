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

pub struct CheckCommand;

impl CheckCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Validates `version`, printing its normalized form unless `quiet`.
    pub fn execute(&self, version: &str, quiet: bool) -> Result<()> {
        let normalized = self.check(version)?;
        if !quiet {
            println!("{normalized}");
        }
        Ok(())
    }

    pub fn check(&self, version: &str) -> Result<String> {
        let parsed = SemVer::parse(version)?;
        let normalized = parsed.to_string();

        if normalized != version {
            log::info!("'{version}' normalizes to '{normalized}'");
        }
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SemvError;

    #[test]
    fn test_check_valid_versions() {
        let command = CheckCommand::new().unwrap();
        assert_eq!(command.check("1.2.3").unwrap(), "1.2.3");
        assert_eq!(command.check("1.2.3-beta.1").unwrap(), "1.2.3-beta.1");
    }

    #[test]
    fn test_check_normalizes() {
        let command = CheckCommand::new().unwrap();
        assert_eq!(command.check(" 1 . 2 . 3 - rc1 ").unwrap(), "1.2.3-rc1");
        assert_eq!(command.check("1.2.3-").unwrap(), "1.2.3");
    }

    #[test]
    fn test_check_invalid_versions() {
        let command = CheckCommand::new().unwrap();
        assert!(matches!(
            command.check("1.2.3.4"),
            Err(SemvError::MalformedVersion(_))
        ));
        assert!(matches!(
            command.check("01.2.3"),
            Err(SemvError::InvalidVersionNumber { .. })
        ));
    }
}
