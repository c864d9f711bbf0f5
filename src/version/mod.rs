use crate::error::{Result, SemvError};
use std::fmt;
use std::str::FromStr;

pub mod parser;

/// A `MAJOR.MINOR.PATCH[-PRERELEASE]` version.
///
/// Values are immutable once built. Equality is field-wise; no ordering is
/// defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemVer {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<String>,
}

impl SemVer {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    pub fn from_parts(major: u64, minor: u64, patch: u64, pre: Option<String>) -> Self {
        Self {
            major,
            minor,
            patch,
            pre,
        }
    }

    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    pub fn parse(s: &str) -> Result<Self> {
        parser::parse(s)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease suffix, which may be present but empty.
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }
}

impl FromStr for SemVer {
    type Err = SemvError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        // An empty prerelease is not written
        if let Some(pre) = self.pre.as_deref().filter(|pre| !pre.is_empty()) {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        assert_eq!(
            SemVer::from_str("1.2.3").unwrap(),
            SemVer::from_parts(1, 2, 3, None)
        );
        assert_eq!(
            SemVer::from_str("1.2.3-beta.1").unwrap(),
            SemVer::from_parts(1, 2, 3, Some("beta.1".to_string()))
        );
        assert_eq!(
            SemVer::parse(" 1 . 2 . 3 - rc1 ").unwrap(),
            SemVer::from_parts(1, 2, 3, Some("rc1".to_string()))
        );
        assert_eq!(
            SemVer::parse("1.2.3-").unwrap(),
            SemVer::from_parts(1, 2, 3, Some(String::new()))
        );

        assert!(matches!(
            SemVer::parse("1.2"),
            Err(SemvError::MalformedVersion(_))
        ));
        assert!(matches!(
            SemVer::parse("1.2.3.4"),
            Err(SemvError::MalformedVersion(_))
        ));
        assert!(matches!(
            SemVer::parse("1.2.x"),
            Err(SemvError::InvalidVersionNumber { .. })
        ));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(SemVer::new(1, 0, 0).to_string(), "1.0.0");
        assert_eq!(SemVer::new(1, 0, 0).with_pre("alpha").to_string(), "1.0.0-alpha");
        assert_eq!(
            SemVer::new(2, 10, 4).with_pre("rc-1").to_string(),
            "2.10.4-rc-1"
        );
        assert_eq!(SemVer::new(1, 0, 0).with_pre("").to_string(), "1.0.0");
    }

    #[test]
    fn test_accessors() {
        let version = SemVer::parse("4.5.6-pre").unwrap();
        assert_eq!(version.major(), 4);
        assert_eq!(version.minor(), 5);
        assert_eq!(version.patch(), 6);
        assert_eq!(version.pre(), Some("pre"));

        assert_eq!(SemVer::new(4, 5, 6).pre(), None);
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            SemVer::new(0, 0, 0),
            SemVer::new(1, 2, 3),
            SemVer::new(1, 2, 3).with_pre("beta.1"),
            SemVer::new(21, 0, 7).with_pre("rc-2"),
            SemVer::new(u64::MAX, 0, 1).with_pre("x"),
        ];

        for version in cases {
            assert_eq!(SemVer::parse(&version.to_string()).unwrap(), version);
        }
    }

    #[test]
    fn test_round_trip_drops_empty_prerelease() {
        // Display suppresses an empty suffix, so it comes back absent
        let version = SemVer::new(1, 2, 3).with_pre("");
        let reparsed = SemVer::parse(&version.to_string()).unwrap();

        assert_eq!(reparsed, SemVer::new(1, 2, 3));
        assert_ne!(reparsed, version);
    }

    #[test]
    fn test_with_pre_replaces_prerelease() {
        let version = SemVer::new(1, 0, 0).with_pre("alpha").with_pre("beta");
        assert_eq!(version.pre(), Some("beta"));
    }

    #[test]
    fn test_equality_is_field_wise() {
        assert_eq!(SemVer::new(1, 2, 3), SemVer::from_parts(1, 2, 3, None));
        assert_ne!(SemVer::new(1, 2, 3), SemVer::new(1, 2, 4));
        assert_ne!(SemVer::new(1, 2, 3), SemVer::new(1, 2, 3).with_pre("a"));
    }
}
