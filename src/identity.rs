use regex::Regex;
use std::{fmt, str::FromStr};

use crate::error::*;

/// Program name given at build time, `HELLOBYE_PROGRAM` or the package name
pub const PROGRAM: &str = env!("HELLOBYE_PROGRAM");

/// Version string given at build time, `HELLOBYE_VERSION` or the package version
pub const VERSION: &str = env!("HELLOBYE_VERSION");

lazy_static::lazy_static! {
    static ref VERSION_RE: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:[-+].*)?$").unwrap();
}

/// Three-component version, each component an 8-bit count
///
/// Parsed from a [semantic version](https://semver.org/) string.
/// Pre-release and build suffixes are accepted but dropped:
///
/// ```
/// use hellobye::Version;
/// let v: Version = "0.3.1-alpha".parse().unwrap();
/// assert_eq!(v, Version::new(0, 3, 1));
/// assert_eq!(v.to_string(), "0.3.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    pub fn new(major: u8, minor: u8, patch: u8) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let captures = VERSION_RE
            .captures(input)
            .ok_or_else(|| Error::InvalidVersion(input.to_string()))?;
        let component = |i: usize| -> Result<u8> {
            captures[i]
                .parse()
                .map_err(|_| Error::VersionOutOfRange(input.to_string()))
        };
        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }
}

impl FromStr for Version {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Name and version the program reports about itself
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub program: String,
    pub version: Version,
}

impl Identity {
    pub fn new(program: impl Into<String>, version: Version) -> Self {
        Identity {
            program: program.into(),
            version,
        }
    }

    pub fn parse(program: impl Into<String>, version: &str) -> Result<Self> {
        Ok(Identity::new(program, Version::parse(version)?))
    }

    /// Identity compiled into this binary, see [PROGRAM] and [VERSION]
    pub fn from_build() -> Result<Self> {
        Identity::parse(PROGRAM, VERSION)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.program, self.version)
    }
}
