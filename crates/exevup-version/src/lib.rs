use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
use serde::{Deserialize, Serialize};

mod level;
mod notation;

pub use level::{Level, ParseLevelError};
pub use notation::{Notation, ParseNotationError};

/// The most segments a version string may carry: major, minor, patch, build.
const MAX_SEGMENTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    #[error("Invalid segment {segment:?} in version {version:?}")]
    InvalidSegment { version: String, segment: String },
    #[error("Version {0:?} has more than four segments")]
    TooManySegments(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot bump the {level} field of version {version}, it is already at its maximum")]
pub struct BumpVersionError {
    pub version: Version,
    pub level: Level,
}

/// A four-part version number, as found in a Windows `VERSIONINFO` resource.
///
/// A version with every field at zero is "empty": it stands for a version that
/// was never recorded rather than for `0.0.0.0`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(test, derive(Arbitrary))]
#[serde(rename_all = "PascalCase", default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub build: u64,
}

impl Version {
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64, build: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Parses a dotted version string of one to four numeric segments.
    ///
    /// Segments fill major, minor, patch and build in that order; the ones not
    /// given stay zero. The empty string parses to [`Version::EMPTY`].
    pub fn parse(version: &str) -> Result<Self, ParseVersionError> {
        if version.is_empty() {
            return Ok(Self::EMPTY);
        }

        let segments = version.split('.').collect::<Vec<_>>();
        if segments.len() > MAX_SEGMENTS {
            return Err(ParseVersionError::TooManySegments(version.into()));
        }

        let mut fields = [0; MAX_SEGMENTS];
        for (field, segment) in fields.iter_mut().zip(&segments) {
            *field = Self::parse_segment(version, segment)?;
        }

        let [major, minor, patch, build] = fields;
        Ok(Self::new(major, minor, patch, build))
    }

    fn parse_segment(version: &str, segment: &str) -> Result<u64, ParseVersionError> {
        let invalid = || ParseVersionError::InvalidSegment {
            version: version.into(),
            segment: segment.into(),
        };

        // At most one leading `+`, then digits only.
        let digits = segment.strip_prefix('+').unwrap_or(segment);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse().map_err(|_| invalid())
    }

    /// Renders the version with as many segments as `notation` calls for.
    pub fn render(&self, notation: Notation) -> String {
        let Self {
            major,
            minor,
            patch,
            build,
        } = self;

        match notation {
            Notation::Simple => format!("{major}.{minor}"),
            Notation::Normal => format!("{major}.{minor}.{patch}"),
            Notation::Detail => format!("{major}.{minor}.{patch}.{build}"),
        }
    }

    /// Returns the next version at `level`, zeroing every less significant field.
    ///
    /// Fails when the field at `level` is already `u64::MAX`.
    pub fn bumped(&self, level: Level) -> Result<Self, BumpVersionError> {
        let Self {
            major,
            minor,
            patch,
            build,
        } = *self;
        let next = |field: u64| {
            field.checked_add(1).ok_or(BumpVersionError {
                version: *self,
                level,
            })
        };

        Ok(match level {
            Level::Major => Self::new(next(major)?, 0, 0, 0),
            Level::Minor => Self::new(major, next(minor)?, 0, 0),
            Level::Patch => Self::new(major, minor, next(patch)?, 0),
            Level::Build => Self::new(major, minor, patch, next(build)?),
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Notation::Detail))
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
