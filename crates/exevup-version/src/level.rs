use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
use serde_with::{DeserializeFromStr, SerializeDisplay};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level {0:?}, expected one of major, minor, patch, build")]
pub struct ParseLevelError(pub String);

/// The field a bump increments. Every less significant field is reset to zero.
///
/// Unknown level names are rejected when parsed, so a bump never silently
/// leaves a version unchanged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Level {
    Major,
    Minor,
    #[default]
    Patch,
    Build,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Build => "build",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            "build" => Ok(Self::Build),
            other => Err(ParseLevelError(other.into())),
        }
    }
}
