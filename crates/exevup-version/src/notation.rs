use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
use serde_with::{DeserializeFromStr, SerializeDisplay};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown notation {0:?}, expected one of simple, normal, detail")]
pub struct ParseNotationError(pub String);

/// How many segments of a version end up in its string form.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Notation {
    /// `major.minor`
    Simple,
    /// `major.minor.patch`
    #[default]
    Normal,
    /// `major.minor.patch.build`
    Detail,
}

impl Notation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Normal => "normal",
            Self::Detail => "detail",
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "normal" => Ok(Self::Normal),
            "detail" => Ok(Self::Detail),
            other => Err(ParseNotationError(other.into())),
        }
    }
}
