use std::str::FromStr;

use exevup_version::{Notation, ParseVersionError, Version};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// One of the two version holders of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    File,
    Product,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Product => write!(f, "product"),
        }
    }
}

/// A slot's two representations: the structured version and its string form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSlot {
    pub version: Version,
    pub text: String,
}

impl VersionSlot {
    /// A slot whose text is the canonical rendering of `version`.
    pub fn rendered(version: Version, notation: Notation) -> Self {
        Self {
            text: version.render(notation),
            version,
        }
    }

    /// The authoritative version held by this slot.
    ///
    /// A non-empty structured version wins; otherwise the text is parsed.
    pub fn resolve(&self) -> Result<Version, ParseVersionError> {
        if self.version.is_empty() {
            Version::parse(&self.text)
        } else {
            Ok(self.version)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown target {0:?}, expected one of both, file, product")]
pub struct ParseTargetError(pub String);

/// Which slots of a record a bump is written to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Target {
    #[default]
    Both,
    File,
    Product,
}

impl Target {
    pub fn slots(&self) -> &'static [Slot] {
        match self {
            Self::Both => &[Slot::File, Slot::Product],
            Self::File => &[Slot::File],
            Self::Product => &[Slot::Product],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::File => "file",
            Self::Product => "product",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "file" => Ok(Self::File),
            "product" => Ok(Self::Product),
            other => Err(ParseTargetError(other.into())),
        }
    }
}
