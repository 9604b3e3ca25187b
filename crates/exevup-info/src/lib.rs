mod codec;
mod datatypes;
mod error;
mod record;
mod slot;

pub use codec::{parse, to_string};
pub use datatypes::{FixedFileInfo, FixedVersion, StringFileInfo, VersionRecord};
pub use error::Error;
pub use slot::{ParseTargetError, Slot, Target, VersionSlot};

pub use exevup_version::{BumpVersionError, Level, Notation, ParseVersionError, Version};
