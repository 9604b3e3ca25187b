use camino::Utf8PathBuf;
use exevup_info::{Level, Notation, Target};

/// The document bumped when no path is given.
pub const DEFAULT_INPUT: &str = "versioninfo.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Utf8PathBuf,
    pub output: Utf8PathBuf,
    pub notation: Notation,
    pub level: Level,
    pub target: Target,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_INPUT.into(),
            notation: Notation::default(),
            level: Level::default(),
            target: Target::default(),
        }
    }
}
