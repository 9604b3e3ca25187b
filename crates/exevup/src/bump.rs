use std::io;

use camino::Utf8Path;
use exevup_info::{Slot, VersionRecord};
use tracing::{debug, info, instrument};

use crate::config::Config;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    #[diagnostic(help("fix or remove the version fields of the input document"))]
    InfoError(#[from] exevup_info::Error),
}

type Result<T> = miette::Result<T, Error>;

/// Reads the configured document, bumps it and writes the result.
#[instrument(skip_all, fields(input = %config.input))]
pub fn bump(config: &Config) -> Result<VersionRecord> {
    let record = read_record(&config.input)?;
    let bumped = record.bumped(config.level, config.target, config.notation)?;

    for &slot in config.target.slots() {
        info!("Bumped {slot} version to {}", bumped.slot(slot).text);
    }

    write_record(&config.output, &bumped)?;
    Ok(bumped)
}

/// Loads a record, treating a missing file like an empty one.
fn read_record(path: &Utf8Path) -> Result<VersionRecord> {
    let contents = match fs_err::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("{path} does not exist, starting from an empty record");
            String::new()
        }
        Err(err) => return Err(err.into()),
    };

    Ok(exevup_info::parse(&contents)?)
}

fn write_record(path: &Utf8Path, record: &VersionRecord) -> Result<()> {
    let contents = exevup_info::to_string(record)?;
    debug!("Writing {} bytes to {path}", contents.len());
    fs_err::write(path, contents)?;
    Ok(())
}
