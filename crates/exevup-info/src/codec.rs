use serde::{Serialize, ser::Error as _};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{Error, VersionRecord};

/// Decodes a `versioninfo.json` document.
///
/// A blank document decodes to an empty record, so a freshly created file
/// starts at version zero instead of failing.
pub fn parse(input: &str) -> Result<VersionRecord, Error> {
    if input.trim().is_empty() {
        return Ok(VersionRecord::default());
    }
    serde_json::from_str(input).map_err(Error::Decode)
}

/// Encodes a record as tab-indented JSON with a trailing newline.
pub fn to_string(record: &VersionRecord) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    record.serialize(&mut serializer).map_err(Error::Encode)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|err| Error::Encode(serde_json::Error::custom(err)))
}
