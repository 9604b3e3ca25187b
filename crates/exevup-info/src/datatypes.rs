use exevup_version::Version;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A decoded `versioninfo.json` document, in the layout goversioninfo reads.
///
/// Only the file and product versions are interpreted. Every other key is
/// carried through untouched in the `extra` maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixed_file_info: FixedFileInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub string_file_info: StringFileInfo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The binary `VS_FIXEDFILEINFO` block: versions as four integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FixedFileInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_version: FixedVersion,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_version: FixedVersion,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One structured version object. Keys other than the four fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedVersion {
    #[serde(flatten)]
    pub version: Version,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Version> for FixedVersion {
    fn from(version: Version) -> Self {
        Self {
            version,
            extra: Map::new(),
        }
    }
}

/// The `StringFileInfo` table: versions as free-form text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StringFileInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
