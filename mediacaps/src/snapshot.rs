use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{CapsError, Result};

/// Device identity recorded alongside the capability snapshot.
///
/// Consumed by the export header; absent fields degrade to empty text.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct DeviceInfo {
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub android_version: Option<String>,
}

/// A supported (profile, level) pair as enumerated by the media subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ProfileLevel {
    pub profile: i32,
    pub level: i32,
}

/// Capability details for one MIME type of a codec.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct TypeCapabilities {
    /// MIME type this entry applies to (e.g. "video/avc").
    pub mime: String,
    /// Supported color format constants, in subsystem enumeration order.
    #[serde(default)]
    pub color_formats: Vec<i32>,
    /// Supported profile/level pairs, in subsystem enumeration order.
    #[serde(default)]
    pub profile_levels: Vec<ProfileLevel>,
}

/// One codec implementation as enumerated by the media subsystem.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct CodecDescriptor {
    /// Component name (e.g. "OMX.qcom.video.decoder.avc", "c2.android.aac.decoder").
    pub name: String,
    /// Whether this component is an encoder (false = decoder).
    pub is_encoder: bool,
    /// Per-type capability entries, in declared supported-type order.
    #[serde(default)]
    pub types: Vec<TypeCapabilities>,
}

impl CodecDescriptor {
    /// First declared supported MIME type, if any.
    pub fn first_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.mime.as_str())
    }
}

/// A capability snapshot captured from a device's media subsystem.
///
/// Read-only for the process lifetime; codec and type order is the
/// subsystem's enumeration order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct CapsSnapshot {
    #[serde(default)]
    pub device: DeviceInfo,
    pub codecs: Vec<CodecDescriptor>,
}

/// Parse a snapshot from JSON text.
pub fn parse_snapshot(json: &str) -> Result<CapsSnapshot> {
    Ok(serde_json::from_str(json)?)
}

/// Load a `.json` or gzip-compressed `.json.gz` snapshot file.
///
/// Compressed snapshots are fully decompressed into memory; snapshots are
/// small (tens of codecs) so there is no need for streaming decode.
pub fn load_snapshot(path: &Path) -> Result<CapsSnapshot> {
    let is_gz = path.to_str().map(|s| s.ends_with(".gz")).unwrap_or(false);

    let mut file = File::open(path).map_err(|source| CapsError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut raw = String::new();
    if is_gz {
        GzDecoder::new(file).read_to_string(&mut raw)?;
    } else {
        file.read_to_string(&mut raw)?;
    }

    parse_snapshot(&raw)
}
