use crate::classify::{is_audio_mime, is_hardware_accelerated};
use crate::constants::{COLOR_FORMAT_CONSTANTS, ConstantTable, PROFILE_LEVEL_CONSTANTS};
use crate::family::{level_prefix, profile_prefix};
use crate::snapshot::CapsSnapshot;

/// One rendered report entry for a (codec, MIME type) pair.
#[derive(Debug, Clone, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct CodecBlock {
    /// Fully rendered description of this (codec, MIME type) pair.
    pub text: String,
    /// Codec component name, for diagnostics and copy actions.
    pub codec_name: String,
    /// Hardware/software classification flag.
    pub is_hw: bool,
    /// Audio/video classification flag.
    pub is_audio: bool,
}

/// Build the ordered report block list for a snapshot.
///
/// Produces exactly one self-contained block per (codec, supported MIME
/// type) pair, preserving the snapshot's codec and type enumeration order.
/// Missing or empty capability data renders as an empty section, never an
/// error. Built once per process run; filtering never mutates the result.
pub fn build_codec_blocks(snapshot: &CapsSnapshot) -> Vec<CodecBlock> {
    let mut blocks = Vec::new();
    let color_formats = ConstantTable::resolve(COLOR_FORMAT_CONSTANTS, "COLOR_");

    for codec in &snapshot.codecs {
        let is_hw = is_hardware_accelerated(&codec.name);
        // Classification consults only the first declared type: a codec
        // exposing both audio and video types keeps the first type's
        // classification for all of its blocks.
        let is_audio = codec.first_type().is_some_and(is_audio_mime);

        for ty in &codec.types {
            let mut text = String::new();
            text.push_str(&codec.name);
            text.push('\n');
            text.push_str(&format!(
                "  {} {} {}\n",
                if is_hw { "Hardware" } else { "Software" },
                if is_audio { "audio" } else { "video" },
                if codec.is_encoder { "encoder" } else { "decoder" },
            ));
            text.push_str(&format!("  MIME type: {}\n", ty.mime));

            if !is_audio {
                text.push_str("    Color formats:\n");
                for &cf in &ty.color_formats {
                    text.push_str(&format!("      0x{:x} ({})\n", cf, color_formats.name_of(cf)));
                }

                let profile_prefix = profile_prefix(&ty.mime);
                if !profile_prefix.is_empty() {
                    let profiles = ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, profile_prefix);
                    let levels =
                        ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, level_prefix(&ty.mime));

                    text.push_str("    Profile levels:\n");
                    for pl in &ty.profile_levels {
                        text.push_str(&format!(
                            "      Profile: {}  Level: {}\n",
                            profiles.name_of(pl.profile),
                            levels.name_of(pl.level),
                        ));
                    }
                }
            }

            blocks.push(CodecBlock {
                text,
                codec_name: codec.name.clone(),
                is_hw,
                is_audio,
            });
        }
    }

    blocks
}
