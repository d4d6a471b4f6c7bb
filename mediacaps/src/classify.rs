/// Name tokens that indicate a vendor (hardware-backed) codec implementation.
const HW_NAME_TOKENS: &[&str] = &[
    "qcom", "mtk", "exynos", "intel", "nvidia", "arm", "c2.", "omx.",
];

/// Name tokens that mark a platform software implementation, overriding any
/// vendor token match.
const SW_NAME_TOKENS: &[&str] = &["google", "android"];

/// Classify a codec as hardware-accelerated from its component name.
///
/// The platform does not universally expose an authoritative hardware flag,
/// so this is a name heuristic: a codec is hardware if its name contains a
/// vendor token and no platform-software token (case-insensitive). False
/// classifications are possible.
pub fn is_hardware_accelerated(codec_name: &str) -> bool {
    let lower = codec_name.to_lowercase();
    HW_NAME_TOKENS.iter().any(|t| lower.contains(t))
        && !SW_NAME_TOKENS.iter().any(|t| lower.contains(t))
}

/// Returns true if a MIME type names an audio format.
pub fn is_audio_mime(mime: &str) -> bool {
    mime.get(..6)
        .is_some_and(|p| p.eq_ignore_ascii_case("audio/"))
}
