/// Codec family naming prefixes, matched against the MIME type in listed
/// order: (MIME token, profile prefix, level prefix). The HEVC level
/// namespace spans both tier families, so its prefix is the bare "HEVC".
const FAMILIES: &[(&str, &str, &str)] = &[
    ("avc", "AVCProfile", "AVCLevel"),
    ("hevc", "HEVCProfile", "HEVC"),
    ("av01", "AV1Profile", "AV1Level"),
    ("vp9", "VP9Profile", "VP9Level"),
    ("vp8", "VP8Profile", "VP8Level"),
];

fn family_for(mime: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let lower = mime.to_lowercase();
    FAMILIES.iter().find(|(token, _, _)| lower.contains(token))
}

/// Naming prefix for a MIME type's profile constants, or "" if the codec
/// family has no structured profile/level reporting.
pub fn profile_prefix(mime: &str) -> &'static str {
    family_for(mime).map(|f| f.1).unwrap_or("")
}

/// Naming prefix for a MIME type's level constants, or "" if the codec
/// family has no structured profile/level reporting.
pub fn level_prefix(mime: &str) -> &'static str {
    family_for(mime).map(|f| f.2).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_families() {
        assert_eq!(profile_prefix("video/avc"), "AVCProfile");
        assert_eq!(level_prefix("video/avc"), "AVCLevel");

        assert_eq!(profile_prefix("video/hevc"), "HEVCProfile");
        assert_eq!(level_prefix("video/hevc"), "HEVC");

        assert_eq!(profile_prefix("video/av01"), "AV1Profile");
        assert_eq!(level_prefix("video/av01"), "AV1Level");

        assert_eq!(profile_prefix("video/x-vnd.on2.vp9"), "VP9Profile");
        assert_eq!(level_prefix("video/x-vnd.on2.vp9"), "VP9Level");

        assert_eq!(profile_prefix("video/x-vnd.on2.vp8"), "VP8Profile");
        assert_eq!(level_prefix("video/x-vnd.on2.vp8"), "VP8Level");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(profile_prefix("video/AVC"), "AVCProfile");
        assert_eq!(level_prefix("VIDEO/HEVC"), "HEVC");
    }

    #[test]
    fn test_unmatched_mime_yields_empty_prefixes() {
        assert_eq!(profile_prefix("video/mp4v-es"), "");
        assert_eq!(level_prefix("video/mp4v-es"), "");
        assert_eq!(profile_prefix("audio/mp4a-latm"), "");
        assert_eq!(profile_prefix(""), "");
    }

    #[test]
    fn test_first_listed_token_wins() {
        // Not a real MIME type; pins the listed match order.
        assert_eq!(profile_prefix("video/avc-vp9"), "AVCProfile");
    }
}
