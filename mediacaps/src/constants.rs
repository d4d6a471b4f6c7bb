use std::collections::HashMap;

/// Sentinel name for integer values with no matching constant.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Color format constants of the platform capability class, in declaration
/// order. Values above 0x7f000000 are vendor/extension range.
pub const COLOR_FORMAT_CONSTANTS: &[(i32, &str)] = &[
    (1, "COLOR_FormatMonochrome"),
    (2, "COLOR_Format8bitRGB332"),
    (3, "COLOR_Format12bitRGB444"),
    (4, "COLOR_Format16bitARGB4444"),
    (5, "COLOR_Format16bitARGB1555"),
    (6, "COLOR_Format16bitRGB565"),
    (7, "COLOR_Format16bitBGR565"),
    (8, "COLOR_Format18bitRGB666"),
    (9, "COLOR_Format18bitARGB1665"),
    (10, "COLOR_Format19bitARGB1666"),
    (11, "COLOR_Format24bitRGB888"),
    (12, "COLOR_Format24bitBGR888"),
    (13, "COLOR_Format24bitARGB1887"),
    (14, "COLOR_Format25bitARGB1888"),
    (15, "COLOR_Format32bitBGRA8888"),
    (16, "COLOR_Format32bitARGB8888"),
    (17, "COLOR_FormatYUV411Planar"),
    (18, "COLOR_FormatYUV411PackedPlanar"),
    (19, "COLOR_FormatYUV420Planar"),
    (20, "COLOR_FormatYUV420PackedPlanar"),
    (21, "COLOR_FormatYUV420SemiPlanar"),
    (22, "COLOR_FormatYUV422Planar"),
    (23, "COLOR_FormatYUV422PackedPlanar"),
    (24, "COLOR_FormatYUV422SemiPlanar"),
    (25, "COLOR_FormatYCbYCr"),
    (26, "COLOR_FormatYCrYCb"),
    (27, "COLOR_FormatCbYCrY"),
    (28, "COLOR_FormatCrYCbY"),
    (29, "COLOR_FormatYUV444Interleaved"),
    (30, "COLOR_FormatRawBayer8bit"),
    (31, "COLOR_FormatRawBayer10bit"),
    (32, "COLOR_FormatRawBayer8bitcompressed"),
    (33, "COLOR_FormatL2"),
    (34, "COLOR_FormatL4"),
    (35, "COLOR_FormatL8"),
    (36, "COLOR_FormatL16"),
    (37, "COLOR_FormatL24"),
    (38, "COLOR_FormatL32"),
    (39, "COLOR_FormatYUV420PackedSemiPlanar"),
    (40, "COLOR_FormatYUV422PackedSemiPlanar"),
    (41, "COLOR_Format18BitBGR666"),
    (42, "COLOR_Format24BitARGB6666"),
    (43, "COLOR_Format24BitABGR6666"),
    (54, "COLOR_FormatYUVP010"),
    (0x7f000100, "COLOR_TI_FormatYUV420PackedSemiPlanar"),
    (0x7f000789, "COLOR_FormatSurface"),
    (0x7f000f16, "COLOR_Format64bitABGRFloat"),
    (0x7f00a000, "COLOR_Format32bitABGR8888"),
    (0x7f00aaa2, "COLOR_Format32bitABGR2101010"),
    (0x7f420888, "COLOR_FormatYUV420Flexible"),
    (0x7f422888, "COLOR_FormatYUV422Flexible"),
    (0x7f444888, "COLOR_FormatYUV444Flexible"),
    (0x7f36b888, "COLOR_FormatRGBFlexible"),
    (0x7f36a888, "COLOR_FormatRGBAFlexible"),
    (0x7fa30c00, "COLOR_QCOM_FormatYUV420SemiPlanar"),
];

/// Profile and level constants of the platform profile-level class for the
/// codec families with structured profile/level reporting, in declaration
/// order. Order is significant: name lookups on value collisions resolve to
/// the constant declared last (notably the bare "HEVC" level namespace,
/// which spans both tier families and also matches the earlier HEVCProfile
/// constants).
pub const PROFILE_LEVEL_CONSTANTS: &[(i32, &str)] = &[
    // AVC profiles
    (0x01, "AVCProfileBaseline"),
    (0x02, "AVCProfileMain"),
    (0x04, "AVCProfileExtended"),
    (0x08, "AVCProfileHigh"),
    (0x10, "AVCProfileHigh10"),
    (0x20, "AVCProfileHigh422"),
    (0x40, "AVCProfileHigh444"),
    (0x10000, "AVCProfileConstrainedBaseline"),
    (0x80000, "AVCProfileConstrainedHigh"),
    // AVC levels
    (0x01, "AVCLevel1"),
    (0x02, "AVCLevel1b"),
    (0x04, "AVCLevel11"),
    (0x08, "AVCLevel12"),
    (0x10, "AVCLevel13"),
    (0x20, "AVCLevel2"),
    (0x40, "AVCLevel21"),
    (0x80, "AVCLevel22"),
    (0x100, "AVCLevel3"),
    (0x200, "AVCLevel31"),
    (0x400, "AVCLevel32"),
    (0x800, "AVCLevel4"),
    (0x1000, "AVCLevel41"),
    (0x2000, "AVCLevel42"),
    (0x4000, "AVCLevel5"),
    (0x8000, "AVCLevel51"),
    (0x10000, "AVCLevel52"),
    (0x20000, "AVCLevel6"),
    (0x40000, "AVCLevel61"),
    (0x80000, "AVCLevel62"),
    // VP8 levels (the platform class declares these before the profile)
    (0x01, "VP8Level_Version0"),
    (0x02, "VP8Level_Version1"),
    (0x04, "VP8Level_Version2"),
    (0x08, "VP8Level_Version3"),
    // VP8 profile
    (0x01, "VP8ProfileMain"),
    // VP9 profiles
    (0x01, "VP9Profile0"),
    (0x02, "VP9Profile1"),
    (0x04, "VP9Profile2"),
    (0x08, "VP9Profile3"),
    (0x1000, "VP9Profile2HDR"),
    (0x2000, "VP9Profile3HDR"),
    (0x4000, "VP9Profile2HDR10Plus"),
    (0x8000, "VP9Profile3HDR10Plus"),
    // VP9 levels
    (0x01, "VP9Level1"),
    (0x02, "VP9Level11"),
    (0x04, "VP9Level2"),
    (0x08, "VP9Level21"),
    (0x10, "VP9Level3"),
    (0x20, "VP9Level31"),
    (0x40, "VP9Level4"),
    (0x80, "VP9Level41"),
    (0x100, "VP9Level5"),
    (0x200, "VP9Level51"),
    (0x400, "VP9Level52"),
    (0x800, "VP9Level6"),
    (0x1000, "VP9Level61"),
    (0x2000, "VP9Level62"),
    // HEVC profiles
    (0x01, "HEVCProfileMain"),
    (0x02, "HEVCProfileMain10"),
    (0x04, "HEVCProfileMainStill"),
    (0x1000, "HEVCProfileMain10HDR10"),
    (0x2000, "HEVCProfileMain10HDR10Plus"),
    // HEVC levels (main and high tier interleaved per level)
    (0x01, "HEVCMainTierLevel1"),
    (0x02, "HEVCHighTierLevel1"),
    (0x04, "HEVCMainTierLevel2"),
    (0x08, "HEVCHighTierLevel2"),
    (0x10, "HEVCMainTierLevel21"),
    (0x20, "HEVCHighTierLevel21"),
    (0x40, "HEVCMainTierLevel3"),
    (0x80, "HEVCHighTierLevel3"),
    (0x100, "HEVCMainTierLevel31"),
    (0x200, "HEVCHighTierLevel31"),
    (0x400, "HEVCMainTierLevel4"),
    (0x800, "HEVCHighTierLevel4"),
    (0x1000, "HEVCMainTierLevel41"),
    (0x2000, "HEVCHighTierLevel41"),
    (0x4000, "HEVCMainTierLevel5"),
    (0x8000, "HEVCHighTierLevel5"),
    (0x10000, "HEVCMainTierLevel51"),
    (0x20000, "HEVCHighTierLevel51"),
    (0x40000, "HEVCMainTierLevel52"),
    (0x80000, "HEVCHighTierLevel52"),
    (0x100000, "HEVCMainTierLevel6"),
    (0x200000, "HEVCHighTierLevel6"),
    (0x400000, "HEVCMainTierLevel61"),
    (0x800000, "HEVCHighTierLevel61"),
    (0x1000000, "HEVCMainTierLevel62"),
    (0x2000000, "HEVCHighTierLevel62"),
    // AV1 profiles
    (0x01, "AV1ProfileMain8"),
    (0x02, "AV1ProfileMain10"),
    (0x1000, "AV1ProfileMain10HDR10"),
    (0x2000, "AV1ProfileMain10HDR10Plus"),
    // AV1 levels
    (0x01, "AV1Level2"),
    (0x02, "AV1Level21"),
    (0x04, "AV1Level22"),
    (0x08, "AV1Level23"),
    (0x10, "AV1Level3"),
    (0x20, "AV1Level31"),
    (0x40, "AV1Level32"),
    (0x80, "AV1Level33"),
    (0x100, "AV1Level4"),
    (0x200, "AV1Level41"),
    (0x400, "AV1Level42"),
    (0x800, "AV1Level43"),
    (0x1000, "AV1Level5"),
    (0x2000, "AV1Level51"),
    (0x4000, "AV1Level52"),
    (0x8000, "AV1Level53"),
    (0x10000, "AV1Level6"),
    (0x20000, "AV1Level61"),
    (0x40000, "AV1Level62"),
    (0x80000, "AV1Level63"),
    (0x100000, "AV1Level7"),
    (0x200000, "AV1Level71"),
    (0x400000, "AV1Level72"),
    (0x800000, "AV1Level73"),
];

/// Integer → symbolic name mapping for one naming prefix.
#[derive(Debug, Clone)]
pub struct ConstantTable {
    names: HashMap<i32, &'static str>,
}

impl ConstantTable {
    /// Build a table from every constant in `class` whose name starts with
    /// `prefix`. A prefix matching no constants yields an empty table, and
    /// lookups on it always return [`UNKNOWN_NAME`]. Constants sharing a
    /// value map to the one declared last.
    pub fn resolve(class: &[(i32, &'static str)], prefix: &str) -> Self {
        let mut names = HashMap::new();
        for &(value, name) in class {
            if name.starts_with(prefix) {
                names.insert(value, name);
            }
        }
        ConstantTable { names }
    }

    /// Symbolic name for `value`, or [`UNKNOWN_NAME`] if it has none.
    pub fn name_of(&self, value: i32) -> &'static str {
        self.names.get(&value).copied().unwrap_or(UNKNOWN_NAME)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_format_lookup() {
        let table = ConstantTable::resolve(COLOR_FORMAT_CONSTANTS, "COLOR_");
        assert_eq!(table.name_of(0x7f000789), "COLOR_FormatSurface");
        assert_eq!(table.name_of(19), "COLOR_FormatYUV420Planar");
        assert_eq!(table.name_of(0x7f420888), "COLOR_FormatYUV420Flexible");
    }

    #[test]
    fn test_unknown_value_resolves_to_sentinel() {
        let table = ConstantTable::resolve(COLOR_FORMAT_CONSTANTS, "COLOR_");
        assert_eq!(table.name_of(0x12345678), UNKNOWN_NAME);
        assert_eq!(table.name_of(-1), UNKNOWN_NAME);
    }

    #[test]
    fn test_unmatched_prefix_yields_empty_table() {
        let table = ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, "NoSuchPrefix");
        assert!(table.is_empty());
        assert_eq!(table.name_of(1), UNKNOWN_NAME);
    }

    #[test]
    fn test_avc_profile_and_level_tables() {
        let profiles = ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, "AVCProfile");
        assert_eq!(profiles.name_of(1), "AVCProfileBaseline");
        assert_eq!(profiles.name_of(0x80000), "AVCProfileConstrainedHigh");

        let levels = ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, "AVCLevel");
        assert_eq!(levels.name_of(1), "AVCLevel1");
        assert_eq!(levels.name_of(0x10000), "AVCLevel52");
    }

    #[test]
    fn test_prefix_scoping_keeps_families_apart() {
        // Value 1 is reused across every family; each prefix sees only its own.
        let vp9 = ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, "VP9Profile");
        assert_eq!(vp9.name_of(1), "VP9Profile0");
        assert_eq!(vp9.len(), 8);

        let vp8 = ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, "VP8Profile");
        assert_eq!(vp8.name_of(1), "VP8ProfileMain");
        assert_eq!(vp8.len(), 1);
    }

    #[test]
    fn test_hevc_level_namespace_collisions_last_wins() {
        // The bare "HEVC" level prefix also matches the HEVCProfile constants
        // declared earlier; the later level constants win the shared values.
        let levels = ConstantTable::resolve(PROFILE_LEVEL_CONSTANTS, "HEVC");
        assert_eq!(levels.name_of(0x01), "HEVCMainTierLevel1");
        assert_eq!(levels.name_of(0x02), "HEVCHighTierLevel1");
        assert_eq!(levels.name_of(0x1000), "HEVCMainTierLevel41");
        assert_eq!(levels.name_of(0x2000), "HEVCHighTierLevel41");
        // Every profile value collides with a level value, so the table holds
        // exactly the 26 distinct level values.
        assert_eq!(levels.len(), 26);
    }
}
