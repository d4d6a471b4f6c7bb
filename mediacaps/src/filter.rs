use std::fmt;

use crate::report::CodecBlock;

/// Hardware/software filter, a 3-state cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HwFilter {
    #[default]
    All,
    Hw,
    Sw,
}

impl HwFilter {
    /// Advance to the next state: All → Hw → Sw → All.
    pub fn cycle(self) -> Self {
        match self {
            HwFilter::All => HwFilter::Hw,
            HwFilter::Hw => HwFilter::Sw,
            HwFilter::Sw => HwFilter::All,
        }
    }

    fn matches(self, is_hw: bool) -> bool {
        match self {
            HwFilter::All => true,
            HwFilter::Hw => is_hw,
            HwFilter::Sw => !is_hw,
        }
    }
}

impl fmt::Display for HwFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HwFilter::All => "ALL",
            HwFilter::Hw => "HW",
            HwFilter::Sw => "SW",
        })
    }
}

/// Audio/video filter, a 3-state cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Video,
    Audio,
}

impl TypeFilter {
    /// Advance to the next state: All → Video → Audio → All.
    pub fn cycle(self) -> Self {
        match self {
            TypeFilter::All => TypeFilter::Video,
            TypeFilter::Video => TypeFilter::Audio,
            TypeFilter::Audio => TypeFilter::All,
        }
    }

    fn matches(self, is_audio: bool) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Video => !is_audio,
            TypeFilter::Audio => is_audio,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeFilter::All => "ALL",
            TypeFilter::Video => "VIDEO",
            TypeFilter::Audio => "AUDIO",
        })
    }
}

/// Current query and filter selection.
///
/// A plain value owned by the caller; always fully defined. The default is
/// the unfiltered state (ALL/ALL/empty query).
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub hw: HwFilter,
    pub ty: TypeFilter,
    /// Case-insensitive substring match against block text; empty matches all.
    pub query: String,
}

impl FilterState {
    fn matches(&self, block: &CodecBlock) -> bool {
        let matches_query = self.query.is_empty()
            || block
                .text
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        matches_query && self.hw.matches(block.is_hw) && self.ty.matches(block.is_audio)
    }
}

/// Render the filtered report: every matching block in original order, each
/// followed by a blank line. An empty result set renders as empty text.
pub fn render(blocks: &[CodecBlock], state: &FilterState) -> String {
    let mut out = String::new();
    for block in blocks.iter().filter(|b| state.matches(b)) {
        out.push_str(&block.text);
        out.push('\n');
    }
    out
}
