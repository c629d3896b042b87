//! Channel name vocabulary
//!
//! EXR channels are matched to output slots by the leaf of their qualified
//! name. The match is exact and case-sensitive: `r`, `red` or `NX2` mean
//! nothing to this tool.

/// One of the four real slots in the fixed RGBA-ordered output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl OutputChannel {
    /// All slots in interleave order.
    pub const ALL: [OutputChannel; 4] = [
        OutputChannel::Red,
        OutputChannel::Green,
        OutputChannel::Blue,
        OutputChannel::Alpha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputChannel::Red => "R",
            OutputChannel::Green => "G",
            OutputChannel::Blue => "B",
            OutputChannel::Alpha => "A",
        }
    }
}

/// What a leaf name says about where the channel's samples belong.
///
/// `Luma` broadcasts one source plane into R, G and B. Depth (`Z`) and
/// luminance (`Y`) channels both take that path, so a bare depth render
/// comes out as a 3-channel gray image. Normal-vector components map onto
/// the color slots positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSlot {
    Red,
    Green,
    Blue,
    Alpha,
    Luma,
    Unknown,
}

impl ChannelSlot {
    /// Classifies a leaf name. Total over all strings; anything outside
    /// the vocabulary is `Unknown`.
    pub fn from_leaf(leaf: &str) -> ChannelSlot {
        match leaf {
            "R" => ChannelSlot::Red,
            "G" => ChannelSlot::Green,
            "B" => ChannelSlot::Blue,
            "A" => ChannelSlot::Alpha,
            "Y" | "Z" => ChannelSlot::Luma,
            "NX" => ChannelSlot::Red,
            "NY" => ChannelSlot::Green,
            "NZ" => ChannelSlot::Blue,
            _ => ChannelSlot::Unknown,
        }
    }
}

/// The leaf portion of a qualified channel name: everything after the last
/// `'.'`, or the whole name when there is none.
///
/// `"ABC:def.NX"` yields `"NX"`, `"R"` yields `"R"`.
pub fn leaf_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map_or(qualified, |(_, leaf)| leaf)
}
