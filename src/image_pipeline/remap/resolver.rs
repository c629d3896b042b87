//! Resolves a set of source channel names into an output assignment.
//!
//! Every channel in the input claims zero or more output slots based on its
//! leaf name. Unknown channels are skipped with a warning; two channels
//! claiming the same slot are a fatal conflict, reported before any output
//! is produced.

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::remap::slot::{ChannelSlot, OutputChannel, leaf_name};

/// Where each output slot takes its samples from.
///
/// Sources are indices into the decoded channel list, so an assignment can
/// be carried alongside the image it was resolved against. `convert_normals`
/// records whether an `NX` leaf was seen; the transcode stage then remaps
/// every non-alpha sample from [-1, 1] into [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelAssignment {
    red: Option<usize>,
    green: Option<usize>,
    blue: Option<usize>,
    alpha: Option<usize>,
    convert_normals: bool,
}

impl ChannelAssignment {
    /// Source channel index feeding `slot`, if any.
    pub fn source(&self, slot: OutputChannel) -> Option<usize> {
        match slot {
            OutputChannel::Red => self.red,
            OutputChannel::Green => self.green,
            OutputChannel::Blue => self.blue,
            OutputChannel::Alpha => self.alpha,
        }
    }

    pub fn convert_normals(&self) -> bool {
        self.convert_normals
    }

    /// Assigned slots with their sources, in fixed R, G, B, A order. The
    /// position in the returned list is the sample's interleave position.
    pub fn interleave_order(&self) -> Vec<(OutputChannel, usize)> {
        OutputChannel::ALL
            .iter()
            .filter_map(|&slot| self.source(slot).map(|index| (slot, index)))
            .collect()
    }

    pub fn samples_per_pixel(&self) -> usize {
        self.interleave_order().len()
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none() && self.alpha.is_none()
    }

    fn slot_mut(&mut self, slot: OutputChannel) -> &mut Option<usize> {
        match slot {
            OutputChannel::Red => &mut self.red,
            OutputChannel::Green => &mut self.green,
            OutputChannel::Blue => &mut self.blue,
            OutputChannel::Alpha => &mut self.alpha,
        }
    }
}

/// Tracks which qualified name claimed each slot, for conflict reporting.
struct SlotClaims {
    names: [Option<String>; 4],
}

impl SlotClaims {
    fn new() -> Self {
        Self {
            names: [None, None, None, None],
        }
    }

    fn claim(
        &mut self,
        assignment: &mut ChannelAssignment,
        slot: OutputChannel,
        index: usize,
        qualified: &str,
    ) -> Result<()> {
        let entry = &mut self.names[slot as usize];
        if let Some(first) = entry {
            return Err(ConversionError::ChannelConflict {
                output: slot.name(),
                first: first.clone(),
                second: qualified.to_string(),
            });
        }
        debug!("{} -> {}", qualified, slot.name());
        *entry = Some(qualified.to_string());
        *assignment.slot_mut(slot) = Some(index);
        Ok(())
    }
}

/// Resolves the ordered channel names of an image into an assignment.
///
/// Resolution stops at the first conflict. The result may be empty when no
/// name matched the vocabulary; callers decide whether that is an error.
pub fn resolve_channels<'a, I>(names: I) -> Result<ChannelAssignment>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assignment = ChannelAssignment::default();
    let mut claims = SlotClaims::new();

    for (index, qualified) in names.into_iter().enumerate() {
        let leaf = leaf_name(qualified);
        if leaf == "NX" {
            assignment.convert_normals = true;
        }
        match ChannelSlot::from_leaf(leaf) {
            ChannelSlot::Red => claims.claim(&mut assignment, OutputChannel::Red, index, qualified)?,
            ChannelSlot::Green => {
                claims.claim(&mut assignment, OutputChannel::Green, index, qualified)?
            }
            ChannelSlot::Blue => {
                claims.claim(&mut assignment, OutputChannel::Blue, index, qualified)?
            }
            ChannelSlot::Alpha => {
                claims.claim(&mut assignment, OutputChannel::Alpha, index, qualified)?
            }
            ChannelSlot::Luma => {
                claims.claim(&mut assignment, OutputChannel::Red, index, qualified)?;
                claims.claim(&mut assignment, OutputChannel::Green, index, qualified)?;
                claims.claim(&mut assignment, OutputChannel::Blue, index, qualified)?;
            }
            ChannelSlot::Unknown => {
                warn!(channel = %qualified, "Unknown channel: {}", leaf);
            }
        }
    }

    Ok(assignment)
}
