//! Channel remapping module
//!
//! Decides which source channels land in which slot of the fixed
//! RGBA-ordered output layout, based on the leaf of each qualified
//! channel name.

mod resolver;
mod slot;


pub use resolver::{ChannelAssignment, resolve_channels};
pub use slot::{ChannelSlot, OutputChannel, leaf_name};
