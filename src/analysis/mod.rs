//! Analysis Module
//!
//! Read-only passes over a generated volume:
//! - Corridor reachability from a layer-0 source
//! - Collapse of the volume onto a plane

mod collapse;
mod reachability;

pub use collapse::collapse;
pub use reachability::{corridor_mask, is_reachable};
