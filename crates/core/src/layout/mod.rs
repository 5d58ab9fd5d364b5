//! Gantt lane packing, the overlap metric, and figure-level layout.

pub mod overlap;
pub mod packer;
pub mod panels;

pub use overlap::{SweepEvent, SweepStep, max_overlap, max_overlap_naive, sweep_trace};
pub use packer::{free_lane_count, pack};
pub use panels::{PanelKind, PanelSlot, TimeRange, height_ratios, stack_panels};
